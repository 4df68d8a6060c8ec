use super::chromosome::Chromosome;
use super::codon::Codon;

/// Result of a bounded circular scan for a codon pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Position of the last symbol of the first match in scan order.
    Found(usize),
    /// No match in one full lap; carries the scan cursor after that lap.
    Exhausted(usize),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Match end when found, otherwise the resting cursor.
    pub fn position(&self) -> usize {
        match *self {
            SearchOutcome::Found(p) | SearchOutcome::Exhausted(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ahead,
    Back,
}

impl Chromosome {
    /// Scan forwards from `start` for `pattern`.
    ///
    /// Each candidate `q` is tested as the *end* of a window, i.e. symbols
    /// `q-2, q-1, q`. At most `len` candidates are tried.
    pub fn look_ahead(&self, start: usize, pattern: Codon) -> SearchOutcome {
        self.scan(start, pattern, Direction::Ahead)
    }

    /// Scan backwards from `start` for `pattern`; see [`Chromosome::look_ahead`].
    pub fn look_back(&self, start: usize, pattern: Codon) -> SearchOutcome {
        self.scan(start, pattern, Direction::Back)
    }

    fn scan(&self, start: usize, pattern: Codon, direction: Direction) -> SearchOutcome {
        let mut cursor = self.wrap(start);
        for _ in 0..self.len() {
            if self.codon_ending_at(cursor) == pattern {
                return SearchOutcome::Found(cursor);
            }
            cursor = match direction {
                Direction::Ahead => self.wrap(cursor + 1),
                Direction::Back => self.wrap_back(cursor, 1),
            };
        }
        SearchOutcome::Exhausted(cursor)
    }
}
