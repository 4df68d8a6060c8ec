use super::codon::{Codon, Nucleotide};
use crate::error::{DeoxyriboseError, Result};
use std::fmt;

/// Reduce arbitrary source text to the four-symbol alphabet.
///
/// Text is lowercased and everything except `a`, `c`, `g` and `t` is dropped.
pub fn sanitize(source: &str) -> String {
    source
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| matches!(c, 'a' | 'c' | 'g' | 't'))
        .collect()
}

/// The circular, read-only symbol sequence a run executes.
///
/// A chromosome is never empty, so every position can be taken modulo its
/// length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    symbols: Vec<Nucleotide>,
}

impl Chromosome {
    /// Sanitize `source` and build a chromosome from what remains.
    pub fn from_source(source: &str) -> Result<Self> {
        let symbols = sanitize(source)
            .chars()
            .filter_map(Nucleotide::from_symbol)
            .collect();
        Self::from_nucleotides(symbols)
    }

    pub fn from_nucleotides(symbols: Vec<Nucleotide>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(DeoxyriboseError::EmptyChromosome);
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true for a constructed chromosome.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Reduce any position to `0..len`.
    pub fn wrap(&self, position: usize) -> usize {
        position % self.len()
    }

    /// Step `position` back by `distance`, wrapping around the start.
    pub fn wrap_back(&self, position: usize, distance: usize) -> usize {
        let len = self.len();
        (self.wrap(position) + len - distance % len) % len
    }

    pub fn symbol_at(&self, position: usize) -> Nucleotide {
        self.symbols[self.wrap(position)]
    }

    /// Read the codon starting at `position`.
    ///
    /// Returns the codon and the pointer just past it, wrapped to `0..len`.
    pub fn read_codon(&self, position: usize) -> (Codon, usize) {
        let codon = Codon::new(
            self.symbol_at(position),
            self.symbol_at(position + 1),
            self.symbol_at(position + 2),
        );
        (codon, self.wrap(position + 3))
    }

    /// The codon whose last symbol sits at `end`.
    pub fn codon_ending_at(&self, end: usize) -> Codon {
        self.read_codon(self.wrap_back(end, 2)).0
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.symbols {
            write!(f, "{}", n.symbol())?;
        }
        Ok(())
    }
}
