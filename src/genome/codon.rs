use crate::error::{DeoxyriboseError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the four symbols a chromosome is made of.
///
/// The discriminant is the symbol's quaternary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Case-insensitive symbol lookup.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'a' | 'A' => Some(Nucleotide::A),
            'c' | 'C' => Some(Nucleotide::C),
            'g' | 'G' => Some(Nucleotide::G),
            't' | 'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Normalized (lowercase) symbol.
    pub fn symbol(self) -> char {
        match self {
            Nucleotide::A => 'a',
            Nucleotide::C => 'c',
            Nucleotide::G => 'g',
            Nucleotide::T => 't',
        }
    }

    pub fn digit(self) -> u8 {
        self as u8
    }
}

/// Three consecutive nucleotides: the unit of instruction, literal and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    /// The start codon that opens a gene.
    pub const START: Codon = Codon([Nucleotide::A, Nucleotide::T, Nucleotide::G]);

    pub const fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Codon([first, second, third])
    }

    pub fn nucleotides(&self) -> [Nucleotide; 3] {
        self.0
    }

    /// Parse exactly three symbols, ignoring case.
    pub fn parse(text: &str) -> Result<Self> {
        let mut symbols = text.chars();
        let mut next = || {
            symbols
                .next()
                .and_then(Nucleotide::from_symbol)
                .ok_or_else(|| DeoxyriboseError::InvalidCodon(text.to_string()))
        };
        let codon = Codon([next()?, next()?, next()?]);
        if text.chars().count() != 3 {
            return Err(DeoxyriboseError::InvalidCodon(text.to_string()));
        }
        Ok(codon)
    }

    /// Base-4 value of the codon, first symbol most significant: `0..=63`.
    pub fn quaternary(&self) -> u32 {
        self.0
            .iter()
            .fold(0, |value, n| value * 4 + u32::from(n.digit()))
    }

    /// Inverse of [`Codon::quaternary`].
    pub fn from_quaternary(value: u32) -> Option<Self> {
        if value > 63 {
            return None;
        }
        let digit = |shift: u32| Nucleotide::ALL[((value >> shift) & 0b11) as usize];
        Some(Codon([digit(4), digit(2), digit(0)]))
    }

    /// All 64 codons in quaternary order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..64).filter_map(Codon::from_quaternary)
    }
}

impl FromStr for Codon {
    type Err = DeoxyriboseError;

    fn from_str(s: &str) -> Result<Self> {
        Codon::parse(s)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.0 {
            write!(f, "{}", n.symbol())?;
        }
        Ok(())
    }
}

/// Decode raw text as a quaternary numeral (a=0, c=1, g=2, t=3).
///
/// Unknown symbols contribute 0 and are reported as a diagnostic; decoding
/// never fails.
pub fn quaternary_value(text: &str) -> u64 {
    text.chars().fold(0u64, |value, symbol| {
        let digit = match Nucleotide::from_symbol(symbol) {
            Some(n) => u64::from(n.digit()),
            None => {
                log::warn!(
                    "Mutation: block {:?} contains invalid symbol {:?}, read as a",
                    text,
                    symbol
                );
                0
            }
        };
        value.wrapping_mul(4).wrapping_add(digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_quaternary_known_values() {
        assert_eq!(Codon::parse("aaa").unwrap().quaternary(), 0);
        assert_eq!(Codon::parse("aac").unwrap().quaternary(), 1);
        assert_eq!(Codon::parse("aga").unwrap().quaternary(), 8);
        assert_eq!(Codon::parse("acg").unwrap().quaternary(), 6);
        assert_eq!(Codon::parse("ttt").unwrap().quaternary(), 63);
    }

    #[test]
    fn test_quaternary_is_bijection() {
        let values: HashSet<u32> = Codon::all().map(|c| c.quaternary()).collect();
        assert_eq!(values.len(), 64);
        assert!(values.iter().all(|v| *v < 64));
        for codon in Codon::all() {
            assert_eq!(Codon::from_quaternary(codon.quaternary()), Some(codon));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Codon::parse("ATG").unwrap(), Codon::START);
        assert_eq!("aTg".parse::<Codon>().unwrap().to_string(), "atg");
    }

    #[test]
    fn test_parse_rejects_bad_codons() {
        assert!(Codon::parse("at").is_err());
        assert!(Codon::parse("atgc").is_err());
        assert!(Codon::parse("axg").is_err());
    }

    #[test]
    fn test_quaternary_value_tolerates_unknown_symbols() {
        assert_eq!(quaternary_value("acg"), 6);
        assert_eq!(quaternary_value("axg"), 2);
        assert_eq!(quaternary_value(""), 0);
    }
}
