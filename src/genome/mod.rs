//! The symbol-level view of a program: nucleotides, codons, the circular
//! chromosome and the bounded pattern scans used to resolve jumps.

pub mod chromosome;
pub mod codon;
pub mod search;

pub use chromosome::{sanitize, Chromosome};
pub use codon::{quaternary_value, Codon, Nucleotide};
pub use search::SearchOutcome;
