//! Interpreter for Deoxyribose, a language whose programs are DNA strands.
//!
//! Source text is reduced to the symbols `a c g t`, read three at a time as
//! codons, and each codon dispatched through a table modeled on the genetic
//! code. Execution begins after the first start codon (`atg`) and runs
//! against two stacks and a variable store until a stop codon.

pub mod config;
pub mod engines;
pub mod error;
pub mod functions;
pub mod genome;
pub mod types;

pub use error::{DeoxyriboseError, Result};
