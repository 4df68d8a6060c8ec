use super::traits::ConfigSection;
use crate::error::DeoxyriboseError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Trace state transitions and every executed codon.
    pub verbose: bool,
    /// Maximum number of engine steps; `None` runs until a stop codon.
    pub step_limit: Option<u64>,
    /// Flush output after every print operation.
    pub flush_each_write: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            step_limit: None,
            flush_each_write: true,
        }
    }
}

impl ConfigSection for InterpreterConfig {
    fn section_name() -> &'static str {
        "interpreter"
    }

    fn validate(&self) -> Result<(), DeoxyriboseError> {
        if self.step_limit == Some(0) {
            return Err(DeoxyriboseError::Configuration(
                "Step limit must be at least 1 (omit it to run unbounded)".to_string(),
            ));
        }
        Ok(())
    }
}
