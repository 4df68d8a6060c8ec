use super::traits::ConfigSection;
use crate::error::DeoxyriboseError;
use serde::{Deserialize, Serialize};

/// How programs are read when none is given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Keep reading programs from standard input, one per line.
    pub reread_stdin: bool,
    /// Log each sanitized chromosome before it runs.
    pub echo_chromosome: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reread_stdin: true,
            echo_chromosome: false,
        }
    }
}

impl ConfigSection for InputConfig {
    fn section_name() -> &'static str {
        "input"
    }

    fn validate(&self) -> Result<(), DeoxyriboseError> {
        Ok(())
    }
}
