use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeoxyriboseError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Empty chromosome: source contains no a, c, g or t symbols")]
    EmptyChromosome,

    #[error("Invalid codon: {0}")]
    InvalidCodon(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, DeoxyriboseError>;
