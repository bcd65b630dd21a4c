use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProverbsError {
    #[error("Proverb not found: {0}")]
    NotFound(String),

    #[error("Failed to load proverbs: {0}")]
    Load(String),

    #[error("Bad input: {0}")]
    BadInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, ProverbsError>;
