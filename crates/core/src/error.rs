use thiserror::Error;

pub type HuntResult<T> = Result<T, HuntError>;

#[derive(Error, Debug)]
pub enum HuntError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown challenge template: {0}")]
    UnknownTemplate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
