use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Rl1Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Catalog error at {}: {message}", path.display())]
    Catalog { path: PathBuf, message: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Rl1Error>;
