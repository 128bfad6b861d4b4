use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EduSearchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Library error: {0}")]
    Library(String),
}

pub type Result<T> = std::result::Result<T, EduSearchError>;
