use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, FindError>;
