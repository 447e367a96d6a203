// src/error.rs

use crate::models::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorklogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid category '{0}'. Options are: {}", Category::options())]
    InvalidCategory(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input value '{0}' does not match 'continue'")]
    ConfirmationMismatch(String),
}

pub type Result<T> = std::result::Result<T, WorklogError>;
