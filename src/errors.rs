// errors.rs
use std::fmt;

/// Errors surfaced by the CLI shell: argument/input handling, transport
/// setup, and export encoding. The extraction core itself has no error type;
/// everything there degrades to field absence.
#[derive(Debug)]
pub enum AppError {
    Io(String),
    Fetch(String),
    Xlsx(String),
    Json(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(msg) => write!(f, "I/O error: {msg}"),
            AppError::Fetch(msg) => write!(f, "Fetch setup error: {msg}"),
            AppError::Xlsx(msg) => write!(f, "XLSX export error: {msg}"),
            AppError::Json(msg) => write!(f, "JSON export error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
