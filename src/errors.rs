//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session input
    // ---------------------------
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid reason number: {0}")]
    InvalidReason(String),

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Invalid entry index: {0}")]
    InvalidEntry(usize),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
