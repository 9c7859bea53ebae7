//! Error types for swiperate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for swiperate operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A coordinate or displacement component was NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// Gesture thresholds violate `0 < hint < commit`.
    #[error("Invalid thresholds: hint {hint}, commit {commit} (need 0 < hint < commit)")]
    InvalidThreshold { hint: f64, commit: f64 },

    /// Move/end event for a pointer with no gesture in progress.
    #[error("No gesture in progress for pointer {0}")]
    UnknownPointer(u32),

    /// Start event for a pointer that already has a gesture in progress.
    #[error("Pointer {0} already has a gesture in progress")]
    PointerAlreadyActive(u32),
}
