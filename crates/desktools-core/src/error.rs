// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Desktools.

use thiserror::Error;

/// Top-level error type for all Desktools operations.
#[derive(Debug, Error)]
pub enum DesktoolsError {
    // -- Measurement errors --
    #[error("height must be greater than zero (got {0})")]
    NonPositiveHeight(f64),

    #[error("{field} out of range: {value} not in {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    // -- Arithmetic errors --
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    // -- Image errors --
    #[error("unsupported image format: {0}")]
    UnsupportedImage(String),

    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Storage / configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DesktoolsError>;
