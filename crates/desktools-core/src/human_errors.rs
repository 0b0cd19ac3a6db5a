// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the inline error banners.
//
// Every technical error is mapped to plain English with a suggestion. The
// severity drives the banner colour in the UI.

use crate::error::DesktoolsError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing is wrong yet, the user just needs to supply something.
    Notice,
    /// The input needs correcting before a result can be shown.
    Warning,
    /// The operation itself failed.
    Error,
}

impl Severity {
    /// Banner colour for this severity.
    pub fn colour(&self) -> &'static str {
        match self {
            Self::Notice => "#007aff",
            Self::Warning => "#ff9500",
            Self::Error => "#ff3b30",
        }
    }
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanError {
    /// Plain English summary (shown in bold).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Drives icon/colour in the UI.
    pub severity: Severity,
}

/// Convert a `DesktoolsError` into a `HumanError` for inline display.
pub fn humanize_error(err: &DesktoolsError) -> HumanError {
    match err {
        DesktoolsError::NonPositiveHeight(_) => HumanError {
            message: "Height must be greater than zero.".into(),
            suggestion: "Enter your height and try again.".into(),
            severity: Severity::Error,
        },

        DesktoolsError::OutOfRange {
            field, min, max, ..
        } => HumanError {
            message: format!("That {field} is outside the accepted range."),
            suggestion: format!("Enter a value between {min} and {max}."),
            severity: Severity::Warning,
        },

        DesktoolsError::DivisionByZero => HumanError {
            message: "Error: Cannot divide by zero.".into(),
            suggestion: "Change the second number to something other than 0.".into(),
            severity: Severity::Error,
        },

        DesktoolsError::InvalidNumber(_) => HumanError {
            message: "Please enter valid numbers.".into(),
            suggestion: "Both inputs must be ordinary finite numbers.".into(),
            severity: Severity::Warning,
        },

        DesktoolsError::UnsupportedImage(detail) => HumanError {
            message: "This type of image isn't supported.".into(),
            suggestion: format!("Upload a PNG, JPG, or JPEG file instead. (Detected: {detail})"),
            severity: Severity::Warning,
        },

        DesktoolsError::ImageError(detail) => HumanError {
            message: format!("Error loading image: {detail}"),
            suggestion: "The file may be damaged. Try a different image.".into(),
            severity: Severity::Error,
        },

        DesktoolsError::Io(io) => HumanError {
            message: "The file couldn't be read or written.".into(),
            suggestion: format!("Check the file location and permissions. ({io})"),
            severity: Severity::Error,
        },

        DesktoolsError::Serialization(detail) => HumanError {
            message: "The settings file couldn't be written.".into(),
            suggestion: format!("Defaults will be used for now. ({detail})"),
            severity: Severity::Warning,
        },
    }
}
