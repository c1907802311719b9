// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by processors while constructing or handling data.
//!
//! None of these are caught inside a processor; they propagate to the host,
//! which decides whether to log them or fault the stage.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessorError {
    /// A required key is absent from a record or option map.
    #[error("missing key '{key}'")]
    MissingKey { key: String },

    /// A value has the wrong shape.
    #[error("type mismatch at '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Integer arithmetic left the signed 64-bit range.
    #[error("integer overflow computing '{key}'")]
    Overflow { key: String },

    /// The downstream side of the emission channel is gone.
    #[error("emit failed: {0}")]
    Emit(String),
}

impl ProcessorError {
    pub fn missing(key: impl Into<String>) -> Self {
        ProcessorError::MissingKey { key: key.into() }
    }

    pub fn mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        ProcessorError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }
}
