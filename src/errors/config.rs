// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::OptionType;

/// Errors found while checking a configuration against a processor's
/// declared capabilities.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A declared option was not supplied
    MissingOption {
        name: String,
        expected: OptionType,
    },
    /// A supplied option has the wrong type
    OptionTypeMismatch {
        name: String,
        expected: OptionType,
        found: &'static str,
    },
    /// A supplied option is not declared by the processor
    UnknownOption {
        name: String,
    },
    /// An option value could not be converted to a term
    InvalidOptionValue {
        name: String,
        reason: String,
    },
    /// The named processor implementation does not exist
    UnknownProcessor {
        name: String,
    },
    /// Batch mode needs at least one record per batch
    InvalidBatchSize {
        batch_size: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingOption { name, expected } => {
                write!(f, "Missing required option '{}' of type {}", name, expected)
            }
            ValidationError::OptionTypeMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Option '{}' expects type {} but got {}",
                    name, expected, found
                )
            }
            ValidationError::UnknownOption { name } => {
                write!(f, "Unknown option '{}'", name)
            }
            ValidationError::InvalidOptionValue { name, reason } => {
                write!(f, "Option '{}' has an invalid value: {}", name, reason)
            }
            ValidationError::UnknownProcessor { name } => {
                write!(f, "Unknown processor implementation: '{}'", name)
            }
            ValidationError::InvalidBatchSize { batch_size } => {
                write!(f, "batch_size must be greater than zero, got {}", batch_size)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
