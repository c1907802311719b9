// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor instantiation.

use std::error::Error;
use std::fmt;

use super::{CodecError, ProcessorError, ValidationError};

/// Errors that can occur while creating a processor from its name and options
#[derive(Debug)]
pub enum ProcessorFactoryError {
    /// No implementation is registered under this name
    UnknownProcessor { name: String },

    /// Options could not be converted into terms
    OptionEncoding {
        processor: String,
        source: CodecError,
    },

    /// Options failed validation against the capability list
    InvalidOptions {
        processor: String,
        errors: Vec<ValidationError>,
    },

    /// The processor rejected its options during construction
    ConstructionFailed {
        processor: String,
        source: ProcessorError,
    },
}

impl fmt::Display for ProcessorFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorFactoryError::UnknownProcessor { name } => {
                write!(f, "Unknown processor implementation: '{}'", name)
            }
            ProcessorFactoryError::OptionEncoding { processor, source } => {
                write!(f, "Failed to encode options for processor '{}': {}", processor, source)
            }
            ProcessorFactoryError::InvalidOptions { processor, errors } => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(
                    f,
                    "Invalid options for processor '{}': {}",
                    processor,
                    messages.join("; ")
                )
            }
            ProcessorFactoryError::ConstructionFailed { processor, source } => {
                write!(f, "Failed to construct processor '{}': {}", processor, source)
            }
        }
    }
}

impl Error for ProcessorFactoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProcessorFactoryError::OptionEncoding { source, .. } => Some(source),
            ProcessorFactoryError::ConstructionFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
