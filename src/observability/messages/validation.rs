// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for option validation failures.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Options rejected against a processor's capability list.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use faxe_processors::errors::ValidationError;
/// use faxe_processors::observability::messages::validation::OptionsRejected;
///
/// let errors = vec![ValidationError::UnknownOption { name: "colour".to_string() }];
/// let msg = OptionsRejected {
///     processor: "double",
///     errors: &errors,
/// };
///
/// assert_eq!(msg.to_string(), "Options for processor 'double' rejected: Unknown option 'colour'");
/// ```
pub struct OptionsRejected<'a> {
    pub processor: &'a str,
    pub errors: &'a [ValidationError],
}

impl Display for OptionsRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Options for processor '{}' rejected: ", self.processor)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl StructuredLog for OptionsRejected<'_> {
    fn log(&self) {
        tracing::error!(
            processor = self.processor,
            error_count = self.errors.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "options_rejected",
            span_name = name,
            processor = self.processor,
            error_count = self.errors.len(),
        )
    }
}
