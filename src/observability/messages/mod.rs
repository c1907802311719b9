// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Usage Pattern
//!
//! ```rust
//! use faxe_processors::observability::messages::{host::ProcessorHosted, StructuredLog};
//!
//! let msg = ProcessorHosted { processor: "mirror" };
//!
//! let span = msg.span("processor");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod host;
pub mod processor;
pub mod validation;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its documented level.
    fn log(&self);

    /// A span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
