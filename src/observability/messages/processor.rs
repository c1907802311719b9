// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for events raised inside processors.
//!
//! This module contains message types for logging events related to:
//! * Processor instantiation
//! * The mirror's diagnostic echoes
//! * Per-record transform results

use crate::observability::messages::StructuredLog;
use crate::term::{Term, TermMap};
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor instantiated from validated options.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use faxe_processors::observability::messages::processor::ProcessorCreated;
/// use faxe_processors::term::TermMap;
///
/// let options = TermMap::new();
/// let msg = ProcessorCreated {
///     processor: "double",
///     options: &options,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorCreated<'a> {
    pub processor: &'a str,
    pub options: &'a TermMap,
}

impl Display for ProcessorCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' created with options {}",
            self.processor, self.options
        )
    }
}

impl StructuredLog for ProcessorCreated<'_> {
    fn log(&self) {
        tracing::info!(
            processor = self.processor,
            option_count = self.options.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("processor_created", span_name = name, processor = self.processor)
    }
}

/// Processor instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProcessorInstantiationFailed<'a> {
    pub processor: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate processor '{}': {}",
            self.processor, self.reason
        )
    }
}

impl StructuredLog for ProcessorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(processor = self.processor, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_instantiation",
            span_name = name,
            processor = self.processor,
        )
    }
}

/// Mirror constructed; echoes its arguments for manual inspection.
///
/// # Log Level
/// `info!` - Diagnostic output is the mirror's purpose
pub struct MirrorArguments<'a> {
    pub args: &'a TermMap,
    pub foo: &'a Term,
    pub info: &'a Term,
}

impl Display for MirrorArguments<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mirror initialised with {}; foo is {}; info() is {}",
            self.args, self.foo, self.info
        )
    }
}

impl StructuredLog for MirrorArguments<'_> {
    fn log(&self) {
        tracing::info!(
            args = %self.args,
            foo = %self.foo,
            info = %self.info,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("mirror", span_name = name, foo = %self.foo)
    }
}

/// Mirror received its init request.
///
/// # Log Level
/// `info!` - Diagnostic output is the mirror's purpose
pub struct MirrorInitRequested<'a> {
    pub req: Option<&'a Term>,
}

impl Display for MirrorInitRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.req {
            Some(req) => write!(f, "Mirror init called with {}", req),
            None => write!(f, "Mirror init called without a request"),
        }
    }
}

impl StructuredLog for MirrorInitRequested<'_> {
    fn log(&self) {
        tracing::info!(has_request = self.req.is_some(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("mirror_init", span_name = name)
    }
}

/// Mirror echoing a point or a batch back unchanged.
///
/// # Log Level
/// `info!` - Diagnostic output is the mirror's purpose
pub struct MirrorEcho<'a> {
    pub call: &'a str,
    pub input: &'a [Term],
}

impl Display for MirrorEcho<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Mirror {} received ", self.call)?;
        match self.input {
            [single] => write!(f, "{}", single),
            many => write!(f, "{}", Term::list(many.iter().cloned())),
        }
    }
}

impl StructuredLog for MirrorEcho<'_> {
    fn log(&self) {
        tracing::info!(call = self.call, points = self.input.len(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("mirror_echo", span_name = name, call = self.call)
    }
}

/// A record was doubled.
///
/// # Log Level
/// `debug!` - Per-record detail
pub struct RecordDoubled<'a> {
    pub field: &'a str,
    pub as_field: &'a str,
    pub input: &'a Term,
    pub output: &'a Term,
}

impl Display for RecordDoubled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Doubled data.{} ({}) into '{}' ({})",
            self.field, self.input, self.as_field, self.output
        )
    }
}

impl StructuredLog for RecordDoubled<'_> {
    fn log(&self) {
        tracing::debug!(
            field = self.field,
            as_field = self.as_field,
            input = %self.input,
            output = %self.output,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "record_doubled",
            span_name = name,
            field = self.field,
            as_field = self.as_field,
        )
    }
}
