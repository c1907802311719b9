// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for host lifecycle and call events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A processor was attached to a host.
///
/// # Log Level
/// `info!` - Important operational event
///
/// The span built from this message wraps every later call into the
/// processor, so events logged inside processors carry its name.
pub struct ProcessorHosted<'a> {
    pub processor: &'a str,
}

impl Display for ProcessorHosted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processor '{}' attached to host", self.processor)
    }
}

impl StructuredLog for ProcessorHosted<'_> {
    fn log(&self) {
        tracing::info!(processor = self.processor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("processor", span_name = name, processor = self.processor)
    }
}

/// A call into the processor started.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct CallStarted<'a> {
    pub processor: &'a str,
    pub call: &'a str,
    pub points: usize,
}

impl Display for CallStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' {} started: points={}",
            self.processor, self.call, self.points
        )
    }
}

impl StructuredLog for CallStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            call = self.call,
            points = self.points,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            processor = self.processor,
            call = self.call,
            points = self.points,
        )
    }
}

/// A call into the processor returned successfully.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct CallCompleted<'a> {
    pub processor: &'a str,
    pub call: &'a str,
    pub points: usize,
    pub replied: bool,
    pub duration: std::time::Duration,
}

impl Display for CallCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' {} completed: points={}, replied={}, duration={:?}",
            self.processor, self.call, self.points, self.replied, self.duration
        )
    }
}

impl StructuredLog for CallCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            call = self.call,
            points = self.points,
            replied = self.replied,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            processor = self.processor,
            call = self.call,
            points = self.points,
        )
    }
}

/// A call into the processor failed. The error is returned to the caller
/// unchanged after this is logged.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CallFailed<'a> {
    pub processor: &'a str,
    pub call: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for CallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' {} failed: {}",
            self.processor, self.call, self.error
        )
    }
}

impl StructuredLog for CallFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor = self.processor,
            call = self.call,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "call",
            span_name = name,
            processor = self.processor,
            call = self.call,
        )
    }
}

/// A call arrived out of lifecycle order.
///
/// # Log Level
/// `warn!` - Caller error
pub struct LifecycleViolation<'a> {
    pub processor: &'a str,
    pub call: &'a str,
    pub state: &'a str,
}

impl Display for LifecycleViolation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' rejected {}: host is {}",
            self.processor, self.call, self.state
        )
    }
}

impl StructuredLog for LifecycleViolation<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            call = self.call,
            state = self.state,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "lifecycle",
            span_name = name,
            processor = self.processor,
            call = self.call,
        )
    }
}
