// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::OptionSpec;
use crate::engine::Emitter;
use crate::errors::ProcessorError;
use crate::term::{Term, TermMap};

/// Value handed back to the host from a call, separate from any emission.
pub type Reply = Option<Term>;

/// The capability set the host drives.
///
/// Calls are strictly sequential: the host owns the processor and takes
/// `&mut self` for every call, so at most one call is in flight.
#[async_trait]
pub trait Processor: Send {
    /// Registered implementation name.
    fn name(&self) -> &'static str;

    /// Lifecycle initializer, called once before any data.
    async fn init(&mut self, req: Option<Term>) -> Result<Reply, ProcessorError>;

    /// Handle one data point.
    async fn point(&mut self, point: Term, emitter: &Emitter) -> Result<Reply, ProcessorError>;

    /// Handle an ordered batch of data points.
    async fn batch(&mut self, batch: Vec<Term>, emitter: &Emitter)
        -> Result<Reply, ProcessorError>;
}

/// Static description and construction of a processor type.
///
/// `options()` is independent of any instance; the host uses it to validate
/// configuration before `from_options` runs.
pub trait ProcessorDescriptor: Processor + Sized + 'static {
    const NAME: &'static str;

    /// Ordered capability list of accepted option keys.
    fn options() -> Vec<OptionSpec>;

    /// Parse options once into a typed configuration and build the processor.
    fn from_options(options: &TermMap) -> Result<Self, ProcessorError>;
}
