// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use tracing::{Instrument, Span};

use crate::engine::{EmissionReceiver, Emitter};
use crate::errors::{HostCall, HostError, HostState, ProcessorError};
use crate::observability::messages::host::{
    CallCompleted, CallFailed, CallStarted, LifecycleViolation, ProcessorHosted,
};
use crate::observability::messages::StructuredLog;
use crate::term::Term;
use crate::traits::{Processor, Reply};

/// Drives one processor through its lifecycle.
///
/// Construct with [`ProcessorHost::new`], call [`init`](Self::init) once,
/// then any number of [`point`](Self::point) / [`batch`](Self::batch) calls.
/// Every call runs inside the processor's span and is logged on entry and
/// exit. Processor errors are logged and returned unchanged inside
/// [`HostError::Processor`]; the host never retries.
///
/// Emissions go to the receiver returned by `new`. Dropping the host closes
/// the channel.
pub struct ProcessorHost {
    processor: Box<dyn Processor>,
    emitter: Emitter,
    state: HostState,
    span: Span,
}

impl ProcessorHost {
    pub fn new(processor: Box<dyn Processor>) -> (Self, EmissionReceiver) {
        let (emitter, receiver) = Emitter::channel();
        let hosted = ProcessorHosted {
            processor: processor.name(),
        };
        let span = hosted.span("processor");
        span.in_scope(|| hosted.log());

        let host = Self {
            processor,
            emitter,
            state: HostState::Constructed,
            span,
        };
        (host, receiver)
    }

    pub fn processor_name(&self) -> &'static str {
        self.processor.name()
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    /// Lifecycle initializer. Accepted exactly once.
    pub async fn init(&mut self, req: Option<Term>) -> Result<Reply, HostError> {
        self.expect_state(HostCall::Init, HostState::Constructed)?;
        let started = self.start(HostCall::Init, 0);

        let result = self
            .processor
            .init(req)
            .instrument(self.span.clone())
            .await;

        let reply = self.finish(HostCall::Init, 0, started, result)?;
        self.state = HostState::Initialized;
        Ok(reply)
    }

    /// Deliver one data point.
    pub async fn point(&mut self, point: Term) -> Result<Reply, HostError> {
        self.expect_state(HostCall::Point, HostState::Initialized)?;
        let started = self.start(HostCall::Point, 1);

        let result = self
            .processor
            .point(point, &self.emitter)
            .instrument(self.span.clone())
            .await;

        self.finish(HostCall::Point, 1, started, result)
    }

    /// Deliver an ordered batch of data points.
    pub async fn batch(&mut self, batch: Vec<Term>) -> Result<Reply, HostError> {
        self.expect_state(HostCall::Batch, HostState::Initialized)?;
        let points = batch.len();
        let started = self.start(HostCall::Batch, points);

        let result = self
            .processor
            .batch(batch, &self.emitter)
            .instrument(self.span.clone())
            .await;

        self.finish(HostCall::Batch, points, started, result)
    }

    fn expect_state(&self, call: HostCall, expected: HostState) -> Result<(), HostError> {
        if self.state == expected {
            return Ok(());
        }

        let state = self.state.to_string();
        self.span.in_scope(|| {
            LifecycleViolation {
                processor: self.processor.name(),
                call: call.as_str(),
                state: &state,
            }
            .log()
        });

        Err(HostError::Lifecycle {
            processor: self.processor.name(),
            call,
            state: self.state,
        })
    }

    fn start(&self, call: HostCall, points: usize) -> Instant {
        self.span.in_scope(|| {
            CallStarted {
                processor: self.processor.name(),
                call: call.as_str(),
                points,
            }
            .log()
        });
        Instant::now()
    }

    fn finish(
        &self,
        call: HostCall,
        points: usize,
        started: Instant,
        result: Result<Reply, ProcessorError>,
    ) -> Result<Reply, HostError> {
        let processor = self.processor.name();
        let _guard = self.span.enter();

        match result {
            Ok(reply) => {
                CallCompleted {
                    processor,
                    call: call.as_str(),
                    points,
                    replied: reply.is_some(),
                    duration: started.elapsed(),
                }
                .log();
                Ok(reply)
            }
            Err(source) => {
                CallFailed {
                    processor,
                    call: call.as_str(),
                    error: &source,
                }
                .log();
                Err(HostError::Processor {
                    processor,
                    call,
                    source,
                })
            }
        }
    }
}

impl std::fmt::Debug for ProcessorHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorHost")
            .field("processor", &self.processor.name())
            .field("state", &self.state)
            .finish()
    }
}
