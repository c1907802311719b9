// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::Emitter;
use crate::errors::ProcessorError;
use crate::term::Term;
use crate::traits::{Processor, Reply};

/// A processor that accepts everything and replies with nothing
pub struct StubProcessor;

impl StubProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Processor for StubProcessor {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn init(&mut self, _req: Option<Term>) -> Result<Reply, ProcessorError> {
        Ok(None)
    }

    async fn point(&mut self, _point: Term, _emitter: &Emitter) -> Result<Reply, ProcessorError> {
        Ok(None)
    }

    async fn batch(
        &mut self,
        _batch: Vec<Term>,
        _emitter: &Emitter,
    ) -> Result<Reply, ProcessorError> {
        Ok(None)
    }
}

/// A processor that fails every data call, and optionally `init` as well
pub struct FailingProcessor {
    fail_init: bool,
}

impl FailingProcessor {
    pub fn new() -> Self {
        Self { fail_init: false }
    }

    pub fn failing_init() -> Self {
        Self { fail_init: true }
    }

    fn failure() -> ProcessorError {
        ProcessorError::missing("simulated")
    }
}

#[async_trait::async_trait]
impl Processor for FailingProcessor {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn init(&mut self, _req: Option<Term>) -> Result<Reply, ProcessorError> {
        if self.fail_init {
            Err(Self::failure())
        } else {
            Ok(None)
        }
    }

    async fn point(&mut self, _point: Term, _emitter: &Emitter) -> Result<Reply, ProcessorError> {
        Err(Self::failure())
    }

    async fn batch(
        &mut self,
        _batch: Vec<Term>,
        _emitter: &Emitter,
    ) -> Result<Reply, ProcessorError> {
        Err(Self::failure())
    }
}
