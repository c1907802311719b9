// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::errors::ProcessorError;
use crate::term::Term;

/// One unit sent downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Point(Term),
    /// A whole batch travels as a single emission.
    Batch(Vec<Term>),
}

impl Emission {
    /// Number of data points carried.
    pub fn len(&self) -> usize {
        match self {
            Emission::Point(_) => 1,
            Emission::Batch(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Term form: the point itself, or a list for a batch.
    pub fn into_term(self) -> Term {
        match self {
            Emission::Point(point) => point,
            Emission::Batch(points) => Term::List(points),
        }
    }
}

pub type EmissionReceiver = UnboundedReceiver<Emission>;

/// One-way sender into the downstream pipeline.
///
/// Emitting never waits for the receiver; it only fails once the receiving
/// side has been dropped.
#[derive(Debug, Clone)]
pub struct Emitter {
    tx: UnboundedSender<Emission>,
}

impl Emitter {
    pub fn channel() -> (Emitter, EmissionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Emitter { tx }, rx)
    }

    pub fn emit(&self, emission: Emission) -> Result<(), ProcessorError> {
        self.tx
            .send(emission)
            .map_err(|_| ProcessorError::Emit("downstream receiver dropped".to_string()))
    }

    pub fn emit_point(&self, point: Term) -> Result<(), ProcessorError> {
        self.emit(Emission::Point(point))
    }

    pub fn emit_batch(&self, points: Vec<Term>) -> Result<(), ProcessorError> {
        self.emit(Emission::Batch(points))
    }
}
