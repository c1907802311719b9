// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::{options_to_term, OptionSpec, OptionType};
use crate::engine::Emitter;
use crate::errors::ProcessorError;
use crate::observability::messages::processor::{
    MirrorArguments, MirrorEcho, MirrorInitRequested,
};
use crate::observability::messages::StructuredLog;
use crate::term::{Term, TermMap};
use crate::traits::{Processor, ProcessorDescriptor, Reply};

/// Mirror processor - hands every point and batch back unchanged.
///
/// Used to check host and bridge wiring. Everything it receives is logged;
/// nothing is emitted.
pub struct MirrorProcessor {
    args: TermMap,
}

impl MirrorProcessor {
    /// Requires the `foo` option; logs the arguments for inspection.
    pub fn new(args: TermMap) -> Result<Self, ProcessorError> {
        let foo = args
            .get_named("foo")
            .ok_or_else(|| ProcessorError::missing("foo"))?;

        MirrorArguments {
            args: &args,
            foo,
            info: &Self::info(),
        }
        .log();

        Ok(Self { args })
    }

    pub fn args(&self) -> &TermMap {
        &self.args
    }

    /// Capability list in term form: `[{foo, string}]`.
    pub fn info() -> Term {
        options_to_term(&Self::options())
    }

    /// Fixed reply to `init`, proving nested lists and maps survive the
    /// round trip to the host.
    pub fn init_reply() -> Term {
        let mut drei = TermMap::new();
        drei.set("view", Term::integer(3));

        let mut reply = TermMap::new();
        reply.set("eins", Term::list((1..=4).map(Term::integer)));
        reply.set("zwei", Term::integer(2));
        reply.set("drei", Term::Map(drei));
        Term::Map(reply)
    }
}

#[async_trait]
impl Processor for MirrorProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn init(&mut self, req: Option<Term>) -> Result<Reply, ProcessorError> {
        MirrorInitRequested { req: req.as_ref() }.log();
        Ok(Some(Self::init_reply()))
    }

    async fn point(&mut self, point: Term, _emitter: &Emitter) -> Result<Reply, ProcessorError> {
        MirrorEcho {
            call: "point",
            input: std::slice::from_ref(&point),
        }
        .log();
        Ok(Some(point))
    }

    async fn batch(
        &mut self,
        batch: Vec<Term>,
        _emitter: &Emitter,
    ) -> Result<Reply, ProcessorError> {
        MirrorEcho {
            call: "batch",
            input: &batch,
        }
        .log();
        Ok(Some(Term::List(batch)))
    }
}

impl ProcessorDescriptor for MirrorProcessor {
    const NAME: &'static str = "mirror";

    fn options() -> Vec<OptionSpec> {
        vec![OptionSpec::new("foo", OptionType::String)]
    }

    fn from_options(options: &TermMap) -> Result<Self, ProcessorError> {
        Self::new(options.clone())
    }
}
