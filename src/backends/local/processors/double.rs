// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::{require_str, OptionSpec, OptionType};
use crate::engine::Emitter;
use crate::errors::ProcessorError;
use crate::observability::messages::{processor::RecordDoubled, StructuredLog};
use crate::term::{Record, Scalar, Term, TermMap};
use crate::traits::{Processor, ProcessorDescriptor, Reply};

/// Configuration for the Double processor
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleConfig {
    /// Field read from the record's `data` map
    pub field: String,
    /// Top-level field the doubled value is written to
    pub as_field: String,
}

impl DoubleConfig {
    pub fn from_options(options: &TermMap) -> Result<Self, ProcessorError> {
        Ok(Self {
            field: require_str(options, "field")?.to_string(),
            as_field: require_str(options, "as")?.to_string(),
        })
    }
}

/// Double processor - writes twice the value of `data.<field>` to `<as>`.
///
/// Results are emitted rather than returned: one emission per point, and
/// one emission carrying the whole sequence per batch.
pub struct DoubleProcessor {
    config: DoubleConfig,
    counter: u64,
}

impl DoubleProcessor {
    pub fn new(config: DoubleConfig) -> Self {
        Self { config, counter: 0 }
    }

    pub fn config(&self) -> &DoubleConfig {
        &self.config
    }

    /// Number of `point` calls handled since the last `init`.
    pub fn points_handled(&self) -> u64 {
        self.counter
    }

    fn calc(&self, point: Term) -> Result<Term, ProcessorError> {
        let mut record = Record::try_from(point)
            .map_err(|other| ProcessorError::mismatch("point", "map", other.kind()))?;

        let data = record
            .get(Record::DATA_KEY)
            .ok_or_else(|| ProcessorError::missing(Record::DATA_KEY))?;
        let data = data
            .as_map()
            .ok_or_else(|| ProcessorError::mismatch(Record::DATA_KEY, "map", data.kind()))?;

        let path = format!("{}.{}", Record::DATA_KEY, self.config.field);
        let value = data
            .get_named(&self.config.field)
            .ok_or_else(|| ProcessorError::missing(path.as_str()))?;
        let doubled = double_value(value, &path)?;

        RecordDoubled {
            field: &self.config.field,
            as_field: &self.config.as_field,
            input: value,
            output: &doubled,
        }
        .log();

        record.set(&self.config.as_field, doubled);
        Ok(record.into())
    }
}

fn double_value(value: &Term, key: &str) -> Result<Term, ProcessorError> {
    match value {
        Term::Scalar(Scalar::Integer(n)) => n
            .checked_mul(2)
            .map(Term::integer)
            .ok_or_else(|| ProcessorError::Overflow {
                key: key.to_string(),
            }),
        Term::Scalar(Scalar::Float(x)) => Ok(Term::float(x * 2.0)),
        other => Err(ProcessorError::mismatch(key, "number", other.kind())),
    }
}

#[async_trait]
impl Processor for DoubleProcessor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn init(&mut self, _req: Option<Term>) -> Result<Reply, ProcessorError> {
        self.counter = 0;
        Ok(None)
    }

    async fn point(&mut self, point: Term, emitter: &Emitter) -> Result<Reply, ProcessorError> {
        self.counter += 1;
        let output = self.calc(point)?;
        emitter.emit_point(output)?;
        Ok(None)
    }

    async fn batch(
        &mut self,
        batch: Vec<Term>,
        emitter: &Emitter,
    ) -> Result<Reply, ProcessorError> {
        let outputs = batch
            .into_iter()
            .map(|point| self.calc(point))
            .collect::<Result<Vec<_>, _>>()?;
        emitter.emit_batch(outputs)?;
        Ok(None)
    }
}

impl ProcessorDescriptor for DoubleProcessor {
    const NAME: &'static str = "double";

    fn options() -> Vec<OptionSpec> {
        vec![
            OptionSpec::new("field", OptionType::String),
            OptionSpec::new("as", OptionType::String),
        ]
    }

    fn from_options(options: &TermMap) -> Result<Self, ProcessorError> {
        DoubleConfig::from_options(options).map(Self::new)
    }
}
