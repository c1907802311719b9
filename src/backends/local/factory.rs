// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{validate_options, OptionSpec};
use crate::errors::ProcessorFactoryError;
use crate::observability::messages::processor::{ProcessorCreated, ProcessorInstantiationFailed};
use crate::observability::messages::validation::OptionsRejected;
use crate::observability::messages::StructuredLog;
use crate::term::TermMap;
use crate::traits::{Processor, ProcessorDescriptor};

use super::processors::*;

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance from its implementation name and options
    ///
    /// Options are validated against the implementation's capability list
    /// before the processor is constructed:
    /// - "double" -> DoubleProcessor (requires `field` and `as`)
    /// - "mirror" -> MirrorProcessor (requires `foo`)
    pub fn create_processor(
        name: &str,
        options: &TermMap,
    ) -> Result<Box<dyn Processor>, ProcessorFactoryError> {
        match name {
            DoubleProcessor::NAME => build::<DoubleProcessor>(options),
            MirrorProcessor::NAME => build::<MirrorProcessor>(options),
            _ => {
                ProcessorInstantiationFailed {
                    processor: name,
                    reason: "unknown implementation",
                }
                .log();
                Err(ProcessorFactoryError::UnknownProcessor {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Capability list of an implementation, or `None` if it does not exist
    pub fn options(name: &str) -> Option<Vec<OptionSpec>> {
        match name {
            DoubleProcessor::NAME => Some(DoubleProcessor::options()),
            MirrorProcessor::NAME => Some(MirrorProcessor::options()),
            _ => None,
        }
    }

    /// List all available local processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![DoubleProcessor::NAME, MirrorProcessor::NAME]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

fn build<P: ProcessorDescriptor>(
    options: &TermMap,
) -> Result<Box<dyn Processor>, ProcessorFactoryError> {
    if let Err(errors) = validate_options(&P::options(), options) {
        OptionsRejected {
            processor: P::NAME,
            errors: &errors,
        }
        .log();
        return Err(ProcessorFactoryError::InvalidOptions {
            processor: P::NAME.to_string(),
            errors,
        });
    }

    let processor = P::from_options(options).map_err(|source| {
        let reason = source.to_string();
        ProcessorInstantiationFailed {
            processor: P::NAME,
            reason: &reason,
        }
        .log();
        ProcessorFactoryError::ConstructionFailed {
            processor: P::NAME.to_string(),
            source,
        }
    })?;

    ProcessorCreated {
        processor: P::NAME,
        options,
    }
    .log();

    Ok(Box::new(processor))
}
