// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalProcessorFactory;
use crate::config::Config;
use crate::engine::{EmissionReceiver, ProcessorHost};
use crate::errors::ProcessorFactoryError;

/// Runtime builder - creates a hosted processor from configuration.
///
/// # Examples
///
/// ```
/// use faxe_processors::config::{Config, Mode, RuntimeBuilder};
///
/// let config: Config = serde_yaml::from_str(
///     "processor: mirror\noptions:\n  foo: bar\n",
/// ).unwrap();
///
/// let (host, _emissions) = RuntimeBuilder::from_config(&config).unwrap();
/// assert_eq!(host.processor_name(), "mirror");
/// assert_eq!(config.mode, Mode::Point);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a host around the configured processor.
    ///
    /// Returns the host, still awaiting `init`, and the receiving end of its
    /// emission channel.
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(ProcessorHost, EmissionReceiver), ProcessorFactoryError> {
        let options = cfg
            .options_term()
            .map_err(|source| ProcessorFactoryError::OptionEncoding {
                processor: cfg.processor.clone(),
                source,
            })?;
        let processor = LocalProcessorFactory::create_processor(&cfg.processor, &options)?;
        Ok(ProcessorHost::new(processor))
    }
}
