// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::codec;
use crate::config::consts::DEFAULT_BATCH_SIZE;
use crate::errors::CodecError;
use crate::term::{Term, TermMap};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Configuration for hosting one processor.
///
/// Loaded from a YAML file, or from TOML when the file extension is `.toml`.
/// Option and init values are kept format-neutral as JSON values and turned
/// into terms only when the processor is built.
///
/// # Fields
/// * `processor` - Implementation name (`double`, `mirror`)
/// * `mode` - Whether input records are delivered one by one or in batches
/// * `batch_size` - Records per batch in batch mode (defaults to 10)
/// * `init` - Request passed to the processor's `init` call (optional)
/// * `options` - Processor options, checked against its capability list
///
/// # Example
/// ```yaml
/// processor: double
/// mode: batch
/// batch_size: 5
/// options:
///   field: val
///   as: doubled
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub processor: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub init: Option<Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Config {
    /// Processor options as a term map with binary keys.
    pub fn options_term(&self) -> Result<TermMap, CodecError> {
        codec::options_from_json(&self.options)
    }

    /// The init request, if one is configured.
    pub fn init_term(&self) -> Result<Option<Term>, CodecError> {
        self.init.as_ref().map(codec::from_json).transpose()
    }
}

/// How input records are delivered to the processor.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One `point` call per record
    #[default]
    Point,
    /// One `batch` call per `batch_size` records
    Batch,
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let cfg: Config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    Ok(cfg)
}

/// Load and validate a config file
///
/// Validation checks the processor name, the batch size and the options
/// against the processor's capability list, so an invalid file is rejected
/// before anything is constructed.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        let error_messages: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        let combined_error = format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
        return Err(combined_error.into());
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
processor: double
options:
  field: val
  as: doubled
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.processor, "double");
        assert_eq!(cfg.mode, Mode::Point);
        assert_eq!(cfg.batch_size, DEFAULT_BATCH_SIZE);
        assert!(cfg.init.is_none());

        let options = cfg.options_term().unwrap();
        assert_eq!(options.get_named("field"), Some(&Term::binary("val")));
        assert_eq!(options.get_named("as"), Some(&Term::binary("doubled")));
    }

    #[test]
    fn parse_batch_mode_with_init() {
        let yaml = r#"
processor: mirror
mode: batch
batch_size: 3
init:
  hello: world
options:
  foo: bar
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.mode, Mode::Batch);
        assert_eq!(cfg.batch_size, 3);
        let init = cfg.init_term().unwrap().unwrap();
        assert_eq!(
            init.as_map().unwrap().get_named("hello"),
            Some(&Term::binary("world"))
        );
    }

    #[test]
    fn test_load_toml_by_extension() {
        let file = write_temp(
            ".toml",
            r#"
processor = "double"
mode = "batch"

[options]
field = "val"
as = "doubled"
"#,
        );

        let cfg = load_config(file.path()).unwrap();

        assert_eq!(cfg.processor, "double");
        assert_eq!(cfg.mode, Mode::Batch);
        assert_eq!(cfg.options.len(), 2);
    }

    #[test]
    fn test_load_and_validate_rejects_bad_options() {
        let file = write_temp(
            ".yaml",
            r#"
processor: double
options:
  field: 7
"#,
        );

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();

        assert!(error_msg.starts_with("Configuration validation failed:"));
        assert!(error_msg.contains("Option 'field' expects type string but got integer"));
        assert!(error_msg.contains("Missing required option 'as' of type string"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config("does/not/exist.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        let yaml = r#"
processor: double
mode: stream
"#;

        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
