// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalProcessorFactory;
use crate::codec;
use crate::config::{validate_options, Config, Mode};
use crate::errors::ValidationError;
use crate::term::{Term, TermMap};

/// Validate a loaded configuration.
///
/// Checks, collecting every violation:
/// * the processor implementation exists
/// * batch mode has a non-zero `batch_size`
/// * every option value converts to a term
/// * the options satisfy the processor's capability list
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.mode == Mode::Batch && cfg.batch_size == 0 {
        errors.push(ValidationError::InvalidBatchSize {
            batch_size: cfg.batch_size,
        });
    }

    let mut options = TermMap::with_capacity(cfg.options.len());
    let mut invalid = Vec::new();
    for (name, value) in &cfg.options {
        match codec::from_json(value) {
            Ok(term) => {
                options.insert(Term::binary(name.as_str()), term);
            }
            Err(e) => {
                invalid.push(name.as_str());
                errors.push(ValidationError::InvalidOptionValue {
                    name: name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    match LocalProcessorFactory::options(&cfg.processor) {
        Some(specs) => {
            // Options already reported as unconvertible are not missing too.
            let specs: Vec<_> = specs
                .into_iter()
                .filter(|spec| !invalid.contains(&spec.name))
                .collect();
            if let Err(mut option_errors) = validate_options(&specs, &options) {
                errors.append(&mut option_errors);
            }
        }
        None => errors.push(ValidationError::UnknownProcessor {
            name: cfg.processor.clone(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_double_config() {
        let cfg = config(
            r#"
processor: double
options:
  field: val
  as: doubled
"#,
        );

        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_unknown_processor() {
        let cfg = config("processor: triple\n");

        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownProcessor {
                name: "triple".to_string()
            }]
        );
    }

    #[test]
    fn test_zero_batch_size_only_matters_in_batch_mode() {
        let point_mode = config(
            r#"
processor: mirror
batch_size: 0
options:
  foo: bar
"#,
        );
        assert!(validate_config(&point_mode).is_ok());

        let batch_mode = config(
            r#"
processor: mirror
mode: batch
batch_size: 0
options:
  foo: bar
"#,
        );
        assert_eq!(
            validate_config(&batch_mode).unwrap_err(),
            vec![ValidationError::InvalidBatchSize { batch_size: 0 }]
        );
    }

    #[test]
    fn test_unrepresentable_option_value() {
        let cfg = config(
            r#"
processor: mirror
options:
  foo: 18446744073709551615
"#,
        );

        let errors = validate_config(&cfg).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidOptionValue { name, .. } if name == "foo"
        ));
    }

    #[test]
    fn test_unrepresentable_option_does_not_hide_other_violations() {
        let cfg = config(
            r#"
processor: double
options:
  field: 18446744073709551615
"#,
        );

        let errors = validate_config(&cfg).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidOptionValue { name, .. } if name == "field"
        ));
        assert_eq!(
            errors[1],
            ValidationError::MissingOption {
                name: "as".to_string(),
                expected: crate::config::OptionType::String,
            }
        );
    }
}
