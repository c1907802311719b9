// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability lists: the `(name, type)` pairs a processor declares for its
//! configuration, and validation of supplied options against them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ProcessorError, ValidationError};
use crate::term::{Scalar, Term, TermMap};

/// Type tag of a declared option.
///
/// Tags serialize to their lowercase names (`"string"`, `"integer"`, ...),
/// which are also the atoms used in the term form of a capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    String,
    Integer,
    Float,
    /// Integer or float
    Number,
    Bool,
    List,
    Map,
    Any,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::String => "string",
            OptionType::Integer => "integer",
            OptionType::Float => "float",
            OptionType::Number => "number",
            OptionType::Bool => "bool",
            OptionType::List => "list",
            OptionType::Map => "map",
            OptionType::Any => "any",
        }
    }

    /// Whether `value` is acceptable for an option of this type.
    pub fn accepts(&self, value: &Term) -> bool {
        match self {
            OptionType::String => value.as_text().is_some(),
            OptionType::Integer => value.as_integer().is_some(),
            OptionType::Float => value.as_float().is_some(),
            OptionType::Number => matches!(
                value,
                Term::Scalar(Scalar::Integer(_)) | Term::Scalar(Scalar::Float(_))
            ),
            OptionType::Bool => value.as_bool().is_some(),
            OptionType::List => value.as_list().is_some(),
            OptionType::Map => value.as_map().is_some(),
            OptionType::Any => true,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(OptionType::String),
            "integer" => Ok(OptionType::Integer),
            "float" => Ok(OptionType::Float),
            "number" => Ok(OptionType::Number),
            "bool" => Ok(OptionType::Bool),
            "list" => Ok(OptionType::List),
            "map" => Ok(OptionType::Map),
            "any" => Ok(OptionType::Any),
            other => Err(format!("unknown option type '{}'", other)),
        }
    }
}

/// One entry of a capability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionType,
}

impl OptionSpec {
    pub const fn new(name: &'static str, kind: OptionType) -> Self {
        Self { name, kind }
    }

    /// Term form: `{name, type}` with both elements as atoms.
    pub fn to_term(&self) -> Term {
        Term::tuple(vec![Term::atom(self.name), Term::atom(self.kind.as_str())])
    }
}

/// Term form of a whole capability list, in declaration order.
pub fn options_to_term(specs: &[OptionSpec]) -> Term {
    Term::list(specs.iter().map(OptionSpec::to_term))
}

/// Check `options` against a capability list.
///
/// Every declared option is required. All violations are collected rather
/// than stopping at the first one; missing and mistyped options are reported
/// in declaration order, followed by undeclared keys in map order.
pub fn validate_options(
    specs: &[OptionSpec],
    options: &TermMap,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for spec in specs {
        match options.get_named(spec.name) {
            None => errors.push(ValidationError::MissingOption {
                name: spec.name.to_string(),
                expected: spec.kind,
            }),
            Some(value) if !spec.kind.accepts(value) => {
                errors.push(ValidationError::OptionTypeMismatch {
                    name: spec.name.to_string(),
                    expected: spec.kind,
                    found: value.kind(),
                })
            }
            Some(_) => {}
        }
    }

    for key in options.keys() {
        let declared = specs.iter().any(|spec| key.is_named(spec.name));
        if !declared {
            let name = key.as_str().map(str::to_string).unwrap_or_else(|| key.to_string());
            errors.push(ValidationError::UnknownOption { name });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fetch a required text option during construction.
pub fn require_str<'a>(options: &'a TermMap, key: &str) -> Result<&'a str, ProcessorError> {
    let value = options
        .get_named(key)
        .ok_or_else(|| ProcessorError::missing(key))?;
    value
        .as_text()
        .ok_or_else(|| ProcessorError::mismatch(key, "string", value.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: [OptionSpec; 2] = [
        OptionSpec::new("field", OptionType::String),
        OptionSpec::new("factor", OptionType::Number),
    ];

    fn options(pairs: Vec<(&str, Term)>) -> TermMap {
        let mut map = TermMap::new();
        for (key, value) in pairs {
            map.set(key, value);
        }
        map
    }

    #[test]
    fn test_valid_options_pass() {
        let opts = options(vec![("field", Term::binary("val")), ("factor", Term::float(1.5))]);
        assert!(validate_options(&SPECS, &opts).is_ok());
    }

    #[test]
    fn test_all_violations_reported() {
        let opts = options(vec![("field", Term::integer(1)), ("extra", Term::atom("x"))]);

        let errors = validate_options(&SPECS, &opts).unwrap_err();

        assert_eq!(
            errors,
            vec![
                ValidationError::OptionTypeMismatch {
                    name: "field".to_string(),
                    expected: OptionType::String,
                    found: "integer",
                },
                ValidationError::MissingOption {
                    name: "factor".to_string(),
                    expected: OptionType::Number,
                },
                ValidationError::UnknownOption {
                    name: "extra".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_type_acceptance_table() {
        let cases = vec![
            (OptionType::String, Term::binary("s"), true),
            (OptionType::String, Term::atom("s"), false),
            (OptionType::Integer, Term::integer(1), true),
            (OptionType::Integer, Term::float(1.0), false),
            (OptionType::Float, Term::float(1.0), true),
            (OptionType::Number, Term::integer(1), true),
            (OptionType::Number, Term::binary("1"), false),
            (OptionType::Bool, Term::atom("true"), true),
            (OptionType::Bool, Term::atom("yes"), false),
            (OptionType::List, Term::list(vec![]), true),
            (OptionType::Map, Term::Map(TermMap::new()), true),
            (OptionType::Any, Term::undefined(), true),
        ];

        for (kind, value, expected) in cases {
            assert_eq!(kind.accepts(&value), expected, "{} accepting {}", kind, value);
        }
    }

    #[test]
    fn test_option_type_names_parse_back() {
        for kind in [
            OptionType::String,
            OptionType::Integer,
            OptionType::Float,
            OptionType::Number,
            OptionType::Bool,
            OptionType::List,
            OptionType::Map,
            OptionType::Any,
        ] {
            assert_eq!(kind.as_str().parse::<OptionType>(), Ok(kind));
        }
        assert!("text".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_capability_list_term_form() {
        assert_eq!(
            options_to_term(&SPECS).to_string(),
            "[{field, string}, {factor, number}]"
        );
    }

    #[test]
    fn test_require_str() {
        let opts = options(vec![("field", Term::binary("val")), ("as", Term::integer(2))]);

        assert_eq!(require_str(&opts, "field"), Ok("val"));
        assert_eq!(require_str(&opts, "missing"), Err(ProcessorError::missing("missing")));
        assert_eq!(
            require_str(&opts, "as"),
            Err(ProcessorError::mismatch("as", "string", "integer"))
        );
    }
}
