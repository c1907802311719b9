// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON <-> term mapping.
//!
//! | JSON            | Term                         |
//! |-----------------|------------------------------|
//! | `null`          | atom `undefined`             |
//! | `true`/`false`  | atoms `true`/`false`         |
//! | string          | UTF-8 binary                 |
//! | integer         | integer (signed 64-bit)      |
//! | float           | float                        |
//! | array           | list                         |
//! | object          | map with binary keys         |
//!
//! Encoding also accepts tuples (as arrays) and atoms other than the three
//! above (as strings). Map keys must be atoms or UTF-8 binaries, and no two
//! keys may share the same text. Object fields keep their order both ways.

use serde_json::{Map, Number, Value};

use crate::errors::CodecError;
use crate::term::{Scalar, Term, TermMap};

/// Encode a term as JSON.
pub fn to_json(term: &Term) -> Result<Value, CodecError> {
    match term {
        Term::Atom(_) if term.is_undefined() => Ok(Value::Null),
        Term::Atom(name) => match term.as_bool() {
            Some(flag) => Ok(Value::Bool(flag)),
            None => Ok(Value::String(name.clone())),
        },
        Term::Scalar(Scalar::Integer(value)) => Ok(Value::Number((*value).into())),
        Term::Scalar(Scalar::Float(value)) => Number::from_f64(*value)
            .map(Value::Number)
            .ok_or(CodecError::NonFiniteFloat(*value)),
        Term::Scalar(Scalar::Binary(bytes)) => String::from_utf8(bytes.clone())
            .map(Value::String)
            .map_err(|_| CodecError::InvalidUtf8),
        Term::List(items) | Term::Tuple(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Term::Map(map) => {
            let mut object = Map::with_capacity(map.len());
            for (key, value) in map.iter() {
                let key = object_key(key)?;
                if object.contains_key(&key) {
                    return Err(CodecError::DuplicateKey(key));
                }
                object.insert(key, to_json(value)?);
            }
            Ok(Value::Object(object))
        }
    }
}

fn object_key(key: &Term) -> Result<String, CodecError> {
    match key {
        Term::Atom(name) => Ok(name.clone()),
        Term::Scalar(Scalar::Binary(bytes)) => {
            String::from_utf8(bytes.clone()).map_err(|_| CodecError::InvalidUtf8)
        }
        other => Err(CodecError::UnsupportedKey { kind: other.kind() }),
    }
}

/// Decode JSON into a term.
pub fn from_json(value: &Value) -> Result<Term, CodecError> {
    match value {
        Value::Null => Ok(Term::undefined()),
        Value::Bool(flag) => Ok(Term::boolean(*flag)),
        Value::Number(number) => number_to_term(number),
        Value::String(text) => Ok(Term::binary(text.as_str())),
        Value::Array(items) => items
            .iter()
            .map(from_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Term::List),
        Value::Object(object) => options_from_json(object).map(Term::Map),
    }
}

/// Decode a JSON object into a term map with binary keys, in the object's
/// field order.
pub fn options_from_json(object: &Map<String, Value>) -> Result<TermMap, CodecError> {
    let mut map = TermMap::with_capacity(object.len());
    for (key, value) in object {
        map.insert(Term::binary(key.as_str()), from_json(value)?);
    }
    Ok(map)
}

fn number_to_term(number: &Number) -> Result<Term, CodecError> {
    if let Some(value) = number.as_i64() {
        return Ok(Term::integer(value));
    }
    if number.is_u64() {
        return Err(CodecError::Unrepresentable(number.to_string()));
    }
    number
        .as_f64()
        .map(Term::float)
        .ok_or_else(|| CodecError::Unrepresentable(number.to_string()))
}
