// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors converting between [`crate::term::Term`] and external formats.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A binary that must become text is not valid UTF-8.
    #[error("binary is not valid UTF-8")]
    InvalidUtf8,

    /// A map key that has no textual form.
    #[error("map key of kind '{kind}' cannot become an object key")]
    UnsupportedKey { kind: &'static str },

    /// Two map keys with the same text, e.g. atom `k` and binary `k`.
    #[error("map key '{0}' appears more than once")]
    DuplicateKey(String),

    /// NaN and the infinities have no JSON representation.
    #[error("float {0} has no JSON representation")]
    NonFiniteFloat(f64),

    /// A number outside the signed 64-bit and float ranges.
    #[error("number {0} is neither a signed 64-bit integer nor a float")]
    Unrepresentable(String),
}
