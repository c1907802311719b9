// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversions between [`crate::term::Term`] and external formats.
//!
//! Processors work on terms only. The codec is the single place where terms
//! meet another representation: JSON for the command-line harness, and the
//! format-neutral `serde_json::Value` that YAML and TOML configuration files
//! deserialize into.

pub mod json;

pub use json::{from_json, options_from_json, to_json};
