// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod options;
mod runtime;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, Mode};
pub use options::{options_to_term, require_str, validate_options, OptionSpec, OptionType};
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
