// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // processor implementations
pub mod codec;      // term <-> JSON
pub mod config;     // config files, capability lists
pub mod engine;     // host driver + emission channel
pub mod errors;     // error handling
pub mod observability;
pub mod term;       // host-native value model
pub mod traits;     // unified abstractions
