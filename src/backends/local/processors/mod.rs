// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod double;
pub mod mirror;

pub use double::*;
pub use mirror::*;
