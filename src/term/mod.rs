// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tagged representation of host-native terms.
//!
//! Everything that crosses the bridge (points, batches, option maps, init
//! requests and replies) is modelled as a [`Term`]. Processors only ever see
//! `Term` values, never the bridge library's own types; conversions to other
//! formats live in [`crate::codec`].
//!
//! * [`Term`] - atom, scalar, list, tuple or map
//! * [`TermMap`] - insertion-ordered map with name-based lookup
//! * [`Record`] - a single map-shaped data point

mod map;
mod record;
mod value;

pub use map::TermMap;
pub use record::Record;
pub use value::{Scalar, Term};

/// Atom the bridge uses for an absent value.
pub const UNDEFINED_ATOM: &str = "undefined";
/// Atom for boolean true.
pub const TRUE_ATOM: &str = "true";
/// Atom for boolean false.
pub const FALSE_ATOM: &str = "false";
