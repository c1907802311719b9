// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process host driver.
//!
//! [`ProcessorHost`] plays the part of the stream host: it owns a processor,
//! enforces the construct -> init -> point/batch lifecycle, and owns the
//! emission channel processors send results into. [`LineDriver`] feeds it
//! line-delimited JSON records.

pub mod driver;
pub mod emitter;
pub mod host;

#[cfg(test)]
mod integration_tests;

pub use driver::{write_output, DriveSummary, LineDriver};
pub use emitter::{Emission, EmissionReceiver, Emitter};
pub use host::ProcessorHost;
