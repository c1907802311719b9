// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic output goes through `tracing` only. Message types follow a
//! struct-based pattern with a `Display` implementation plus
//! [`messages::StructuredLog`], so log text lives in one place and every
//! event carries structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::host` - lifecycle and call events from the host driver
//! * `messages::processor` - events raised inside processors
//! * `messages::validation` - option and configuration validation failures
//!
//! # Usage
//!
//! ```rust
//! use faxe_processors::observability::messages::{host::CallFailed, StructuredLog};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = CallFailed {
//!     processor: "double",
//!     call: "point",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Install the global subscriber for the command-line harness.
///
/// Logs go to stderr so stdout stays free for emitted data. `RUST_LOG`
/// overrides the built-in filter.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
