// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{CodecError, HostError};

/// Errors driving line-delimited JSON input through a host.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input line is not valid JSON.
    #[error("input line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An input line has no term form.
    #[error("input line {line}: {source}")]
    Codec {
        line: usize,
        #[source]
        source: CodecError,
    },

    /// A reply or emission could not be encoded as JSON.
    #[error("cannot encode output: {0}")]
    Output(#[source] CodecError),

    #[error(transparent)]
    Host(#[from] HostError),
}
