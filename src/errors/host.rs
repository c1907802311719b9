// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use thiserror::Error;

use super::ProcessorError;

/// Lifecycle state of a hosted processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// Constructed, waiting for `init`.
    Constructed,
    /// `init` succeeded; points and batches are accepted.
    Initialized,
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostState::Constructed => write!(f, "awaiting init"),
            HostState::Initialized => write!(f, "initialized"),
        }
    }
}

/// Entry points the host drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Init,
    Point,
    Batch,
}

impl HostCall {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostCall::Init => "init",
            HostCall::Point => "point",
            HostCall::Batch => "batch",
        }
    }
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum HostError {
    /// A call arrived in a state that does not accept it.
    #[error("processor '{processor}' cannot handle '{call}' while {state}")]
    Lifecycle {
        processor: &'static str,
        call: HostCall,
        state: HostState,
    },

    /// The processor itself failed.
    #[error("processor '{processor}' failed in '{call}': {source}")]
    Processor {
        processor: &'static str,
        call: HostCall,
        #[source]
        source: ProcessorError,
    },
}
