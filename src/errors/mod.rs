// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod codec;
mod config;
mod driver;
mod factory;
mod host;
mod processor;

pub use codec::CodecError;
pub use config::ValidationError;
pub use driver::DriverError;
pub use factory::ProcessorFactoryError;
pub use host::{HostCall, HostError, HostState};
pub use processor::ProcessorError;
