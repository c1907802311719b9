// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor implementations.
//!
//! # Local Backend
//! In-process processors, created by name through
//! [`local::LocalProcessorFactory`]:
//! - **double**: writes twice `data.<field>` into `<as>` and emits the record
//! - **mirror**: returns every point and batch unchanged, logging what it sees
//!
//! # Stub Backend (Test-Only)
//! - **StubProcessor**: accepts everything, replies with nothing
//! - **FailingProcessor**: fails data calls (and optionally `init`)
//!
//! # Example
//! ```rust
//! use faxe_processors::backends::local::LocalProcessorFactory;
//! use faxe_processors::term::{Term, TermMap};
//! use faxe_processors::traits::Processor;
//!
//! let mut options = TermMap::new();
//! options.set("field", Term::binary("val"));
//! options.set("as", Term::binary("doubled"));
//!
//! let processor = LocalProcessorFactory::create_processor("double", &options)?;
//! assert_eq!(processor.name(), "double");
//! # Ok::<(), faxe_processors::errors::ProcessorFactoryError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
