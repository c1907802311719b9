pub mod processor;

pub use processor::{Processor, ProcessorDescriptor, Reply};
