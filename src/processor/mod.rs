//! Processor Framework
//!
//! A processor is what the linting host loads: it names the file extensions it
//! handles and converts between file text and the text document model.

pub mod framework;
pub mod typescript;

pub use framework::{Process, PostProcessResult, ProcessorRegistry, TextProcessor};
pub use typescript::{TypescriptFileProcessor, TypescriptProcessor, DEFAULT_EXTENSIONS, PLACEHOLDER_FILE_PATH};

use crate::config::ProcessorOptions;

/// Create a registry with all built-in processors
pub fn default_registry(options: ProcessorOptions) -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register(TypescriptProcessor::new(options));
    registry
}
