//! Core processor framework
//!
//! Defines the plugin contract a linting host drives: a [`TextProcessor`]
//! advertises the file extensions it handles and hands out a per-extension
//! [`Process`] that converts file text into a document and wraps the host's
//! lint messages back up with the file path.

use crate::Result;
use crate::ast::DocumentNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Lint messages for one file, as returned to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessResult {
    /// Messages exactly as the host produced them
    pub messages: Vec<Value>,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Hooks run by the host around linting one file
pub trait Process {
    /// Turn raw file text into a document tree
    fn pre_process(&self, text: &str, file_path: Option<&str>) -> Result<DocumentNode>;

    /// Attach the file path to the messages produced for it
    fn post_process(&self, messages: Vec<Value>, file_path: Option<&str>) -> PostProcessResult;
}

/// Trait for text processors
///
/// Each processor is responsible for:
/// 1. Declaring the file extensions it handles
/// 2. Producing a [`Process`] for one of those extensions
pub trait TextProcessor: Send + Sync {
    /// Processor name (for display)
    fn name(&self) -> &str;

    /// Extensions handled, each with a leading dot
    fn available_extensions(&self) -> Vec<String>;

    /// Hooks for files with `extension`
    fn processor(&self, extension: &str) -> Box<dyn Process>;

    /// Check if this processor can handle a file
    fn can_handle(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self
                .available_extensions()
                .iter()
                .any(|candidate| candidate.trim_start_matches('.') == ext),
            None => false,
        }
    }
}

/// Registry of text processors
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn TextProcessor>>,
}

impl ProcessorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a processor
    pub fn register(&mut self, processor: impl TextProcessor + 'static) {
        self.processors.push(Box::new(processor));
    }

    /// Find the processor for a file
    pub fn find_processor(&self, path: &Path) -> Option<&dyn TextProcessor> {
        self.processors
            .iter()
            .find(|p| p.can_handle(path))
            .map(|p| p.as_ref())
    }

    /// Get all registered processors
    pub fn processors(&self) -> &[Box<dyn TextProcessor>] {
        &self.processors
    }

    /// Every extension handled by any registered processor
    pub fn available_extensions(&self) -> Vec<String> {
        self.processors
            .iter()
            .flat_map(|p| p.available_extensions())
            .collect()
    }

    /// Pre-process a file with the processor responsible for it
    pub fn pre_process(&self, path: &Path, text: &str) -> Result<Option<DocumentNode>> {
        let Some(processor) = self.find_processor(path) else {
            return Ok(None);
        };
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let file_path = path.to_string_lossy();
        let document = processor.processor(&extension).pre_process(text, Some(file_path.as_ref()))?;
        Ok(Some(document))
    }
}
