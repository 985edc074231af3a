//! TypeScript processor
//!
//! Exposes the documentation comments of `.ts` and `.tsx` files, plus any
//! extensions added through [`ProcessorOptions`].

use crate::Result;
use crate::ast::DocumentNode;
use crate::builder::DocumentBuilder;
use crate::config::ProcessorOptions;
use crate::syntax::TypeScriptParser;
use super::framework::{PostProcessResult, Process, TextProcessor};
use serde_json::Value;

/// Extensions handled without any configuration
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".ts", ".tsx"];

/// File path reported when the host gives none
pub const PLACEHOLDER_FILE_PATH: &str = "<typescript>";

/// Processor for TypeScript documentation comments
#[derive(Debug, Clone, Default)]
pub struct TypescriptProcessor {
    options: ProcessorOptions,
}

impl TypescriptProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Hooks for `extension`, without boxing
    pub fn file_processor(&self, extension: &str) -> TypescriptFileProcessor {
        TypescriptFileProcessor {
            builder: DocumentBuilder::new(TypeScriptParser::for_extension(extension)),
        }
    }
}

impl TextProcessor for TypescriptProcessor {
    fn name(&self) -> &str {
        "TypeScript"
    }

    fn available_extensions(&self) -> Vec<String> {
        DEFAULT_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .chain(self.options.extensions.iter().cloned())
            .collect()
    }

    fn processor(&self, extension: &str) -> Box<dyn Process> {
        Box::new(self.file_processor(extension))
    }
}

/// Pre/post-process hooks for one extension
#[derive(Debug, Clone)]
pub struct TypescriptFileProcessor {
    builder: DocumentBuilder<TypeScriptParser>,
}

impl Process for TypescriptFileProcessor {
    fn pre_process(&self, text: &str, _file_path: Option<&str>) -> Result<DocumentNode> {
        self.builder.build(text)
    }

    fn post_process(&self, messages: Vec<Value>, file_path: Option<&str>) -> PostProcessResult {
        PostProcessResult {
            messages,
            file_path: file_path.unwrap_or(PLACEHOLDER_FILE_PATH).to_string(),
        }
    }
}
