//! # Doctext - Documentation comments as lintable prose
//!
//! Turns the documentation comments of a TypeScript source file into a flat,
//! position-annotated text document that a prose-linting host can run its
//! rules against.
//!
//! Doctext provides:
//! - A pluggable syntax parser seam with a Tree-sitter TypeScript implementation
//! - Byte offset to line/column translation
//! - A document builder emitting `Document` / `Str` nodes
//! - A processor shell implementing the host plugin contract

pub mod ast;
pub mod position;
pub mod syntax;
pub mod builder;
pub mod processor;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use ast::{DocumentNode, TextNode, NodeType, TextPosition, Location};
pub use position::LineStarts;
pub use builder::DocumentBuilder;
pub use processor::{TypescriptProcessor, TextProcessor, Process, PostProcessResult};
pub use config::ProcessorOptions;

/// Result type alias for Doctext operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Doctext operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Language error: {0}")]
    Language(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
