//! Text document nodes
//!
//! The tree handed to the linting host. A single `Document` root owns a flat
//! list of `Str` leaves, one per documentation comment. Leaves are not wrapped
//! in paragraph containers and blank lines between comments are not marked.

use serde::{Deserialize, Serialize};

/// Node type tag as the linting host names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Root of the tree
    Document,
    /// Plain text leaf
    Str,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "Document",
            NodeType::Str => "Str",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line/column pair. Lines are 1-based, columns are 0-based byte columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextPosition {
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for TextPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end positions of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl Location {
    pub fn new(start: TextPosition, end: TextPosition) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub raw: String,
    pub value: String,
    /// Byte range `[start, end)` in the source text
    pub range: [usize; 2],
    pub loc: Location,
}

impl TextNode {
    /// Create a `Str` leaf whose raw and value are both `text`
    pub fn new(text: impl Into<String>, range: [usize; 2], loc: Location) -> Self {
        let text = text.into();
        Self {
            node_type: NodeType::Str,
            raw: text.clone(),
            value: text,
            range,
            loc,
        }
    }

    pub fn start(&self) -> usize {
        self.range[0]
    }

    pub fn end(&self) -> usize {
        self.range[1]
    }
}

/// Root of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// The full source text
    pub raw: String,
    pub range: [usize; 2],
    pub loc: Location,
    pub children: Vec<TextNode>,
}

impl DocumentNode {
    pub fn new(raw: impl Into<String>, loc: Location, children: Vec<TextNode>) -> Self {
        let raw = raw.into();
        Self {
            node_type: NodeType::Document,
            range: [0, raw.len()],
            raw,
            loc,
            children,
        }
    }

    /// Values of all children, in document order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
