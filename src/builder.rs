//! Document Builder
//!
//! Parses a source file and collects its documentation comments, in preorder,
//! as `Str` children of a single `Document` node.

use crate::Result;
use crate::ast::{DocumentNode, Location, TextNode, TextPosition};
use crate::position::end_position;
use crate::syntax::{walk_descendants, SourceParser, SyntaxNode, SyntaxTree};

/// Builds text documents using an injected parser
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder<P> {
    parser: P,
}

impl<P: SourceParser> DocumentBuilder<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Parse `text` and build its document.
    ///
    /// Parser failures are returned unchanged.
    pub fn build(&self, text: &str) -> Result<DocumentNode> {
        let tree = self.parser.parse(text)?;
        let line_starts = tree.line_starts();

        let mut children = Vec::new();
        walk_descendants(&tree.root(), &mut |node| {
            let Some(comment) = node.doc_comment() else {
                return;
            };
            if comment.is_empty() {
                return;
            }
            let (start, end) = (node.start(), node.end());
            tracing::trace!(start, end, kind = node.kind(), "Extracted doc comment");
            children.push(TextNode::new(comment, [start, end], line_starts.location(start, end)));
        });

        tracing::debug!(comments = children.len(), bytes = text.len(), "Built document");

        let loc = Location::new(TextPosition::new(1, 0), end_position(text));
        Ok(DocumentNode::new(text, loc, children))
    }
}
