//! Syntax Parser Seam
//!
//! The document builder never parses source text itself. It asks a
//! [`SourceParser`] for a [`SyntaxTree`] and walks the tree's nodes through
//! the [`SyntaxNode`] view. The Tree-sitter TypeScript grammar is the shipped
//! implementation; tests plug in hand-built trees.

pub mod jsdoc;
pub mod typescript;

pub use typescript::{Dialect, TypeScriptNode, TypeScriptParser, TypeScriptTree};

use crate::Result;
use crate::position::LineStarts;

/// Read-only view of one node of a parsed tree
pub trait SyntaxNode: Sized {
    /// Grammar-specific node kind
    fn kind(&self) -> &str;

    /// Byte offset where the node starts
    fn start(&self) -> usize;

    /// Byte offset just past the node
    fn end(&self) -> usize;

    /// Direct children in source order
    fn children(&self) -> Vec<Self>;

    /// Extracted text when this node is a documentation comment
    fn doc_comment(&self) -> Option<String>;
}

/// A parsed source file
pub trait SyntaxTree {
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    /// Root node covering the whole file
    fn root(&self) -> Self::Node<'_>;

    /// Line start table of the parsed text
    fn line_starts(&self) -> &LineStarts;
}

/// Turns source text into a syntax tree
pub trait SourceParser {
    type Tree: SyntaxTree;

    fn parse(&self, text: &str) -> Result<Self::Tree>;
}

/// Visit every descendant of `node` in preorder, excluding `node` itself
pub fn walk_descendants<N, F>(node: &N, visit: &mut F)
where
    N: SyntaxNode,
    F: FnMut(&N),
{
    for child in node.children() {
        visit(&child);
        walk_descendants(&child, visit);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory syntax trees for exercising the builder without a grammar

    use super::*;

    #[derive(Debug, Clone)]
    pub struct FakeNode {
        pub kind: &'static str,
        pub start: usize,
        pub end: usize,
        pub comment: Option<String>,
        pub children: Vec<FakeNode>,
    }

    impl FakeNode {
        pub fn branch(kind: &'static str, start: usize, end: usize, children: Vec<FakeNode>) -> Self {
            Self { kind, start, end, comment: None, children }
        }

        pub fn doc(start: usize, end: usize, comment: &str) -> Self {
            Self { kind: "doc", start, end, comment: Some(comment.to_string()), children: vec![] }
        }
    }

    impl<'x> SyntaxNode for &'x FakeNode {
        fn kind(&self) -> &str {
            self.kind
        }

        fn start(&self) -> usize {
            self.start
        }

        fn end(&self) -> usize {
            self.end
        }

        fn children(&self) -> Vec<Self> {
            let node: &'x FakeNode = *self;
            node.children.iter().collect()
        }

        fn doc_comment(&self) -> Option<String> {
            self.comment.clone()
        }
    }

    pub struct FakeTree {
        pub root: FakeNode,
        pub line_starts: LineStarts,
    }

    impl SyntaxTree for FakeTree {
        type Node<'a> = &'a FakeNode;

        fn root(&self) -> Self::Node<'_> {
            &self.root
        }

        fn line_starts(&self) -> &LineStarts {
            &self.line_starts
        }
    }

    /// Parser returning a prepared tree, or failing when none is set
    pub struct FakeParser {
        pub root: Option<FakeNode>,
    }

    impl SourceParser for FakeParser {
        type Tree = FakeTree;

        fn parse(&self, text: &str) -> Result<FakeTree> {
            let root = self
                .root
                .clone()
                .ok_or_else(|| crate::Error::Parse("no tree".to_string()))?;
            Ok(FakeTree { root, line_starts: LineStarts::from_text(text) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeNode;
    use super::*;

    #[test]
    fn test_walk_is_preorder_and_skips_root() {
        let root = FakeNode::branch(
            "root",
            0,
            10,
            vec![
                FakeNode::branch("a", 0, 5, vec![FakeNode::branch("a1", 0, 2, vec![])]),
                FakeNode::branch("b", 5, 10, vec![]),
            ],
        );

        let mut seen = Vec::new();
        walk_descendants(&&root, &mut |n: &&FakeNode| seen.push(n.kind));

        assert_eq!(seen, vec!["a", "a1", "b"]);
    }
}
