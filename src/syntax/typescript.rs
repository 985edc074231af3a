//! TypeScript syntax trees via Tree-sitter
//!
//! Comments are `extra` nodes in the Tree-sitter grammar, so they show up as
//! ordinary children wherever they occur. A `comment` node whose text opens
//! with `/**` is a documentation comment.

use crate::{Error, Result};
use crate::position::LineStarts;
use super::{jsdoc, SourceParser, SyntaxNode, SyntaxTree};
use tree_sitter::{Language, Node, Parser, Tree};

const COMMENT_KIND: &str = "comment";

/// Which TypeScript grammar to parse with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Dialect for a file extension. Only `.tsx` selects TSX.
    pub fn for_extension(extension: &str) -> Self {
        if extension.trim_start_matches('.').eq_ignore_ascii_case("tsx") {
            Dialect::Tsx
        } else {
            Dialect::TypeScript
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "TypeScript",
            Dialect::Tsx => "TSX",
        }
    }
}

/// Tree-sitter backed TypeScript parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptParser {
    dialect: Dialect,
}

impl TypeScriptParser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn for_extension(extension: &str) -> Self {
        Self::new(Dialect::for_extension(extension))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl SourceParser for TypeScriptParser {
    type Tree = TypeScriptTree;

    fn parse(&self, text: &str) -> Result<TypeScriptTree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.dialect.language())
            .map_err(|e| Error::Language(format!("Failed to set {} language: {}", self.dialect.name(), e)))?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse(format!("{} parser produced no tree", self.dialect.name())))?;

        if tree.root_node().has_error() {
            tracing::debug!(dialect = self.dialect.name(), "Source contains syntax errors, using recovered tree");
        }

        Ok(TypeScriptTree {
            tree,
            source: text.to_string(),
            line_starts: LineStarts::from_text(text),
        })
    }
}

/// A parsed TypeScript file together with its source text
pub struct TypeScriptTree {
    tree: Tree,
    source: String,
    line_starts: LineStarts,
}

impl TypeScriptTree {
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl SyntaxTree for TypeScriptTree {
    type Node<'a> = TypeScriptNode<'a>;

    fn root(&self) -> TypeScriptNode<'_> {
        TypeScriptNode {
            node: self.tree.root_node(),
            source: &self.source,
        }
    }

    fn line_starts(&self) -> &LineStarts {
        &self.line_starts
    }
}

/// A Tree-sitter node paired with the text it was parsed from
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> TypeScriptNode<'a> {
    /// Source text covered by this node
    pub fn text(&self) -> Option<&'a str> {
        self.source.get(self.node.byte_range())
    }
}

impl SyntaxNode for TypeScriptNode<'_> {
    fn kind(&self) -> &str {
        self.node.kind()
    }

    fn start(&self) -> usize {
        self.node.start_byte()
    }

    fn end(&self) -> usize {
        self.node.end_byte()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|node| TypeScriptNode { node, source: self.source })
            .collect()
    }

    fn doc_comment(&self) -> Option<String> {
        if self.node.kind() != COMMENT_KIND {
            return None;
        }
        jsdoc::description(self.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::walk_descendants;

    fn comments(dialect: Dialect, source: &str) -> Vec<(String, usize, usize)> {
        let tree = TypeScriptParser::new(dialect).parse(source).unwrap();
        let mut found = Vec::new();
        walk_descendants(&tree.root(), &mut |node: &TypeScriptNode| {
            if let Some(text) = node.doc_comment() {
                found.push((text, node.start(), node.end()));
            }
        });
        found
    }

    #[test]
    fn test_dialect_for_extension() {
        assert_eq!(Dialect::for_extension(".tsx"), Dialect::Tsx);
        assert_eq!(Dialect::for_extension("TSX"), Dialect::Tsx);
        assert_eq!(Dialect::for_extension(".ts"), Dialect::TypeScript);
        assert_eq!(Dialect::for_extension(".mts"), Dialect::TypeScript);
    }

    #[test]
    fn test_finds_doc_comment() {
        let source = "/** hello */\nconst x = 1;";
        let found = comments(Dialect::TypeScript, source);

        assert_eq!(found, vec![("hello".to_string(), 0, 12)]);
    }

    #[test]
    fn test_ignores_plain_comments() {
        let source = "// line\n/* block */\nconst x = 1;";
        assert!(comments(Dialect::TypeScript, source).is_empty());
    }

    #[test]
    fn test_nested_doc_comments_in_order() {
        let source = "/** Greeter. */\nclass Greeter {\n  /** Says hi. */\n  greet(): void {}\n}\n";
        let found: Vec<String> = comments(Dialect::TypeScript, source)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();

        assert_eq!(found, vec!["Greeter.", "Says hi."]);
    }

    #[test]
    fn test_tsx_dialect() {
        let source = "/** Renders a button. */\nexport const B = () => <button>ok</button>;\n";
        let found = comments(Dialect::Tsx, source);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "Renders a button.");
    }

    #[test]
    fn test_recovers_from_syntax_errors() {
        let tree = TypeScriptParser::default().parse("/** doc */\nconst = ;").unwrap();
        assert_eq!(tree.source(), "/** doc */\nconst = ;");
        assert_eq!(tree.line_starts().as_slice(), &[0, 11]);
    }
}
