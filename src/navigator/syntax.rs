//! Syntax-aware navigator backed by tree-sitter

use anyhow::{Context, Result};
use ropey::Rope;
use tree_sitter::{Language, Parser, Tree};

use super::rope::{document_span, next_sibling, previous_sibling, text, word_extent};
use super::{Span, TextStructureNavigator, Word};

/// Navigator whose enclosing spans follow the syntax tree.
///
/// Word and sibling queries are lexical, identical to
/// [`RopeNavigator`](super::RopeNavigator). Enclosing spans climb from the
/// smallest node covering a span through its ancestors, then end at the
/// whole document.
pub struct SyntaxNavigator {
    rope: Rope,
    tree: Tree,
}

impl SyntaxNavigator {
    /// Parse `rope` with the given grammar
    pub fn new(rope: Rope, language: &Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .context("Failed to load tree-sitter grammar")?;

        let source = rope.to_string();
        let tree = parser
            .parse(&source, None)
            .context("tree-sitter returned no syntax tree")?;

        tracing::debug!(
            chars = rope.len_chars(),
            has_error = tree.root_node().has_error(),
            "Parsed syntax tree for navigation"
        );

        Ok(Self { rope, tree })
    }

    /// Parse `rope` as Rust source
    pub fn rust(rope: Rope) -> Result<Self> {
        Self::new(rope, &tree_sitter_rust::LANGUAGE.into())
    }

    fn node_span(&self, node: tree_sitter::Node<'_>) -> Span {
        Span::new(
            self.rope.byte_to_char(node.start_byte()),
            self.rope.byte_to_char(node.end_byte()),
        )
    }
}

impl TextStructureNavigator for SyntaxNavigator {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn extent_of_word(&self, point: usize) -> Word {
        word_extent(&self.rope, point)
    }

    fn span_of_previous_sibling(&self, span: Span) -> Span {
        previous_sibling(&self.rope, span)
    }

    fn span_of_next_sibling(&self, span: Span) -> Span {
        next_sibling(&self.rope, span)
    }

    fn span_of_enclosing(&self, span: Span) -> Span {
        let document = document_span(&self.rope);
        if span == document {
            return span;
        }

        let start_byte = self.rope.char_to_byte(span.start);
        let end_byte = self.rope.char_to_byte(span.end);
        let mut node = self
            .tree
            .root_node()
            .descendant_for_byte_range(start_byte, end_byte);

        while let Some(current) = node {
            let candidate = self.node_span(current);
            if candidate != span && candidate.contains_span(span) {
                return candidate;
            }
            node = current.parent();
        }

        document
    }

    fn text(&self, span: Span) -> Vec<char> {
        text(&self.rope, span)
    }
}
