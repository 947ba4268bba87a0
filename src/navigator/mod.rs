//! Text structure navigation
//!
//! The subword search walks a hierarchy of spans supplied by the host text
//! model: the word under a point, its lexical siblings, and successively
//! larger enclosing units. This module defines that read-only interface and
//! two backends over a `ropey::Rope` snapshot:
//!
//! - [`RopeNavigator`]: lexical words, enclosed by lines, enclosed by the document
//! - [`SyntaxNavigator`]: lexical words, enclosed by tree-sitter syntax nodes

mod rope;
mod syntax;

use std::ops::Range;

use ropey::Rope;
use serde::{Deserialize, Serialize};

pub use rope::RopeNavigator;
pub use syntax::SyntaxNavigator;

/// Half-open range of character indices `[start, end)` into a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Empty span at a position
    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a position falls inside this span
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if another span lies entirely within this one
    pub fn contains_span(&self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Extent of the word containing a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub span: Span,
    /// True for real lexical words, false for whitespace and line breaks
    pub is_significant: bool,
}

/// Read-only queries over an immutable text snapshot.
///
/// Implementations must keep enclosing spans monotonic: the result of
/// [`span_of_enclosing`](Self::span_of_enclosing) contains its input, and the
/// outermost span encloses itself.
pub trait TextStructureNavigator {
    /// Snapshot length in characters
    fn len_chars(&self) -> usize;

    /// Word containing `point`
    fn extent_of_word(&self, point: usize) -> Word;

    /// Word immediately before `span`, or `span` itself at the start
    fn span_of_previous_sibling(&self, span: Span) -> Span;

    /// Word immediately after `span`, or `span` itself at the end
    fn span_of_next_sibling(&self, span: Span) -> Span;

    /// Next larger structural unit containing `span`
    fn span_of_enclosing(&self, span: Span) -> Span;

    /// Characters covered by `span`
    fn text(&self, span: Span) -> Vec<char>;

    /// Upper bound on enclosing-span escalations for a single search.
    ///
    /// Every escalation short of the fixpoint widens the span by at least one
    /// character, so the snapshot length bounds the hierarchy depth.
    fn max_escalations(&self) -> usize {
        self.len_chars() + 1
    }
}

/// Which navigator backend to build over a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    /// Words enclosed by lines, then the document
    #[default]
    Lexical,
    /// Words enclosed by Rust syntax nodes, then the document
    Syntax,
}

impl NavigatorKind {
    /// Build a navigator over a snapshot of `rope`.
    ///
    /// Falls back to the lexical navigator if the syntax tree cannot be built.
    pub fn build(self, rope: &Rope) -> Box<dyn TextStructureNavigator> {
        match self {
            NavigatorKind::Lexical => Box::new(RopeNavigator::new(rope.clone())),
            NavigatorKind::Syntax => match SyntaxNavigator::rust(rope.clone()) {
                Ok(navigator) => Box::new(navigator),
                Err(e) => {
                    tracing::warn!("Syntax navigator unavailable, using lexical: {:#}", e);
                    Box::new(RopeNavigator::new(rope.clone()))
                }
            },
        }
    }
}
