//! Lexical navigator over a `ropey::Rope`

use ropey::Rope;

use super::{Span, TextStructureNavigator, Word};

/// Lexical class used to group characters into word extents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// Letters, digits and underscore
    Identifier,
    /// Horizontal whitespace
    Blank,
    /// `\n` or `\r` (`\r\n` forms one extent)
    LineBreak,
    /// Anything else, one character per extent
    Punctuation,
}

fn lexeme(ch: char) -> Lexeme {
    if ch == '\n' || ch == '\r' {
        Lexeme::LineBreak
    } else if ch.is_whitespace() {
        Lexeme::Blank
    } else if ch.is_alphanumeric() || ch == '_' {
        Lexeme::Identifier
    } else {
        Lexeme::Punctuation
    }
}

/// Word extent containing `point`. A point at the end of the text resolves to
/// the last character's extent.
pub(super) fn word_extent(rope: &Rope, point: usize) -> Word {
    let len = rope.len_chars();
    if len == 0 {
        return Word {
            span: Span::empty(0),
            is_significant: false,
        };
    }

    let pos = point.min(len - 1);
    let ch = rope.char(pos);
    let class = lexeme(ch);

    let (start, end) = match class {
        Lexeme::LineBreak => {
            let start = if ch == '\n' && pos > 0 && rope.char(pos - 1) == '\r' {
                pos - 1
            } else {
                pos
            };
            let end = if ch == '\r' && pos + 1 < len && rope.char(pos + 1) == '\n' {
                pos + 2
            } else {
                pos + 1
            };
            (start, end)
        }
        Lexeme::Punctuation => (pos, pos + 1),
        Lexeme::Identifier | Lexeme::Blank => {
            let mut start = pos;
            while start > 0 && lexeme(rope.char(start - 1)) == class {
                start -= 1;
            }
            let mut end = pos + 1;
            while end < len && lexeme(rope.char(end)) == class {
                end += 1;
            }
            (start, end)
        }
    };

    Word {
        span: Span::new(start, end),
        is_significant: matches!(class, Lexeme::Identifier | Lexeme::Punctuation),
    }
}

pub(super) fn previous_sibling(rope: &Rope, span: Span) -> Span {
    if span.start == 0 {
        return span;
    }
    word_extent(rope, span.start - 1).span
}

pub(super) fn next_sibling(rope: &Rope, span: Span) -> Span {
    if span.end >= rope.len_chars() {
        return span;
    }
    word_extent(rope, span.end).span
}

pub(super) fn document_span(rope: &Rope) -> Span {
    Span::new(0, rope.len_chars())
}

pub(super) fn text(rope: &Rope, span: Span) -> Vec<char> {
    let len = rope.len_chars();
    let start = span.start.min(len);
    let end = span.end.min(len);
    if start >= end {
        return Vec::new();
    }
    rope.slice(start..end).chars().collect()
}

/// Navigator whose hierarchy is word window, whole lines, whole document.
///
/// Holds its own `Rope` handle; cloning a rope is cheap and gives an immutable
/// snapshot for the duration of a search.
#[derive(Debug, Clone)]
pub struct RopeNavigator {
    rope: Rope,
}

impl RopeNavigator {
    pub fn new(rope: Rope) -> Self {
        Self { rope }
    }

    pub fn from_text(s: &str) -> Self {
        Self::new(Rope::from_str(s))
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Smallest run of whole lines (line breaks included) covering `span`
    fn line_span(&self, span: Span) -> Span {
        let first = self.rope.char_to_line(span.start);
        let last = if span.is_empty() {
            first
        } else {
            self.rope.char_to_line(span.end - 1)
        };
        Span::new(self.rope.line_to_char(first), self.rope.line_to_char(last + 1))
    }
}

impl TextStructureNavigator for RopeNavigator {
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
        let lines = self.line_span(span);
        if lines != span {
            lines
        } else {
            document
        }
    }

    fn text(&self, span: Span) -> Vec<char> {
        text(&self.rope, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(s: &str) -> RopeNavigator {
        RopeNavigator::from_text(s)
    }

    #[test]
    fn test_identifier_extent() {
        let n = nav("let fooBar_2 = 1;");
        let word = n.extent_of_word(6);
        assert_eq!(word.span, Span::new(4, 12));
        assert!(word.is_significant);
    }

    #[test]
    fn test_whitespace_extent_is_insignificant() {
        let n = nav("a   b");
        let word = n.extent_of_word(2);
        assert_eq!(word.span, Span::new(1, 4));
        assert!(!word.is_significant);
    }

    #[test]
    fn test_punctuation_is_one_char_each() {
        let n = nav("a->b");
        assert_eq!(n.extent_of_word(1).span, Span::new(1, 2));
        assert_eq!(n.extent_of_word(2).span, Span::new(2, 3));
        assert!(n.extent_of_word(2).is_significant);
    }

    #[test]
    fn test_crlf_is_single_extent() {
        let n = nav("a\r\nb");
        assert_eq!(n.extent_of_word(1).span, Span::new(1, 3));
        assert_eq!(n.extent_of_word(2).span, Span::new(1, 3));
        assert!(!n.extent_of_word(2).is_significant);
    }

    #[test]
    fn test_extent_at_document_end() {
        let n = nav("abc");
        assert_eq!(n.extent_of_word(3).span, Span::new(0, 3));
        assert_eq!(nav("").extent_of_word(0).span, Span::empty(0));
    }

    #[test]
    fn test_siblings() {
        let n = nav("foo bar");
        let bar = Span::new(4, 7);
        assert_eq!(n.span_of_previous_sibling(bar), Span::new(3, 4));
        assert_eq!(n.span_of_next_sibling(bar), bar);
        let foo = Span::new(0, 3);
        assert_eq!(n.span_of_previous_sibling(foo), foo);
        assert_eq!(n.span_of_next_sibling(foo), Span::new(3, 4));
    }

    #[test]
    fn test_enclosing_escalates_to_lines_then_document() {
        let n = nav("one two\nthree\n");
        let window = Span::new(0, 4);
        let line = n.span_of_enclosing(window);
        assert_eq!(line, Span::new(0, 8));
        let document = n.span_of_enclosing(line);
        assert_eq!(document, Span::new(0, 14));
        assert_eq!(n.span_of_enclosing(document), document);
    }

    #[test]
    fn test_enclosing_covers_multiple_lines() {
        let n = nav("ab\ncd\nef");
        // Window spanning the first line break
        assert_eq!(n.span_of_enclosing(Span::new(1, 4)), Span::new(0, 6));
    }

    #[test]
    fn test_text_materializes_chars() {
        let n = nav("héllo wörld");
        assert_eq!(n.text(Span::new(6, 11)), "wörld".chars().collect::<Vec<_>>());
        assert!(n.text(Span::new(4, 4)).is_empty());
    }
}
