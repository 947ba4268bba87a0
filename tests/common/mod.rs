//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;

use subword::editable::{SubwordCommand, SubwordEditor};
use subword::navigator::{RopeNavigator, Span, TextStructureNavigator, Word};

/// Create an editor with given text and caret position
pub fn editor_at(text: &str, caret: usize) -> SubwordEditor {
    let mut editor = SubwordEditor::new(text);
    editor.set_caret(caret);
    editor
}

/// Run `command` until the caret stops moving, collecting each caret stop
pub fn caret_stops(editor: &mut SubwordEditor, command: SubwordCommand) -> Vec<usize> {
    let mut stops = Vec::new();
    loop {
        let before = editor.selection();
        editor.execute(command);
        if editor.selection() == before {
            return stops;
        }
        stops.push(editor.caret());
        assert!(stops.len() <= 1000, "caret never settled");
    }
}

/// Successive core boundaries from `point`, feeding each result back in the
/// way a host steps past the previous stop
pub fn successive_boundaries(text: &str, point: usize, forward: bool) -> Vec<Option<usize>> {
    use subword::SubwordNavigation;

    let navigator = RopeNavigator::from_text(text);
    let mut results = Vec::new();
    let mut point = point;
    loop {
        let found = navigator.subword_boundary(point, forward);
        results.push(found);
        match found {
            Some(pos) if forward && pos < navigator.len_chars() => point = pos + 1,
            Some(pos) if !forward && pos > 0 => point = pos - 1,
            _ => return results,
        }
    }
}

/// Navigator wrapper that records enclosing-span queries
pub struct CountingNavigator {
    inner: RopeNavigator,
    pub enclosing_calls: Cell<usize>,
    pub fixpoints: Cell<usize>,
}

impl CountingNavigator {
    pub fn new(text: &str) -> Self {
        Self {
            inner: RopeNavigator::from_text(text),
            enclosing_calls: Cell::new(0),
            fixpoints: Cell::new(0),
        }
    }
}

impl TextStructureNavigator for CountingNavigator {
    fn len_chars(&self) -> usize {
        self.inner.len_chars()
    }

    fn extent_of_word(&self, point: usize) -> Word {
        self.inner.extent_of_word(point)
    }

    fn span_of_previous_sibling(&self, span: Span) -> Span {
        self.inner.span_of_previous_sibling(span)
    }

    fn span_of_next_sibling(&self, span: Span) -> Span {
        self.inner.span_of_next_sibling(span)
    }

    fn span_of_enclosing(&self, span: Span) -> Span {
        self.enclosing_calls.set(self.enclosing_calls.get() + 1);
        let enclosing = self.inner.span_of_enclosing(span);
        if enclosing == span {
            self.fixpoints.set(self.fixpoints.get() + 1);
        }
        enclosing
    }

    fn text(&self, span: Span) -> Vec<char> {
        self.inner.text(span)
    }
}
