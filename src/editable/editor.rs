//! SubwordEditor - caret and selection driven by subword commands.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use ropey::Rope;

use super::command::SubwordCommand;
use super::selection::Selection;
use crate::navigator::{NavigatorKind, TextStructureNavigator};
use crate::search::SubwordNavigation;

/// Text buffer with a single caret/selection that executes subword commands.
///
/// Boundary moves step the caret one character at a time toward the target,
/// so a selection anchor is maintained exactly as with repeated arrow keys.
///
/// The navigator is built lazily from the buffer and reused until the buffer
/// changes, so a syntax navigator parses once per edit rather than per move.
#[derive(Clone)]
pub struct SubwordEditor {
    buffer: Rope,
    selection: Selection,
    navigator: NavigatorKind,
    structure: OnceCell<Rc<dyn TextStructureNavigator>>,
}

impl fmt::Debug for SubwordEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubwordEditor")
            .field("len_chars", &self.buffer.len_chars())
            .field("selection", &self.selection)
            .field("navigator", &self.navigator)
            .field("structure_built", &self.structure.get().is_some())
            .finish()
    }
}

impl SubwordEditor {
    /// Create an editor with the caret at the start of `text`
    pub fn new(text: &str) -> Self {
        Self::from_rope(Rope::from_str(text))
    }

    pub fn from_rope(buffer: Rope) -> Self {
        Self {
            buffer,
            selection: Selection::collapsed(0),
            navigator: NavigatorKind::default(),
            structure: OnceCell::new(),
        }
    }

    /// Use a different navigator backend for boundary lookups
    pub fn with_navigator(mut self, navigator: NavigatorKind) -> Self {
        self.navigator = navigator;
        self.structure = OnceCell::new();
        self
    }

    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret position (selection head)
    pub fn caret(&self) -> usize {
        self.selection.head
    }

    /// Place the caret, clearing any selection
    pub fn set_caret(&mut self, pos: usize) {
        self.selection = Selection::collapsed(pos.min(self.buffer.len_chars()));
    }

    /// Replace the selection
    pub fn select(&mut self, anchor: usize, head: usize) {
        let len = self.buffer.len_chars();
        self.selection = Selection::new(anchor.min(len), head.min(len));
    }

    /// Run a command. Returns the deleted text for editing commands.
    pub fn execute(&mut self, command: SubwordCommand) -> Option<String> {
        let before = self.selection;

        let deleted = match command {
            SubwordCommand::MovePrevious => {
                self.move_previous(false);
                None
            }
            SubwordCommand::MoveNext => {
                self.move_next(false);
                None
            }
            SubwordCommand::MovePreviousExtend => {
                self.move_previous(true);
                None
            }
            SubwordCommand::MoveNextExtend => {
                self.move_next(true);
                None
            }
            SubwordCommand::DeletePrevious => Some(self.delete_toward(false)),
            SubwordCommand::DeleteNext => Some(self.delete_toward(true)),
        };

        tracing::debug!(
            command = command.name(),
            from = ?before.range(),
            head = self.selection.head,
            anchor = self.selection.anchor,
            "Executed subword command"
        );

        deleted
    }

    /// Move caret to the previous subword boundary
    pub fn move_previous(&mut self, extend_selection: bool) {
        if !extend_selection && !self.selection.is_empty() {
            self.selection.collapse();
        }

        let point = self.caret();
        if point == 0 {
            return;
        }
        if point == 1 {
            self.move_to_previous_character(extend_selection);
            return;
        }

        let line = self.buffer.char_to_line(point);
        let line_start = self.buffer.line_to_char(line);

        // At a line start, land after the previous line's trailing content
        if point == line_start {
            let previous = line - 1;
            let mut target = self.last_non_whitespace(previous);
            if self.navigator().extent_of_word(target).is_significant {
                target += 1;
            }
            self.move_caret_to(target, extend_selection);
            return;
        }

        // No boundary: stop at the line start rather than leaving the caret put
        let end = self
            .navigator()
            .subword_boundary(point - 1, false)
            .unwrap_or(line_start);

        for _ in end..point {
            self.move_to_previous_character(extend_selection);
        }
    }

    /// Move caret to the next subword boundary, never past the line end
    pub fn move_next(&mut self, extend_selection: bool) {
        if !extend_selection && !self.selection.is_empty() {
            self.selection.collapse();
        }

        let point = self.caret();
        let len = self.buffer.len_chars();
        if point >= len {
            return;
        }
        if point == len - 1 {
            self.move_to_next_character(extend_selection);
            return;
        }

        let line = self.buffer.char_to_line(point);
        let line_end = self.line_end(line);

        if point == line_end {
            let target = self.first_non_whitespace(line + 1);
            self.move_caret_to(target, extend_selection);
            return;
        }

        // No boundary: stop at the line end rather than leaving the caret put
        let end = self
            .navigator()
            .subword_boundary(point + 1, true)
            .unwrap_or(line_end);

        let mut i = point;
        while i < end && i < line_end {
            self.move_to_next_character(extend_selection);
            i += 1;
        }
    }

    /// Delete the selection, or extend to the adjacent boundary and delete that
    fn delete_toward(&mut self, forward: bool) -> String {
        if self.selection.is_empty() {
            if forward {
                self.move_next(true);
            } else {
                self.move_previous(true);
            }
        }
        self.delete_selection()
    }

    fn delete_selection(&mut self) -> String {
        let range = self.selection.range();
        if range.is_empty() {
            return String::new();
        }
        let deleted = self.buffer.slice(range.clone()).to_string();
        self.buffer.remove(range.clone());
        self.structure = OnceCell::new();
        self.selection = Selection::collapsed(range.start);
        deleted
    }

    /// Navigator over the current buffer, built on first use after an edit
    fn navigator(&self) -> Rc<dyn TextStructureNavigator> {
        Rc::clone(
            self.structure
                .get_or_init(|| Rc::from(self.navigator.build(&self.buffer))),
        )
    }

    fn move_to_previous_character(&mut self, extend_selection: bool) {
        self.selection.head = self.selection.head.saturating_sub(1);
        if !extend_selection {
            self.selection.collapse();
        }
    }

    fn move_to_next_character(&mut self, extend_selection: bool) {
        if self.selection.head < self.buffer.len_chars() {
            self.selection.head += 1;
        }
        if !extend_selection {
            self.selection.collapse();
        }
    }

    fn move_caret_to(&mut self, pos: usize, extend_selection: bool) {
        self.selection.head = pos.min(self.buffer.len_chars());
        if !extend_selection {
            self.selection.collapse();
        }
    }

    /// Offset of the end of a line, before its line break
    fn line_end(&self, line: usize) -> usize {
        let start = self.buffer.line_to_char(line);
        let slice = self.buffer.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        start + len
    }

    /// Offset of the last non-whitespace character on a line, or the line
    /// start if it has none
    fn last_non_whitespace(&self, line: usize) -> usize {
        let start = self.buffer.line_to_char(line);
        let mut pos = self.line_end(line);
        while pos > start {
            if !self.buffer.char(pos - 1).is_whitespace() {
                return pos - 1;
            }
            pos -= 1;
        }
        start
    }

    /// Offset of the first non-whitespace character on a line, or the line
    /// end if it has none
    fn first_non_whitespace(&self, line: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let end = self.line_end(line);
        let mut pos = self.buffer.line_to_char(line);
        while pos < end && self.buffer.char(pos).is_whitespace() {
            pos += 1;
        }
        pos
    }
}
