//! Host-side subword editing.
//!
//! Translates subword boundaries into caret movement, selection extension and
//! partial-word deletion over a rope buffer.
//!
//! # Architecture
//!
//! - [`SubwordCommand`]: every command a host can bind, as a plain enum
//! - [`SubwordEditor`]: rope buffer plus caret/selection that executes commands
//! - [`Selection`]: anchor/head pair over character offsets
//!
//! # Example
//!
//! ```
//! use subword::editable::{SubwordCommand, SubwordEditor};
//!
//! let mut editor = SubwordEditor::new("parseHtmlDocument");
//! editor.execute(SubwordCommand::MoveNext);
//! assert_eq!(editor.caret(), 5);
//!
//! editor.execute(SubwordCommand::DeleteNext);
//! assert_eq!(editor.text(), "parseDocument");
//! ```

mod command;
mod editor;
mod selection;

pub use command::SubwordCommand;
pub use editor::SubwordEditor;
pub use selection::Selection;
