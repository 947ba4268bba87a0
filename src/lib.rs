//! Subword navigation - camelCase, snake_case and digit-aware cursor stops
//!
//! This crate locates the positions inside identifier-like text where a caret
//! moving by partial words should stop, and applies them to caret movement,
//! selection extension and partial-word deletion.
//!
//! ```
//! use subword::navigator::RopeNavigator;
//! use subword::SubwordNavigation;
//!
//! let navigator = RopeNavigator::from_text("HTMLParser");
//! assert_eq!(navigator.subword_boundary(1, true), Some(4));
//! ```

pub mod boundary;
pub mod classify;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod navigator;
pub mod search;
pub mod tracing;

// Re-export commonly used types
pub use boundary::is_boundary;
pub use classify::{classify, Category};
pub use config::SubwordConfig;
pub use editable::{SubwordCommand, SubwordEditor};
pub use navigator::{RopeNavigator, Span, TextStructureNavigator};
pub use search::{find_boundary, SubwordNavigation};
