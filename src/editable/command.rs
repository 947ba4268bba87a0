//! Subword command enum
//!
//! Commands are the bridge between host keybindings and [`SubwordEditor`].
//!
//! [`SubwordEditor`]: super::SubwordEditor

use std::fmt;
use std::str::FromStr;

/// All subword commands a host can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubwordCommand {
    /// Move caret to the previous subword boundary
    MovePrevious,
    /// Move caret to the next subword boundary
    MoveNext,
    /// Move to the previous subword boundary, extending selection
    MovePreviousExtend,
    /// Move to the next subword boundary, extending selection
    MoveNextExtend,
    /// Delete back to the previous subword boundary (or the selection)
    DeletePrevious,
    /// Delete up to the next subword boundary (or the selection)
    DeleteNext,
}

impl SubwordCommand {
    pub const ALL: [SubwordCommand; 6] = [
        SubwordCommand::MovePrevious,
        SubwordCommand::MoveNext,
        SubwordCommand::MovePreviousExtend,
        SubwordCommand::MoveNextExtend,
        SubwordCommand::DeletePrevious,
        SubwordCommand::DeleteNext,
    ];

    /// Direction the command travels in
    pub fn forward(&self) -> bool {
        matches!(
            self,
            SubwordCommand::MoveNext | SubwordCommand::MoveNextExtend | SubwordCommand::DeleteNext
        )
    }

    /// Check if the command keeps the selection anchor in place
    pub fn extends_selection(&self) -> bool {
        matches!(
            self,
            SubwordCommand::MovePreviousExtend | SubwordCommand::MoveNextExtend
        )
    }

    /// Check if this command modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            SubwordCommand::DeletePrevious | SubwordCommand::DeleteNext
        )
    }

    /// Stable name used on the command line and in keymaps
    pub fn name(&self) -> &'static str {
        match self {
            SubwordCommand::MovePrevious => "subword-previous",
            SubwordCommand::MoveNext => "subword-next",
            SubwordCommand::MovePreviousExtend => "subword-previous-extend",
            SubwordCommand::MoveNextExtend => "subword-next-extend",
            SubwordCommand::DeletePrevious => "subword-delete-previous",
            SubwordCommand::DeleteNext => "subword-delete-next",
        }
    }
}

impl fmt::Display for SubwordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubwordCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubwordCommand::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| format!("Unknown subword command: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert!(SubwordCommand::MoveNext.forward());
        assert!(SubwordCommand::DeleteNext.forward());
        assert!(!SubwordCommand::MovePreviousExtend.forward());
        assert!(!SubwordCommand::DeletePrevious.forward());
    }

    #[test]
    fn test_is_editing() {
        assert!(SubwordCommand::DeletePrevious.is_editing());
        assert!(!SubwordCommand::MoveNext.is_editing());
        assert!(!SubwordCommand::MoveNextExtend.is_editing());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for command in SubwordCommand::ALL {
            assert_eq!(command.name().parse::<SubwordCommand>(), Ok(command));
        }
        assert!("subword-sideways".parse::<SubwordCommand>().is_err());
    }
}
