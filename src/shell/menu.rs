//! Menu definitions
//!
//! Numbered entries of the main menu.

use crate::error::{GradebookError, Result};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Load = 1,
    AddStudent = 2,
    Save = 3,
    Report = 4,
    Exit = 5,
}

impl MenuChoice {
    /// Every entry, in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Load,
        MenuChoice::AddStudent,
        MenuChoice::Save,
        MenuChoice::Report,
        MenuChoice::Exit,
    ];

    /// Parse one line of user input
    ///
    /// Non-numeric input is `InvalidInput`; a number outside the menu is
    /// `InvalidMenuChoice`.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| GradebookError::InvalidInput(trimmed.to_string()))?;
        Self::try_from(number)
    }

    /// Menu number shown to the user
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Load => "Load students from the data file",
            MenuChoice::AddStudent => "Add a student",
            MenuChoice::Save => "Save students to the data file",
            MenuChoice::Report => "Show grades (total, average, rank)",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = GradebookError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(MenuChoice::Load),
            2 => Ok(MenuChoice::AddStudent),
            3 => Ok(MenuChoice::Save),
            4 => Ok(MenuChoice::Report),
            5 => Ok(MenuChoice::Exit),
            other => Err(GradebookError::InvalidMenuChoice(other)),
        }
    }
}
