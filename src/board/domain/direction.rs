//! Movement directions and arrow-key parsing.

use super::ParseKeyError;
use serde::{Deserialize, Serialize};

/// Vertical step within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowDirection {
    /// Towards the top of the board (lower index).
    Up,
    /// Towards the bottom of the board (higher index).
    Down,
}

/// Horizontal step across boards, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDirection {
    /// The board before the current one (left).
    Previous,
    /// The board after the current one (right).
    Next,
}

/// One of the four arrow keys used for keyboard movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKey {
    /// `ArrowUp`.
    #[serde(rename = "ArrowUp")]
    Up,
    /// `ArrowDown`.
    #[serde(rename = "ArrowDown")]
    Down,
    /// `ArrowLeft`.
    #[serde(rename = "ArrowLeft")]
    Left,
    /// `ArrowRight`.
    #[serde(rename = "ArrowRight")]
    Right,
}

/// The axis an arrow key acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStep {
    /// Reorder within the active task's board.
    Row(RowDirection),
    /// Move the active task to a neighbouring board.
    Column(ColumnDirection),
}

impl ArrowKey {
    /// Returns the platform key name, e.g. `ArrowDown`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }

    /// Classifies the key as a row or column step.
    #[must_use]
    pub const fn step(self) -> KeyStep {
        match self {
            Self::Up => KeyStep::Row(RowDirection::Up),
            Self::Down => KeyStep::Row(RowDirection::Down),
            Self::Left => KeyStep::Column(ColumnDirection::Previous),
            Self::Right => KeyStep::Column(ColumnDirection::Next),
        }
    }
}

impl TryFrom<&str> for ArrowKey {
    type Error = ParseKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "arrowup" | "up" => Ok(Self::Up),
            "arrowdown" | "down" => Ok(Self::Down),
            "arrowleft" | "left" => Ok(Self::Left),
            "arrowright" | "right" => Ok(Self::Right),
            _ => Err(ParseKeyError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for RowDirection {
    type Error = ParseKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match ArrowKey::try_from(value)?.step() {
            KeyStep::Row(direction) => Ok(direction),
            KeyStep::Column(_) => Err(ParseKeyError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for ColumnDirection {
    type Error = ParseKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match ArrowKey::try_from(value)?.step() {
            KeyStep::Column(direction) => Ok(direction),
            KeyStep::Row(_) => Err(ParseKeyError(value.to_owned())),
        }
    }
}
