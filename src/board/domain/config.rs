//! Tunable board behaviour.

use serde::{Deserialize, Serialize};

/// Where a task lands inside its destination board after a reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// After the last task already on the destination board.
    #[default]
    Append,
    /// Before the first task already on the destination board.
    Prepend,
    /// Keep the task's current flat index.
    Preserve,
}

/// Drag effect requested from the platform drag affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropEffect {
    /// No drop allowed.
    None,
    /// Copy the dragged item.
    Copy,
    /// Link to the dragged item.
    Link,
    /// Move the dragged item.
    #[default]
    Move,
}

impl DropEffect {
    /// Returns the platform name of the effect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Link => "link",
            Self::Move => "move",
        }
    }
}

/// Configuration for board state and interaction.
///
/// # Examples
///
/// ```
/// use kanban_board::board::domain::{BoardConfig, PlacementPolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.placement, PlacementPolicy::Append);
///
/// let raw = BoardConfig::preserve_position();
/// assert_eq!(raw.placement, PlacementPolicy::Preserve);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Placement of reassigned tasks in their destination board.
    pub placement: PlacementPolicy,
    /// Effect applied to the drag affordance when a drag starts.
    pub drag_effect: DropEffect,
}

impl BoardConfig {
    /// Configuration that leaves reassigned tasks at their flat index.
    #[must_use]
    pub fn preserve_position() -> Self {
        Self {
            placement: PlacementPolicy::Preserve,
            ..Default::default()
        }
    }
}
