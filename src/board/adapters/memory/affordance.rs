//! Recorded drag affordance.

use crate::board::{domain::DropEffect, ports::DragAffordance};

/// Drag affordance that stores the requested effects.
///
/// Mirrors a browser data transfer object: both effects start unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordedDragAffordance {
    drop_effect: Option<DropEffect>,
    effect_allowed: Option<DropEffect>,
}

impl RecordedDragAffordance {
    /// Creates an affordance with no effects set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last drop effect set.
    #[must_use]
    pub const fn drop_effect(&self) -> Option<DropEffect> {
        self.drop_effect
    }

    /// Returns the last allowed effect set.
    #[must_use]
    pub const fn effect_allowed(&self) -> Option<DropEffect> {
        self.effect_allowed
    }
}

impl DragAffordance for RecordedDragAffordance {
    fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = Some(effect);
    }

    fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = Some(effect);
    }
}
