//! Port for the platform's drag-and-drop affordance.

use crate::board::domain::DropEffect;

/// Platform drag handle configured when a drag starts.
///
/// In a browser this is the event's data transfer object; headless embedders
/// can record the values instead.
pub trait DragAffordance {
    /// Sets the effect shown while hovering a drop target.
    fn set_drop_effect(&mut self, effect: DropEffect);

    /// Sets the effects the drag source permits.
    fn set_effect_allowed(&mut self, effect: DropEffect);
}
