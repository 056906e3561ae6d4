//! Outside-interaction guard.
//!
//! A single page-level pointer listener feeds every live widget. Each
//! widget's guard decides whether the resolved [`PointerTarget`] belongs to
//! that widget; targets outside it close the dropdown. Membership is
//! decided by widget identity, never by name or naming prefix, so widgets
//! named `select-1` and `select-10` cannot shadow each other.

use horizon_select_core::WidgetId;

use crate::event::PointerTarget;

/// Decides whether a pointer target belongs to one widget.
#[derive(Debug, Clone, Copy)]
pub struct OutsideInteractionGuard {
    id: WidgetId,
}

impl OutsideInteractionGuard {
    /// A guard for the widget with the given ID.
    pub fn new(id: WidgetId) -> Self {
        Self { id }
    }

    /// The guarded widget's ID.
    pub fn widget_id(&self) -> WidgetId {
        self.id
    }

    /// Whether the target is inside the guarded widget's interaction
    /// surface. Labels bound to the widget and wrappers whose first child
    /// is the widget count as inside.
    pub fn is_inside(&self, target: &PointerTarget) -> bool {
        match *target {
            PointerTarget::Widget { id, .. } => id == self.id,
            PointerTarget::Label { target } => target == self.id,
            PointerTarget::Wrapper { first_child } => first_child == self.id,
            PointerTarget::Page => false,
        }
    }
}
