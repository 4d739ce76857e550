//! Drag affordance state.

use crate::features::dnd::logic::DropTarget;

/// List currently showing the `drag-over` class.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DragState {
    /// Hovered list, if a drag is over one.
    pub over: Option<DropTarget>,
}

impl DragState {
    /// Whether `target` should carry the `drag-over` class.
    #[must_use]
    pub fn is_over(&self, target: &DropTarget) -> bool {
        self.over.as_ref() == Some(target)
    }
}

/// `dragover` on a list.
pub fn enter(state: &mut DragState, target: DropTarget) {
    state.over = Some(target);
}

/// `dragleave` on a list; ignored if another list already took over.
pub fn leave(state: &mut DragState, target: &DropTarget) {
    if state.is_over(target) {
        state.over = None;
    }
}

/// `drop` anywhere, whatever the outcome.
pub fn clear(state: &mut DragState) {
    state.over = None;
}
