//! Drag state tracking.
//!
//! [`DragManager`] follows one dragged item at a time and converts raw
//! pointer movement into reorder intents. It never mutates item order
//! itself: each crossed slot is reported as a [`DragMove`], the view
//! forwards it through its `moved` signal, and the host reacts by updating
//! the sort fields of its items.

use slotgrid_core::Point;

use crate::item::ItemKey;
use crate::layout::GridLayout;

/// State of an active drag operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<K> {
    /// No drag is active.
    Idle,
    /// An item is being dragged.
    Dragging {
        /// Key of the dragged item.
        key: K,
        /// Pointer offset into the item, recorded at press time.
        grab_offset: Point,
        /// Latest pointer position.
        pointer: Point,
        /// Slot the pointer most recently resolved to.
        last_slot: usize,
    },
}

/// A reorder intent produced while dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragMove<K> {
    /// The dragged item.
    pub key: K,
    /// Slot the item should move to.
    pub to_slot: usize,
}

/// Tracks the current drag and resolves pointer positions to slots.
#[derive(Debug)]
pub struct DragManager<K> {
    state: DragState<K>,
}

impl<K: ItemKey> DragManager<K> {
    /// Create an idle manager.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Begin dragging the item occupying `slot`.
    ///
    /// The offset between the pointer and the slot origin is kept for the
    /// lifetime of the drag so the item stays glued to the point where it
    /// was picked up. Starting while a drag is active replaces it.
    pub fn start(&mut self, key: K, pointer: Point, layout: &GridLayout, slot: usize) {
        tracing::debug!(target: "slotgrid::drag", "drag started from slot {}", slot);

        self.state = DragState::Dragging {
            key,
            grab_offset: pointer - layout.origin(slot),
            pointer,
            last_slot: slot,
        };
    }

    /// Feed a pointer movement.
    ///
    /// Returns a reorder intent only when the pointer resolves to a slot
    /// different from the last one reported; jitter within one slot is
    /// silent. A no-op while idle.
    pub fn update(
        &mut self,
        pointer: Point,
        layout: &GridLayout,
        visible: usize,
    ) -> Option<DragMove<K>> {
        match &mut self.state {
            DragState::Dragging {
                key,
                pointer: stored,
                last_slot,
                ..
            } => {
                *stored = pointer;

                let candidate = layout.slot_at(pointer, visible);
                if candidate == *last_slot {
                    return None;
                }
                *last_slot = candidate;

                tracing::trace!(target: "slotgrid::drag", "pointer crossed into slot {}", candidate);
                Some(DragMove {
                    key: key.clone(),
                    to_slot: candidate,
                })
            }
            DragState::Idle => None,
        }
    }

    /// End the drag.
    ///
    /// Idempotent: release events may arrive repeatedly or after a
    /// programmatic cancellation.
    pub fn end(&mut self) {
        if self.is_dragging() {
            tracing::debug!(target: "slotgrid::drag", "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// The dragged item's key and current top-left corner.
    pub fn floating_origin(&self) -> Option<(&K, Point)> {
        match &self.state {
            DragState::Dragging {
                key,
                grab_offset,
                pointer,
                ..
            } => Some((key, *pointer - *grab_offset)),
            DragState::Idle => None,
        }
    }

    /// Key of the dragged item, if a drag is active.
    pub fn dragging_key(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { key, .. } => Some(key),
            DragState::Idle => None,
        }
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Current state, for hosts that render drag affordances.
    pub fn state(&self) -> &DragState<K> {
        &self.state
    }
}

impl<K: ItemKey> Default for DragManager<K> {
    fn default() -> Self {
        Self::new()
    }
}
