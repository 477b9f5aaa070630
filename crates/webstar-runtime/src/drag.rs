#![forbid(unsafe_code)]

//! Drag-reorder state machine.
//!
//! ```text
//!            drag_start(id)                 drag_enter(t), t != id
//!   Idle ─────────────────→ Dragging(id) ─────────────────────→ OverTarget(id, t)
//!    ↑                          │    ↑                              │
//!    │   drop / drag_end        │    └────────── drag_leave ────────┘
//!    └──────────────────────────┴───────────────────────────────────┘
//! ```
//!
//! A drop onto a different tile yields a [`SwapInstruction`]: the two tiles
//! exchange positions and every other tile stays where it was. This is a
//! swap, not a move-and-shift.
//!
//! # Invariants
//!
//! 1. `dragged != target` whenever both are set.
//! 2. Starting a new drag replaces any prior state (implicit cancel).
//! 3. Dropping onto the dragged tile, or ending without a drop, emits nothing.

use webstar_layout::{PlacedTile, Tile, TileId};

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: TileId,
    },
    DraggingOverTarget {
        dragged: TileId,
        target: TileId,
    },
}

impl DragState {
    /// Tile being dragged, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<TileId> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { dragged } | DragState::DraggingOverTarget { dragged, .. } => {
                Some(dragged)
            }
        }
    }

    /// Current drop target, if any.
    #[must_use]
    pub const fn drop_target(&self) -> Option<TileId> {
        match *self {
            DragState::DraggingOverTarget { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// Anything carrying a tile id, so swaps can be applied to any list.
pub trait HasTileId {
    fn tile_id(&self) -> TileId;
}

impl HasTileId for TileId {
    fn tile_id(&self) -> TileId {
        *self
    }
}

impl HasTileId for Tile {
    fn tile_id(&self) -> TileId {
        self.id
    }
}

impl HasTileId for PlacedTile {
    fn tile_id(&self) -> TileId {
        self.id
    }
}

/// Exchange the positions of two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapInstruction {
    pub dragged: TileId,
    pub target: TileId,
}

impl SwapInstruction {
    /// Positions of the two tiles in `items`, if both are present.
    #[must_use]
    pub fn positions<T: HasTileId>(&self, items: &[T]) -> Option<(usize, usize)> {
        let from = items.iter().position(|t| t.tile_id() == self.dragged)?;
        let to = items.iter().position(|t| t.tile_id() == self.target)?;
        Some((from, to))
    }

    /// Swap the two tiles in place. Returns `false` (and leaves `items`
    /// untouched) when either id is missing or both ids are equal.
    pub fn apply<T: HasTileId>(&self, items: &mut [T]) -> bool {
        match self.positions(items) {
            Some((from, to)) if from != to => {
                items.swap(from, to);
                true
            }
            _ => false,
        }
    }
}

/// Drives [`DragState`] from host drag events.
#[derive(Debug, Clone, Default)]
pub struct DragReorder {
    state: DragState,
}

impl DragReorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Begin dragging `id`, cancelling any gesture in progress.
    ///
    /// Callers check edit mode and ownership before calling.
    pub fn drag_start(&mut self, id: TileId) {
        if self.is_dragging() {
            tracing::trace!(previous = ?self.state, "drag restarted; prior gesture cancelled");
        }
        self.state = DragState::Dragging { dragged: id };
    }

    /// Pointer entered a potential drop target.
    pub fn drag_enter(&mut self, target: TileId) {
        if let Some(dragged) = self.state.dragged()
            && dragged != target
        {
            self.state = DragState::DraggingOverTarget { dragged, target };
        }
    }

    /// Pointer left the current drop target.
    pub fn drag_leave(&mut self) {
        if let DragState::DraggingOverTarget { dragged, .. } = self.state {
            self.state = DragState::Dragging { dragged };
        }
    }

    /// Drop onto `target`. Always returns to idle.
    pub fn drop(&mut self, target: TileId) -> Option<SwapInstruction> {
        let dragged = self.state.dragged()?;
        self.state = DragState::Idle;
        (dragged != target).then_some(SwapInstruction { dragged, target })
    }

    /// Gesture ended without a drop.
    pub fn drag_end(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: TileId = TileId(1);
    const B: TileId = TileId(2);
    const C: TileId = TileId(3);
    const D: TileId = TileId(4);

    #[test]
    fn drop_swaps_not_shifts() {
        let mut list = vec![A, B, C, D];
        let mut drag = DragReorder::new();
        drag.drag_start(A);
        drag.drag_enter(C);
        let swap = drag.drop(C).expect("swap emitted");
        assert!(swap.apply(&mut list));
        assert_eq!(list, vec![C, B, A, D]);
        assert_ne!(list, vec![B, C, A, D]);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn drop_onto_self_is_noop() {
        let mut drag = DragReorder::new();
        drag.drag_start(B);
        assert_eq!(drag.drop(B), None);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn drag_end_cancels() {
        let mut drag = DragReorder::new();
        drag.drag_start(A);
        drag.drag_enter(C);
        drag.drag_end();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.drop(C), None);
    }

    #[test]
    fn enter_self_is_ignored() {
        let mut drag = DragReorder::new();
        drag.drag_start(A);
        drag.drag_enter(A);
        assert_eq!(drag.state(), DragState::Dragging { dragged: A });
    }

    #[test]
    fn enter_leave_cycle() {
        let mut drag = DragReorder::new();
        drag.drag_start(A);
        drag.drag_enter(B);
        assert_eq!(drag.state().drop_target(), Some(B));
        drag.drag_enter(C);
        assert_eq!(drag.state().drop_target(), Some(C));
        drag.drag_leave();
        assert_eq!(drag.state(), DragState::Dragging { dragged: A });
        assert_eq!(drag.state().drop_target(), None);
    }

    #[test]
    fn events_while_idle_do_nothing() {
        let mut drag = DragReorder::new();
        drag.drag_enter(A);
        drag.drag_leave();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.drop(A), None);
    }

    #[test]
    fn restart_replaces_prior_gesture() {
        let mut drag = DragReorder::new();
        drag.drag_start(A);
        drag.drag_enter(B);
        drag.drag_start(C);
        assert_eq!(drag.state(), DragState::Dragging { dragged: C });
        assert_eq!(drag.state().dragged(), Some(C));
    }

    #[test]
    fn drop_without_enter_still_swaps() {
        let mut list = vec![A, B, C];
        let mut drag = DragReorder::new();
        drag.drag_start(C);
        let swap = drag.drop(A).unwrap();
        assert!(swap.apply(&mut list));
        assert_eq!(list, vec![C, B, A]);
    }

    #[test]
    fn unknown_ids_leave_list_untouched() {
        let mut list = vec![A, B];
        let swap = SwapInstruction { dragged: A, target: D };
        assert!(!swap.apply(&mut list));
        assert_eq!(list, vec![A, B]);
    }

    #[test]
    fn swap_applies_to_tiles() {
        let mut tiles = vec![Tile::new(1), Tile::new(2), Tile::new(3)];
        let swap = SwapInstruction { dragged: TileId(3), target: TileId(1) };
        assert_eq!(swap.positions(&tiles), Some((2, 0)));
        assert!(swap.apply(&mut tiles));
        let ids: Vec<_> = tiles.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
