//! Board DragDrop
//!
//! Pointer-driven drag sessions for board columns and cards.
//! Uses a movement threshold to distinguish click from drag, and resolves
//! the hovered element on release into a single move decision.

use std::fmt::Debug;

mod resolve;

pub use resolve::{resolve_card_drop, resolve_column_drop, resolve_drop};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: u32 = 5;

/// What the board looks like at the moment of a hover or drop
pub trait BoardLayout {
    type ColumnId: Clone + PartialEq + Debug;
    type CardId: Clone + PartialEq + Debug;

    /// Column currently holding `card`
    fn column_of(&self, card: &Self::CardId) -> Option<Self::ColumnId>;

    /// Cards of `column` sorted by order (empty for unknown columns)
    fn cards_in(&self, column: &Self::ColumnId) -> Vec<Self::CardId>;

    /// Order of `column`, `None` when it does not exist
    fn column_order(&self, column: &Self::ColumnId) -> Option<u32>;
}

/// The element being dragged
#[derive(Clone, Debug, PartialEq)]
pub enum DragItem<C, K> {
    Card { id: K, column: C },
    Column { id: C },
}

/// The element under the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum HoverTarget<C, K> {
    /// Another card (or the dragged card itself)
    Card(K),
    /// The body of a column, outside any card
    ColumnBody(C),
    /// The "add card" zone at the bottom of a column
    AddZone(C),
}

/// Why a release did not produce a move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOpReason {
    /// Released over nothing
    NoTarget,
    /// Released over the dragged element itself
    SelfTarget,
    /// Released over the body of a column that has cards
    NonEmptyColumnBody,
    /// The resolved position is where the item already is
    SamePosition,
    /// Hovered element is not on the board
    UnknownTarget,
    /// Dragged element is not on the board any more
    UnknownSource,
    /// Released before the drag threshold was crossed
    NotDragging,
}

/// Outcome of a drop
#[derive(Clone, Debug, PartialEq)]
pub enum DropDecision<C, K> {
    MoveCard {
        card: K,
        target_column: C,
        index: usize,
    },
    MoveColumn {
        column: C,
        new_order: u32,
    },
    NoOp(NoOpReason),
}

impl<C, K> DropDecision<C, K> {
    pub fn is_noop(&self) -> bool {
        matches!(self, DropDecision::NoOp(_))
    }
}

/// Drag session phase
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<C, K> {
    Idle,
    /// Pressed but not moved past the threshold yet
    Pending {
        item: DragItem<C, K>,
        start_x: i32,
        start_y: i32,
    },
    Dragging {
        item: DragItem<C, K>,
        hover: Option<HoverTarget<C, K>>,
        /// Column the dragged card is shown in right now (live feedback only)
        current_column: Option<C>,
    },
}

/// Drag state for one board. Release and cancel always return to `Idle`;
/// release resolves the drop synchronously before doing so.
#[derive(Clone, Debug)]
pub struct DragSession<C, K> {
    phase: DragPhase<C, K>,
}

impl<C, K> Default for DragSession<C, K> {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }
}

impl<C, K> DragSession<C, K>
where
    C: Clone + PartialEq + Debug,
    K: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase<C, K> {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Item being dragged, if a drag is in progress
    pub fn dragged(&self) -> Option<&DragItem<C, K>> {
        match &self.phase {
            DragPhase::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn hover_target(&self) -> Option<&HoverTarget<C, K>> {
        match &self.phase {
            DragPhase::Dragging { hover, .. } => hover.as_ref(),
            _ => None,
        }
    }

    pub fn current_column(&self) -> Option<&C> {
        match &self.phase {
            DragPhase::Dragging { current_column, .. } => current_column.as_ref(),
            _ => None,
        }
    }

    /// Record a pending drag at the press position
    pub fn press(&mut self, item: DragItem<C, K>, x: i32, y: i32) {
        if matches!(self.phase, DragPhase::Idle) {
            self.phase = DragPhase::Pending {
                item,
                start_x: x,
                start_y: y,
            };
        }
    }

    /// Start dragging once the pointer moved beyond the threshold.
    ///
    /// Returns true when this call started the drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        let DragPhase::Pending {
            item,
            start_x,
            start_y,
        } = &self.phase
        else {
            return false;
        };

        let dx = x.abs_diff(*start_x);
        let dy = y.abs_diff(*start_y);
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            let item = item.clone();
            self.begin(item);
            return true;
        }
        false
    }

    /// Start dragging immediately (keyboard sensor, or a press already known
    /// to be a drag)
    pub fn start(&mut self, item: DragItem<C, K>) {
        self.begin(item);
    }

    fn begin(&mut self, item: DragItem<C, K>) {
        let current_column = match &item {
            DragItem::Card { column, .. } => Some(column.clone()),
            DragItem::Column { .. } => None,
        };
        self.phase = DragPhase::Dragging {
            item,
            hover: None,
            current_column,
        };
    }

    /// Pointer entered `target` (or left everything when `None`).
    ///
    /// For card drags this re-derives the column the card is shown in; the
    /// persisted order is not touched.
    pub fn hover<L>(&mut self, target: Option<HoverTarget<C, K>>, layout: &L)
    where
        L: BoardLayout<ColumnId = C, CardId = K>,
    {
        let DragPhase::Dragging {
            item,
            hover,
            current_column,
        } = &mut self.phase
        else {
            return;
        };

        if let (DragItem::Card { .. }, Some(target)) = (&*item, &target) {
            let column = match target {
                HoverTarget::Card(card) => layout.column_of(card),
                HoverTarget::ColumnBody(column) | HoverTarget::AddZone(column) => {
                    Some(column.clone())
                }
            };
            if column.is_some() {
                *current_column = column;
            }
        }
        *hover = target;
    }

    /// Release the pointer: resolve the drop and return to `Idle`
    pub fn release<L>(&mut self, layout: &L) -> DropDecision<C, K>
    where
        L: BoardLayout<ColumnId = C, CardId = K>,
    {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        match phase {
            DragPhase::Dragging { item, hover, .. } => resolve_drop(layout, &item, hover.as_ref()),
            DragPhase::Pending { .. } | DragPhase::Idle => DropDecision::NoOp(NoOpReason::NotDragging),
        }
    }

    /// Abort the drag (escape key). No mutation follows.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Columns and their cards, in order
    struct Layout(Vec<(&'static str, Vec<&'static str>)>);

    impl BoardLayout for Layout {
        type ColumnId = &'static str;
        type CardId = &'static str;

        fn column_of(&self, card: &&'static str) -> Option<&'static str> {
            self.0
                .iter()
                .find(|(_, cards)| cards.contains(card))
                .map(|(column, _)| *column)
        }

        fn cards_in(&self, column: &&'static str) -> Vec<&'static str> {
            self.0
                .iter()
                .find(|(c, _)| c == column)
                .map(|(_, cards)| cards.clone())
                .unwrap_or_default()
        }

        fn column_order(&self, column: &&'static str) -> Option<u32> {
            self.0.iter().position(|(c, _)| c == column).map(|i| i as u32)
        }
    }

    fn layout() -> Layout {
        Layout(vec![("todo", vec!["a", "b"]), ("doing", vec!["c"]), ("done", vec![])])
    }

    fn card(id: &'static str, column: &'static str) -> DragItem<&'static str, &'static str> {
        DragItem::Card { id, column }
    }

    #[test]
    fn test_press_without_movement_is_a_click() {
        let mut session = DragSession::new();
        session.press(card("a", "todo"), 10, 10);
        assert!(!session.pointer_moved(13, 14));
        assert!(!session.is_dragging());

        let decision = session.release(&layout());
        assert_eq!(decision, DropDecision::NoOp(NoOpReason::NotDragging));
        assert_eq!(session.phase(), &DragPhase::Idle);
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        let mut session = DragSession::new();
        session.press(card("a", "todo"), 10, 10);
        assert!(session.pointer_moved(10, 16));
        assert!(session.is_dragging());
        assert_eq!(session.current_column(), Some(&"todo"));
    }

    #[test]
    fn test_far_apart_coordinates_start_drag() {
        let mut session = DragSession::new();
        session.press(card("a", "todo"), -1, i32::MIN);
        assert!(session.pointer_moved(i32::MAX, i32::MAX));
        assert!(session.is_dragging());
    }

    #[test]
    fn test_hover_tracks_current_column() {
        let layout = layout();
        let mut session = DragSession::new();
        session.start(card("a", "todo"));

        session.hover(Some(HoverTarget::Card("c")), &layout);
        assert_eq!(session.current_column(), Some(&"doing"));

        session.hover(Some(HoverTarget::AddZone("done")), &layout);
        assert_eq!(session.current_column(), Some(&"done"));

        // leaving every target keeps the last column
        session.hover(None, &layout);
        assert_eq!(session.current_column(), Some(&"done"));
        assert!(session.hover_target().is_none());
    }

    #[test]
    fn test_release_resolves_and_resets() {
        let layout = layout();
        let mut session = DragSession::new();
        session.start(card("a", "todo"));
        session.hover(Some(HoverTarget::Card("c")), &layout);

        let decision = session.release(&layout);
        assert_eq!(
            decision,
            DropDecision::MoveCard {
                card: "a",
                target_column: "doing",
                index: 0
            }
        );
        assert!(session.dragged().is_none());
    }

    #[test]
    fn test_cancel_clears_session() {
        let layout = layout();
        let mut session = DragSession::new();
        session.start(card("a", "todo"));
        session.hover(Some(HoverTarget::AddZone("done")), &layout);
        session.cancel();

        assert_eq!(session.phase(), &DragPhase::Idle);
        assert_eq!(
            session.release(&layout),
            DropDecision::NoOp(NoOpReason::NotDragging)
        );
    }

    #[test]
    fn test_column_drag_has_no_current_column() {
        let layout = layout();
        let mut session = DragSession::new();
        session.start(DragItem::Column { id: "todo" });
        session.hover(Some(HoverTarget::Card("c")), &layout);

        assert!(session.current_column().is_none());
        assert_eq!(session.hover_target(), Some(&HoverTarget::Card("c")));
    }
}
