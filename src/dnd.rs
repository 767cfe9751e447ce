//! Board Drag-and-Drop Controller
//!
//! Feeds pointer events into a `DragSession` and turns the resolved drop
//! into a reconciler mutation. Layout questions are answered from the
//! cached board at the moment of each event.

use std::sync::Arc;

use board_dragdrop::{DragItem, DragPhase, DragSession, DropDecision, HoverTarget, NoOpReason};
use kanban_backend::{Card, CardId, Column, ColumnId};
use parking_lot::Mutex;

use crate::board::BoardView;
use crate::reconciler::{MutationOutcome, Reconciler};

pub type BoardDragItem = DragItem<ColumnId, CardId>;
pub type BoardHoverTarget = HoverTarget<ColumnId, CardId>;

/// What a release led to
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Nothing to send
    Skipped(NoOpReason),
    Card(MutationOutcome<Card>),
    Column(MutationOutcome<Column>),
}

impl DropOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, DropOutcome::Skipped(_))
    }
}

pub struct BoardDnd {
    session: Mutex<DragSession<ColumnId, CardId>>,
    reconciler: Arc<Reconciler>,
}

impl BoardDnd {
    pub fn new(reconciler: Arc<Reconciler>) -> Self {
        Self {
            session: Mutex::new(DragSession::new()),
            reconciler,
        }
    }

    pub fn phase(&self) -> DragPhase<ColumnId, CardId> {
        self.session.lock().phase().clone()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.lock().is_dragging()
    }

    /// Column the dragged card is shown in right now
    pub fn current_column(&self) -> Option<ColumnId> {
        self.session.lock().current_column().cloned()
    }

    pub fn press(&self, item: BoardDragItem, x: i32, y: i32) {
        self.session.lock().press(item, x, y);
    }

    /// Returns true when this movement started the drag
    pub fn pointer_moved(&self, x: i32, y: i32) -> bool {
        let started = self.session.lock().pointer_moved(x, y);
        if started {
            tracing::debug!("Drag started");
        }
        started
    }

    /// Start a drag without a press threshold (keyboard)
    pub fn start(&self, item: BoardDragItem) {
        self.session.lock().start(item);
    }

    pub fn hover(&self, target: Option<BoardHoverTarget>) {
        let board = self.reconciler.snapshot();
        self.session.lock().hover(target, &BoardView::new(&board));
    }

    pub fn cancel(&self) {
        self.session.lock().cancel();
        tracing::debug!("Drag cancelled");
    }

    /// Resolve the drop and send the resulting move, if any
    pub async fn release(&self) -> DropOutcome {
        let board = self.reconciler.snapshot();
        let decision = self.session.lock().release(&BoardView::new(&board));

        match decision {
            DropDecision::NoOp(reason) => {
                tracing::debug!(?reason, "Drop skipped");
                DropOutcome::Skipped(reason)
            }
            DropDecision::MoveCard {
                card,
                target_column,
                index,
            } => {
                tracing::debug!(card = %card, column = %target_column, index, "Card dropped");
                DropOutcome::Card(self.reconciler.move_card(&card, &target_column, index).await)
            }
            DropDecision::MoveColumn { column, new_order } => {
                tracing::debug!(column = %column, new_order, "Column dropped");
                DropOutcome::Column(
                    self.reconciler
                        .move_column(&column, new_order as usize)
                        .await,
                )
            }
        }
    }
}
