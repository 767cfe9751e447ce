//! Kanban Board Client
//!
//! Cached board with optimistic mutations and drag-and-drop reordering on
//! top of a `BoardApi`.

pub mod board;
pub mod context;
pub mod dnd;
pub mod optimistic;
pub mod reconciler;
pub mod store;


pub use board::BoardView;
pub use context::BoardContext;
pub use dnd::{BoardDnd, BoardDragItem, BoardHoverTarget, DropOutcome};
pub use reconciler::{
    ClientError, LogNotifier, MutationOutcome, MutationPhase, Notifier, PendingMutation, Reconciler,
};
pub use store::{BoardSnapshot, BoardStore};
