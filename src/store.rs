//! Board Cache Store
//!
//! The client's copy of the board. The cached value is an immutable
//! snapshot that is only ever replaced whole, so a reader never sees a
//! half-applied change.
//!
//! Reads are tagged with a generation. Starting a mutation bumps the
//! generation, which makes any read already in flight land nowhere.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use kanban_backend::ColumnWithCards;
use parking_lot::RwLock;

/// Immutable board snapshot
pub type BoardSnapshot = Arc<Vec<ColumnWithCards>>;

#[derive(Default)]
pub struct BoardStore {
    board: RwLock<BoardSnapshot>,
    generation: AtomicU64,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.read().clone()
    }

    /// Apply `change` to a copy of the board and swap the copy in
    pub fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut Vec<ColumnWithCards>),
    {
        let mut board = self.board.write();
        let mut next = board.as_ref().clone();
        change(&mut next);
        *board = Arc::new(next);
    }

    /// Put a previous snapshot back
    pub fn restore(&self, snapshot: BoardSnapshot) {
        *self.board.write() = snapshot;
    }

    pub fn read_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate every read started before this call
    pub fn cancel_reads(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Store a fetched board unless a mutation started after `generation`
    /// was read. Returns whether the board was stored.
    pub fn replace_if_current(&self, generation: u64, board: Vec<ColumnWithCards>) -> bool {
        let mut current = self.board.write();
        if self.read_generation() != generation {
            return false;
        }
        *current = Arc::new(board);
        true
    }
}
