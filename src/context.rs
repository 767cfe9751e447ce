//! Board Context
//!
//! Wires the cache, the reconciler and the drag controller around one
//! `BoardApi`.

use std::sync::Arc;

use kanban_backend::BoardApi;

use crate::dnd::BoardDnd;
use crate::reconciler::{ClientError, Notifier, Reconciler};
use crate::store::{BoardSnapshot, BoardStore};

#[derive(Clone)]
pub struct BoardContext {
    pub store: Arc<BoardStore>,
    pub reconciler: Arc<Reconciler>,
    pub dnd: Arc<BoardDnd>,
}

impl BoardContext {
    pub fn new(api: Arc<dyn BoardApi>, notifier: Arc<dyn Notifier>) -> Self {
        let store = Arc::new(BoardStore::new());
        let reconciler = Arc::new(Reconciler::new(api, store.clone(), notifier));
        let dnd = Arc::new(BoardDnd::new(reconciler.clone()));
        Self {
            store,
            reconciler,
            dnd,
        }
    }

    /// Reload the board from the API
    pub async fn reload(&self) -> Result<(), ClientError> {
        self.reconciler.refresh().await
    }

    pub fn board(&self) -> BoardSnapshot {
        self.store.snapshot()
    }
}
