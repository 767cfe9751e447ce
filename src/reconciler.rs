//! Optimistic Cache Reconciler
//!
//! Every mutation follows the same lifecycle:
//! cancel in-flight reads, snapshot the cache, apply the local edit, call
//! the API, then either write the server entity back (`Confirmed`) or put
//! the snapshot back and tell the user (`RolledBack`). Both ends refresh
//! the whole board afterwards.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kanban_backend::{
    ApiError, ApiResult, BoardApi, Card, CardId, Column, ColumnId, ColumnWithCards,
    CreateCardRequest, CreateColumnRequest, DeleteCardResult, DeleteColumnResult,
    MoveCardRequest, MoveColumnRequest, UpdateCardRequest, UpdateColumnRequest,
};

use crate::optimistic;
use crate::store::{BoardSnapshot, BoardStore};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Read discarded: a mutation started while it was in flight")]
    Cancelled,
}

/// User-facing error channel (a toast in a UI)
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Notifier that only writes to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!(notify = true, "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Pending,
    Confirmed,
    RolledBack,
}

/// A mutation between its local edit and the server's answer
#[derive(Debug)]
pub struct PendingMutation {
    label: &'static str,
    snapshot: BoardSnapshot,
    phase: MutationPhase,
}

impl PendingMutation {
    pub fn begin(label: &'static str, snapshot: BoardSnapshot) -> Self {
        Self {
            label,
            snapshot,
            phase: MutationPhase::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn phase(&self) -> MutationPhase {
        self.phase
    }

    /// Pending -> Confirmed. Returns false from any other phase.
    pub fn confirm(&mut self) -> bool {
        if self.phase != MutationPhase::Pending {
            return false;
        }
        self.phase = MutationPhase::Confirmed;
        true
    }

    /// Pending -> RolledBack, handing back the snapshot to restore
    pub fn roll_back(&mut self) -> Option<BoardSnapshot> {
        if self.phase != MutationPhase::Pending {
            return None;
        }
        self.phase = MutationPhase::RolledBack;
        Some(self.snapshot.clone())
    }
}

/// Terminal state of a mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Confirmed(T),
    RolledBack(ApiError),
}

impl<T> MutationOutcome<T> {
    pub fn phase(&self) -> MutationPhase {
        match self {
            MutationOutcome::Confirmed(_) => MutationPhase::Confirmed,
            MutationOutcome::RolledBack(_) => MutationPhase::RolledBack,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, MutationOutcome::Confirmed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            MutationOutcome::Confirmed(value) => Some(value),
            MutationOutcome::RolledBack(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ClientError> {
        match self {
            MutationOutcome::Confirmed(value) => Ok(value),
            MutationOutcome::RolledBack(err) => Err(ClientError::Api(err)),
        }
    }
}

pub struct Reconciler {
    api: Arc<dyn BoardApi>,
    store: Arc<BoardStore>,
    notifier: Arc<dyn Notifier>,
    next_temp: AtomicU64,
}

impl Reconciler {
    pub fn new(api: Arc<dyn BoardApi>, store: Arc<BoardStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
            next_temp: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    /// Fetch the whole board. A result that lost the race with a newer
    /// mutation is dropped and reported as `Cancelled`.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let generation = self.store.read_generation();
        let board = self.api.list_columns().await?;
        if !self.store.replace_if_current(generation, board) {
            tracing::debug!(generation, "Discarded stale board read");
            return Err(ClientError::Cancelled);
        }
        Ok(())
    }

    fn temp_id(&self) -> String {
        format!("temp_{}", self.next_temp.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn settle_refresh(&self) {
        match self.refresh().await {
            Ok(()) | Err(ClientError::Cancelled) => {}
            Err(err) => tracing::warn!(error = %err, "Refresh after mutation failed"),
        }
    }

    async fn mutate<T, Req, Fut, Local, Confirm>(
        &self,
        label: &'static str,
        local: Local,
        request: Req,
        confirm: Confirm,
    ) -> MutationOutcome<T>
    where
        Local: FnOnce(&mut Vec<ColumnWithCards>),
        Req: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
        Confirm: FnOnce(&mut Vec<ColumnWithCards>, &T),
    {
        self.store.cancel_reads();
        let mut pending = PendingMutation::begin(label, self.store.snapshot());
        self.store.update(local);
        tracing::debug!(mutation = label, "Applied optimistic update");

        let outcome = match request().await {
            Ok(value) => {
                self.store.update(|board| confirm(board, &value));
                pending.confirm();
                tracing::debug!(mutation = label, "Confirmed");
                MutationOutcome::Confirmed(value)
            }
            Err(err) => {
                if let Some(snapshot) = pending.roll_back() {
                    self.store.restore(snapshot);
                }
                tracing::warn!(mutation = label, error = %err, "Rolled back");
                self.notifier
                    .notify_error(&format!("Failed to {}: {}", pending.label(), err.message));
                MutationOutcome::RolledBack(err)
            }
        };

        self.settle_refresh().await;
        outcome
    }

    // ========================
    // Columns
    // ========================

    pub async fn create_column(&self, title: &str) -> MutationOutcome<Column> {
        let temp_id = ColumnId::new(self.temp_id());
        let placeholder = Column::new(temp_id.clone(), title.trim().to_string(), 0);
        let request = CreateColumnRequest {
            title: title.to_string(),
        };

        self.mutate(
            "create column",
            |board| optimistic::add_column(board, placeholder),
            || self.api.create_column(request),
            |board, column: &Column| {
                optimistic::replace_column(board, &temp_id, column.clone());
            },
        )
        .await
    }

    pub async fn update_column(&self, id: &ColumnId, title: &str) -> MutationOutcome<Column> {
        let request = UpdateColumnRequest {
            title: title.to_string(),
        };

        self.mutate(
            "rename column",
            |board| {
                optimistic::rename_column(board, id, title);
            },
            || self.api.update_column(id, request),
            |board, column: &Column| {
                optimistic::put_column(board, column.clone());
            },
        )
        .await
    }

    pub async fn delete_column(&self, id: &ColumnId) -> MutationOutcome<DeleteColumnResult> {
        self.mutate(
            "delete column",
            |board| {
                optimistic::remove_column(board, id);
            },
            || self.api.delete_column(id),
            |_, _| {},
        )
        .await
    }

    pub async fn move_column(&self, id: &ColumnId, new_order: usize) -> MutationOutcome<Column> {
        let request = MoveColumnRequest {
            new_order: new_order as i64,
        };

        self.mutate(
            "move column",
            |board| {
                optimistic::move_column(board, id, new_order);
            },
            || self.api.move_column(id, request),
            |board, column: &Column| {
                optimistic::put_column(board, column.clone());
            },
        )
        .await
    }

    // ========================
    // Cards
    // ========================

    pub async fn create_card(
        &self,
        column_id: &ColumnId,
        title: &str,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> MutationOutcome<Card> {
        let temp_id = CardId::new(self.temp_id());
        let placeholder = Card::new(temp_id.clone(), column_id.clone(), title.trim().to_string(), 0)
            .with_description(description.as_deref().unwrap_or_default().trim())
            .with_due_date(due_date);
        let request = CreateCardRequest {
            column_id: column_id.to_string(),
            title: title.to_string(),
            description,
            due_date,
        };

        self.mutate(
            "create card",
            |board| {
                optimistic::add_card(board, placeholder);
            },
            || self.api.create_card(request),
            |board, card: &Card| {
                optimistic::replace_card(board, &temp_id, card.clone());
            },
        )
        .await
    }

    pub async fn update_card(&self, id: &CardId, changes: UpdateCardRequest) -> MutationOutcome<Card> {
        let local = changes.clone();

        self.mutate(
            "update card",
            |board| {
                optimistic::edit_card(board, id, &local);
            },
            || self.api.update_card(id, changes),
            |board, card: &Card| {
                optimistic::put_card(board, card.clone());
            },
        )
        .await
    }

    pub async fn delete_card(&self, id: &CardId) -> MutationOutcome<DeleteCardResult> {
        self.mutate(
            "delete card",
            |board| {
                optimistic::remove_card(board, id);
            },
            || self.api.delete_card(id),
            |_, _| {},
        )
        .await
    }

    pub async fn move_card(&self, id: &CardId, target: &ColumnId, index: usize) -> MutationOutcome<Card> {
        let request = MoveCardRequest {
            target_column_id: target.to_string(),
            new_order: index as i64,
        };

        self.mutate(
            "move card",
            |board| {
                optimistic::move_card(board, id, target, index);
            },
            || self.api.move_card(id, request),
            |board, card: &Card| {
                optimistic::put_card(board, card.clone());
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_backend::BoardData;

    #[test]
    fn test_pending_mutation_settles_once() {
        let snapshot: BoardSnapshot = Arc::new(BoardData::seed().list_with_cards());
        let mut pending = PendingMutation::begin("move card", snapshot.clone());
        assert_eq!(pending.phase(), MutationPhase::Pending);

        assert!(pending.confirm());
        assert_eq!(pending.phase(), MutationPhase::Confirmed);
        assert!(pending.roll_back().is_none());
        assert!(!pending.confirm());
    }

    #[test]
    fn test_roll_back_returns_snapshot() {
        let snapshot: BoardSnapshot = Arc::new(BoardData::seed().list_with_cards());
        let mut pending = PendingMutation::begin("delete card", snapshot.clone());

        let restored = pending.roll_back().unwrap();
        assert!(Arc::ptr_eq(&restored, &snapshot));
        assert_eq!(pending.phase(), MutationPhase::RolledBack);
    }

    #[test]
    fn test_outcome_phase() {
        let confirmed: MutationOutcome<u32> = MutationOutcome::Confirmed(1);
        assert_eq!(confirmed.phase(), MutationPhase::Confirmed);
        assert_eq!(confirmed.value(), Some(&1));

        let rolled: MutationOutcome<u32> = MutationOutcome::RolledBack(ApiError::internal("boom"));
        assert_eq!(rolled.phase(), MutationPhase::RolledBack);
        assert!(matches!(rolled.into_result(), Err(ClientError::Api(_))));
    }
}
