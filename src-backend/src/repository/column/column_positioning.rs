//! Column Positioning Operations

use async_trait::async_trait;

use board_order::plan_column_move;

use crate::domain::{Column, ColumnId, DomainError, DomainResult};

/// Trait for column positioning operations
#[async_trait]
pub trait ColumnPositioningOperations {
    /// Move a column to `new_order` (clamped to the last position).
    ///
    /// Only columns between the old and new position shift by one.
    async fn move_column(&self, id: &ColumnId, new_order: usize) -> DomainResult<Column>;
}

#[async_trait]
impl ColumnPositioningOperations for super::column_repo::ColumnRepository {
    async fn move_column(&self, id: &ColumnId, new_order: usize) -> DomainResult<Column> {
        let mut data = self.db.lock().await;

        let plan = plan_column_move(&data.columns, id, new_order)
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", id)))?;

        if !plan.is_noop() {
            plan.apply(&mut data.columns);
            log::debug!(
                "Moved column {} from {} to {} ({} shifted)",
                id,
                plan.from,
                plan.to,
                plan.shifted.len()
            );
        }

        data.column(id)
            .cloned()
            .ok_or_else(|| DomainError::Internal(format!("Column {} vanished during move", id)))
    }
}
