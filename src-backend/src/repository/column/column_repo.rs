//! Column Repository - Core CRUD Operations
//!
//! Positioning lives in column_positioning.

use async_trait::async_trait;
use std::sync::Arc;

use board_order::next_order;

use crate::domain::{Column, ColumnId, DomainError, DomainResult};
use super::super::db::MockDb;
use super::super::traits::Repository;

/// In-memory implementation of Column repository
pub struct ColumnRepository {
    pub(super) db: Arc<MockDb>,
}

impl ColumnRepository {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self { db }
    }

    /// Delete a column together with its cards, then re-densify the
    /// remaining columns. Returns the number of cards removed.
    pub async fn delete_cascade(&self, id: &ColumnId) -> DomainResult<usize> {
        let mut data = self.db.lock().await;
        if data.column(id).is_none() {
            return Err(DomainError::NotFound(format!("Column {} not found", id)));
        }

        let before = data.cards.len();
        data.cards.retain(|card| card.column_id != *id);
        let deleted_cards = before - data.cards.len();

        data.columns.retain(|column| column.id != *id);
        data.reindex_columns();

        log::debug!("Deleted column {} with {} cards", id, deleted_cards);
        Ok(deleted_cards)
    }
}

#[async_trait]
impl Repository<Column> for ColumnRepository {
    async fn create(&self, entity: &Column) -> DomainResult<Column> {
        let mut data = self.db.lock().await;
        if data.column(&entity.id).is_some() {
            return Err(DomainError::InvalidInput(format!(
                "Column {} already exists",
                entity.id
            )));
        }

        let mut column = entity.clone();
        column.order = next_order(&data.columns);
        data.columns.push(column.clone());

        log::debug!("Created column {} at order {}", column.id, column.order);
        Ok(column)
    }

    async fn find_by_id(&self, id: ColumnId) -> DomainResult<Option<Column>> {
        let data = self.db.lock().await;
        Ok(data.column(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Column>> {
        let data = self.db.lock().await;
        Ok(data.sorted_columns().into_iter().cloned().collect())
    }

    async fn update(&self, entity: &Column) -> DomainResult<Column> {
        let mut data = self.db.lock().await;
        let column = data
            .column_mut(&entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", entity.id)))?;

        // order is owned by positioning
        column.title = entity.title.clone();
        Ok(column.clone())
    }

    async fn delete(&self, id: ColumnId) -> DomainResult<()> {
        self.delete_cascade(&id).await.map(|_| ())
    }
}
