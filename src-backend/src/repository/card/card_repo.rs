//! Card Repository - Core CRUD Operations
//!
//! Moves live in card_positioning.

use async_trait::async_trait;
use std::sync::Arc;

use board_order::next_order;

use crate::domain::{Card, CardId, ColumnId, DomainError, DomainResult};
use super::super::db::MockDb;
use super::super::traits::Repository;

/// In-memory implementation of Card repository
pub struct CardRepository {
    pub(super) db: Arc<MockDb>,
}

impl CardRepository {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self { db }
    }

    /// Cards of one column, sorted by order
    pub async fn list_by_column(&self, column_id: &ColumnId) -> DomainResult<Vec<Card>> {
        let data = self.db.lock().await;
        if data.column(column_id).is_none() {
            return Err(DomainError::NotFound(format!("Column {} not found", column_id)));
        }
        Ok(data.cards_in(column_id).into_iter().cloned().collect())
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        let mut data = self.db.lock().await;
        if data.column(&entity.column_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "Column {} not found",
                entity.column_id
            )));
        }
        if data.card(&entity.id).is_some() {
            return Err(DomainError::InvalidInput(format!("Card {} already exists", entity.id)));
        }

        let siblings: Vec<Card> = data.cards_in(&entity.column_id).into_iter().cloned().collect();
        let mut card = entity.clone();
        card.order = next_order(&siblings);
        data.cards.push(card.clone());

        log::debug!("Created card {} in {} at order {}", card.id, card.column_id, card.order);
        Ok(card)
    }

    async fn find_by_id(&self, id: CardId) -> DomainResult<Option<Card>> {
        let data = self.db.lock().await;
        Ok(data.card(&id).cloned())
    }

    /// All cards grouped by column order, then by card order
    async fn list(&self) -> DomainResult<Vec<Card>> {
        let data = self.db.lock().await;
        Ok(data
            .list_with_cards()
            .into_iter()
            .flat_map(|column| column.cards)
            .collect())
    }

    async fn update(&self, entity: &Card) -> DomainResult<Card> {
        let mut data = self.db.lock().await;
        let card = data
            .card_mut(&entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", entity.id)))?;

        // column and order are owned by positioning
        card.title = entity.title.clone();
        card.description = entity.description.clone();
        card.due_date = entity.due_date;
        card.touch();
        Ok(card.clone())
    }

    async fn delete(&self, id: CardId) -> DomainResult<()> {
        let mut data = self.db.lock().await;
        let column_id = data
            .card(&id)
            .map(|card| card.column_id.clone())
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", id)))?;

        data.cards.retain(|card| card.id != id);
        data.reindex_cards(&column_id);

        log::debug!("Deleted card {} from {}", id, column_id);
        Ok(())
    }
}
