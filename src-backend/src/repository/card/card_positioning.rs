//! Card Positioning Operations
//!
//! Moves are planned by `board_order::plan_card_move`, the same planner the
//! client runs against its cache.

use async_trait::async_trait;

use board_order::{apply_sequence, plan_card_move};

use crate::domain::{Card, CardId, ColumnId, DomainError, DomainResult};

/// Trait for card positioning operations
#[async_trait]
pub trait CardPositioningOperations {
    /// Move a card to `new_order` within `target` (clamped to the target's
    /// size without the card). Both affected columns end up dense.
    async fn move_card(&self, id: &CardId, target: &ColumnId, new_order: usize) -> DomainResult<Card>;
}

#[async_trait]
impl CardPositioningOperations for super::card_repo::CardRepository {
    async fn move_card(&self, id: &CardId, target: &ColumnId, new_order: usize) -> DomainResult<Card> {
        let mut data = self.db.lock().await;

        if data.card(id).is_none() {
            return Err(DomainError::NotFound(format!("Card {} not found", id)));
        }
        let plan = plan_card_move(&*data, id, target, new_order)
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", target)))?;

        if let Some(card) = data.card_mut(id) {
            card.column_id = plan.target.clone();
            card.touch();
        }
        apply_sequence(&mut data.cards, &plan.target_sequence);
        if !plan.is_same_scope() {
            apply_sequence(&mut data.cards, &plan.source_sequence);
        }

        log::debug!(
            "Moved card {} from {}[{}] to {}[{}]",
            id,
            plan.source,
            plan.from_index,
            plan.target,
            plan.index
        );

        data.card(id)
            .cloned()
            .ok_or_else(|| DomainError::Internal(format!("Card {} vanished during move", id)))
    }
}
