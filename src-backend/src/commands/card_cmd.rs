//! Card Commands
//!
//! Exposes Card CRUD and moves. Checks run in a fixed order and all of them
//! finish before the store is touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    validate_card_title, validate_description, Card, CardId, ColumnId,
};
use crate::repository::{CardPositioningOperations, Repository};
use super::board_api::BoardCommands;
use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Absent fields are left unchanged. `due_date: null` clears the date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCardRequest {
    pub target_column_id: String,
    pub new_order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCardResult {
    pub success: bool,
}

/// Present-but-null becomes `Some(None)`
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

async fn existing_card(state: &BoardCommands, id: &CardId) -> ApiResult<Card> {
    state
        .cards
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Card {} not found", id)))
}

/// Get card by ID
pub async fn get_card(state: &BoardCommands, id: &CardId) -> ApiResult<Card> {
    state.db.simulate_delay().await;
    existing_card(state, id).await
}

/// Create a card at the end of a column
pub async fn create_card(state: &BoardCommands, request: CreateCardRequest) -> ApiResult<Card> {
    state.db.simulate_delay().await;

    if request.column_id.trim().is_empty() {
        return Err(ApiError::validation("Column id is required"));
    }
    let title = validate_card_title(&request.title)?;
    let description = request.description.unwrap_or_default();
    validate_description(&description)?;

    let column_id = ColumnId::new(request.column_id);
    let card = Card::new(CardId::generate(), column_id, title, 0)
        .with_description(description.trim())
        .with_due_date(request.due_date);

    let created = state.cards.create(&card).await?;
    log::info!("Card created: {} in {}", created.id, created.column_id);
    Ok(created)
}

/// Edit title, description, or due date
pub async fn update_card(
    state: &BoardCommands,
    id: &CardId,
    request: UpdateCardRequest,
) -> ApiResult<Card> {
    state.db.simulate_delay().await;
    let mut card = existing_card(state, id).await?;

    let title = request.title.as_deref().map(validate_card_title).transpose()?;
    if let Some(description) = &request.description {
        validate_description(description)?;
    }

    if let Some(title) = title {
        card.title = title;
    }
    if let Some(description) = request.description {
        card.description = description.trim().to_string();
    }
    if let Some(due_date) = request.due_date {
        card.due_date = due_date;
    }

    Ok(state.cards.update(&card).await?)
}

/// Delete a card
pub async fn delete_card(state: &BoardCommands, id: &CardId) -> ApiResult<DeleteCardResult> {
    state.db.simulate_delay().await;
    state.cards.delete(id.clone()).await?;
    log::info!("Card deleted: {}", id);
    Ok(DeleteCardResult { success: true })
}

/// Move a card within its column or into another one
pub async fn move_card(
    state: &BoardCommands,
    id: &CardId,
    request: MoveCardRequest,
) -> ApiResult<Card> {
    state.db.simulate_delay().await;

    existing_card(state, id).await?;
    if request.target_column_id.trim().is_empty() {
        return Err(ApiError::validation("Target column id is required"));
    }
    if request.new_order < 0 {
        return Err(ApiError::validation("A valid order is required"));
    }

    let target = ColumnId::new(request.target_column_id);
    let moved = state
        .cards
        .move_card(id, &target, request.new_order as usize)
        .await?;
    log::info!("Card moved: {} -> {}[{}]", moved.id, moved.column_id, moved.order);
    Ok(moved)
}
