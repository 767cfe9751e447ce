//! Column Commands
//!
//! Exposes Column CRUD and reordering. Every command sleeps for the
//! simulated latency first, then validates, then touches the store.

use serde::{Deserialize, Serialize};

use crate::domain::{validate_column_title, Column, ColumnId, ColumnWithCards};
use crate::repository::{ColumnPositioningOperations, Repository};
use super::board_api::BoardCommands;
use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateColumnRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateColumnRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveColumnRequest {
    pub new_order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteColumnResult {
    pub success: bool,
    pub deleted_cards_count: usize,
}

/// List all columns with their cards
pub async fn list_columns(state: &BoardCommands) -> ApiResult<Vec<ColumnWithCards>> {
    state.db.simulate_delay().await;
    Ok(state.db.lock().await.list_with_cards())
}

/// Get column by ID
pub async fn get_column(state: &BoardCommands, id: &ColumnId) -> ApiResult<Column> {
    state.db.simulate_delay().await;
    state
        .columns
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", id)))
}

/// Create a column at the end of the board
pub async fn create_column(state: &BoardCommands, request: CreateColumnRequest) -> ApiResult<Column> {
    state.db.simulate_delay().await;
    let title = validate_column_title(&request.title)?;

    let column = Column::new(ColumnId::generate(), title, 0);
    let created = state.columns.create(&column).await?;
    log::info!("Column created: {} ({})", created.id, created.title);
    Ok(created)
}

/// Rename a column
pub async fn update_column(
    state: &BoardCommands,
    id: &ColumnId,
    request: UpdateColumnRequest,
) -> ApiResult<Column> {
    state.db.simulate_delay().await;
    let title = validate_column_title(&request.title)?;

    let existing = state
        .columns
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Column {} not found", id)))?;

    let updated = Column { title, ..existing };
    Ok(state.columns.update(&updated).await?)
}

/// Delete a column and all of its cards
pub async fn delete_column(state: &BoardCommands, id: &ColumnId) -> ApiResult<DeleteColumnResult> {
    state.db.simulate_delay().await;
    let deleted_cards_count = state.columns.delete_cascade(id).await?;
    log::info!("Column deleted: {} ({} cards)", id, deleted_cards_count);
    Ok(DeleteColumnResult {
        success: true,
        deleted_cards_count,
    })
}

/// Move a column to a new position
pub async fn move_column(
    state: &BoardCommands,
    id: &ColumnId,
    request: MoveColumnRequest,
) -> ApiResult<Column> {
    state.db.simulate_delay().await;
    if request.new_order < 0 {
        return Err(ApiError::validation("A valid order is required"));
    }

    let moved = state
        .columns
        .move_column(id, request.new_order as usize)
        .await?;
    log::info!("Column moved: {} -> {}", moved.id, moved.order);
    Ok(moved)
}
