//! Board API
//!
//! The request/response surface the client talks to. `BoardCommands` is the
//! in-process implementation over the mock DB.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Card, CardId, Column, ColumnId, ColumnWithCards};
use crate::repository::{CardRepository, ColumnRepository, MockDb};
use super::card_cmd::{
    self, CreateCardRequest, DeleteCardResult, MoveCardRequest, UpdateCardRequest,
};
use super::column_cmd::{
    self, CreateColumnRequest, DeleteColumnResult, MoveColumnRequest, UpdateColumnRequest,
};
use super::error::ApiResult;

#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn list_columns(&self) -> ApiResult<Vec<ColumnWithCards>>;
    async fn get_column(&self, id: &ColumnId) -> ApiResult<Column>;
    async fn create_column(&self, request: CreateColumnRequest) -> ApiResult<Column>;
    async fn update_column(&self, id: &ColumnId, request: UpdateColumnRequest) -> ApiResult<Column>;
    async fn delete_column(&self, id: &ColumnId) -> ApiResult<DeleteColumnResult>;
    async fn move_column(&self, id: &ColumnId, request: MoveColumnRequest) -> ApiResult<Column>;

    async fn get_card(&self, id: &CardId) -> ApiResult<Card>;
    async fn create_card(&self, request: CreateCardRequest) -> ApiResult<Card>;
    async fn update_card(&self, id: &CardId, request: UpdateCardRequest) -> ApiResult<Card>;
    async fn delete_card(&self, id: &CardId) -> ApiResult<DeleteCardResult>;
    async fn move_card(&self, id: &CardId, request: MoveCardRequest) -> ApiResult<Card>;
}

/// Application state shared across commands
pub struct BoardCommands {
    pub(super) db: Arc<MockDb>,
    pub(super) columns: ColumnRepository,
    pub(super) cards: CardRepository,
}

impl BoardCommands {
    pub fn new(db: Arc<MockDb>) -> Self {
        Self {
            columns: ColumnRepository::new(db.clone()),
            cards: CardRepository::new(db.clone()),
            db,
        }
    }

    pub fn db(&self) -> &Arc<MockDb> {
        &self.db
    }
}

/// Log a failed command at warn and pass the result through
fn logged<T>(op: &str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        log::warn!("{} failed: {}", op, err);
    }
    result
}

#[async_trait]
impl BoardApi for BoardCommands {
    async fn list_columns(&self) -> ApiResult<Vec<ColumnWithCards>> {
        logged("list_columns", column_cmd::list_columns(self).await)
    }

    async fn get_column(&self, id: &ColumnId) -> ApiResult<Column> {
        logged("get_column", column_cmd::get_column(self, id).await)
    }

    async fn create_column(&self, request: CreateColumnRequest) -> ApiResult<Column> {
        logged("create_column", column_cmd::create_column(self, request).await)
    }

    async fn update_column(&self, id: &ColumnId, request: UpdateColumnRequest) -> ApiResult<Column> {
        logged("update_column", column_cmd::update_column(self, id, request).await)
    }

    async fn delete_column(&self, id: &ColumnId) -> ApiResult<DeleteColumnResult> {
        logged("delete_column", column_cmd::delete_column(self, id).await)
    }

    async fn move_column(&self, id: &ColumnId, request: MoveColumnRequest) -> ApiResult<Column> {
        logged("move_column", column_cmd::move_column(self, id, request).await)
    }

    async fn get_card(&self, id: &CardId) -> ApiResult<Card> {
        logged("get_card", card_cmd::get_card(self, id).await)
    }

    async fn create_card(&self, request: CreateCardRequest) -> ApiResult<Card> {
        logged("create_card", card_cmd::create_card(self, request).await)
    }

    async fn update_card(&self, id: &CardId, request: UpdateCardRequest) -> ApiResult<Card> {
        logged("update_card", card_cmd::update_card(self, id, request).await)
    }

    async fn delete_card(&self, id: &CardId) -> ApiResult<DeleteCardResult> {
        logged("delete_card", card_cmd::delete_card(self, id).await)
    }

    async fn move_card(&self, id: &CardId, request: MoveCardRequest) -> ApiResult<Card> {
        logged("move_card", card_cmd::move_card(self, id, request).await)
    }
}
