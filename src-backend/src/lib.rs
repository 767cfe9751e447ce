//! Kanban Backend
//!
//! Layered architecture:
//! - domain: Core entities, board aggregate and field rules
//! - repository: In-memory mock DB and its repositories
//! - commands: Request handlers behind the `BoardApi` trait

pub mod config;
pub mod domain;
pub mod repository;
pub mod commands;

pub use commands::{
    parse_request, ApiError, ApiResult, BoardApi, BoardCommands, CreateCardRequest,
    CreateColumnRequest, DeleteCardResult, DeleteColumnResult, ErrorKind, MoveCardRequest,
    MoveColumnRequest, UpdateCardRequest, UpdateColumnRequest,
};
pub use config::{BackendConfig, ConfigError};
pub use domain::{BoardData, Card, CardId, Column, ColumnId, ColumnWithCards, DomainError};

use repository::init_db;

/// Build the command layer over a fresh store
pub fn init_backend(config: &BackendConfig) -> BoardCommands {
    BoardCommands::new(init_db(config))
}
