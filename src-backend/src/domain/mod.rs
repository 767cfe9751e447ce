//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO I/O (serde for serialization, board-order for positions).

mod entity;
mod ids;
mod column;
mod card;
mod board;
mod validation;

pub use entity::{Entity, DomainError, DomainResult};
pub use ids::{CardId, ColumnId};
pub use column::Column;
pub use card::Card;
pub use board::{BoardData, ColumnWithCards};
pub use validation::{
    validate_card_title, validate_column_title, validate_description, CARD_TITLE_MAX,
    COLUMN_TITLE_MAX, DESCRIPTION_MAX,
};
