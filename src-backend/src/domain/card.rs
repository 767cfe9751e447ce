//! Card Entity
//!
//! Cards belong to exactly one column. Orders are dense per column.

use board_order::Ordered;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::{CardId, ColumnId};

/// A task card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub column_id: ColumnId,
    pub title: String,
    /// May be empty
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    /// Position within the owning column (0-based)
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(id: CardId, column_id: ColumnId, title: String, order: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            column_id,
            title,
            description: String::new(),
            due_date: None,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for Card {
    type Id = CardId;

    fn entity_id(&self) -> &Self::Id {
        &self.id
    }
}

impl Ordered for Card {
    type Id = CardId;

    fn id(&self) -> &CardId {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}
