//! Column Entity
//!
//! Columns are the top-level scope of the board. Their orders are dense
//! across the whole board.

use board_order::Ordered;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::ids::ColumnId;

/// A board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Position among all columns (0-based)
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(id: ColumnId, title: String, order: u32) -> Self {
        Self {
            id,
            title,
            order,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Column {
    type Id = ColumnId;

    fn entity_id(&self) -> &Self::Id {
        &self.id
    }
}

impl Ordered for Column {
    type Id = ColumnId;

    fn id(&self) -> &ColumnId {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new(ColumnId::from("col_001"), "To Do".to_string(), 0);
        assert_eq!(column.entity_id().as_str(), "col_001");
        assert_eq!(column.order, 0);
    }

    #[test]
    fn test_column_serializes_snake_case() {
        let column = Column::new(ColumnId::from("col_001"), "To Do".to_string(), 2);
        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(value["id"], "col_001");
        assert_eq!(value["order"], 2);
        assert!(value.get("created_at").is_some());
    }
}
