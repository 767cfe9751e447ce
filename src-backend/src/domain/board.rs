//! Board Aggregate
//!
//! All columns and cards of the single board, stored flat. Scopes (the
//! column list, the cards of one column) are derived by filtering and
//! sorting by order.

use board_order::{apply_sequence, is_dense, normalize, Ordered, ScopedItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::column::Column;
use super::ids::{CardId, ColumnId};

/// Read model: a column with its cards sorted by order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnWithCards {
    #[serde(flatten)]
    pub column: Column,
    pub cards: Vec<Card>,
}

impl Ordered for ColumnWithCards {
    type Id = ColumnId;

    fn id(&self) -> &ColumnId {
        &self.column.id
    }

    fn order(&self) -> u32 {
        self.column.order
    }

    fn set_order(&mut self, order: u32) {
        self.column.order = order;
    }
}

/// Board state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardData {
    pub columns: Vec<Column>,
    pub cards: Vec<Card>,
}

impl BoardData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three columns and four cards
    pub fn seed() -> Self {
        let column = |id: &str, title: &str, order: u32| Column {
            id: ColumnId::from(id),
            title: title.to_string(),
            order,
            created_at: seed_time(10, 9),
        };
        let card = |id: &str, column: &str, title: &str, order: u32, hour: u32| {
            let created = seed_time(10, hour);
            Card {
                id: CardId::from(id),
                column_id: ColumnId::from(column),
                title: title.to_string(),
                description: String::new(),
                due_date: None,
                order,
                created_at: created,
                updated_at: created,
            }
        };

        Self {
            columns: vec![
                column("col_001", "To Do", 0),
                column("col_002", "In Progress", 1),
                column("col_003", "Done", 2),
            ],
            cards: vec![
                card("card_001", "col_001", "Analyze project requirements", 0, 9)
                    .with_description("Write the requirements document from the client meeting notes")
                    .with_due_date(Some(seed_time(15, 0))),
                card("card_002", "col_001", "Review the tech stack", 1, 10),
                card("card_003", "col_002", "Draft wireframes", 0, 11)
                    .with_description("Wireframe the main screens")
                    .with_due_date(Some(seed_time(12, 0))),
                card("card_004", "col_003", "Set up the dev environment", 0, 12)
                    .with_description("Project scaffolding is done"),
            ],
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == *id)
    }

    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == *id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == *id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == *id)
    }

    /// Columns sorted by order
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.order);
        columns
    }

    /// Cards of `column` sorted by order
    pub fn cards_in(&self, column: &ColumnId) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| card.column_id == *column)
            .collect();
        cards.sort_by_key(|card| card.order);
        cards
    }

    pub fn card_sequence(&self, column: &ColumnId) -> Vec<CardId> {
        self.cards_in(column)
            .into_iter()
            .map(|card| card.id.clone())
            .collect()
    }

    /// Re-densify the column scope
    pub fn reindex_columns(&mut self) {
        normalize(&mut self.columns);
    }

    /// Re-densify the cards of `column`
    pub fn reindex_cards(&mut self, column: &ColumnId) {
        let sequence = self.card_sequence(column);
        apply_sequence(&mut self.cards, &sequence);
    }

    /// Columns in order, each with its sorted cards
    pub fn list_with_cards(&self) -> Vec<ColumnWithCards> {
        self.sorted_columns()
            .into_iter()
            .map(|column| ColumnWithCards {
                column: column.clone(),
                cards: self.cards_in(&column.id).into_iter().cloned().collect(),
            })
            .collect()
    }

    /// Every scope holds exactly `0..len`
    pub fn is_consistent(&self) -> bool {
        is_dense(&self.columns)
            && self.columns.iter().all(|column| {
                let cards: Vec<Card> = self.cards_in(&column.id).into_iter().cloned().collect();
                is_dense(&cards)
            })
    }
}

impl ScopedItems for BoardData {
    type ScopeId = ColumnId;
    type ItemId = CardId;

    fn scope_of(&self, item: &CardId) -> Option<ColumnId> {
        self.card(item).map(|card| card.column_id.clone())
    }

    fn contains_scope(&self, scope: &ColumnId) -> bool {
        self.column(scope).is_some()
    }

    fn ordered_items(&self, scope: &ColumnId) -> Vec<CardId> {
        self.card_sequence(scope)
    }
}

fn seed_time(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
