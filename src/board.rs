//! Board View
//!
//! Read access over the cached board, shaped for the reorder planner and
//! the drop resolver.

use board_dragdrop::BoardLayout;
use board_order::ScopedItems;
use kanban_backend::{Card, CardId, ColumnId, ColumnWithCards};

/// Borrowed cached board (columns sorted by order, cards sorted per column)
#[derive(Clone, Copy)]
pub struct BoardView<'a>(pub &'a [ColumnWithCards]);

impl<'a> BoardView<'a> {
    pub fn new(board: &'a [ColumnWithCards]) -> Self {
        Self(board)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&'a ColumnWithCards> {
        self.0.iter().find(|entry| entry.column.id == *id)
    }

    pub fn card(&self, id: &CardId) -> Option<&'a Card> {
        self.0
            .iter()
            .flat_map(|entry| entry.cards.iter())
            .find(|card| card.id == *id)
    }

    /// Card ids of `column` sorted by order
    pub fn card_ids(&self, column: &ColumnId) -> Vec<CardId> {
        let Some(entry) = self.column(column) else {
            return Vec::new();
        };
        let mut cards: Vec<&Card> = entry.cards.iter().collect();
        cards.sort_by_key(|card| card.order);
        cards.into_iter().map(|card| card.id.clone()).collect()
    }

    /// (column, order) of every card, for comparing two boards
    pub fn placements(&self) -> Vec<(CardId, ColumnId, u32)> {
        let mut placements: Vec<(CardId, ColumnId, u32)> = self
            .0
            .iter()
            .flat_map(|entry| entry.cards.iter())
            .map(|card| (card.id.clone(), card.column_id.clone(), card.order))
            .collect();
        placements.sort();
        placements
    }
}

impl ScopedItems for BoardView<'_> {
    type ScopeId = ColumnId;
    type ItemId = CardId;

    fn scope_of(&self, item: &CardId) -> Option<ColumnId> {
        self.0
            .iter()
            .find(|entry| entry.cards.iter().any(|card| card.id == *item))
            .map(|entry| entry.column.id.clone())
    }

    fn contains_scope(&self, scope: &ColumnId) -> bool {
        self.column(scope).is_some()
    }

    fn ordered_items(&self, scope: &ColumnId) -> Vec<CardId> {
        self.card_ids(scope)
    }
}

impl BoardLayout for BoardView<'_> {
    type ColumnId = ColumnId;
    type CardId = CardId;

    fn column_of(&self, card: &CardId) -> Option<ColumnId> {
        self.scope_of(card)
    }

    fn cards_in(&self, column: &ColumnId) -> Vec<CardId> {
        self.card_ids(column)
    }

    fn column_order(&self, column: &ColumnId) -> Option<u32> {
        self.column(column).map(|entry| entry.column.order)
    }
}
