//! Optimistic Cache Edits
//!
//! Local equivalents of the backend mutations, applied to the cached board
//! before the request is sent. Reordering goes through `board_order`, the
//! same planner the backend runs, so a confirmed move changes nothing.

use board_order::{
    apply_sequence, next_order, plan_card_move, plan_column_move, remove_and_reindex, CardMove,
    ColumnMove,
};
use kanban_backend::{Card, CardId, Column, ColumnId, ColumnWithCards, UpdateCardRequest};

use crate::board::BoardView;

fn column_entry<'a>(board: &'a mut [ColumnWithCards], id: &ColumnId) -> Option<&'a mut ColumnWithCards> {
    board.iter_mut().find(|entry| entry.column.id == *id)
}

fn card_entry<'a>(board: &'a mut [ColumnWithCards], id: &CardId) -> Option<&'a mut Card> {
    board
        .iter_mut()
        .flat_map(|entry| entry.cards.iter_mut())
        .find(|card| card.id == *id)
}

/// Set orders from `sequence` and keep the vec sorted
fn arrange(cards: &mut [Card], sequence: &[CardId]) {
    apply_sequence(cards, sequence);
    cards.sort_by_key(|card| card.order);
}

// ========================
// Columns
// ========================

/// Append `column` at the end of the board
pub fn add_column(board: &mut Vec<ColumnWithCards>, mut column: Column) {
    column.order = next_order(&board[..]);
    board.push(ColumnWithCards {
        column,
        cards: Vec::new(),
    });
}

/// Overwrite the fields of a cached column, keeping its cards
pub fn put_column(board: &mut Vec<ColumnWithCards>, column: Column) -> bool {
    let Some(entry) = column_entry(board, &column.id) else {
        return false;
    };
    entry.column = column;
    board.sort_by_key(|entry| entry.column.order);
    true
}

/// Swap a temporary column id for the server entity
pub fn replace_column(board: &mut Vec<ColumnWithCards>, temp_id: &ColumnId, column: Column) -> bool {
    let Some(entry) = column_entry(board, temp_id) else {
        return false;
    };
    for card in entry.cards.iter_mut() {
        card.column_id = column.id.clone();
    }
    entry.column = column;
    board.sort_by_key(|entry| entry.column.order);
    true
}

pub fn rename_column(board: &mut Vec<ColumnWithCards>, id: &ColumnId, title: &str) -> bool {
    match column_entry(board, id) {
        Some(entry) => {
            entry.column.title = title.trim().to_string();
            true
        }
        None => false,
    }
}

/// Drop a column and its cards, re-densifying the rest
pub fn remove_column(board: &mut Vec<ColumnWithCards>, id: &ColumnId) -> Option<ColumnWithCards> {
    remove_and_reindex(board, id)
}

/// Move a column using the localized shift
pub fn move_column(
    board: &mut Vec<ColumnWithCards>,
    id: &ColumnId,
    new_order: usize,
) -> Option<ColumnMove<ColumnId>> {
    let plan = plan_column_move(&board[..], id, new_order)?;
    plan.apply(&mut board[..]);
    board.sort_by_key(|entry| entry.column.order);
    Some(plan)
}

// ========================
// Cards
// ========================

/// Append `card` to the end of its column
pub fn add_card(board: &mut Vec<ColumnWithCards>, mut card: Card) -> bool {
    let Some(entry) = column_entry(board, &card.column_id) else {
        return false;
    };
    card.order = next_order(&entry.cards);
    entry.cards.push(card);
    true
}

/// Overwrite a cached card in place (same column, same slot)
pub fn put_card(board: &mut Vec<ColumnWithCards>, card: Card) -> bool {
    match card_entry(board, &card.id) {
        Some(slot) => {
            *slot = card;
            true
        }
        None => false,
    }
}

/// Swap a temporary card id for the server entity
pub fn replace_card(board: &mut Vec<ColumnWithCards>, temp_id: &CardId, card: Card) -> bool {
    match card_entry(board, temp_id) {
        Some(slot) => {
            *slot = card;
            true
        }
        None => false,
    }
}

/// Apply the present fields of an edit
pub fn edit_card(board: &mut Vec<ColumnWithCards>, id: &CardId, changes: &UpdateCardRequest) -> bool {
    let Some(card) = card_entry(board, id) else {
        return false;
    };
    if let Some(title) = &changes.title {
        card.title = title.trim().to_string();
    }
    if let Some(description) = &changes.description {
        card.description = description.trim().to_string();
    }
    if let Some(due_date) = changes.due_date {
        card.due_date = due_date;
    }
    true
}

/// Drop a card, re-densifying its column
pub fn remove_card(board: &mut Vec<ColumnWithCards>, id: &CardId) -> Option<Card> {
    board
        .iter_mut()
        .find_map(|entry| remove_and_reindex(&mut entry.cards, id))
}

/// Move a card the way the backend will
pub fn move_card(
    board: &mut Vec<ColumnWithCards>,
    id: &CardId,
    target: &ColumnId,
    index: usize,
) -> Option<CardMove<ColumnId, CardId>> {
    let plan = plan_card_move(&BoardView::new(&board[..]), id, target, index)?;

    let mut moving = None;
    for entry in board.iter_mut() {
        if let Some(position) = entry.cards.iter().position(|card| card.id == *id) {
            moving = Some(entry.cards.remove(position));
            break;
        }
    }
    let mut card = moving?;
    card.column_id = plan.target.clone();

    for entry in board.iter_mut() {
        if entry.column.id == plan.target {
            entry.cards.push(card.clone());
            arrange(&mut entry.cards, &plan.target_sequence);
        } else if entry.column.id == plan.source {
            arrange(&mut entry.cards, &plan.source_sequence);
        }
    }
    Some(plan)
}
