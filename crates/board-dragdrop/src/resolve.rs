//! Drop-target resolution
//!
//! Turns (dragged item, hovered element) into a card move, a column move,
//! or a no-op.

use board_order::move_within;

use crate::{BoardLayout, DragItem, DropDecision, HoverTarget, NoOpReason};

type Decision<L> = DropDecision<<L as BoardLayout>::ColumnId, <L as BoardLayout>::CardId>;

/// Resolve a drop for either kind of dragged item
pub fn resolve_drop<L: BoardLayout>(
    layout: &L,
    item: &DragItem<L::ColumnId, L::CardId>,
    hover: Option<&HoverTarget<L::ColumnId, L::CardId>>,
) -> Decision<L> {
    match item {
        DragItem::Card { id, .. } => resolve_card_drop(layout, id, hover),
        DragItem::Column { id } => resolve_column_drop(layout, id, hover),
    }
}

/// Resolve the target column and insertion index for a dragged card.
///
/// The card's column is read from `layout`, not from where the drag
/// started.
pub fn resolve_card_drop<L: BoardLayout>(
    layout: &L,
    card: &L::CardId,
    hover: Option<&HoverTarget<L::ColumnId, L::CardId>>,
) -> Decision<L> {
    let Some(hover) = hover else {
        return DropDecision::NoOp(NoOpReason::NoTarget);
    };
    let Some(source_column) = layout.column_of(card) else {
        return DropDecision::NoOp(NoOpReason::UnknownSource);
    };
    let source_cards = layout.cards_in(&source_column);
    let Some(current_index) = source_cards.iter().position(|id| id == card) else {
        return DropDecision::NoOp(NoOpReason::UnknownSource);
    };

    let (target_column, index) = match hover {
        HoverTarget::Card(over) if over == card => {
            return DropDecision::NoOp(NoOpReason::SelfTarget);
        }
        HoverTarget::Card(over) => {
            let Some(target_column) = layout.column_of(over) else {
                return DropDecision::NoOp(NoOpReason::UnknownTarget);
            };
            let target_cards = layout.cards_in(&target_column);
            let Some(over_index) = target_cards.iter().position(|id| id == over) else {
                return DropDecision::NoOp(NoOpReason::UnknownTarget);
            };

            if target_column == source_column {
                // removing the card first can shift the hovered index by one
                let mut sequence = source_cards.clone();
                move_within(&mut sequence, current_index, over_index);
                let index = sequence
                    .iter()
                    .position(|id| id == card)
                    .unwrap_or(over_index);
                (target_column, index)
            } else {
                (target_column, over_index)
            }
        }
        HoverTarget::AddZone(column) => {
            if layout.column_order(column).is_none() {
                return DropDecision::NoOp(NoOpReason::UnknownTarget);
            }
            let cards = layout.cards_in(column);
            let self_in_column = cards.iter().any(|id| id == card);
            let index = if self_in_column {
                cards.len() - 1
            } else {
                cards.len()
            };
            (column.clone(), index)
        }
        HoverTarget::ColumnBody(column) => {
            if layout.column_order(column).is_none() {
                return DropDecision::NoOp(NoOpReason::UnknownTarget);
            }
            if !layout.cards_in(column).is_empty() {
                return DropDecision::NoOp(NoOpReason::NonEmptyColumnBody);
            }
            (column.clone(), 0)
        }
    };

    if target_column == source_column && index == current_index {
        return DropDecision::NoOp(NoOpReason::SamePosition);
    }

    DropDecision::MoveCard {
        card: card.clone(),
        target_column,
        index,
    }
}

/// Resolve the new order for a dragged column.
///
/// Every hover target is read at column level: a hovered card or add zone
/// stands for the column that owns it.
pub fn resolve_column_drop<L: BoardLayout>(
    layout: &L,
    column: &L::ColumnId,
    hover: Option<&HoverTarget<L::ColumnId, L::CardId>>,
) -> Decision<L> {
    let Some(hover) = hover else {
        return DropDecision::NoOp(NoOpReason::NoTarget);
    };

    let target = match hover {
        HoverTarget::Card(card) => layout.column_of(card),
        HoverTarget::ColumnBody(target) | HoverTarget::AddZone(target) => Some(target.clone()),
    };
    let Some(target) = target else {
        return DropDecision::NoOp(NoOpReason::UnknownTarget);
    };
    if target == *column {
        return DropDecision::NoOp(NoOpReason::SelfTarget);
    }

    let Some(current_order) = layout.column_order(column) else {
        return DropDecision::NoOp(NoOpReason::UnknownSource);
    };
    let Some(target_order) = layout.column_order(&target) else {
        return DropDecision::NoOp(NoOpReason::UnknownTarget);
    };
    if current_order == target_order {
        return DropDecision::NoOp(NoOpReason::SamePosition);
    }

    DropDecision::MoveColumn {
        column: column.clone(),
        new_order: target_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Layout(Vec<(&'static str, Vec<&'static str>)>);

    impl BoardLayout for Layout {
        type ColumnId = &'static str;
        type CardId = &'static str;

        fn column_of(&self, card: &&'static str) -> Option<&'static str> {
            self.0
                .iter()
                .find(|(_, cards)| cards.contains(card))
                .map(|(column, _)| *column)
        }

        fn cards_in(&self, column: &&'static str) -> Vec<&'static str> {
            self.0
                .iter()
                .find(|(c, _)| c == column)
                .map(|(_, cards)| cards.clone())
                .unwrap_or_default()
        }

        fn column_order(&self, column: &&'static str) -> Option<u32> {
            self.0.iter().position(|(c, _)| c == column).map(|i| i as u32)
        }
    }

    fn board() -> Layout {
        Layout(vec![
            ("todo", vec!["a", "b", "c", "d"]),
            ("doing", vec!["x"]),
            ("done", vec![]),
        ])
    }

    fn move_card(card: &'static str, column: &'static str, index: usize) -> DropDecision<&'static str, &'static str> {
        DropDecision::MoveCard {
            card,
            target_column: column,
            index,
        }
    }

    #[test]
    fn test_drop_on_card_in_same_column() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::Card("c"))),
            move_card("a", "todo", 2)
        );
        assert_eq!(
            resolve_card_drop(&layout, &"d", Some(&HoverTarget::Card("b"))),
            move_card("d", "todo", 1)
        );
    }

    #[test]
    fn test_drop_on_card_in_other_column_inserts_before_it() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"b", Some(&HoverTarget::Card("x"))),
            move_card("b", "doing", 0)
        );
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"b", Some(&HoverTarget::Card("b"))),
            DropDecision::NoOp(NoOpReason::SelfTarget)
        );
    }

    #[test]
    fn test_add_zone_appends() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::AddZone("doing"))),
            move_card("a", "doing", 1)
        );
        // already last in its own column
        assert_eq!(
            resolve_card_drop(&layout, &"d", Some(&HoverTarget::AddZone("todo"))),
            DropDecision::NoOp(NoOpReason::SamePosition)
        );
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::AddZone("todo"))),
            move_card("a", "todo", 3)
        );
    }

    #[test]
    fn test_add_zone_excludes_self_from_count() {
        let layout = Layout(vec![("solo", vec!["only"]), ("other", vec!["y"])]);
        let decision = resolve_card_drop(&layout, &"only", Some(&HoverTarget::AddZone("solo")));

        // index 0, not 1, and that is where the card already is
        assert_eq!(decision, DropDecision::NoOp(NoOpReason::SamePosition));

        let from_other = resolve_card_drop(&layout, &"y", Some(&HoverTarget::AddZone("solo")));
        assert_eq!(from_other, move_card("y", "solo", 1));
    }

    #[test]
    fn test_column_body_only_accepts_empty_columns() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::ColumnBody("done"))),
            move_card("a", "done", 0)
        );
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::ColumnBody("doing"))),
            DropDecision::NoOp(NoOpReason::NonEmptyColumnBody)
        );
    }

    #[test]
    fn test_missing_or_unknown_targets() {
        let layout = board();
        assert_eq!(
            resolve_card_drop(&layout, &"a", None),
            DropDecision::NoOp(NoOpReason::NoTarget)
        );
        assert_eq!(
            resolve_card_drop(&layout, &"a", Some(&HoverTarget::AddZone("gone"))),
            DropDecision::NoOp(NoOpReason::UnknownTarget)
        );
        assert_eq!(
            resolve_card_drop(&layout, &"zz", Some(&HoverTarget::Card("a"))),
            DropDecision::NoOp(NoOpReason::UnknownSource)
        );
    }

    #[test]
    fn test_column_drop_over_column_or_its_card() {
        let layout = board();
        assert_eq!(
            resolve_column_drop(&layout, &"todo", Some(&HoverTarget::ColumnBody("done"))),
            DropDecision::MoveColumn {
                column: "todo",
                new_order: 2
            }
        );
        assert_eq!(
            resolve_column_drop(&layout, &"done", Some(&HoverTarget::Card("x"))),
            DropDecision::MoveColumn {
                column: "done",
                new_order: 1
            }
        );
        assert_eq!(
            resolve_column_drop(&layout, &"done", Some(&HoverTarget::AddZone("todo"))),
            DropDecision::MoveColumn {
                column: "done",
                new_order: 0
            }
        );
    }

    #[test]
    fn test_column_drop_on_self_is_noop() {
        let layout = board();
        assert_eq!(
            resolve_column_drop(&layout, &"todo", Some(&HoverTarget::Card("b"))),
            DropDecision::NoOp(NoOpReason::SelfTarget)
        );
        assert_eq!(
            resolve_column_drop(&layout, &"todo", None),
            DropDecision::NoOp(NoOpReason::NoTarget)
        );
    }
}
