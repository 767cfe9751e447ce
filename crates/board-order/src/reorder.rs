//! Reorder Engine
//!
//! Plans card and column moves. A plan describes the final state of every
//! affected scope; callers apply it to their own representation. Unknown
//! ids produce `None`, never an error.

use std::fmt::Debug;

use crate::order::Ordered;

/// Read access to scoped items (cards grouped by column)
pub trait ScopedItems {
    type ScopeId: Clone + PartialEq + Debug;
    type ItemId: Clone + PartialEq + Debug;

    /// Scope currently owning `item`
    fn scope_of(&self, item: &Self::ItemId) -> Option<Self::ScopeId>;

    fn contains_scope(&self, scope: &Self::ScopeId) -> bool;

    /// Items of `scope` sorted by their current order
    fn ordered_items(&self, scope: &Self::ScopeId) -> Vec<Self::ItemId>;
}

/// Planned card move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove<S, I> {
    pub item: I,
    pub source: S,
    pub target: S,
    /// Index of the item in its source scope before the move
    pub from_index: usize,
    /// Clamped index of the item in the target scope after the move
    pub index: usize,
    /// Final sequence of the source scope (same as `target_sequence` for a
    /// same-scope move)
    pub source_sequence: Vec<I>,
    /// Final sequence of the target scope, including the moved item
    pub target_sequence: Vec<I>,
}

impl<S: PartialEq, I> CardMove<S, I> {
    pub fn is_same_scope(&self) -> bool {
        self.source == self.target
    }

    /// Same scope and same index: applying the plan changes nothing
    pub fn is_noop(&self) -> bool {
        self.is_same_scope() && self.from_index == self.index
    }
}

/// Plan moving `item` into `target` at `requested`.
///
/// `requested` is clamped to `[0, n]` where `n` is the size of the target
/// scope without the moving item.
pub fn plan_card_move<B: ScopedItems>(
    board: &B,
    item: &B::ItemId,
    target: &B::ScopeId,
    requested: usize,
) -> Option<CardMove<B::ScopeId, B::ItemId>> {
    let source = board.scope_of(item)?;
    if !board.contains_scope(target) {
        return None;
    }

    let mut source_sequence = board.ordered_items(&source);
    let from_index = source_sequence.iter().position(|id| id == item)?;
    source_sequence.remove(from_index);

    if source == *target {
        let index = requested.min(source_sequence.len());
        source_sequence.insert(index, item.clone());
        return Some(CardMove {
            item: item.clone(),
            source,
            target: target.clone(),
            from_index,
            index,
            target_sequence: source_sequence.clone(),
            source_sequence,
        });
    }

    let mut target_sequence: Vec<B::ItemId> = board
        .ordered_items(target)
        .into_iter()
        .filter(|id| id != item)
        .collect();
    let index = requested.min(target_sequence.len());
    target_sequence.insert(index, item.clone());

    Some(CardMove {
        item: item.clone(),
        source,
        target: target.clone(),
        from_index,
        index,
        source_sequence,
        target_sequence,
    })
}

/// Planned column move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMove<I> {
    pub item: I,
    pub from: u32,
    pub to: u32,
    /// New orders of the columns between `from` and `to`
    pub shifted: Vec<(I, u32)>,
}

impl<I: Clone + PartialEq> ColumnMove<I> {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Write the planned orders into `columns`
    pub fn apply<T: Ordered<Id = I>>(&self, columns: &mut [T]) {
        for column in columns.iter_mut() {
            if *column.id() == self.item {
                column.set_order(self.to);
            } else if let Some((_, order)) = self.shifted.iter().find(|(id, _)| id == column.id()) {
                column.set_order(*order);
            }
        }
    }
}

/// Plan moving column `id` to `requested` (clamped to `[0, len - 1]`).
///
/// Only the columns strictly between the old and new position shift by one:
/// forward moves decrement orders in `(old, new]`, backward moves increment
/// orders in `[new, old)`. On a dense scope this equals a full
/// remove/insert/reindex.
pub fn plan_column_move<T: Ordered>(
    columns: &[T],
    id: &T::Id,
    requested: usize,
) -> Option<ColumnMove<T::Id>> {
    let moving = columns.iter().find(|column| column.id() == id)?;
    let from = moving.order();
    let last = columns.len().saturating_sub(1);
    let to = requested.min(last) as u32;

    let shifted = columns
        .iter()
        .filter(|column| column.id() != id)
        .filter_map(|column| {
            let order = column.order();
            if from < to && order > from && order <= to {
                Some((column.id().clone(), order - 1))
            } else if to < from && order >= to && order < from {
                Some((column.id().clone(), order + 1))
            } else {
                None
            }
        })
        .collect();

    Some(ColumnMove {
        item: id.clone(),
        from,
        to,
        shifted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{is_dense, reindex};

    /// Columns 'A', 'B', ... holding single-char cards
    struct TestBoard {
        scopes: Vec<(char, Vec<char>)>,
    }

    impl TestBoard {
        fn new(scopes: &[(char, &str)]) -> Self {
            Self {
                scopes: scopes
                    .iter()
                    .map(|(scope, items)| (*scope, items.chars().collect()))
                    .collect(),
            }
        }

        fn apply(&mut self, plan: &CardMove<char, char>) {
            for (scope, items) in self.scopes.iter_mut() {
                if *scope == plan.target {
                    *items = plan.target_sequence.clone();
                } else if *scope == plan.source {
                    *items = plan.source_sequence.clone();
                }
            }
        }

        fn items(&self, scope: char) -> String {
            self.ordered_items(&scope).into_iter().collect()
        }
    }

    impl ScopedItems for TestBoard {
        type ScopeId = char;
        type ItemId = char;

        fn scope_of(&self, item: &char) -> Option<char> {
            self.scopes
                .iter()
                .find(|(_, items)| items.contains(item))
                .map(|(scope, _)| *scope)
        }

        fn contains_scope(&self, scope: &char) -> bool {
            self.scopes.iter().any(|(s, _)| s == scope)
        }

        fn ordered_items(&self, scope: &char) -> Vec<char> {
            self.scopes
                .iter()
                .find(|(s, _)| s == scope)
                .map(|(_, items)| items.clone())
                .unwrap_or_default()
        }
    }

    #[derive(Debug, Clone)]
    struct Col {
        id: u8,
        order: u32,
    }

    impl Ordered for Col {
        type Id = u8;

        fn id(&self) -> &u8 {
            &self.id
        }

        fn order(&self) -> u32 {
            self.order
        }

        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn columns(count: u8) -> Vec<Col> {
        (0..count).map(|id| Col { id, order: id as u32 }).collect()
    }

    fn order_of(columns: &[Col], id: u8) -> u32 {
        columns.iter().find(|c| c.id == id).map(|c| c.order).unwrap()
    }

    #[test]
    fn test_same_column_move_uses_list_move_semantics() {
        let board = TestBoard::new(&[('A', "abcd")]);
        let plan = plan_card_move(&board, &'a', &'A', 2).unwrap();

        assert_eq!(plan.index, 2);
        assert_eq!(plan.target_sequence, vec!['b', 'c', 'a', 'd']);
        assert!(plan.is_same_scope());
        assert!(!plan.is_noop());
    }

    #[test]
    fn test_move_to_current_index_is_noop() {
        let mut board = TestBoard::new(&[('A', "abcd")]);
        let plan = plan_card_move(&board, &'c', &'A', 2).unwrap();

        assert!(plan.is_noop());
        board.apply(&plan);
        assert_eq!(board.items('A'), "abcd");
    }

    #[test]
    fn test_cross_column_move_conserves_cards() {
        let mut board = TestBoard::new(&[('A', "abc"), ('B', "xy")]);
        let plan = plan_card_move(&board, &'b', &'B', 1).unwrap();
        board.apply(&plan);

        assert_eq!(board.items('A'), "ac");
        assert_eq!(board.items('B'), "xby");
        assert_eq!(plan.from_index, 1);
        assert_eq!(plan.index, 1);
    }

    #[test]
    fn test_requested_index_is_clamped() {
        let board = TestBoard::new(&[('A', "abc"), ('B', "xy")]);

        let across = plan_card_move(&board, &'a', &'B', 50).unwrap();
        assert_eq!(across.index, 2);
        assert_eq!(across.target_sequence, vec!['x', 'y', 'a']);

        // own slot is excluded from the bound
        let within = plan_card_move(&board, &'a', &'A', 50).unwrap();
        assert_eq!(within.index, 2);
        assert_eq!(within.target_sequence, vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_move_into_empty_column() {
        let mut board = TestBoard::new(&[('A', "a"), ('B', "")]);
        let plan = plan_card_move(&board, &'a', &'B', 3).unwrap();
        board.apply(&plan);

        assert_eq!(plan.index, 0);
        assert_eq!(board.items('A'), "");
        assert_eq!(board.items('B'), "a");
    }

    #[test]
    fn test_unknown_card_or_column_is_absent() {
        let board = TestBoard::new(&[('A', "ab")]);
        assert!(plan_card_move(&board, &'z', &'A', 0).is_none());
        assert!(plan_card_move(&board, &'a', &'Q', 0).is_none());
    }

    #[test]
    fn test_column_move_forward_shifts_between() {
        let mut cols = columns(4);
        let plan = plan_column_move(&cols, &0, 2).unwrap();
        plan.apply(&mut cols);

        assert_eq!(order_of(&cols, 1), 0);
        assert_eq!(order_of(&cols, 2), 1);
        assert_eq!(order_of(&cols, 0), 2);
        assert_eq!(order_of(&cols, 3), 3);
        assert_eq!(plan.shifted.len(), 2);
    }

    #[test]
    fn test_column_move_backward_shifts_between() {
        let mut cols = columns(4);
        let plan = plan_column_move(&cols, &3, 1).unwrap();
        plan.apply(&mut cols);

        assert_eq!(order_of(&cols, 0), 0);
        assert_eq!(order_of(&cols, 3), 1);
        assert_eq!(order_of(&cols, 1), 2);
        assert_eq!(order_of(&cols, 2), 3);
    }

    #[test]
    fn test_column_move_clamps_and_rejects_unknown() {
        let cols = columns(3);
        assert_eq!(plan_column_move(&cols, &0, 99).unwrap().to, 2);
        assert!(plan_column_move(&cols, &7, 0).is_none());
        assert!(plan_column_move(&cols, &1, 1).unwrap().is_noop());
    }

    #[test]
    fn test_localized_shift_equals_full_reindex() {
        for count in 1..=5u8 {
            for moving in 0..count {
                for requested in 0..=count as usize {
                    let mut shifted = columns(count);
                    plan_column_move(&shifted, &moving, requested)
                        .unwrap()
                        .apply(&mut shifted);

                    let mut reference = columns(count);
                    let from = reference.iter().position(|c| c.id == moving).unwrap();
                    let column = reference.remove(from);
                    let to = requested.min(reference.len());
                    reference.insert(to, column);
                    reindex(&mut reference);

                    assert!(is_dense(&shifted));
                    for column in &reference {
                        assert_eq!(order_of(&shifted, column.id), column.order);
                    }
                }
            }
        }
    }

    #[test]
    fn test_move_sequence_keeps_every_card() {
        let mut board = TestBoard::new(&[('A', "abcd"), ('B', "ef"), ('C', "")]);
        let moves = [('a', 'B', 0), ('f', 'C', 4), ('e', 'A', 1), ('d', 'A', 0), ('b', 'C', 0)];

        for (item, target, index) in moves {
            let plan = plan_card_move(&board, &item, &target, index).unwrap();
            board.apply(&plan);

            let total: usize = ['A', 'B', 'C']
                .iter()
                .map(|scope| board.ordered_items(scope).len())
                .sum();
            assert_eq!(total, 6);
        }

        assert_eq!(board.items('A'), "dec");
        assert_eq!(board.items('B'), "a");
        assert_eq!(board.items('C'), "bf");
    }
}
