//! Order Model
//!
//! A scope is dense when its orders are exactly `0..len` with no gaps and no
//! duplicates. Every function here that mutates a scope leaves it dense.

/// An item positioned within a scope
pub trait Ordered {
    type Id: Clone + PartialEq;

    fn id(&self) -> &Self::Id;

    fn order(&self) -> u32;

    fn set_order(&mut self, order: u32);
}

/// Assign orders `0..len` following the current sequence
pub fn reindex<T: Ordered>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as u32);
    }
}

/// Sort by current order, then reindex.
///
/// The sort is stable, so items sharing an order keep their relative
/// sequence (insertion order breaks ties).
pub fn normalize<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
    reindex(items);
}

/// Insert `item` at `index` (clamped to `[0, len]`) and reindex.
///
/// Returns the index the item actually landed at.
pub fn insert_at<T: Ordered>(items: &mut Vec<T>, item: T, index: usize) -> usize {
    let index = index.min(items.len());
    items.insert(index, item);
    reindex(items);
    index
}

/// Remove the item with `id` and reindex the rest.
///
/// An unknown id leaves the scope untouched and returns `None`.
pub fn remove_and_reindex<T: Ordered>(items: &mut Vec<T>, id: &T::Id) -> Option<T> {
    let index = index_of(items, id)?;
    let removed = items.remove(index);
    reindex(items);
    Some(removed)
}

/// Array move: take the element at `from` and reinsert it at `to`.
///
/// `to` is clamped to the last index. Returns the final index of the moved
/// element, or `None` when `from` is out of range.
pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Option<usize> {
    if from >= items.len() {
        return None;
    }
    let to = to.min(items.len() - 1);
    let item = items.remove(from);
    items.insert(to, item);
    Some(to)
}

/// Position of `id` in the sequence
pub fn index_of<T: Ordered>(items: &[T], id: &T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Order for an item appended to the scope (max + 1, or 0 when empty)
pub fn next_order<T: Ordered>(items: &[T]) -> u32 {
    items
        .iter()
        .map(Ordered::order)
        .max()
        .map_or(0, |max| max + 1)
}

/// Whether the orders of `items` are exactly `0..len`
pub fn is_dense<T: Ordered>(items: &[T]) -> bool {
    let mut orders: Vec<u32> = items.iter().map(Ordered::order).collect();
    orders.sort_unstable();
    orders
        .iter()
        .enumerate()
        .all(|(index, order)| *order as usize == index)
}

/// Give every item listed in `sequence` its position in that sequence as
/// order. Items not listed keep their order.
pub fn apply_sequence<T: Ordered>(items: &mut [T], sequence: &[T::Id]) {
    for item in items.iter_mut() {
        if let Some(position) = sequence.iter().position(|id| id == item.id()) {
            item.set_order(position as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Slot {
        id: char,
        order: u32,
    }

    impl Ordered for Slot {
        type Id = char;

        fn id(&self) -> &char {
            &self.id
        }

        fn order(&self) -> u32 {
            self.order
        }

        fn set_order(&mut self, order: u32) {
            self.order = order;
        }
    }

    fn slots(pairs: &[(char, u32)]) -> Vec<Slot> {
        pairs.iter().map(|&(id, order)| Slot { id, order }).collect()
    }

    fn ids(items: &[Slot]) -> String {
        items.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_normalize_closes_gaps_and_keeps_ties_stable() {
        let mut items = slots(&[('c', 7), ('a', 2), ('b', 2), ('d', 0)]);
        normalize(&mut items);

        assert_eq!(ids(&items), "dabc");
        assert!(is_dense(&items));
        assert_eq!(items.iter().map(|s| s.order).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_insert_at_clamps_index() {
        let mut items = slots(&[('a', 0), ('b', 1)]);
        let landed = insert_at(&mut items, Slot { id: 'z', order: 99 }, 10);

        assert_eq!(landed, 2);
        assert_eq!(ids(&items), "abz");
        assert!(is_dense(&items));
    }

    #[test]
    fn test_insert_at_front() {
        let mut items = slots(&[('a', 0), ('b', 1)]);
        insert_at(&mut items, Slot { id: 'z', order: 0 }, 0);

        assert_eq!(ids(&items), "zab");
        assert_eq!(items[2].order, 2);
    }

    #[test]
    fn test_remove_and_reindex() {
        let mut items = slots(&[('a', 0), ('b', 1), ('c', 2)]);
        let removed = remove_and_reindex(&mut items, &'b');

        assert_eq!(removed.map(|s| s.id), Some('b'));
        assert_eq!(ids(&items), "ac");
        assert_eq!(items[1].order, 1);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut items = slots(&[('a', 0), ('b', 1)]);
        assert!(remove_and_reindex(&mut items, &'x').is_none());
        assert_eq!(items, slots(&[('a', 0), ('b', 1)]));
    }

    #[test]
    fn test_move_within_matches_array_move() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert_eq!(move_within(&mut items, 0, 2), Some(2));
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        assert_eq!(move_within(&mut items, 3, 0), Some(0));
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);

        assert_eq!(move_within(&mut items, 9, 0), None);
    }

    #[test]
    fn test_next_order() {
        assert_eq!(next_order::<Slot>(&[]), 0);
        assert_eq!(next_order(&slots(&[('a', 0), ('b', 4)])), 5);
    }

    #[test]
    fn test_is_dense_detects_gaps_and_duplicates() {
        assert!(is_dense::<Slot>(&[]));
        assert!(is_dense(&slots(&[('a', 1), ('b', 0)])));
        assert!(!is_dense(&slots(&[('a', 0), ('b', 2)])));
        assert!(!is_dense(&slots(&[('a', 0), ('b', 0)])));
    }

    #[test]
    fn test_apply_sequence_leaves_unlisted_items() {
        let mut items = slots(&[('a', 0), ('b', 1), ('x', 5)]);
        apply_sequence(&mut items, &['b', 'a']);

        assert_eq!(items[0].order, 1);
        assert_eq!(items[1].order, 0);
        assert_eq!(items[2].order, 5);
    }
}
