//! Board Ordering
//!
//! Dense position maintenance for board scopes (all columns, or the cards of
//! one column) and move planning on top of it.
//!
//! Both the authoritative store and the client cache call into this crate,
//! so an optimistic move and the confirmed move always land on the same
//! orders.

mod order;
mod reorder;

pub use order::{
    apply_sequence, index_of, insert_at, is_dense, move_within, next_order, normalize, reindex,
    remove_and_reindex, Ordered,
};
pub use reorder::{plan_card_move, plan_column_move, CardMove, ColumnMove, ScopedItems};
