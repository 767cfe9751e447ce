//! Repository Layer
//!
//! Data access abstractions and the in-memory implementation.

mod traits;
mod db;
pub mod column;
pub mod card;


pub use traits::Repository;
pub use db::{init_db, MockDb};
pub use column::{ColumnPositioningOperations, ColumnRepository};
pub use card::{CardPositioningOperations, CardRepository};
