//! Column Repository Module
//!
//! - column_repo: Core CRUD operations (delete cascades to cards)
//! - column_positioning: Position management operations

mod column_repo;
mod column_positioning;

pub use column_repo::ColumnRepository;

// Re-export the operation trait so it can be used by importing ColumnRepository
pub use column_positioning::ColumnPositioningOperations;
