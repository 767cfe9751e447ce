//! Card Repository Module
//!
//! - card_repo: Core CRUD operations
//! - card_positioning: Moves within and across columns

mod card_repo;
mod card_positioning;

pub use card_repo::CardRepository;

pub use card_positioning::CardPositioningOperations;
