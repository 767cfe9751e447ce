//! Commands Layer
//!
//! Request handlers that bridge the client to the repositories.

mod error;
mod board_api;
mod column_cmd;
mod card_cmd;


use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiResult, ErrorKind};
pub use board_api::{BoardApi, BoardCommands};
pub use column_cmd::{
    CreateColumnRequest, DeleteColumnResult, MoveColumnRequest, UpdateColumnRequest,
};
pub use card_cmd::{
    CreateCardRequest, DeleteCardResult, MoveCardRequest, UpdateCardRequest,
};

/// Decode a raw JSON body into a typed request.
///
/// Missing or mistyped fields are validation errors.
pub fn parse_request<T: DeserializeOwned>(body: serde_json::Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|e| ApiError::validation(format!("Invalid request: {}", e)))
}
