//! API request payloads for todo operations.
//!
//! Field names follow the wire format (`Description`, `Id`, `Done`). Bodies
//! are meant to be read with [`decode_lenient`], which folds keys to
//! lowercase, so any capitalization matches. Every field is optional and
//! decoded leniently, so a sloppy body degrades to zero values instead of
//! being rejected.
//!
//! [`decode_lenient`]: crate::serde::decode_lenient

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_lenient;

/// Request payload for creating a todo (POST /todo/create).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(
        rename(serialize = "Description", deserialize = "description"),
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub description: String,
}

impl CreateTodoRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Request payload for setting the completion flag (PUT /todo/update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(
        rename(serialize = "Id", deserialize = "id"),
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub id: i64,
    #[serde(
        rename(serialize = "Done", deserialize = "done"),
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub done: bool,
}

impl UpdateTodoRequest {
    pub fn new(id: i64, done: bool) -> Self {
        Self { id, done }
    }
}

/// Request payload for removing a todo (DELETE /todo/delete).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoRequest {
    #[serde(
        rename(serialize = "Id", deserialize = "id"),
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub id: i64,
}

impl DeleteTodoRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
