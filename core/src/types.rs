//! Domain DTOs for the task document store.
//!
//! # Design
//! The store keeps tasks as a JSON object keyed by generated push keys, so
//! the wire types (`TaskRecord`, `PushResponse`) differ from the list item
//! the caller works with (`TaskItem`). The mock-server crate does not share
//! these types; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// A task as shown in the list: its store key plus its text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
}

/// A task as stored under its key, and the payload of an add request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub text: String,
}

/// The store's reply to a POST: the key it generated for the new record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushResponse {
    pub name: String,
}
