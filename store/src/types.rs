//! Domain types for the todo store.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Serializes to exactly `{"id": number, "text": string, "done": boolean}`,
/// the wire shape the API exposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// A partial update to an existing todo. `None` fields are left unchanged.
///
/// The server builds this from the request body with explicit type checks,
/// so a wrong-typed field in the JSON simply ends up `None` here.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub done: Option<bool>,
}
