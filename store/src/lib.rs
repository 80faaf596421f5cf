//! In-memory store for the todo service.
//!
//! # Design
//! The store is the single authoritative collection of todos plus the
//! id-assignment counter. It performs no I/O and holds no locks — the
//! server layer decides how to share it. All operations are synchronous
//! single-step mutations, so a caller that serializes access (e.g. behind
//! an `RwLock`) can never observe a torn state.
//!
//! Validation lives here, not in the transport: `add` rejects missing or
//! blank text, `update` reports unknown ids. The server maps these errors
//! to HTTP statuses without interpreting them further.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::Store;
pub use types::{Todo, TodoPatch};
