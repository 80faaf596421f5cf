//! Error types for store operations.
//!
//! # Design
//! Two variants only, matching the two ways an operation can fail: a create
//! with unusable text, or an update aimed at an id that does not exist. The
//! `Display` messages are the exact strings the API returns in its JSON
//! error bodies, so the server never rewords them.

use thiserror::Error;

/// Errors returned by [`crate::Store`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Create-time validation: text was missing, not a string, or blank
    /// after trimming.
    #[error("Text is required")]
    TextRequired,

    /// Update targeted an id with no matching todo.
    #[error("Todo not found")]
    NotFound,
}
