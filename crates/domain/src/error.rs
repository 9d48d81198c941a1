//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BookshelfError`] via `From`.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum BookshelfError {
    /// The requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Book"`).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
