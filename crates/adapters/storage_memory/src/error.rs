//! Error types for seeding and running the in-memory store.

use std::path::PathBuf;

use bookshelf_domain::id::BookId;

/// Errors raised while loading the seed document. All of them are fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed seed document")]
    Json(#[from] serde_json::Error),

    /// Two seeded books share an identifier.
    #[error("seed document contains id {0} more than once")]
    DuplicateId(BookId),

    /// Identifiers start at 1.
    #[error("seed document contains id 0")]
    ZeroId,

    /// A seeded id leaves no room for the next one to be assigned.
    #[error("seed document contains id {0}, leaving no id to assign")]
    IdSpaceExhausted(BookId),
}

/// Failures of the running store, reported to callers as
/// `BookshelfError::Storage`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Every identifier has been handed out.
    #[error("no book identifiers left to assign")]
    IdSpaceExhausted,
}
