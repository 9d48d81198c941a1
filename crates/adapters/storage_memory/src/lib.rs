//! # bookshelf-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Parse the startup **seed document** (`{ "items": [Book, ...] }`)
//! - Implement the `BookRepository` port defined in `bookshelf-app::ports::storage`
//! - Own identifier assignment: the next id starts above the highest seeded id
//!   and only ever grows
//!
//! Nothing survives a restart: the collection lives for the lifetime of the
//! process.
//!
//! ## Dependency rule
//! Depends on `bookshelf-app` (for the port trait) and `bookshelf-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod book_repo;
pub mod error;
pub mod seed;

pub use book_repo::InMemoryBookRepository;
pub use error::{SeedError, StoreError};
pub use seed::SeedDocument;
