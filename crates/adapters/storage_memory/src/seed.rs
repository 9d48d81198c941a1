//! Seed document parsing.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use bookshelf_domain::book::Book;
use bookshelf_domain::id::BookId;

use crate::error::SeedError;

/// The startup document establishing the initial collection.
///
/// ```json
/// { "items": [ { "id": 1, "title": "...", "author": "...", "pageCount": 100 } ] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SeedDocument {
    items: Vec<Book>,
}

impl SeedDocument {
    /// Parse and check a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Json`] when the text is not a seed document, and
    /// [`SeedError::DuplicateId`], [`SeedError::ZeroId`] or
    /// [`SeedError::IdSpaceExhausted`] when the items break identifier
    /// invariants.
    pub fn from_json(document: &str) -> Result<Self, SeedError> {
        let parsed: Self = serde_json::from_str(document)?;
        parsed.check_ids()?;
        Ok(parsed)
    }

    /// Read a seed document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] when the file cannot be read, or any error
    /// from [`SeedDocument::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The seeded books, in document order.
    #[must_use]
    pub fn items(&self) -> &[Book] {
        &self.items
    }

    /// The identifier the first created book receives: one past the highest
    /// seeded id, or 1 for an empty document. `None` when the highest seeded
    /// id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<BookId> {
        match self.items.iter().map(|book| book.id).max() {
            Some(max) => max.next(),
            None => Some(BookId::FIRST),
        }
    }

    pub(crate) fn into_items(self) -> Vec<Book> {
        self.items
    }

    fn check_ids(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for book in &self.items {
            if book.id.get() == 0 {
                return Err(SeedError::ZeroId);
            }
            if !seen.insert(book.id) {
                return Err(SeedError::DuplicateId(book.id));
            }
            if book.id.next().is_none() {
                return Err(SeedError::IdSpaceExhausted(book.id));
            }
        }
        Ok(())
    }
}
