//! Book — the single catalogued item.

use serde::{Deserialize, Serialize};

use crate::id::BookId;

/// A catalogued book.
///
/// The `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub page_count: Option<u32>,
}

/// Caller-supplied book contents, used to create a book or replace one.
///
/// Carries no identifier: the store decides it on create and the request
/// path decides it on update. An `id` present in a request body is dropped
/// during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub page_count: Option<u32>,
}

impl NewBook {
    /// Create a builder for constructing a [`NewBook`].
    #[must_use]
    pub fn builder() -> NewBookBuilder {
        NewBookBuilder::default()
    }

    /// Stamp an identifier onto these contents.
    #[must_use]
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            page_count: self.page_count,
        }
    }
}

impl From<Book> for NewBook {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            page_count: book.page_count,
        }
    }
}

/// Step-by-step builder for [`NewBook`].
#[derive(Debug, Default)]
pub struct NewBookBuilder {
    title: Option<String>,
    author: Option<String>,
    page_count: Option<u32>,
}

impl NewBookBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Consume the builder and return a [`NewBook`].
    #[must_use]
    pub fn build(self) -> NewBook {
        NewBook {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            page_count: self.page_count,
        }
    }
}
