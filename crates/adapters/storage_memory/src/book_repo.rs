//! In-memory implementation of [`BookRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use bookshelf_app::ports::BookRepository;
use bookshelf_domain::book::{Book, NewBook};
use bookshelf_domain::error::BookshelfError;
use bookshelf_domain::id::BookId;

use crate::error::{SeedError, StoreError};
use crate::seed::SeedDocument;

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    /// `None` once every id has been handed out.
    next_id: Option<BookId>,
}

/// Book repository keeping the whole collection in process memory.
///
/// Lookups are linear scans over the insertion-ordered list. The list and the
/// id counter sit behind a single lock so assigning an id and appending the
/// book happen together.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl InMemoryBookRepository {
    /// Parse `document` and build a repository holding its books.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the document is malformed.
    pub fn seed(document: &str) -> Result<Self, SeedError> {
        SeedDocument::from_json(document).map(Self::from_document)
    }

    /// Build a repository from an already parsed seed document.
    #[must_use]
    pub fn from_document(document: SeedDocument) -> Self {
        let next_id = document.next_id();
        let books = document.into_items();
        tracing::info!(count = books.len(), ?next_id, "book collection seeded");
        Self {
            shelf: RwLock::new(Shelf { books, next_id }),
        }
    }

    /// Build a repository with no books.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_document(SeedDocument::default())
    }
}

impl BookRepository for InMemoryBookRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Book>, BookshelfError>> + Send {
        async move {
            let shelf = self.shelf.read().await;
            Ok(shelf.books.clone())
        }
    }

    fn get_by_id(
        &self,
        id: BookId,
    ) -> impl Future<Output = Result<Option<Book>, BookshelfError>> + Send {
        async move {
            let shelf = self.shelf.read().await;
            Ok(shelf.books.iter().find(|book| book.id == id).cloned())
        }
    }

    fn create(&self, book: NewBook) -> impl Future<Output = Result<Book, BookshelfError>> + Send {
        async move {
            let mut shelf = self.shelf.write().await;
            let Some(id) = shelf.next_id else {
                tracing::error!("book id space exhausted");
                return Err(BookshelfError::Storage(Box::new(StoreError::IdSpaceExhausted)));
            };
            let book = book.into_book(id);
            shelf.next_id = id.next();
            shelf.books.push(book.clone());
            tracing::debug!(id = %book.id, "book appended");
            Ok(book)
        }
    }

    fn update(
        &self,
        id: BookId,
        book: NewBook,
    ) -> impl Future<Output = Result<Option<Book>, BookshelfError>> + Send {
        async move {
            let mut shelf = self.shelf.write().await;
            let Some(slot) = shelf.books.iter_mut().find(|existing| existing.id == id) else {
                return Ok(None);
            };
            *slot = book.into_book(id);
            tracing::debug!(%id, "book replaced");
            Ok(Some(slot.clone()))
        }
    }

    fn delete(&self, id: BookId) -> impl Future<Output = Result<usize, BookshelfError>> + Send {
        async move {
            let mut shelf = self.shelf.write().await;
            let before = shelf.books.len();
            shelf.books.retain(|book| book.id != id);
            let removed = before - shelf.books.len();
            tracing::debug!(%id, removed, "book delete applied");
            Ok(removed)
        }
    }
}
