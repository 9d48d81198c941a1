//! Book service — use-cases for managing the catalogue.

use bookshelf_domain::book::{Book, NewBook};
use bookshelf_domain::error::{BookshelfError, NotFoundError};
use bookshelf_domain::id::BookId;

use crate::ports::BookRepository;

/// Application service for book CRUD operations.
pub struct BookService<R> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        self.repo.get_all().await
    }

    /// Look up a book by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] when no book with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, id: BookId) -> Result<Book, BookshelfError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Add a new book; the repository assigns its id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, book), fields(title = %book.title))]
    pub async fn create_book(&self, book: NewBook) -> Result<Book, BookshelfError> {
        let created = self.repo.create(book).await?;
        tracing::debug!(id = %created.id, "book created");
        Ok(created)
    }

    /// Replace the contents of an existing book, keeping `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::NotFound`] when no book with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, book), fields(title = %book.title))]
    pub async fn update_book(&self, id: BookId, book: NewBook) -> Result<Book, BookshelfError> {
        self.repo
            .update(id, book)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a book by id. Deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_book(&self, id: BookId) -> Result<(), BookshelfError> {
        let removed = self.repo.delete(id).await?;
        if removed == 0 {
            tracing::debug!("no book to delete");
        }
        Ok(())
    }
}

fn not_found(id: BookId) -> BookshelfError {
    NotFoundError {
        entity: "Book",
        id: id.to_string(),
    }
    .into()
}
