//! Storage port — repository trait for the book collection.

use std::future::Future;

use bookshelf_domain::book::{Book, NewBook};
use bookshelf_domain::error::BookshelfError;
use bookshelf_domain::id::BookId;

/// Repository holding the ordered collection of [`Book`]s.
///
/// Implementations own identifier assignment: callers never choose the id of
/// a new book, and an update never changes the id of an existing one.
pub trait BookRepository {
    /// Get every book, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Book>, BookshelfError>> + Send;

    /// Get a book by its identifier.
    fn get_by_id(
        &self,
        id: BookId,
    ) -> impl Future<Output = Result<Option<Book>, BookshelfError>> + Send;

    /// Assign the next identifier to `book`, append it, and return the stored book.
    fn create(&self, book: NewBook) -> impl Future<Output = Result<Book, BookshelfError>> + Send;

    /// Replace the book stored under `id`, keeping its position and its id.
    ///
    /// Resolves to `None`, leaving the collection untouched, when no book has `id`.
    fn update(
        &self,
        id: BookId,
        book: NewBook,
    ) -> impl Future<Output = Result<Option<Book>, BookshelfError>> + Send;

    /// Remove every book with `id` and return how many were removed.
    fn delete(&self, id: BookId) -> impl Future<Output = Result<usize, BookshelfError>> + Send;
}
