//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod books;

use axum::Router;
use axum::routing::get;

use bookshelf_app::ports::BookRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// | Method | Path          | Handler          |
/// |--------|---------------|------------------|
/// | GET    | `/books`      | [`books::list`]   |
/// | POST   | `/books`      | [`books::create`] |
/// | GET    | `/books/{id}` | [`books::get`]    |
/// | PUT    | `/books/{id}` | [`books::update`] |
/// | DELETE | `/books/{id}` | [`books::delete`] |
pub fn routes<BR>() -> Router<AppState<BR>>
where
    BR: BookRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/books", get(books::list::<BR>).post(books::create::<BR>))
        .route(
            "/books/{id}",
            get(books::get::<BR>)
                .put(books::update::<BR>)
                .delete(books::delete::<BR>),
        )
}
