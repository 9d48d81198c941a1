//! JSON REST handlers for books.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bookshelf_app::ports::BookRepository;
use bookshelf_domain::book::{Book, NewBook};
use bookshelf_domain::id::BookId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Book>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Book>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Book>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/books`
pub async fn list<BR>(State(state): State<AppState<BR>>) -> Result<ListResponse, ApiError>
where
    BR: BookRepository + Send + Sync + 'static,
{
    let books = state.book_service.list_books().await?;
    Ok(ListResponse::Ok(Json(books)))
}

/// `GET /api/books/:id`
pub async fn get<BR>(
    State(state): State<AppState<BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    BR: BookRepository + Send + Sync + 'static,
{
    let book_id: BookId = id.parse()?;
    let book = state.book_service.get_book(book_id).await?;
    Ok(GetResponse::Ok(Json(book)))
}

/// `POST /api/books` — any `id` in the body is ignored.
pub async fn create<BR>(
    State(state): State<AppState<BR>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    BR: BookRepository + Send + Sync + 'static,
{
    let Json(book) = payload?;
    let created = state.book_service.create_book(book).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/books/:id` — the path id wins over any `id` in the body.
pub async fn update<BR>(
    State(state): State<AppState<BR>>,
    Path(id): Path<String>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    BR: BookRepository + Send + Sync + 'static,
{
    let book_id: BookId = id.parse()?;
    let Json(book) = payload?;
    let updated = state.book_service.update_book(book_id, book).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/books/:id` — succeeds whether or not the book exists.
pub async fn delete<BR>(
    State(state): State<AppState<BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    BR: BookRepository + Send + Sync + 'static,
{
    let book_id: BookId = id.parse()?;
    state.book_service.delete_book(book_id).await?;
    Ok(DeleteResponse::NoContent)
}
