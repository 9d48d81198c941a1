//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bookshelf_app::ports::BookRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a [`CorsLayer`] that
/// accepts requests from any origin.
pub fn build<BR>(state: AppState<BR>) -> Router
where
    BR: BookRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use bookshelf_app::services::book_service::BookService;
    use bookshelf_domain::book::{Book, NewBook};
    use bookshelf_domain::error::BookshelfError;
    use bookshelf_domain::id::BookId;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Knows a single book with id 1 and echoes writes back.
    struct StubBookRepo;

    fn stub_book() -> Book {
        NewBook::builder()
            .title("Don Quixote")
            .author("Cervantes")
            .page_count(863)
            .build()
            .into_book(BookId::new(1))
    }

    impl BookRepository for StubBookRepo {
        async fn get_all(&self) -> Result<Vec<Book>, BookshelfError> {
            Ok(vec![stub_book()])
        }
        async fn get_by_id(&self, id: BookId) -> Result<Option<Book>, BookshelfError> {
            Ok(Some(stub_book()).filter(|book| book.id == id))
        }
        async fn create(&self, book: NewBook) -> Result<Book, BookshelfError> {
            Ok(book.into_book(BookId::new(2)))
        }
        async fn update(&self, id: BookId, book: NewBook) -> Result<Option<Book>, BookshelfError> {
            Ok((id == BookId::new(1)).then(|| book.into_book(id)))
        }
        async fn delete(&self, _id: BookId) -> Result<usize, BookshelfError> {
            Ok(0)
        }
    }

    fn app() -> Router {
        build(AppState::new(BookService::new(StubBookRepo)))
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_books_as_json_array() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["pageCount"], 863);
    }

    #[tokio::test]
    async fn should_return_404_when_book_missing() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_400_when_id_not_numeric() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_201_when_book_created() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/api/books",
                r#"{"id": 77, "title": "1984", "author": "Orwell", "pageCount": 328}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["id"], 2);
        assert_eq!(body["title"], "1984");
    }

    #[tokio::test]
    async fn should_return_400_when_create_body_malformed() {
        let response = app()
            .oneshot(json_request(Method::POST, "/api/books", "{ nope"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_400_when_content_type_missing() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/books")
                    .body(Body::from(r#"{"title": "1984"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_keep_path_id_when_updating() {
        let response = app()
            .oneshot(json_request(
                Method::PUT,
                "/api/books/1",
                r#"{"id": 50, "title": "Don Quixote (New Ed.)", "author": "Cervantes", "pageCount": 900}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "Don Quixote (New Ed.)");
    }

    #[tokio::test]
    async fn should_return_404_when_updating_missing_book() {
        let response = app()
            .oneshot(json_request(
                Method::PUT,
                "/api/books/3",
                r#"{"title": "x", "author": "y"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_204_when_deleting_unknown_book() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/books/12345")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/books")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_answer_cors_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/books/1")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
