//! # bookshelf-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** under `/api/books` (list, get, create,
//!   update, delete) plus a `/health` probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP status codes and JSON bodies
//! - Allow cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `bookshelf-app` (for the port trait and service) and
//! `bookshelf-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
