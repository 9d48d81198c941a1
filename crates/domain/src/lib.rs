//! # bookshelf-domain
//!
//! Pure domain model for the bookshelf catalogue.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`BookId`](id::BookId) and error conventions
//! - Define the **Book** (the single catalogued item) and **`NewBook`**
//!   (the caller-supplied payload a book is created or replaced from)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod book;
