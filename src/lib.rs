//! Unique slug generation and tag-similarity recommendations for blog articles.
//!
//! The domain layer holds the slug and recommendation services together with
//! the collaborator ports they consume; `infrastructure` provides a SQLite
//! implementation of those ports.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
