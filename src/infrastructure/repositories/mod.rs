// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_catalog;

pub use error::map_sqlx;
pub use sqlite_catalog::SqliteArticleCatalog;
