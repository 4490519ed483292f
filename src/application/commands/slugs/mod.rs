// src/application/commands/slugs/mod.rs
mod resolve;
mod service;
mod store;
mod upload;

pub use resolve::{ResolveSlugCommand, ResolveSlugCommandBuilder};
pub use service::SlugCommandService;
pub use store::{INSERT_RETRIES, StoreArticleCommand, StoreArticleCommandBuilder};
pub use upload::SlugFromFilenameCommand;
