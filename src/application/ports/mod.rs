// src/application/ports/mod.rs
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type SlugExistencePort = dyn crate::domain::article::SlugExistence;
pub type ArticleWriterPort = dyn crate::domain::article::ArticleWriter;
pub type ArticleCatalogPort = dyn crate::domain::article::ArticleCatalog;
pub type LikeCatalogPort = dyn crate::domain::article::LikeCatalog;
