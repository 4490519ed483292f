pub mod entity;
pub mod repository;
pub mod services;
pub mod similarity;
pub mod value_objects;

pub use entity::{ArticleSummary, NewArticle, UserLikeProfile};
pub use repository::{
    ArticleCatalog, ArticleWriter, LikeCatalog, SlugExistence, TagOverlapQuery,
};
pub use similarity::{ScoredArticle, jaccard, rank_by_similarity};
pub use value_objects::{
    ArticleId, ArticleSlug, FALLBACK_SLUG, MAX_SLUG_LENGTH, TagName, TagSet,
};
