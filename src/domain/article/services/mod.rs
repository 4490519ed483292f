// src/domain/article/services/mod.rs
mod recommendation;
mod slug;

pub use recommendation::{
    DEFAULT_CANDIDATE_FACTOR, Recommendation, RecommendationEngine, RecommendationSource,
};
pub use slug::{ArticleSlugService, DEFAULT_MAX_SLUG_ATTEMPTS, truncate_slug};
