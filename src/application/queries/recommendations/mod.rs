mod feed;
mod service;
mod similar;
mod user;

pub use feed::{HybridRecommendationsQuery, PopularArticlesQuery, RecentArticlesQuery};
pub use service::{RecommendationLimits, RecommendationQueryService};
pub use similar::SimilarArticlesQuery;
pub use user::UserRecommendationsQuery;
