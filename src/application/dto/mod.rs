pub mod articles;
pub mod recommendations;
pub mod slugs;

pub use articles::ArticleSummaryDto;
pub use recommendations::{RecommendationDto, RecommendationListDto};
pub use slugs::{SlugDto, StoredArticleDto};
