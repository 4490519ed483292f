use crate::domain::article::ArticleSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub author_id: i64,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(article: ArticleSummary) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            tags: article.tags.to_strings(),
            slug: article.slug.into_inner(),
            author_id: article.author_id.into(),
            published_at: article.published_at,
            view_count: article.view_count,
            like_count: article.like_count,
        }
    }
}
