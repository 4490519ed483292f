use crate::domain::article::ArticleSlug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugDto {
    pub slug: String,
}

impl From<ArticleSlug> for SlugDto {
    fn from(slug: ArticleSlug) -> Self {
        Self {
            slug: slug.into_inner(),
        }
    }
}

/// Identity of a freshly stored article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredArticleDto {
    pub id: i64,
    pub slug: String,
}
