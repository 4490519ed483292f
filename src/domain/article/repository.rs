use crate::domain::article::entity::{ArticleSummary, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, TagSet};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

/// Parameters for fetching published articles that share at least one tag.
#[derive(Debug, Clone, Default)]
pub struct TagOverlapQuery {
    pub tags: TagSet,
    pub exclude_ids: HashSet<ArticleId>,
    pub exclude_author: Option<UserId>,
    pub limit: u32,
}

impl TagOverlapQuery {
    pub fn new(tags: TagSet, limit: u32) -> Self {
        Self {
            tags,
            limit,
            ..Self::default()
        }
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = ArticleId>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }

    pub fn excluding_author(mut self, author: UserId) -> Self {
        self.exclude_author = Some(author);
        self
    }
}

#[async_trait]
pub trait SlugExistence: Send + Sync {
    /// Whether `slug` is taken. A slug owned by `ignore` counts as free.
    async fn exists(&self, slug: &ArticleSlug, ignore: Option<ArticleId>) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleWriter: Send + Sync {
    /// Stores the article. A slug already held by another article must be
    /// rejected with `DomainError::Conflict`.
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
}

#[async_trait]
pub trait ArticleCatalog: Send + Sync {
    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>>;
    async fn find_sharing_any_tag(&self, query: &TagOverlapQuery)
    -> DomainResult<Vec<ArticleSummary>>;
    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>>;
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>>;
}

#[async_trait]
pub trait LikeCatalog: Send + Sync {
    async fn liked_by(&self, user_id: UserId) -> DomainResult<Vec<ArticleSummary>>;
}
