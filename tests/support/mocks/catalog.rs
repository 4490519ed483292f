// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use std::collections::HashMap;

use blog_discovery::domain::article::{
    ArticleCatalog, ArticleId, ArticleSummary, LikeCatalog, TagOverlapQuery,
};
use blog_discovery::domain::errors::{DomainError, DomainResult};
use blog_discovery::domain::user::UserId;

/// Catalog over a fixed list of published articles. Candidate queries return
/// articles in insertion order.
#[derive(Default)]
pub struct InMemoryCatalog {
    articles: Vec<ArticleSummary>,
    likes: HashMap<i64, Vec<i64>>,
}

impl InMemoryCatalog {
    pub fn new(articles: Vec<ArticleSummary>) -> Self {
        Self {
            articles,
            likes: HashMap::new(),
        }
    }

    pub fn with_likes(mut self, user_id: i64, article_ids: &[i64]) -> Self {
        self.likes
            .entry(user_id)
            .or_default()
            .extend_from_slice(article_ids);
        self
    }
}

#[async_trait]
impl ArticleCatalog for InMemoryCatalog {
    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_sharing_any_tag(
        &self,
        query: &TagOverlapQuery,
    ) -> DomainResult<Vec<ArticleSummary>> {
        Ok(self
            .articles
            .iter()
            .filter(|a| a.tags.shares_any(&query.tags))
            .filter(|a| !query.exclude_ids.contains(&a.id))
            .filter(|a| query.exclude_author != Some(a.author_id))
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        let mut all = self.articles.clone();
        all.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        let mut all = self.articles.clone();
        all.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        all.truncate(limit as usize);
        Ok(all)
    }
}

#[async_trait]
impl LikeCatalog for InMemoryCatalog {
    async fn liked_by(&self, user_id: UserId) -> DomainResult<Vec<ArticleSummary>> {
        let ids = self.likes.get(&i64::from(user_id)).cloned().unwrap_or_default();
        Ok(self
            .articles
            .iter()
            .filter(|a| ids.contains(&a.id.0))
            .cloned()
            .collect())
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingCatalog;

fn offline<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("catalog offline".into()))
}

#[async_trait]
impl ArticleCatalog for FailingCatalog {
    async fn find_summary(&self, _id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        offline()
    }

    async fn find_sharing_any_tag(
        &self,
        _query: &TagOverlapQuery,
    ) -> DomainResult<Vec<ArticleSummary>> {
        offline()
    }

    async fn list_popular(&self, _limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        offline()
    }

    async fn list_recent(&self, _limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        offline()
    }
}

#[async_trait]
impl LikeCatalog for FailingCatalog {
    async fn liked_by(&self, _user_id: UserId) -> DomainResult<Vec<ArticleSummary>> {
        offline()
    }
}
