// tests/support/builders.rs
use chrono::Duration;

use blog_discovery::domain::article::{ArticleId, ArticleSlug, ArticleSummary, TagSet};
use blog_discovery::domain::user::UserId;

use super::mocks::fixed_now;

pub struct SummaryBuilder {
    id: i64,
    author_id: i64,
    tags: Vec<String>,
    views: u64,
    likes: u64,
    age_hours: i64,
}

impl SummaryBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            author_id: 1,
            tags: Vec::new(),
            views: 0,
            likes: 0,
            age_hours: 0,
        }
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Published this many hours before the fixed test clock.
    pub fn age_hours(mut self, hours: i64) -> Self {
        self.age_hours = hours;
        self
    }

    pub fn build(self) -> ArticleSummary {
        ArticleSummary {
            id: ArticleId::new(self.id).unwrap(),
            title: format!("Article {}", self.id),
            slug: ArticleSlug::new(format!("article-{}", self.id)).unwrap(),
            tags: TagSet::from_raw(self.tags),
            author_id: UserId::new(self.author_id).unwrap(),
            published_at: fixed_now() - Duration::hours(self.age_hours),
            view_count: self.views,
            like_count: self.likes,
        }
    }
}
