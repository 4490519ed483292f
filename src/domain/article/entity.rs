// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, TagSet};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Read snapshot of a published article as seen by the recommendation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub slug: ArticleSlug,
    pub tags: TagSet,
    pub author_id: UserId,
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub like_count: u64,
}

/// Article about to be stored under an already-resolved slug.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub slug: ArticleSlug,
    pub author_id: UserId,
    pub tags: TagSet,
    /// `None` keeps the article as an unpublished draft.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// What a user has liked, reduced to the signals the engine scores against.
#[derive(Debug, Clone)]
pub struct UserLikeProfile {
    pub user_id: UserId,
    liked_ids: HashSet<ArticleId>,
    interest_tags: TagSet,
}

impl UserLikeProfile {
    pub fn from_liked(user_id: UserId, liked: &[ArticleSummary]) -> Self {
        let mut interest_tags = TagSet::new();
        for article in liked {
            interest_tags.extend_from(&article.tags);
        }
        Self {
            user_id,
            liked_ids: liked.iter().map(|article| article.id).collect(),
            interest_tags,
        }
    }

    pub fn has_likes(&self) -> bool {
        !self.liked_ids.is_empty()
    }

    pub fn liked_ids(&self) -> &HashSet<ArticleId> {
        &self.liked_ids
    }

    pub fn interest_tags(&self) -> &TagSet {
        &self.interest_tags
    }

    /// Whether the article is something this user wrote or already liked.
    pub fn is_known(&self, article: &ArticleSummary) -> bool {
        article.author_id == self.user_id || self.liked_ids.contains(&article.id)
    }
}
