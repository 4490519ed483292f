// src/domain/article/services/recommendation.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::article::entity::{ArticleSummary, UserLikeProfile};
use crate::domain::article::repository::{ArticleCatalog, LikeCatalog, TagOverlapQuery};
use crate::domain::article::similarity::{ScoredArticle, rank_by_similarity};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

/// How many candidates are fetched per requested result before ranking.
pub const DEFAULT_CANDIDATE_FACTOR: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    SimilarArticle,
    UserInterests,
    Popular,
    Recent,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::SimilarArticle => "similar",
            RecommendationSource::UserInterests => "interests",
            RecommendationSource::Popular => "popular",
            RecommendationSource::Recent => "recent",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub article: ArticleSummary,
    /// Tag similarity, present only for tag-scored results.
    pub score: Option<f64>,
    pub source: RecommendationSource,
}

impl Recommendation {
    fn scored(scored: ScoredArticle, source: RecommendationSource) -> Self {
        Self {
            article: scored.article,
            score: Some(scored.score),
            source,
        }
    }

    fn unscored(article: ArticleSummary, source: RecommendationSource) -> Self {
        Self {
            article,
            score: None,
            source,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.article.id
    }
}

/// Ranks published articles by tag overlap, falling back to popularity and
/// recency when there is no signal to score against.
pub struct RecommendationEngine {
    catalog: Arc<dyn ArticleCatalog>,
    likes: Arc<dyn LikeCatalog>,
    candidate_factor: u32,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<dyn ArticleCatalog>, likes: Arc<dyn LikeCatalog>) -> Self {
        Self {
            catalog,
            likes,
            candidate_factor: DEFAULT_CANDIDATE_FACTOR,
        }
    }

    pub fn with_candidate_factor(mut self, factor: u32) -> Self {
        self.candidate_factor = factor.max(1);
        self
    }

    pub async fn similar_to(
        &self,
        seed_id: ArticleId,
        limit: u32,
    ) -> DomainResult<Vec<Recommendation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let seed = match self.catalog.find_summary(seed_id).await? {
            Some(seed) if !seed.tags.is_empty() => seed,
            _ => return self.popular_excluding(seed_id, limit).await,
        };

        let query =
            TagOverlapQuery::new(seed.tags.clone(), self.pool_size(limit)).excluding([seed_id]);
        let candidates = self
            .catalog
            .find_sharing_any_tag(&query)
            .await?
            .into_iter()
            .filter(|article| article.id != seed_id && article.tags.shares_any(&seed.tags))
            .collect();

        Ok(rank_by_similarity(&seed.tags, candidates, limit as usize)
            .into_iter()
            .map(|scored| Recommendation::scored(scored, RecommendationSource::SimilarArticle))
            .collect())
    }

    pub async fn for_user(&self, user_id: UserId, limit: u32) -> DomainResult<Vec<Recommendation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let liked = self.likes.liked_by(user_id).await?;
        let profile = UserLikeProfile::from_liked(user_id, &liked);
        if !profile.has_likes() {
            return self.popular(limit).await;
        }

        let interests = profile.interest_tags();
        if interests.is_empty() {
            return Ok(Vec::new());
        }

        let query = TagOverlapQuery::new(interests.clone(), self.pool_size(limit))
            .excluding(profile.liked_ids().iter().copied())
            .excluding_author(user_id);
        let candidates = self
            .catalog
            .find_sharing_any_tag(&query)
            .await?
            .into_iter()
            .filter(|article| !profile.is_known(article) && article.tags.shares_any(interests))
            .collect();

        Ok(rank_by_similarity(interests, candidates, limit as usize)
            .into_iter()
            .map(|scored| Recommendation::scored(scored, RecommendationSource::UserInterests))
            .collect())
    }

    pub async fn popular(&self, limit: u32) -> DomainResult<Vec<Recommendation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut articles = self.catalog.list_popular(limit).await?;
        articles.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        articles.truncate(limit as usize);
        Ok(tag_all(articles, RecommendationSource::Popular))
    }

    pub async fn recent(&self, limit: u32) -> DomainResult<Vec<Recommendation>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut articles = self.catalog.list_recent(limit).await?;
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles.truncate(limit as usize);
        Ok(tag_all(articles, RecommendationSource::Recent))
    }

    /// Up to half the budget from the user's interests, then popular and
    /// recent articles until `limit` distinct articles are collected.
    pub async fn hybrid(
        &self,
        user_id: Option<UserId>,
        limit: u32,
    ) -> DomainResult<Vec<Recommendation>> {
        let budget = limit as usize;
        let mut picked = Picked::with_capacity(budget);

        if let Some(user_id) = user_id {
            let half = limit / 2;
            if half > 0 {
                picked.extend(self.for_user(user_id, half).await?, budget);
            }
        }
        if picked.len() < budget {
            picked.extend(self.popular(limit).await?, budget);
        }
        if picked.len() < budget {
            picked.extend(self.recent(limit).await?, budget);
        }

        Ok(picked.into_vec())
    }

    async fn popular_excluding(
        &self,
        excluded: ArticleId,
        limit: u32,
    ) -> DomainResult<Vec<Recommendation>> {
        let mut popular = self.popular(limit.saturating_add(1)).await?;
        popular.retain(|item| item.id() != excluded);
        popular.truncate(limit as usize);
        Ok(popular)
    }

    fn pool_size(&self, limit: u32) -> u32 {
        limit.saturating_mul(self.candidate_factor)
    }
}

fn tag_all(articles: Vec<ArticleSummary>, source: RecommendationSource) -> Vec<Recommendation> {
    articles
        .into_iter()
        .map(|article| Recommendation::unscored(article, source))
        .collect()
}

struct Picked {
    items: Vec<Recommendation>,
    seen: HashSet<ArticleId>,
}

impl Picked {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn extend(&mut self, batch: Vec<Recommendation>, budget: usize) {
        for item in batch {
            if self.items.len() >= budget {
                break;
            }
            if self.seen.insert(item.id()) {
                self.items.push(item);
            }
        }
    }

    fn into_vec(self) -> Vec<Recommendation> {
        self.items
    }
}
