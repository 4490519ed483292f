use super::RecommendationQueryService;
use crate::{
    application::{dto::RecommendationListDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct PopularArticlesQuery {
    pub limit: Option<u32>,
}

pub struct RecentArticlesQuery {
    pub limit: Option<u32>,
}

pub struct HybridRecommendationsQuery {
    pub user_id: Option<i64>,
    pub limit: Option<u32>,
}

impl RecommendationQueryService {
    pub async fn popular_articles(
        &self,
        query: PopularArticlesQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        let limit = self.limits.normalize(query.limit);
        let items = self.engine.popular(limit).await?;
        Ok(RecommendationListDto::new(items, limit))
    }

    pub async fn recent_articles(
        &self,
        query: RecentArticlesQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        let limit = self.limits.normalize(query.limit);
        let items = self.engine.recent(limit).await?;
        Ok(RecommendationListDto::new(items, limit))
    }

    /// Anonymous visitors (or an unusable user id) get the popular/recent mix.
    pub async fn hybrid_recommendations(
        &self,
        query: HybridRecommendationsQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        let limit = self.limits.normalize(query.limit);
        let user_id = query.user_id.and_then(|id| UserId::new(id).ok());
        let items = self.engine.hybrid(user_id, limit).await?;

        tracing::debug!(
            user_id = ?query.user_id,
            limit,
            returned = items.len(),
            "hybrid recommendations"
        );
        Ok(RecommendationListDto::new(items, limit))
    }
}
