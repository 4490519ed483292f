use super::RecommendationQueryService;
use crate::{
    application::{dto::RecommendationListDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct UserRecommendationsQuery {
    pub user_id: i64,
    pub limit: Option<u32>,
}

impl RecommendationQueryService {
    pub async fn recommendations_for_user(
        &self,
        query: UserRecommendationsQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        let limit = self.limits.normalize(query.limit);

        let items = match UserId::new(query.user_id) {
            Ok(user_id) => self.engine.for_user(user_id, limit).await?,
            Err(_) => {
                tracing::debug!(
                    user_id = query.user_id,
                    "invalid user id, serving popular articles"
                );
                self.engine.popular(limit).await?
            }
        };

        tracing::debug!(
            user_id = query.user_id,
            limit,
            returned = items.len(),
            "user history recommendations"
        );
        Ok(RecommendationListDto::new(items, limit))
    }
}
