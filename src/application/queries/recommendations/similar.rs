use super::RecommendationQueryService;
use crate::{
    application::{dto::RecommendationListDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct SimilarArticlesQuery {
    pub article_id: i64,
    pub limit: Option<u32>,
}

impl RecommendationQueryService {
    pub async fn similar_articles(
        &self,
        query: SimilarArticlesQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        let limit = self.limits.normalize(query.limit);

        let items = match ArticleId::new(query.article_id) {
            Ok(seed) => self.engine.similar_to(seed, limit).await?,
            Err(_) => {
                tracing::debug!(
                    article_id = query.article_id,
                    "invalid seed id, serving popular articles"
                );
                self.engine.popular(limit).await?
            }
        };

        tracing::debug!(
            article_id = query.article_id,
            limit,
            returned = items.len(),
            "similar article recommendations"
        );
        Ok(RecommendationListDto::new(items, limit))
    }

    /// Articles shown alongside an article detail page.
    pub async fn related_articles(
        &self,
        query: SimilarArticlesQuery,
    ) -> ApplicationResult<RecommendationListDto> {
        self.similar_articles(query).await
    }
}
