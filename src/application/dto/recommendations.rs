use crate::domain::article::services::Recommendation;
use serde::{Deserialize, Serialize};

use super::ArticleSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDto {
    #[serde(flatten)]
    pub article: ArticleSummaryDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub source: String,
}

impl From<Recommendation> for RecommendationDto {
    fn from(value: Recommendation) -> Self {
        Self {
            article: value.article.into(),
            score: value.score,
            source: value.source.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationListDto {
    pub items: Vec<RecommendationDto>,
    pub limit: u32,
}

impl RecommendationListDto {
    pub fn new(items: Vec<Recommendation>, limit: u32) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            limit,
        }
    }

    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.article.id).collect()
    }
}
