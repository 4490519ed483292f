use std::sync::Arc;

use crate::domain::article::services::RecommendationEngine;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl RecommendationLimits {
    /// `None` means "use the default"; an explicit zero stays zero.
    pub fn normalize(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

pub struct RecommendationQueryService {
    pub(super) engine: Arc<RecommendationEngine>,
    pub(super) limits: RecommendationLimits,
}

impl RecommendationQueryService {
    pub fn new(engine: Arc<RecommendationEngine>, limits: RecommendationLimits) -> Self {
        Self { engine, limits }
    }
}
