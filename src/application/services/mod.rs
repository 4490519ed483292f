// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::slugs::SlugCommandService,
        ports::{
            ArticleCatalogPort, ArticleWriterPort, ClockPort, LikeCatalogPort, SlugExistencePort,
            SlugGeneratorPort,
        },
        queries::recommendations::{RecommendationLimits, RecommendationQueryService},
    },
    domain::article::services::{
        ArticleSlugService, DEFAULT_CANDIDATE_FACTOR, DEFAULT_MAX_SLUG_ATTEMPTS,
        RecommendationEngine,
    },
};

/// Tunables shared by the slug and recommendation services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub slug_max_attempts: u32,
    pub candidate_factor: u32,
    pub limits: RecommendationLimits,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            slug_max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
            candidate_factor: DEFAULT_CANDIDATE_FACTOR,
            limits: RecommendationLimits::default(),
        }
    }
}

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    pub recommendation_queries: Arc<RecommendationQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        slug_existence: Arc<SlugExistencePort>,
        writer: Arc<ArticleWriterPort>,
        catalog: Arc<ArticleCatalogPort>,
        likes: Arc<LikeCatalogPort>,
        slugger: Arc<SlugGeneratorPort>,
        clock: Arc<ClockPort>,
        settings: ServiceSettings,
    ) -> Self {
        let slug_service = Arc::new(
            ArticleSlugService::new(Arc::clone(&slug_existence), Arc::clone(&slugger))
                .with_max_attempts(settings.slug_max_attempts),
        );
        let engine = Arc::new(
            RecommendationEngine::new(Arc::clone(&catalog), Arc::clone(&likes))
                .with_candidate_factor(settings.candidate_factor),
        );

        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&slug_service),
            Arc::clone(&writer),
            Arc::clone(&clock),
        ));
        let recommendation_queries = Arc::new(RecommendationQueryService::new(
            Arc::clone(&engine),
            settings.limits,
        ));

        Self {
            slug_commands,
            recommendation_queries,
        }
    }
}
