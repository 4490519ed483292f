// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ArticleWriterPort, ClockPort},
    domain::article::services::ArticleSlugService,
};

pub struct SlugCommandService {
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) writer: Arc<ArticleWriterPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl SlugCommandService {
    pub fn new(
        slug_service: Arc<ArticleSlugService>,
        writer: Arc<ArticleWriterPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            slug_service,
            writer,
            clock,
        }
    }
}
