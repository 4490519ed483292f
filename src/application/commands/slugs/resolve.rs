// src/application/commands/slugs/resolve.rs
use super::SlugCommandService;
use crate::{
    application::{
        dto::SlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleSlug},
};

/// Picks the slug an article should be stored under. An author-requested slug
/// wins over the title when it is not blank.
pub struct ResolveSlugCommand {
    pub title: String,
    pub requested: Option<String>,
    pub ignore_id: Option<i64>,
}

impl ResolveSlugCommand {
    pub fn builder() -> ResolveSlugCommandBuilder {
        ResolveSlugCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct ResolveSlugCommandBuilder {
    title: Option<String>,
    requested: Option<String>,
    ignore_id: Option<i64>,
}

impl ResolveSlugCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn requested(mut self, slug: impl Into<String>) -> Self {
        self.requested = Some(slug.into());
        self
    }

    /// Article being updated; its current slug is not treated as a collision.
    pub fn ignore_id(mut self, id: i64) -> Self {
        self.ignore_id = Some(id);
        self
    }

    pub fn build(self) -> Result<ResolveSlugCommand, &'static str> {
        Ok(ResolveSlugCommand {
            title: self.title.ok_or("title is required")?,
            requested: self.requested,
            ignore_id: self.ignore_id,
        })
    }
}

impl SlugCommandService {
    pub async fn resolve_slug(&self, command: ResolveSlugCommand) -> ApplicationResult<SlugDto> {
        let ignore_id = command
            .ignore_id
            .map(ArticleId::new)
            .transpose()
            .map_err(|err| ApplicationError::validation(err.to_string()))?;

        let slug = self
            .pick_slug(&command.title, command.requested.as_deref(), ignore_id)
            .await?;
        Ok(slug.into())
    }

    pub(super) async fn pick_slug(
        &self,
        title: &str,
        requested: Option<&str>,
        ignore_id: Option<ArticleId>,
    ) -> ApplicationResult<ArticleSlug> {
        let slug = match requested.map(str::trim) {
            Some(requested) if !requested.is_empty() => {
                self.slug_service
                    .unique_from_requested(requested, ignore_id)
                    .await?
            }
            _ => self.slug_service.generate_unique_slug(title, ignore_id).await?,
        };
        Ok(slug)
    }
}
