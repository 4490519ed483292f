// src/application/commands/slugs/store.rs
use super::SlugCommandService;
use crate::{
    application::{dto::StoredArticleDto, error::ApplicationResult},
    domain::{
        article::{NewArticle, TagSet},
        errors::DomainError,
        user::UserId,
    },
};

/// Times a store is attempted when another writer claims the checked slug
/// before the insert lands.
pub const INSERT_RETRIES: u32 = 3;

pub struct StoreArticleCommand {
    pub title: String,
    pub author_id: i64,
    pub tags: Vec<String>,
    pub requested: Option<String>,
    pub publish: bool,
}

impl StoreArticleCommand {
    pub fn builder() -> StoreArticleCommandBuilder {
        StoreArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct StoreArticleCommandBuilder {
    title: Option<String>,
    author_id: Option<i64>,
    tags: Vec<String>,
    requested: Option<String>,
    publish: bool,
}

impl StoreArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn requested(mut self, slug: impl Into<String>) -> Self {
        self.requested = Some(slug.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<StoreArticleCommand, &'static str> {
        Ok(StoreArticleCommand {
            title: self.title.ok_or("title is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            tags: self.tags,
            requested: self.requested,
            publish: self.publish,
        })
    }
}

impl SlugCommandService {
    /// Resolves a slug and stores the article under it. The existence check
    /// and the insert are not atomic, so a `Conflict` from the writer means
    /// the slug was taken in between; a fresh slug is resolved and the insert
    /// retried, at most `INSERT_RETRIES` times in total.
    pub async fn store_article(
        &self,
        command: StoreArticleCommand,
    ) -> ApplicationResult<StoredArticleDto> {
        let author_id = UserId::new(command.author_id)?;
        let tags = TagSet::from_raw(&command.tags);
        let now = self.clock.now();

        let mut attempt = 1;
        loop {
            let slug = self
                .pick_slug(&command.title, command.requested.as_deref(), None)
                .await?;

            let article = NewArticle {
                title: command.title.clone(),
                slug: slug.clone(),
                author_id,
                tags: tags.clone(),
                published_at: command.publish.then_some(now),
                created_at: now,
            };

            match self.writer.insert(article).await {
                Ok(id) => {
                    return Ok(StoredArticleDto {
                        id: id.into(),
                        slug: slug.into_inner(),
                    });
                }
                Err(DomainError::Conflict(reason)) if attempt < INSERT_RETRIES => {
                    tracing::warn!(attempt, slug = %slug, %reason, "slug taken during insert, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
