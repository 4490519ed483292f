// src/application/commands/slugs/upload.rs
use super::SlugCommandService;
use crate::application::{dto::SlugDto, error::ApplicationResult};

pub struct SlugFromFilenameCommand {
    pub filename: String,
}

impl SlugCommandService {
    pub async fn slug_from_filename(
        &self,
        command: SlugFromFilenameCommand,
    ) -> ApplicationResult<SlugDto> {
        let slug = self
            .slug_service
            .unique_from_filename(&command.filename, None)
            .await?;
        Ok(slug.into())
    }
}
