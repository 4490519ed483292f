// src/domain/article/services/slug.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::SlugExistence;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, FALLBACK_SLUG, MAX_SLUG_LENGTH};
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 1000;

/// Domain service responsible for producing unique slugs for articles.
///
/// Uniqueness only holds at the moment of the existence check; the store must
/// still reject a duplicate insert and the caller retries with a fresh slug.
pub struct ArticleSlugService {
    existence: Arc<dyn SlugExistence>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl ArticleSlugService {
    pub fn new(existence: Arc<dyn SlugExistence>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            existence,
            generator,
            max_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn generate_unique_slug(
        &self,
        title: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.base_slug(title);
        self.first_free(&base, ignore_id).await
    }

    /// Cleans a slug supplied by an author and makes it unique the same way a
    /// generated one would be.
    pub async fn unique_from_requested(
        &self,
        requested: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        self.generate_unique_slug(requested, ignore_id).await
    }

    /// Derives a slug from an uploaded file name, ignoring its extension.
    pub async fn unique_from_filename(
        &self,
        filename: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let stem = match filename.rfind('.') {
            Some(dot) if dot > 0 => &filename[..dot],
            _ => filename,
        };
        self.generate_unique_slug(stem, ignore_id).await
    }

    fn base_slug(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return FALLBACK_SLUG.to_owned();
        }
        let base = self.generator.slugify(input);
        if base.is_empty() {
            FALLBACK_SLUG.to_owned()
        } else {
            truncate_slug(&base, MAX_SLUG_LENGTH)
        }
    }

    async fn first_free(
        &self,
        base: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        for attempt in 0..self.max_attempts {
            let candidate = if attempt == 0 {
                base.to_owned()
            } else {
                with_suffix(base, attempt)
            };
            let slug = ArticleSlug::new(candidate)?;
            if !self.existence.exists(&slug, ignore_id).await? {
                return Ok(slug);
            }
        }

        Err(DomainError::SlugExhausted {
            base: base.to_owned(),
            attempts: self.max_attempts,
        })
    }
}

fn with_suffix(base: &str, counter: u32) -> String {
    let suffix = format!("-{counter}");
    let head = truncate_slug(base, MAX_SLUG_LENGTH - suffix.len());
    format!("{head}{suffix}")
}

/// Shortens an ASCII slug to at most `max_len` characters, preferring to cut
/// at a hyphen when that keeps more than 70% of the allowed length.
pub fn truncate_slug(slug: &str, max_len: usize) -> String {
    if slug.len() <= max_len {
        return slug.to_owned();
    }

    let mut end = max_len;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    // a hyphen sitting right at the limit still counts as a break point
    let dash = if slug[end..].starts_with('-') {
        Some(end)
    } else {
        head.rfind('-')
    };
    let cut = match dash {
        Some(dash) if dash * 10 > max_len * 7 => &slug[..dash],
        _ => head,
    };
    cut.trim_end_matches('-').to_owned()
}
