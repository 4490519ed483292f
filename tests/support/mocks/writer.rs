// tests/support/mocks/writer.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use blog_discovery::domain::article::{ArticleId, ArticleWriter, NewArticle};
use blog_discovery::domain::errors::{DomainError, DomainResult};

use super::slugs::TakenSlugs;

/// Writer that registers stored slugs in a shared `TakenSlugs`. It can be told
/// to lose the next N inserts to a concurrent writer: the slug is claimed by
/// someone else and the insert fails with `Conflict`.
#[derive(Clone)]
pub struct RacingWriter {
    slugs: TakenSlugs,
    races_left: Arc<Mutex<u32>>,
    attempts: Arc<Mutex<Vec<String>>>,
    stored: Arc<Mutex<Vec<NewArticle>>>,
    unavailable: bool,
}

const RIVAL_OWNER: i64 = 9_999;

impl RacingWriter {
    pub fn new(slugs: TakenSlugs) -> Self {
        Self {
            slugs,
            races_left: Arc::new(Mutex::new(0)),
            attempts: Arc::new(Mutex::new(Vec::new())),
            stored: Arc::new(Mutex::new(Vec::new())),
            unavailable: false,
        }
    }

    pub fn losing_races(self, count: u32) -> Self {
        *self.races_left.lock().unwrap() = count;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Slugs passed to `insert`, in call order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<NewArticle> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriter for RacingWriter {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let slug = article.slug.as_str().to_string();
        self.attempts.lock().unwrap().push(slug.clone());

        if self.unavailable {
            return Err(DomainError::Persistence("article store offline".into()));
        }

        {
            let mut races = self.races_left.lock().unwrap();
            if *races > 0 {
                *races -= 1;
                self.slugs.take(&slug, RIVAL_OWNER);
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let mut stored = self.stored.lock().unwrap();
        stored.push(article);
        let id = stored.len() as i64;
        self.slugs.take(&slug, id);
        ArticleId::new(id)
    }
}
