// tests/support/mocks/slugs.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use blog_discovery::domain::article::{ArticleId, ArticleSlug, SlugExistence};
use blog_discovery::domain::errors::{DomainError, DomainResult};

/// Existence oracle backed by a shared map of slug -> owning article id.
/// Clones share state so a test can keep a handle after wiring services.
#[derive(Clone, Default)]
pub struct TakenSlugs {
    owners: Arc<Mutex<HashMap<String, i64>>>,
    checked: Arc<Mutex<Vec<String>>>,
    unavailable: bool,
}

impl TakenSlugs {
    pub fn with(slugs: &[&str]) -> Self {
        let taken = Self::default();
        for (i, slug) in slugs.iter().enumerate() {
            taken.take(slug, i as i64 + 1);
        }
        taken
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn take(&self, slug: &str, owner: i64) {
        self.owners.lock().unwrap().insert(slug.to_string(), owner);
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugExistence for TakenSlugs {
    async fn exists(&self, slug: &ArticleSlug, ignore: Option<ArticleId>) -> DomainResult<bool> {
        if self.unavailable {
            return Err(DomainError::Persistence("slug index offline".into()));
        }
        self.checked.lock().unwrap().push(slug.as_str().to_string());
        let owners = self.owners.lock().unwrap();
        Ok(match owners.get(slug.as_str()) {
            Some(owner) => ignore.map(|id| i64::from(id) != *owner).unwrap_or(true),
            None => false,
        })
    }
}
