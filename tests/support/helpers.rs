// tests/support/helpers.rs
use std::sync::Arc;

use blog_discovery::application::ports::{time::Clock, util::SlugGenerator};
use blog_discovery::application::services::{ApplicationServices, ServiceSettings};
use blog_discovery::domain::article::{ArticleCatalog, ArticleWriter, LikeCatalog, SlugExistence};
use blog_discovery::infrastructure::util::UnicodeSlugGenerator;

use super::mocks::{FixedClock, InMemoryCatalog, RacingWriter, TakenSlugs};

/// Services over an in-memory catalog and the real Unicode slugifier.
pub fn build_services(catalog: InMemoryCatalog, slugs: TakenSlugs) -> ApplicationServices {
    build_services_with(catalog, slugs, ServiceSettings::default())
}

pub fn build_services_with(
    catalog: InMemoryCatalog,
    slugs: TakenSlugs,
    settings: ServiceSettings,
) -> ApplicationServices {
    let writer = RacingWriter::new(slugs.clone());
    build_services_with_writer(catalog, slugs, writer, settings)
}

pub fn build_services_with_writer(
    catalog: InMemoryCatalog,
    slugs: TakenSlugs,
    writer: RacingWriter,
    settings: ServiceSettings,
) -> ApplicationServices {
    let catalog = Arc::new(catalog);
    let article_catalog: Arc<dyn ArticleCatalog> = catalog.clone();
    let like_catalog: Arc<dyn LikeCatalog> = catalog;
    let slug_existence: Arc<dyn SlugExistence> = Arc::new(slugs);
    let writer: Arc<dyn ArticleWriter> = Arc::new(writer);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(UnicodeSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    ApplicationServices::new(
        slug_existence,
        writer,
        article_catalog,
        like_catalog,
        slugger,
        clock,
        settings,
    )
}
