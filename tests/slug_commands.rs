mod support;

use blog_discovery::application::commands::slugs::{ResolveSlugCommand, SlugFromFilenameCommand};
use blog_discovery::application::error::ApplicationError;
use blog_discovery::application::services::ServiceSettings;
use blog_discovery::domain::article::ArticleSlug;
use blog_discovery::domain::errors::DomainError;
use support::{InMemoryCatalog, TakenSlugs, build_services, build_services_with};

fn resolve(title: &str) -> ResolveSlugCommand {
    ResolveSlugCommand::builder().title(title).build().unwrap()
}

#[tokio::test]
async fn title_with_padding_and_punctuation() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::default());
    let slug = services
        .slug_commands
        .resolve_slug(resolve("  Hello, World!  "))
        .await
        .unwrap();
    assert_eq!(slug.slug, "hello-world");
}

#[tokio::test]
async fn empty_title_uses_fallback_and_suffixes_it() {
    let free = build_services(InMemoryCatalog::default(), TakenSlugs::default());
    assert_eq!(free.slug_commands.resolve_slug(resolve("")).await.unwrap().slug, "article");

    let taken = build_services(InMemoryCatalog::default(), TakenSlugs::with(&["article"]));
    assert_eq!(taken.slug_commands.resolve_slug(resolve("")).await.unwrap().slug, "article-1");
}

#[tokio::test]
async fn collisions_probe_in_order() {
    let slugs = TakenSlugs::with(&["rust-tips", "rust-tips-1"]);
    let services = build_services(InMemoryCatalog::default(), slugs.clone());

    let slug = services
        .slug_commands
        .resolve_slug(resolve("Rust Tips"))
        .await
        .unwrap();
    assert_eq!(slug.slug, "rust-tips-2");
    assert_eq!(slugs.checked(), vec!["rust-tips", "rust-tips-1", "rust-tips-2"]);
}

#[tokio::test]
async fn requested_slug_wins_over_title_unless_blank() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::with(&["my-post"]));

    let requested = ResolveSlugCommand::builder()
        .title("Ignored Title")
        .requested("My Post")
        .build()
        .unwrap();
    assert_eq!(
        services.slug_commands.resolve_slug(requested).await.unwrap().slug,
        "my-post-1"
    );

    let blank = ResolveSlugCommand::builder()
        .title("Real Title")
        .requested("   ")
        .build()
        .unwrap();
    assert_eq!(
        services.slug_commands.resolve_slug(blank).await.unwrap().slug,
        "real-title"
    );
}

#[tokio::test]
async fn updating_an_article_keeps_its_own_slug() {
    let slugs = TakenSlugs::default();
    slugs.take("release-notes", 12);
    let services = build_services(InMemoryCatalog::default(), slugs);

    let own = ResolveSlugCommand::builder()
        .title("Release Notes")
        .ignore_id(12)
        .build()
        .unwrap();
    assert_eq!(
        services.slug_commands.resolve_slug(own).await.unwrap().slug,
        "release-notes"
    );

    let other = ResolveSlugCommand::builder()
        .title("Release Notes")
        .ignore_id(13)
        .build()
        .unwrap();
    assert_eq!(
        services.slug_commands.resolve_slug(other).await.unwrap().slug,
        "release-notes-1"
    );
}

#[tokio::test]
async fn invalid_ignore_id_is_a_validation_error() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::default());
    let command = ResolveSlugCommand::builder()
        .title("Anything")
        .ignore_id(0)
        .build()
        .unwrap();
    let err = services.slug_commands.resolve_slug(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn filenames_drop_their_extension() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::default());
    let slug = services
        .slug_commands
        .slug_from_filename(SlugFromFilenameCommand {
            filename: "Quarterly Report 2024.PDF".into(),
        })
        .await
        .unwrap();
    assert_eq!(slug.slug, "quarterly-report-2024");
}

#[tokio::test]
async fn generated_slugs_always_match_the_slug_shape() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::default());
    let long = "Lorem ipsum dolor sit amet ".repeat(10);
    for title in [
        "Crème Brûlée",
        "日本語のタイトル",
        "--leading and trailing--",
        "tabs\tand\nnewlines",
        long.as_str(),
    ] {
        let slug = services
            .slug_commands
            .resolve_slug(resolve(title))
            .await
            .unwrap()
            .slug;
        assert!(ArticleSlug::is_valid(&slug), "{title:?} -> {slug:?}");
        assert!(slug.len() <= 100);
    }
}

#[tokio::test]
async fn exhausted_attempts_are_reported() {
    let settings = ServiceSettings {
        slug_max_attempts: 2,
        ..ServiceSettings::default()
    };
    let services = build_services_with(
        InMemoryCatalog::default(),
        TakenSlugs::with(&["busy", "busy-1"]),
        settings,
    );

    let err = services
        .slug_commands
        .resolve_slug(resolve("Busy"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::SlugExhausted { attempts: 2, .. })
    ));
}

#[tokio::test]
async fn existence_failures_propagate() {
    let services = build_services(InMemoryCatalog::default(), TakenSlugs::unavailable());
    let err = services
        .slug_commands
        .resolve_slug(resolve("Hello"))
        .await
        .unwrap_err();
    assert!(err.is_collaborator_failure());
}
