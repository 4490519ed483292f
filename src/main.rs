use anyhow::{Context, Result};
use blog_discovery::{
    application::{
        commands::slugs::{ResolveSlugCommand, StoreArticleCommand},
        dto::RecommendationListDto,
        ports::{time::Clock, util::SlugGenerator},
        queries::recommendations::{
            HybridRecommendationsQuery, PopularArticlesQuery, RecentArticlesQuery,
            SimilarArticlesQuery, UserRecommendationsQuery,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        article::{ArticleCatalog, ArticleId, ArticleWriter, LikeCatalog, SlugExistence},
        user::UserId,
    },
    infrastructure::{
        database, repositories::SqliteArticleCatalog, time::SystemClock,
        util::UnicodeSlugGenerator,
    },
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "blog-discovery",
    about = "Generate article slugs and tag-based recommendations",
    version
)]
struct Cli {
    /// Print results as JSON instead of tab-separated lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Preview the slug a title would be stored under.
    Slug {
        title: String,
        /// Author-supplied slug to clean and use instead of the title.
        #[arg(long)]
        requested: Option<String>,
        /// Article being renamed; its own slug does not count as taken.
        #[arg(long)]
        ignore_id: Option<i64>,
    },
    /// Store an article with a freshly generated slug.
    Add {
        title: String,
        #[arg(long)]
        author: i64,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        slug: Option<String>,
        /// Keep the article unpublished.
        #[arg(long)]
        draft: bool,
    },
    /// Count one view of an article.
    View { id: i64 },
    /// Record that a user liked an article.
    Like { user: i64, id: i64 },
    /// Articles whose tags overlap the given article's tags.
    Similar {
        id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Articles matching the tags of everything a user liked.
    ForUser {
        user: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
    Popular {
        #[arg(long)]
        limit: Option<u32>,
    },
    Recent {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Interest-based picks topped up with popular and recent articles.
    Hybrid {
        #[arg(long)]
        user: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .with_context(|| format!("opening {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let catalog = Arc::new(SqliteArticleCatalog::new(Arc::clone(&pool)));
    let slug_existence: Arc<dyn SlugExistence> = catalog.clone();
    let writer: Arc<dyn ArticleWriter> = catalog.clone();
    let article_catalog: Arc<dyn ArticleCatalog> = catalog.clone();
    let like_catalog: Arc<dyn LikeCatalog> = catalog.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(UnicodeSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        slug_existence,
        writer,
        article_catalog,
        like_catalog,
        slugger,
        clock,
        config.service_settings(),
    );

    run(cli, &services, &catalog).await
}

async fn run(cli: Cli, services: &ApplicationServices, catalog: &SqliteArticleCatalog) -> Result<()> {
    let queries = &services.recommendation_queries;
    let json = cli.json;

    let list = match cli.command {
        Command::Slug {
            title,
            requested,
            ignore_id,
        } => {
            let mut builder = ResolveSlugCommand::builder().title(title);
            if let Some(requested) = requested {
                builder = builder.requested(requested);
            }
            if let Some(id) = ignore_id {
                builder = builder.ignore_id(id);
            }
            let command = builder.build().map_err(anyhow::Error::msg)?;
            let slug = services.slug_commands.resolve_slug(command).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&slug)?);
            } else {
                println!("{}", slug.slug);
            }
            return Ok(());
        }
        Command::Add {
            title,
            author,
            tags,
            slug,
            draft,
        } => {
            let mut builder = StoreArticleCommand::builder()
                .title(title)
                .author_id(author)
                .tags(tags)
                .publish(!draft);
            if let Some(slug) = slug {
                builder = builder.requested(slug);
            }
            let command = builder.build().map_err(anyhow::Error::msg)?;
            let stored = services.slug_commands.store_article(command).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else {
                println!("{}\t{}", stored.id, stored.slug);
            }
            return Ok(());
        }
        Command::View { id } => {
            catalog.record_view(ArticleId::new(id)?).await?;
            return Ok(());
        }
        Command::Like { user, id } => {
            let added = catalog
                .record_like(UserId::new(user)?, ArticleId::new(id)?, Utc::now())
                .await?;
            if !added {
                tracing::info!(user, article = id, "like already recorded");
            }
            return Ok(());
        }
        Command::Similar { id, limit } => {
            queries
                .similar_articles(SimilarArticlesQuery {
                    article_id: id,
                    limit,
                })
                .await?
        }
        Command::ForUser { user, limit } => {
            queries
                .recommendations_for_user(UserRecommendationsQuery {
                    user_id: user,
                    limit,
                })
                .await?
        }
        Command::Popular { limit } => queries.popular_articles(PopularArticlesQuery { limit }).await?,
        Command::Recent { limit } => queries.recent_articles(RecentArticlesQuery { limit }).await?,
        Command::Hybrid { user, limit } => {
            queries
                .hybrid_recommendations(HybridRecommendationsQuery {
                    user_id: user,
                    limit,
                })
                .await?
        }
    };

    print_list(&list, json)
}

fn print_list(list: &RecommendationListDto, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }

    for item in &list.items {
        let score = item
            .score
            .map(|score| format!("{score:.3}"))
            .unwrap_or_else(|| "-".to_owned());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            item.article.id,
            score,
            item.source,
            item.article.slug,
            item.article.tags.join(",")
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
