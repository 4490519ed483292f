use super::map_sqlx;
use crate::domain::article::{
    ArticleCatalog, ArticleId, ArticleSlug, ArticleSummary, ArticleWriter, LikeCatalog,
    NewArticle, SlugExistence, TagOverlapQuery, TagSet,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

const SUMMARY_COLUMNS: &str = "a.id, a.title, a.slug, a.author_id, a.published_at, a.created_at, a.view_count, a.like_count";

/// SQLite-backed catalog answering the slug and recommendation lookups.
#[derive(Clone)]
pub struct SqliteArticleCatalog {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleCatalog {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    view_count: i64,
    like_count: i64,
}

impl SummaryRow {
    fn into_summary(self, tags: TagSet) -> DomainResult<ArticleSummary> {
        Ok(ArticleSummary {
            id: ArticleId::new(self.id)?,
            title: self.title,
            slug: ArticleSlug::new(self.slug)?,
            tags,
            author_id: UserId::new(self.author_id)?,
            published_at: self.published_at.unwrap_or(self.created_at),
            view_count: counter("view_count", self.view_count)?,
            like_count: counter("like_count", self.like_count)?,
        })
    }
}

fn counter(column: &str, value: i64) -> DomainResult<u64> {
    u64::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("negative {column} in articles: {value}")))
}

impl SqliteArticleCatalog {
    /// Counter bump done in SQL so concurrent readers never lose an increment.
    pub async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    /// Returns `false` when the user had already liked the article.
    pub async fn record_like(
        &self,
        user_id: UserId,
        id: ArticleId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let inserted = sqlx::query(
            "INSERT OR IGNORE INTO likes (user_id, article_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(id))
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected()
            == 1;

        if inserted {
            sqlx::query("UPDATE articles SET like_count = like_count + 1 WHERE id = ?")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(inserted)
    }

    pub async fn remove_like(&self, user_id: UserId, id: ArticleId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query("DELETE FROM likes WHERE user_id = ? AND article_id = ?")
            .bind(i64::from(user_id))
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected()
            == 1;

        if removed {
            sqlx::query(
                "UPDATE articles SET like_count = like_count - 1 WHERE id = ? AND like_count > 0",
            )
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed)
    }

    async fn load_tags(&self, ids: &[i64]) -> DomainResult<HashMap<i64, TagSet>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT at.article_id, t.name FROM article_tags at
             JOIN tags t ON t.id = at.tag_id WHERE at.article_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let rows: Vec<(i64, String)> = builder
            .build_query_as()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for (article_id, name) in rows {
            tags.entry(article_id).or_default().push(name);
        }
        Ok(tags
            .into_iter()
            .map(|(id, names)| (id, TagSet::from_raw(names)))
            .collect())
    }

    /// Attaches tags to rows while keeping the order the query produced.
    async fn hydrate(&self, rows: Vec<SummaryRow>) -> DomainResult<Vec<ArticleSummary>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.load_tags(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let article_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_summary(article_tags)
            })
            .collect()
    }

    async fn fetch_ordered(&self, order_by: &str, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {SUMMARY_COLUMNS} FROM articles a WHERE a.published = 1 ORDER BY {order_by} LIMIT "
        ));
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        self.hydrate(rows).await
    }
}

#[async_trait]
impl ArticleWriter for SqliteArticleCatalog {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            slug,
            author_id,
            tags,
            published_at,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "INSERT INTO articles (title, slug, author_id, published, published_at, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .bind(published_at.is_some())
        .bind(published_at)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        let article_id = result.last_insert_rowid();

        for tag in &tags {
            sqlx::query("INSERT INTO tags (name) VALUES (?) ON CONFLICT (name) DO NOTHING")
                .bind(tag.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            sqlx::query(
                "INSERT OR IGNORE INTO article_tags (article_id, tag_id)
                 SELECT ?, id FROM tags WHERE name = ?",
            )
            .bind(article_id)
            .bind(tag.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(article_id, slug = %slug, tags = tags.len(), "article stored");
        ArticleId::new(article_id)
    }
}

#[async_trait]
impl SlugExistence for SqliteArticleCatalog {
    async fn exists(&self, slug: &ArticleSlug, ignore: Option<ArticleId>) -> DomainResult<bool> {
        let owner: Option<i64> = sqlx::query_scalar("SELECT id FROM articles WHERE slug = ?")
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(match owner {
            Some(owner) => ignore.map(|id| i64::from(id) != owner).unwrap_or(true),
            None => false,
        })
    }
}

#[async_trait]
impl ArticleCatalog for SqliteArticleCatalog {
    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        let row = sqlx::query_as::<_, SummaryRow>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM articles a WHERE a.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_sharing_any_tag(
        &self,
        query: &TagOverlapQuery,
    ) -> DomainResult<Vec<ArticleSummary>> {
        if query.tags.is_empty() || query.limit == 0 {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {SUMMARY_COLUMNS}, COUNT(*) AS overlap FROM articles a
             JOIN article_tags at ON at.article_id = a.id
             JOIN tags t ON t.id = at.tag_id
             WHERE a.published = 1 AND t.name IN ("
        ));
        let mut tags = builder.separated(", ");
        for tag in &query.tags {
            tags.push_bind(tag.as_str().to_owned());
        }
        tags.push_unseparated(")");

        if !query.exclude_ids.is_empty() {
            builder.push(" AND a.id NOT IN (");
            let mut excluded = builder.separated(", ");
            for id in &query.exclude_ids {
                excluded.push_bind(i64::from(*id));
            }
            excluded.push_unseparated(")");
        }

        if let Some(author) = query.exclude_author {
            builder.push(" AND a.author_id <> ");
            builder.push_bind(i64::from(author));
        }

        builder.push(" GROUP BY a.id ORDER BY overlap DESC, a.published_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(query.limit));

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        tracing::debug!(
            tags = query.tags.len(),
            excluded = query.exclude_ids.len(),
            returned = rows.len(),
            "tag overlap candidates"
        );
        self.hydrate(rows).await
    }

    async fn list_popular(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        self.fetch_ordered("a.view_count DESC, a.published_at DESC, a.id DESC", limit)
            .await
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        self.fetch_ordered("a.published_at DESC, a.id DESC", limit)
            .await
    }
}

#[async_trait]
impl LikeCatalog for SqliteArticleCatalog {
    async fn liked_by(&self, user_id: UserId) -> DomainResult<Vec<ArticleSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM likes l
             JOIN articles a ON a.id = l.article_id
             WHERE l.user_id = ? ORDER BY l.created_at DESC, a.id DESC"
        ))
        .bind(i64::from(user_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }
}
