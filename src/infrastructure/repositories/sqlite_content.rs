use crate::domain::actor::ActorId;
use crate::domain::content::{
    ContentBody, ContentId, ContentItem, ContentKind, ContentPatch, ContentReadRepository,
    ContentStatus, ContentWriteRepository, NewContent, Title,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const COLUMNS: &str =
    "id, kind, title, body, categories, status, author_id, updated_by, created_at, updated_at";

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

fn encode_json<T: serde::Serialize>(value: &T) -> DomainResult<String> {
    serde_json::to_string(value).map_err(|err| DomainError::Persistence(err.to_string()))
}

// Stock SQLite's LOWER() folds ASCII only, so case folding happens in Rust
// and the folded text is persisted in shadow columns that search queries hit.
fn fold(value: &str) -> String {
    value.to_lowercase()
}

#[derive(Clone)]
pub struct SqliteContentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// COALESCE-merge of a patch, optionally guarded on the current status
    /// in the same statement. `None` when no row matched.
    async fn apply_patch(
        &self,
        patch: ContentPatch,
        expected: Option<ContentStatus>,
    ) -> DomainResult<Option<ContentItem>> {
        let title_fold = patch.title.as_ref().map(|title| fold(title.as_str()));
        let intro_fold = patch.body.as_ref().and_then(|body| body.intro()).map(fold);
        let body_json = patch.body.as_ref().map(encode_json).transpose()?;
        let categories_json = patch.categories.as_ref().map(encode_json).transpose()?;

        let mut sql = String::from(
            "UPDATE content SET \
               title = COALESCE(?, title), \
               title_fold = COALESCE(?, title_fold), \
               intro_fold = COALESCE(?, intro_fold), \
               body = COALESCE(?, body), \
               categories = COALESCE(?, categories), \
               updated_by = COALESCE(?, updated_by), \
               updated_at = ? \
             WHERE id = ?",
        );
        if expected.is_some() {
            sql.push_str(" AND status = ?");
        }
        sql.push_str(&format!(" RETURNING {COLUMNS}"));

        let mut query = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(patch.title.as_ref().map(|t| t.as_str()))
            .bind(title_fold)
            .bind(intro_fold)
            .bind(body_json)
            .bind(categories_json)
            .bind(patch.updated_by.as_deref())
            .bind(patch.updated_at)
            .bind(patch.id.to_string());
        if let Some(status) = expected {
            query = query.bind(status.as_str());
        }

        let row = query
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;
        row.map(ContentItem::try_from).transpose()
    }
}

#[derive(Clone)]
pub struct SqliteContentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteContentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: String,
    kind: String,
    title: String,
    body: String,
    categories: String,
    status: String,
    author_id: String,
    updated_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let body: ContentBody = serde_json::from_str(&row.body)
            .map_err(|err| DomainError::Persistence(format!("corrupt body payload: {err}")))?;
        let categories: Vec<String> = serde_json::from_str(&row.categories)
            .map_err(|err| DomainError::Persistence(format!("corrupt category list: {err}")))?;

        Ok(ContentItem {
            id: ContentId::parse(&row.id)?,
            kind: row.kind.parse::<ContentKind>()?,
            title: Title::new(row.title)?,
            body,
            categories,
            status: row.status.parse::<ContentStatus>()?,
            author_id: ActorId::parse(&row.author_id)?,
            updated_by: row.updated_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteRepository for SqliteContentWriteRepository {
    async fn insert(&self, item: NewContent) -> DomainResult<ContentItem> {
        let id = ContentId::generate();
        let intro_fold = item.body.intro().map(fold);
        let body_json = encode_json(&item.body)?;
        let categories_json = encode_json(&item.categories)?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO content (id, kind, title, title_fold, intro_fold, body, categories, status, author_id, updated_by, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}",
        ))
        .bind(id.to_string())
        .bind(item.kind.as_str())
        .bind(item.title.as_str())
        .bind(fold(item.title.as_str()))
        .bind(intro_fold)
        .bind(body_json)
        .bind(categories_json)
        .bind(item.status.as_str())
        .bind(item.author_id.to_string())
        .bind(&item.updated_by)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        ContentItem::try_from(row)
    }

    async fn update(&self, patch: ContentPatch) -> DomainResult<ContentItem> {
        self.apply_patch(patch, None)
            .await?
            .ok_or_else(|| DomainError::NotFound("content not found".into()))
    }

    async fn update_if_status(
        &self,
        patch: ContentPatch,
        expected: ContentStatus,
    ) -> DomainResult<Option<ContentItem>> {
        self.apply_patch(patch, Some(expected)).await
    }

    async fn set_status_if(
        &self,
        id: ContentId,
        expected: ContentStatus,
        next: ContentStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<ContentItem>> {
        // Guard and effect in one statement so racing transitions cannot
        // both succeed.
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE content SET status = ?, updated_at = ? WHERE id = ? AND status = ? RETURNING {COLUMNS}",
        ))
        .bind(next.as_str())
        .bind(now)
        .bind(id.to_string())
        .bind(expected.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn delete_if_status(
        &self,
        id: ContentId,
        expected: ContentStatus,
    ) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = ? AND status = ?")
            .bind(id.to_string())
            .bind(expected.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = ?")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(result.rows_affected() > 0)
    }
}

fn collect_items(rows: Vec<ContentRow>) -> DomainResult<Vec<ContentItem>> {
    rows.into_iter().map(ContentItem::try_from).collect()
}

#[async_trait]
impl ContentReadRepository for SqliteContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content WHERE id = ?",
        ))
        .bind(id.to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn find_article_by_title(&self, title: &str) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content WHERE kind = 'article' AND title = ?",
        ))
        .bind(title)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn list_published(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content WHERE status = 'published' AND kind = ? ORDER BY title",
        ))
        .bind(kind.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }

    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content WHERE status = 'pending' AND kind = ? ORDER BY created_at DESC",
        ))
        .bind(kind.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }

    async fn list_by_author(
        &self,
        author_id: ActorId,
        kind: ContentKind,
    ) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content WHERE author_id = ? AND kind = ? ORDER BY created_at DESC",
        ))
        .bind(author_id.to_string())
        .bind(kind.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }

    async fn search_published(
        &self,
        kind: ContentKind,
        query: &str,
    ) -> DomainResult<Vec<ContentItem>> {
        // Both sides were folded in Rust (the shadow columns on write, the
        // pattern here), so non-ASCII text matches case-insensitively too.
        let pattern = format!("%{}%", fold(query));
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content \
             WHERE status = 'published' AND kind = ? \
               AND (title_fold LIKE ? OR COALESCE(intro_fold, '') LIKE ?) \
             ORDER BY title",
        ))
        .bind(kind.as_str())
        .bind(pattern.clone())
        .bind(pattern)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }

    async fn list_published_by_category(&self, name: &str) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content \
             WHERE status = 'published' AND kind = 'article' \
               AND EXISTS (SELECT 1 FROM json_each(content.categories) WHERE json_each.value = ?) \
             ORDER BY title",
        ))
        .bind(name)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }

    async fn list_recent_published(&self, limit: u32) -> DomainResult<Vec<ContentItem>> {
        let rows = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {COLUMNS} FROM content \
             WHERE status = 'published' AND kind = 'article' \
             ORDER BY updated_at DESC LIMIT ?",
        ))
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;
        collect_items(rows)
    }
}
