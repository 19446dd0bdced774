// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use veche::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{security::ActorTokenVerifier, time::Clock},
};
use veche::domain::actor::{ActorId, AuthenticatedActor, Role, Username};
use veche::domain::content::{
    ContentId, ContentItem, ContentKind, ContentPatch, ContentReadRepository, ContentStatus,
    ContentWriteRepository, NewContent,
};
use veche::domain::errors::{DomainError, DomainResult};

/// In-memory stand-in for the SQLite repositories. Orderings mirror the real
/// queries so list assertions carry over.
#[derive(Default)]
pub struct InMemoryContentRepository {
    items: Mutex<Vec<ContentItem>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ContentItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    pub fn snapshot(&self) -> Vec<ContentItem> {
        self.items.lock().unwrap().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ContentItem>> {
        self.items.lock().unwrap()
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryContentRepository {
    async fn insert(&self, item: NewContent) -> DomainResult<ContentItem> {
        let stored = ContentItem {
            id: ContentId::generate(),
            kind: item.kind,
            title: item.title,
            body: item.body,
            categories: item.categories,
            status: item.status,
            author_id: item.author_id,
            updated_by: item.updated_by,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        self.lock().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, patch: ContentPatch) -> DomainResult<ContentItem> {
        let mut items = self.lock();
        let item = items
            .iter_mut()
            .find(|item| item.id == patch.id)
            .ok_or_else(|| DomainError::NotFound("content item not found".into()))?;

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(body) = patch.body {
            item.body = body;
        }
        if let Some(categories) = patch.categories {
            item.categories = categories;
        }
        if let Some(updated_by) = patch.updated_by {
            item.updated_by = updated_by;
        }
        item.updated_at = patch.updated_at;
        Ok(item.clone())
    }

    async fn update_if_status(
        &self,
        patch: ContentPatch,
        expected: ContentStatus,
    ) -> DomainResult<Option<ContentItem>> {
        let mut items = self.lock();
        match items
            .iter_mut()
            .find(|item| item.id == patch.id && item.status == expected)
        {
            Some(item) => {
                if let Some(title) = patch.title {
                    item.title = title;
                }
                if let Some(body) = patch.body {
                    item.body = body;
                }
                if let Some(categories) = patch.categories {
                    item.categories = categories;
                }
                if let Some(updated_by) = patch.updated_by {
                    item.updated_by = updated_by;
                }
                item.updated_at = patch.updated_at;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_status_if(
        &self,
        id: ContentId,
        expected: ContentStatus,
        next: ContentStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<ContentItem>> {
        let mut items = self.lock();
        match items
            .iter_mut()
            .find(|item| item.id == id && item.status == expected)
        {
            Some(item) => {
                item.status = next;
                item.updated_at = now;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_if_status(
        &self,
        id: ContentId,
        expected: ContentStatus,
    ) -> DomainResult<bool> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| !(item.id == id && item.status == expected));
        Ok(items.len() < before)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<bool> {
        let mut items = self.lock();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryContentRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        Ok(self.lock().iter().find(|item| item.id == id).cloned())
    }

    async fn find_article_by_title(&self, title: &str) -> DomainResult<Option<ContentItem>> {
        Ok(self
            .lock()
            .iter()
            .find(|item| item.kind == ContentKind::Article && item.title.as_str() == title)
            .cloned())
    }

    async fn list_published(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| item.status == ContentStatus::Published && item.kind == kind)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(items)
    }

    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>> {
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| item.status == ContentStatus::Pending && item.kind == kind)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn list_by_author(
        &self,
        author_id: ActorId,
        kind: ContentKind,
    ) -> DomainResult<Vec<ContentItem>> {
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| item.author_id == author_id && item.kind == kind)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn search_published(
        &self,
        kind: ContentKind,
        query: &str,
    ) -> DomainResult<Vec<ContentItem>> {
        let needle = query.to_lowercase();
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| item.status == ContentStatus::Published && item.kind == kind)
            .filter(|item| {
                item.title.as_str().to_lowercase().contains(&needle)
                    || item
                        .body
                        .intro()
                        .is_some_and(|intro| intro.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(items)
    }

    async fn list_published_by_category(&self, name: &str) -> DomainResult<Vec<ContentItem>> {
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| {
                item.status == ContentStatus::Published
                    && item.kind == ContentKind::Article
                    && item.categories.iter().any(|category| category == name)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(items)
    }

    async fn list_recent_published(&self, limit: u32) -> DomainResult<Vec<ContentItem>> {
        let mut items: Vec<_> = self
            .lock()
            .iter()
            .filter(|item| {
                item.status == ContentStatus::Published && item.kind == ContentKind::Article
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        items.truncate(limit as usize);
        Ok(items)
    }
}

/// Deterministic clock for asserting timestamps.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Verifier that accepts "user-token" and "admin-token" and rejects
/// everything else, so HTTP tests do not need real signed tokens.
pub struct StaticTokenVerifier {
    pub user: AuthenticatedActor,
    pub admin: AuthenticatedActor,
}

impl StaticTokenVerifier {
    pub fn new() -> Self {
        Self {
            user: AuthenticatedActor {
                id: ActorId::generate(),
                username: Username::new("tester").unwrap(),
                role: Role::User,
            },
            admin: AuthenticatedActor {
                id: ActorId::generate(),
                username: Username::new("moderator").unwrap(),
                role: Role::Admin,
            },
        }
    }
}

impl Default for StaticTokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActorTokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedActor> {
        match token {
            "user-token" => Ok(self.user.clone()),
            "admin-token" => Ok(self.admin.clone()),
            _ => Err(ApplicationError::unauthorized("invalid actor token")),
        }
    }
}
