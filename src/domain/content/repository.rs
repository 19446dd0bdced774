use crate::domain::actor::ActorId;
use crate::domain::content::entity::{ContentItem, ContentPatch, NewContent};
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, item: NewContent) -> DomainResult<ContentItem>;
    async fn update(&self, patch: ContentPatch) -> DomainResult<ContentItem>;

    /// Guarded variant of `update`: applies the patch only while the stored
    /// status still equals `expected`, so an author edit cannot land on an
    /// item that moderation just published. Returns `None` when the guard
    /// did not match.
    async fn update_if_status(
        &self,
        patch: ContentPatch,
        expected: ContentStatus,
    ) -> DomainResult<Option<ContentItem>>;

    /// Atomic guarded transition: flips the status only if the stored status
    /// still equals `expected`, so exactly one of two racing moderation
    /// actions wins. Returns `None` when the guard did not match (missing id
    /// or status already changed).
    async fn set_status_if(
        &self,
        id: ContentId,
        expected: ContentStatus,
        next: ContentStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<ContentItem>>;

    /// Guarded delete, same single-winner semantics as `set_status_if`.
    async fn delete_if_status(&self, id: ContentId, expected: ContentStatus)
        -> DomainResult<bool>;

    async fn delete(&self, id: ContentId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>>;
    async fn find_article_by_title(&self, title: &str) -> DomainResult<Option<ContentItem>>;
    /// Published items of one kind; articles come back ordered by title.
    async fn list_published(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>>;
    /// Pending items, newest submissions first.
    async fn list_pending(&self, kind: ContentKind) -> DomainResult<Vec<ContentItem>>;
    /// Everything an author owns regardless of status, newest first.
    async fn list_by_author(
        &self,
        author_id: ActorId,
        kind: ContentKind,
    ) -> DomainResult<Vec<ContentItem>>;
    /// Case-insensitive substring match over title and article intro,
    /// restricted to published items.
    async fn search_published(
        &self,
        kind: ContentKind,
        query: &str,
    ) -> DomainResult<Vec<ContentItem>>;
    async fn list_published_by_category(&self, name: &str) -> DomainResult<Vec<ContentItem>>;
    async fn list_recent_published(&self, limit: u32) -> DomainResult<Vec<ContentItem>>;
}
