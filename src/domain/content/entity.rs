// src/domain/content/entity.rs
use crate::domain::actor::{Actor, ActorId};
use crate::domain::content::value_objects::{
    ContentBody, ContentId, ContentKind, ContentStatus, Title,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: Title,
    pub body: ContentBody,
    pub categories: Vec<String>,
    pub status: ContentStatus,
    pub author_id: ActorId,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != ContentStatus::Pending {
            return Err(DomainError::InvalidState(format!(
                "cannot approve item in status '{}'",
                self.status
            )));
        }
        self.status = ContentStatus::Published;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_content(
        &mut self,
        title: Title,
        body: ContentBody,
        categories: Vec<String>,
        updated_by: String,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if body.kind() != self.kind {
            return Err(DomainError::Validation(format!(
                "payload kind '{}' does not match item kind '{}'",
                body.kind(),
                self.kind
            )));
        }
        self.title = title;
        self.body = body;
        self.categories = categories;
        self.updated_by = updated_by;
        self.updated_at = now;
        Ok(())
    }

    /// Published items are public; pending items exist only for their author
    /// and for admins.
    pub fn is_visible_to(&self, actor: &Actor) -> bool {
        match self.status {
            ContentStatus::Published => true,
            ContentStatus::Pending => actor.is_admin() || actor.owns(self.author_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub kind: ContentKind,
    pub title: Title,
    pub body: ContentBody,
    pub categories: Vec<String>,
    pub status: ContentStatus,
    pub author_id: ActorId,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContentPatch {
    pub id: ContentId,
    pub title: Option<Title>,
    pub body: Option<ContentBody>,
    pub categories: Option<Vec<String>>,
    pub updated_by: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ContentPatch {
    pub fn new(id: ContentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            categories: None,
            updated_by: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ContentBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_updated_by(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by = Some(updated_by.into());
        self
    }
}
