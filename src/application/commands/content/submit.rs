// src/application/commands/content/submit.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::require_identity,
        dto::{AnnouncementPayloadDto, ArticlePayloadDto, ContentItemDto},
        error::ApplicationResult,
    },
    domain::{
        actor::Actor,
        content::{
            ContentBody, ContentKind, ContentStatus, NewContent, Title, normalize_categories,
        },
    },
};

pub struct SubmitArticleCommand {
    pub title: String,
    pub article: ArticlePayloadDto,
    pub categories: Vec<String>,
}

pub struct SubmitAnnouncementCommand {
    pub title: String,
    pub announcement: AnnouncementPayloadDto,
}

impl ContentCommandService {
    /// User submission: any authenticated actor may submit; the item is born
    /// `pending` and owned by the submitter.
    pub async fn submit_article(
        &self,
        actor: &Actor,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let identity = require_identity(actor)?;

        let title = Title::new(command.title)?;
        let body = ContentBody::Article(command.article.into_domain()?);
        let categories = normalize_categories(command.categories);
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewContent {
                kind: ContentKind::Article,
                title,
                body,
                categories,
                status: ContentStatus::Pending,
                author_id: identity.id,
                updated_by: identity.username.as_str().to_string(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(id = %created.id, author = %identity.username, "article submitted for review");
        Ok(created.into())
    }

    pub async fn submit_announcement(
        &self,
        actor: &Actor,
        command: SubmitAnnouncementCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let identity = require_identity(actor)?;

        let title = Title::new(command.title)?;
        let body = ContentBody::Announcement(command.announcement.into_domain()?);
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewContent {
                kind: ContentKind::Announcement,
                title,
                body,
                categories: Vec::new(),
                status: ContentStatus::Pending,
                author_id: identity.id,
                updated_by: identity.username.as_str().to_string(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(id = %created.id, author = %identity.username, "announcement submitted for review");
        Ok(created.into())
    }
}
