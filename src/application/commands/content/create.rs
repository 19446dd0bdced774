// src/application/commands/content/create.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::require_admin,
        dto::{ArticlePayloadDto, ContentItemDto},
        error::ApplicationResult,
    },
    domain::{
        actor::Actor,
        content::{
            ContentBody, ContentKind, ContentStatus, NewContent, Title, normalize_categories,
        },
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub article: ArticlePayloadDto,
    pub categories: Vec<String>,
    pub publish: bool,
}

impl ContentCommandService {
    /// Privileged direct create, used for seeding. Unlike `submit_article`
    /// the item may be born already published, skipping review.
    pub async fn create_article(
        &self,
        actor: &Actor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let identity = require_admin(actor)?;

        let title = Title::new(command.title)?;
        let body = ContentBody::Article(command.article.into_domain()?);
        let categories = normalize_categories(command.categories);
        let now = self.clock.now();
        let status = if command.publish {
            ContentStatus::Published
        } else {
            ContentStatus::Pending
        };

        let created = self
            .write_repo
            .insert(NewContent {
                kind: ContentKind::Article,
                title,
                body,
                categories,
                status,
                author_id: identity.id,
                updated_by: identity.username.as_str().to_string(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        Ok(created.into())
    }
}
