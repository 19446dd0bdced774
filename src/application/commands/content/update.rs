// src/application/commands/content/update.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::require_identity,
        dto::{AnnouncementPayloadDto, ArticlePayloadDto, ContentItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        content::{
            ContentBody, ContentId, ContentItem, ContentPatch, ContentStatus, Title,
            normalize_categories,
        },
    },
};
use uuid::Uuid;

pub struct UpdateContentCommand {
    pub id: Uuid,
    pub title: Option<String>,
    /// Full replacement payloads; at most one may be set and it must match
    /// the stored item's kind.
    pub article: Option<ArticlePayloadDto>,
    pub announcement: Option<AnnouncementPayloadDto>,
    pub categories: Option<Vec<String>>,
}

impl ContentCommandService {
    /// Content-field edit. Admins may edit any item; the author may edit only
    /// while the item is still pending. Items invisible to the caller are
    /// reported as not found so pending content never leaks its existence.
    pub async fn update_content(
        &self,
        actor: &Actor,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let identity = require_identity(actor)?;
        let id = ContentId(command.id);

        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if !actor.is_admin() {
            if !actor.owns(item.author_id) {
                return Err(if item.is_visible_to(actor) {
                    ApplicationError::forbidden("only the author or an admin may edit this item")
                } else {
                    ApplicationError::not_found("content not found")
                });
            }
            if item.status != ContentStatus::Pending {
                return Err(ApplicationError::invalid_state(
                    "published items can no longer be edited by their author",
                ));
            }
        }

        let body = Self::patch_body(&item, command.article, command.announcement)?;
        let now = self.clock.now();
        let mut patch = ContentPatch::new(id, now)
            .with_updated_by(identity.username.as_str());

        if let Some(title) = command.title {
            patch = patch.with_title(Title::new(title)?);
        }
        if let Some(body) = body {
            patch = patch.with_body(body);
        }
        if let Some(categories) = command.categories {
            patch = patch.with_categories(normalize_categories(categories));
        }

        let updated = if actor.is_admin() {
            self.write_repo.update(patch).await?
        } else {
            // Same single-winner rule as the author-withdraw path: if
            // moderation published the item after the status check above,
            // the edit must lose rather than silently land.
            self.write_repo
                .update_if_status(patch, ContentStatus::Pending)
                .await?
                .ok_or_else(|| {
                    ApplicationError::invalid_state(
                        "item is no longer pending; ask an admin to edit it",
                    )
                })?
        };
        Ok(updated.into())
    }

    fn patch_body(
        item: &ContentItem,
        article: Option<ArticlePayloadDto>,
        announcement: Option<AnnouncementPayloadDto>,
    ) -> ApplicationResult<Option<ContentBody>> {
        let body = match (article, announcement) {
            (None, None) => None,
            (Some(payload), None) => Some(ContentBody::Article(payload.into_domain()?)),
            (None, Some(payload)) => Some(ContentBody::Announcement(payload.into_domain()?)),
            (Some(_), Some(_)) => {
                return Err(ApplicationError::validation(
                    "provide either an article or an announcement payload, not both",
                ));
            }
        };

        if let Some(body) = &body {
            if body.kind() != item.kind {
                return Err(ApplicationError::validation(format!(
                    "payload kind '{}' does not match item kind '{}'",
                    body.kind(),
                    item.kind
                )));
            }
        }

        Ok(body)
    }
}
