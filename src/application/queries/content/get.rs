use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{actor::Actor, content::ContentId},
};
use uuid::Uuid;

impl ContentQueryService {
    /// Fetch by id with visibility applied: a pending item is reported as
    /// not-found to anyone but its author or an admin, so its existence
    /// never leaks.
    pub async fn get_by_id(&self, actor: &Actor, id: Uuid) -> ApplicationResult<ContentItemDto> {
        let item = self
            .read_repo
            .find_by_id(ContentId(id))
            .await?
            .filter(|item| item.is_visible_to(actor))
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;
        Ok(item.into())
    }

    /// Exact-title lookup for articles, same masking as `get_by_id`.
    pub async fn get_article_by_title(
        &self,
        actor: &Actor,
        title: &str,
    ) -> ApplicationResult<ContentItemDto> {
        let item = self
            .read_repo
            .find_article_by_title(title)
            .await?
            .filter(|item| item.is_visible_to(actor))
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(item.into())
    }
}
