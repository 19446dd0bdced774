use super::ContentQueryService;
use crate::{
    application::{capability::require_admin, dto::ContentItemDto, error::ApplicationResult},
    domain::{actor::Actor, content::ContentKind},
};

impl ContentQueryService {
    /// Moderation queue, newest submissions first. Admin only.
    pub async fn list_pending(
        &self,
        actor: &Actor,
        kind: ContentKind,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        require_admin(actor)?;
        let items = self.read_repo.list_pending(kind).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
