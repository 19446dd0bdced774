use super::ContentQueryService;
use crate::{
    application::{capability::require_identity, dto::ContentItemDto, error::ApplicationResult},
    domain::{actor::Actor, content::ContentKind},
};

impl ContentQueryService {
    /// Everything the calling actor owns, any status, newest first.
    pub async fn list_mine(
        &self,
        actor: &Actor,
        kind: ContentKind,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let identity = require_identity(actor)?;
        let items = self.read_repo.list_by_author(identity.id, kind).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
