// src/application/commands/content/moderate.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::require_admin,
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        content::{ContentId, ContentStatus},
    },
};
use uuid::Uuid;

impl ContentCommandService {
    /// pending -> published. The guard and the effect run as one conditional
    /// update, so of two racing moderation actions exactly one succeeds; the
    /// loser is told the item is gone or no longer pending.
    pub async fn approve(&self, actor: &Actor, id: Uuid) -> ApplicationResult<ContentItemDto> {
        let identity = require_admin(actor)?;
        let id = ContentId(id);
        let now = self.clock.now();

        match self
            .write_repo
            .set_status_if(id, ContentStatus::Pending, ContentStatus::Published, now)
            .await?
        {
            Some(item) => {
                tracing::info!(%id, admin = %identity.username, "submission approved");
                Ok(item.into())
            }
            None => Err(self.transition_failure(id, "approve").await?),
        }
    }

    /// pending -> deleted. Rejection is destructive by contract: the record
    /// is removed, not parked in a rejected state. A published item cannot be
    /// rejected; removing it is the separate delete capability.
    pub async fn reject(&self, actor: &Actor, id: Uuid) -> ApplicationResult<()> {
        let identity = require_admin(actor)?;
        let id = ContentId(id);

        if self
            .write_repo
            .delete_if_status(id, ContentStatus::Pending)
            .await?
        {
            tracing::info!(%id, admin = %identity.username, "submission rejected and removed");
            Ok(())
        } else {
            Err(self.transition_failure(id, "reject").await?)
        }
    }

    /// Distinguish "id never existed" from "status guard failed" after a
    /// conditional write found nothing to do.
    async fn transition_failure(
        &self,
        id: ContentId,
        operation: &str,
    ) -> ApplicationResult<ApplicationError> {
        Ok(match self.read_repo.find_by_id(id).await? {
            Some(item) => ApplicationError::invalid_state(format!(
                "cannot {operation} item in status '{}'",
                item.status
            )),
            None => ApplicationError::not_found("content not found"),
        })
    }
}
