// src/application/commands/content/delete.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::require_identity,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        content::{ContentId, ContentStatus},
    },
};
use uuid::Uuid;

impl ContentCommandService {
    /// General-purpose delete, distinct from `reject`: admins may delete any
    /// item regardless of status; an author may delete their own item only
    /// while it is still pending.
    pub async fn delete_content(&self, actor: &Actor, id: Uuid) -> ApplicationResult<()> {
        require_identity(actor)?;
        let id = ContentId(id);

        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if actor.is_admin() {
            self.write_repo.delete(id).await?;
            return Ok(());
        }

        if !actor.owns(item.author_id) {
            return Err(if item.is_visible_to(actor) {
                ApplicationError::forbidden("only the author or an admin may delete this item")
            } else {
                ApplicationError::not_found("content not found")
            });
        }

        if item.status != ContentStatus::Pending {
            return Err(ApplicationError::invalid_state(
                "published items can only be deleted by an admin",
            ));
        }

        // Guarded delete: if a moderator published the item in the meantime,
        // the author's delete loses the race instead of destroying it.
        if self
            .write_repo
            .delete_if_status(id, ContentStatus::Pending)
            .await?
        {
            Ok(())
        } else {
            Err(ApplicationError::invalid_state(
                "item is no longer pending; ask an admin to delete it",
            ))
        }
    }
}
