// src/application/capability.rs
//
// Capability guards shared by command and query services. Evaluation order
// matters: identity first, then role, so an anonymous caller always sees
// `Unauthorized` before any `Forbidden`.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::actor::{Actor, AuthenticatedActor, Role};

pub(crate) fn require_identity(actor: &Actor) -> ApplicationResult<&AuthenticatedActor> {
    actor
        .identity()
        .ok_or_else(|| ApplicationError::unauthorized("sign in to perform this action"))
}

pub(crate) fn require_admin(actor: &Actor) -> ApplicationResult<&AuthenticatedActor> {
    let identity = require_identity(actor)?;
    if identity.role == Role::Admin {
        Ok(identity)
    } else {
        Err(ApplicationError::forbidden("admin role required"))
    }
}
