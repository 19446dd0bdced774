// src/application/ports/security.rs
use crate::application::error::ApplicationResult;
use crate::domain::actor::AuthenticatedActor;
use async_trait::async_trait;

/// Resolves an opaque bearer token into a calling identity. Issuance and the
/// wider authentication flow live outside this crate; the core only consumes
/// the resolved actor.
#[async_trait]
pub trait ActorTokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedActor>;
}
