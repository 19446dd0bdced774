// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::actor::{Actor, AuthenticatedActor},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Rejects the request unless a valid bearer token resolves to an identity.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedActor);

/// Resolves to `Actor::Anonymous` when no Authorization header is present;
/// a present-but-invalid token is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Actor);

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    let Extension(state) = Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(state)
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let actor = state
            .services
            .actor_tokens()
            .verify(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(actor))
    }
}

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        let state = state_from(parts).await?;

        if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
            let actor = state
                .services
                .actor_tokens()
                .verify(header.token())
                .await
                .map_err(HttpError::from_error)?;
            Ok(Self(Actor::Authenticated(actor)))
        } else {
            Ok(Self(Actor::Anonymous))
        }
    }
}
