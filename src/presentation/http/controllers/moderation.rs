// src/presentation/http/controllers/moderation.rs
use crate::application::dto::ContentItemDto;
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PendingParams {
    /// "article" (default) or "announcement".
    #[serde(default)]
    pub kind: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/moderation/pending",
    params(("kind" = Option<String>, Query, description = "Content kind, defaults to article")),
    responses(
        (status = 200, description = "Pending submissions, newest first.", body = [ContentItemDto]),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Moderation"
)]
pub async fn list_pending(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PendingParams>,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    let kind = params
        .kind
        .as_deref()
        .unwrap_or("article")
        .parse::<ContentKind>()
        .map_err(|err| HttpError::from_error(err.into()))?;

    state
        .services
        .content_queries
        .list_pending(&user.into(), kind)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/moderation/{id}/approve",
    params(("id" = Uuid, Path, description = "Content item id")),
    responses(
        (status = 200, description = "The now-published item.", body = ContentItemDto),
        (status = 403, description = "Caller is not an administrator."),
        (status = 409, description = "Item is not pending.")
    ),
    tag = "Moderation"
)]
pub async fn approve_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ContentItemDto>> {
    state
        .services
        .content_commands
        .approve(&user.into(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/moderation/{id}/reject",
    params(("id" = Uuid, Path, description = "Content item id")),
    responses(
        (status = 200, description = "Submission rejected and removed."),
        (status = 403, description = "Caller is not an administrator."),
        (status = 409, description = "Item is not pending.")
    ),
    tag = "Moderation"
)]
pub async fn reject_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .content_commands
        .reject(&user.into(), id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "rejected" })))
}
