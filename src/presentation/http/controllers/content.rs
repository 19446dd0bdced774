// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::UpdateContentCommand,
    dto::{AnnouncementPayloadDto, ArticlePayloadDto, ContentItemDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub article: Option<ArticlePayloadDto>,
    pub announcement: Option<AnnouncementPayloadDto>,
    pub categories: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/content/{id}",
    params(("id" = Uuid, Path, description = "Content item id")),
    responses(
        (status = 200, description = "The content item.", body = ContentItemDto),
        (status = 404, description = "No item with that id is visible to the caller.")
    ),
    tag = "Content"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ContentItemDto>> {
    state
        .services
        .content_queries
        .get_by_id(&actor.0, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/content/{id}",
    params(("id" = Uuid, Path, description = "Content item id")),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "The updated item.", body = ContentItemDto),
        (status = 403, description = "Caller may not edit this item."),
        (status = 409, description = "Authors may only edit while the item is pending.")
    ),
    tag = "Content"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentItemDto>> {
    let command = UpdateContentCommand {
        id,
        title: payload.title,
        article: payload.article,
        announcement: payload.announcement,
        categories: payload.categories,
    };

    state
        .services
        .content_commands
        .update_content(&user.into(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/content/{id}",
    params(("id" = Uuid, Path, description = "Content item id")),
    responses(
        (status = 200, description = "Item deleted."),
        (status = 403, description = "Caller may not delete this item."),
        (status = 409, description = "Authors may only withdraw pending items.")
    ),
    tag = "Content"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .content_commands
        .delete_content(&user.into(), id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
