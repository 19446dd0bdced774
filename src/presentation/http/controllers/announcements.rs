// src/presentation/http/controllers/announcements.rs
use crate::application::{
    commands::content::SubmitAnnouncementCommand,
    dto::{AnnouncementPayloadDto, ContentItemDto},
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitAnnouncementRequest {
    pub title: String,
    #[serde(flatten)]
    pub announcement: AnnouncementPayloadDto,
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    responses((status = 200, description = "Published announcements, title order.", body = [ContentItemDto])),
    tag = "Announcements"
)]
pub async fn list_announcements(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    state
        .services
        .content_queries
        .list_published(ContentKind::Announcement)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/mine",
    responses((status = 200, description = "The caller's own announcements, any status.", body = [ContentItemDto])),
    tag = "Announcements"
)]
pub async fn my_announcements(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    state
        .services
        .content_queries
        .list_mine(&user.into(), ContentKind::Announcement)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    request_body = SubmitAnnouncementRequest,
    responses(
        (status = 200, description = "The submitted announcement, pending review.", body = ContentItemDto),
        (status = 401, description = "Authentication required.")
    ),
    tag = "Announcements"
)]
pub async fn submit_announcement(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubmitAnnouncementRequest>,
) -> HttpResult<Json<ContentItemDto>> {
    let command = SubmitAnnouncementCommand {
        title: payload.title,
        announcement: payload.announcement,
    };

    state
        .services
        .content_commands
        .submit_announcement(&user.into(), command)
        .await
        .into_http()
        .map(Json)
}
