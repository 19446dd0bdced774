// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::recent_articles,
        crate::presentation::http::controllers::articles::random_article,
        crate::presentation::http::controllers::articles::articles_by_category,
        crate::presentation::http::controllers::articles::article_by_title,
        crate::presentation::http::controllers::articles::article_digest,
        crate::presentation::http::controllers::articles::my_articles,
        crate::presentation::http::controllers::articles::submit_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::announcements::list_announcements,
        crate::presentation::http::controllers::announcements::my_announcements,
        crate::presentation::http::controllers::announcements::submit_announcement,
        crate::presentation::http::controllers::content::get_content,
        crate::presentation::http::controllers::content::update_content,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::moderation::list_pending,
        crate::presentation::http::controllers::moderation::approve_content,
        crate::presentation::http::controllers::moderation::reject_content,
        crate::presentation::http::controllers::categories::list_categories,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::SubmitArticleRequest,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::DigestResponse,
            crate::presentation::http::controllers::announcements::SubmitAnnouncementRequest,
            crate::presentation::http::controllers::content::UpdateContentRequest,
            crate::application::dto::ContentItemDto,
            crate::application::dto::ArticlePayloadDto,
            crate::application::dto::AnnouncementPayloadDto,
            crate::application::dto::SectionDto,
            crate::application::dto::InfoboxDto,
            crate::application::dto::InfoboxRowDto,
            crate::application::dto::CategoryCountDto
        )
    ),
    tags(
        (name = "Articles", description = "Article submission and published reads"),
        (name = "Announcements", description = "Announcement submission and published reads"),
        (name = "Content", description = "Kind-agnostic item operations"),
        (name = "Moderation", description = "Review queue and publication decisions"),
        (name = "Categories", description = "Category aggregation over published articles"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Veche API",
        description = "Content moderation and publication backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
