// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{announcements, articles, categories, content, moderation},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::submit_article),
        )
        .route("/api/v1/articles/direct", post(articles::create_article))
        .route("/api/v1/articles/recent", get(articles::recent_articles))
        .route("/api/v1/articles/random", get(articles::random_article))
        .route("/api/v1/articles/digest", get(articles::article_digest))
        .route("/api/v1/articles/mine", get(articles::my_articles))
        .route(
            "/api/v1/articles/by-title/{title}",
            get(articles::article_by_title),
        )
        .route(
            "/api/v1/articles/by-category/{name}",
            get(articles::articles_by_category),
        )
        .route(
            "/api/v1/announcements",
            get(announcements::list_announcements).post(announcements::submit_announcement),
        )
        .route(
            "/api/v1/announcements/mine",
            get(announcements::my_announcements),
        )
        .route(
            "/api/v1/content/{id}",
            get(content::get_content)
                .put(content::update_content)
                .delete(content::delete_content),
        )
        .route("/api/v1/moderation/pending", get(moderation::list_pending))
        .route(
            "/api/v1/moderation/{id}/approve",
            post(moderation::approve_content),
        )
        .route(
            "/api/v1/moderation/{id}/reject",
            post(moderation::reject_content),
        )
        .route("/api/v1/categories", get(categories::list_categories))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// Browser clients come from the configured origins only; "*" opts into
/// reflecting any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
