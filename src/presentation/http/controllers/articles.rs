// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::content::{CreateArticleCommand, SubmitArticleCommand},
    dto::{ArticlePayloadDto, ContentItemDto},
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleListParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecentParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitArticleRequest {
    pub title: String,
    #[serde(flatten)]
    pub article: ArticlePayloadDto,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(flatten)]
    pub article: ArticlePayloadDto,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DigestResponse {
    pub digest: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(("q" = Option<String>, Query, description = "Case-insensitive substring filter over title and intro")),
    responses((status = 200, description = "Published articles, title order.", body = [ContentItemDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    let result = if let Some(query) = params.q {
        state
            .services
            .content_queries
            .search(ContentKind::Article, &query)
            .await
            .into_http()?
    } else {
        state
            .services
            .content_queries
            .list_published(ContentKind::Article)
            .await
            .into_http()?
    };

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/recent",
    params(("limit" = Option<u32>, Query, description = "Maximum items to return, defaults to 10")),
    responses((status = 200, description = "Recently changed published articles.", body = [ContentItemDto])),
    tag = "Articles"
)]
pub async fn recent_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RecentParams>,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    state
        .services
        .content_queries
        .list_recent(params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-category/{name}",
    params(("name" = String, Path, description = "Exact category name")),
    responses((status = 200, description = "Published articles in the category.", body = [ContentItemDto])),
    tag = "Articles"
)]
pub async fn articles_by_category(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    state
        .services
        .content_queries
        .list_by_category(&name)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-title/{title}",
    params(("title" = String, Path, description = "Exact article title")),
    responses(
        (status = 200, description = "The article.", body = ContentItemDto),
        (status = 404, description = "No article with that title is visible to the caller.")
    ),
    tag = "Articles"
)]
pub async fn article_by_title(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(title): Path<String>,
) -> HttpResult<Json<ContentItemDto>> {
    state
        .services
        .content_queries
        .get_article_by_title(&actor.0, &title)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/random",
    responses(
        (status = 200, description = "A randomly chosen published article.", body = ContentItemDto),
        (status = 404, description = "Nothing is published yet.")
    ),
    tag = "Articles"
)]
pub async fn random_article(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ContentItemDto>> {
    state
        .services
        .content_queries
        .random_article()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/digest",
    responses((status = 200, description = "One-line-per-article digest of published articles.", body = DigestResponse)),
    tag = "Articles"
)]
pub async fn article_digest(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DigestResponse>> {
    state
        .services
        .content_queries
        .published_digest()
        .await
        .into_http()
        .map(|digest| Json(DigestResponse { digest }))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/mine",
    responses((status = 200, description = "The caller's own articles, any status.", body = [ContentItemDto])),
    tag = "Articles"
)]
pub async fn my_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ContentItemDto>>> {
    state
        .services
        .content_queries
        .list_mine(&user.into(), ContentKind::Article)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = SubmitArticleRequest,
    responses(
        (status = 200, description = "The submitted article, pending review.", body = ContentItemDto),
        (status = 401, description = "Authentication required.")
    ),
    tag = "Articles"
)]
pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubmitArticleRequest>,
) -> HttpResult<Json<ContentItemDto>> {
    let command = SubmitArticleCommand {
        title: payload.title,
        article: payload.article,
        categories: payload.categories,
    };

    state
        .services
        .content_commands
        .submit_article(&user.into(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/direct",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "The created article.", body = ContentItemDto),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ContentItemDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        article: payload.article,
        categories: payload.categories,
        publish: payload.publish,
    };

    state
        .services
        .content_commands
        .create_article(&user.into(), command)
        .await
        .into_http()
        .map(Json)
}
