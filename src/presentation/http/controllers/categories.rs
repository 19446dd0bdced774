// src/presentation/http/controllers/categories.rs
use crate::application::dto::CategoryCountDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "Categories of published articles with counts, name order.", body = [CategoryCountDto])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryCountDto>>> {
    state
        .services
        .category_queries
        .with_counts()
        .await
        .into_http()
        .map(Json)
}
