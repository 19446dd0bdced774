// tests/http_api.rs
mod support;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use support::*;
use tower::util::ServiceExt as _;

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _h) = make_test_router(vec![]);

    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn invalid_bearer_token_returns_401() {
    let (app, _h) = make_test_router(vec![]);

    let resp = app
        .oneshot(
            Request::get("/api/v1/articles/mine")
                .header(AUTHORIZATION, "Bearer bad-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn article_listing_is_public_and_published_only() {
    let (app, _h) = make_test_router(vec![
        ContentItemBuilder::article("Видимая").published().build(),
        ContentItemBuilder::article("Скрытая").build(),
    ]);

    let resp = app
        .oneshot(Request::get("/api/v1/articles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Видимая");
}

#[tokio::test]
async fn submission_requires_a_token() {
    let (app, _h) = make_test_router(vec![]);

    let payload = serde_json::json!({
        "title": "Новая статья",
        "intro": "Вступление",
    });

    let resp = app
        .clone()
        .oneshot(
            Request::post("/api/v1/articles")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(
            Request::post("/api/v1/articles")
                .header(AUTHORIZATION, "Bearer user-token")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["kind"], "article");
}

#[tokio::test]
async fn moderation_endpoints_reject_plain_users() {
    let item = ContentItemBuilder::article("t").build();
    let id = item.id.0;
    let (app, _h) = make_test_router(vec![item]);

    let resp = app
        .clone()
        .oneshot(
            Request::get("/api/v1/moderation/pending")
                .header(AUTHORIZATION, "Bearer user-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .oneshot(
            Request::post(format!("/api/v1/moderation/{id}/approve"))
                .header(AUTHORIZATION, "Bearer user-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn full_moderation_round_trip_over_http() {
    let (app, _h) = make_test_router(vec![]);

    let payload = serde_json::json!({
        "title": "Ступени обучения",
        "intro": "Основы практики",
        "categories": ["Обучение"],
    });
    let resp = app
        .clone()
        .oneshot(
            Request::post("/api/v1/articles")
                .header(AUTHORIZATION, "Bearer user-token")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let submitted = json_body(resp).await;
    let id = submitted["id"].as_str().unwrap().to_string();

    // invisible to the public while pending
    let resp = app
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/content/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // moderator approves
    let resp = app
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/moderation/{id}/approve"))
                .header(AUTHORIZATION, "Bearer admin-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // now public, and counted in its category
    let resp = app
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/content/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::get("/api/v1/categories").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = json_body(resp).await;
    assert_eq!(json[0]["name"], "Обучение");
    assert_eq!(json[0]["count"], 1);
}

#[tokio::test]
async fn double_approval_over_http_is_a_conflict() {
    let item = ContentItemBuilder::article("t").build();
    let id = item.id.0;
    let (app, _h) = make_test_router(vec![item]);

    let approve = || {
        Request::post(format!("/api/v1/moderation/{id}/approve"))
            .header(AUTHORIZATION, "Bearer admin-token")
            .body(Body::empty())
            .unwrap()
    };

    let first = app.clone().oneshot(approve()).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(approve()).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = json_body(second).await;
    assert_eq!(json["error"], "Conflict");
}

#[tokio::test]
async fn cors_reflects_only_configured_origins() {
    let (app, _h) = make_test_router(vec![]);

    let resp = app
        .clone()
        .oneshot(
            Request::get("/health")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );

    let resp = app
        .oneshot(
            Request::get("/health")
                .header("origin", "http://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn random_article_endpoint_serves_a_published_article() {
    let (app, _h) = make_test_router(vec![
        ContentItemBuilder::article("Колокола").published().build(),
        ContentItemBuilder::article("Черновик").build(),
    ]);

    let resp = app
        .oneshot(
            Request::get("/api/v1/articles/random")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["title"], "Колокола");
}
