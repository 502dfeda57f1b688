//! HTTP-level integration tests for the `/shows` endpoints.
//!
//! Covers authentication and staff checks, list filters, detail shape,
//! creation from JSON and multipart bodies, and rejected writes.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, get, get_auth, json_request, post_json_auth, post_multipart_auth, send, Part,
    TestApp,
};
use planetarium_db::models::show::CreateAstronomyShow;
use planetarium_db::models::theme::CreateShowTheme;
use planetarium_db::repositories::{ShowRepo, ThemeRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_theme(pool: &PgPool, name: &str) -> i64 {
    ThemeRepo::create(pool, &CreateShowTheme { name: name.into() })
        .await
        .unwrap()
        .id
}

async fn create_show(pool: &PgPool, title: &str, themes: Vec<i64>) -> i64 {
    ShowRepo::create(
        pool,
        &CreateAstronomyShow {
            title: title.into(),
            description: Some("Sample description".into()),
            show_themes: themes,
        },
    )
    .await
    .unwrap()
    .id
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("list responses are JSON arrays")
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect()
}

async fn show_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM astronomy_shows")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_requests_are_rejected(pool: PgPool) {
    let id = create_show(&pool, "Sample show", vec![]).await;
    let app = TestApp::new(pool.clone());

    let list = get(app.router(), "/api/v1/shows").await;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(list).await;
    assert_eq!(json["code"], "UNAUTHORIZED");

    let detail = get(app.router(), &format!("/api/v1/shows/{id}")).await;
    assert_eq!(detail.status(), StatusCode::UNAUTHORIZED);

    let create = json_request(
        app.router(),
        Method::POST,
        "/api/v1/shows",
        None,
        serde_json::json!({ "title": "Anonymous" }),
    )
    .await;
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);

    let upload = send(
        app.router(),
        Method::POST,
        &format!("/api/v1/shows/{id}/image"),
        None,
    )
    .await;
    assert_eq!(upload.status(), StatusCode::UNAUTHORIZED);

    // Even rejected write methods authenticate first.
    for (method, uri) in [
        (Method::DELETE, format!("/api/v1/shows/{id}")),
        (Method::PATCH, format!("/api/v1/shows/{id}")),
        (Method::PUT, "/api/v1/shows".to_string()),
    ] {
        let response = send(app.router(), method.clone(), &uri, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }

    let show = ShowRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(show.image, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_token_is_rejected(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get_auth(app.router(), "/api/v1/shows", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// List and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_shows_with_theme_ids(pool: PgPool) {
    let moon = create_theme(&pool, "Moon").await;
    let a = create_show(&pool, "Sample show", vec![moon]).await;
    let b = create_show(&pool, "Another show", vec![]).await;
    let app = TestApp::new(pool);

    let response = get_auth(app.router(), "/api/v1/shows", &app.user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![a, b]);
    assert_eq!(json[0]["title"], "Sample show");
    assert_eq!(json[0]["description"], "Sample description");
    assert_eq!(json[0]["show_themes"], serde_json::json!([moon]));
    assert!(json[0]["image"].is_null());
    assert_eq!(json[1]["show_themes"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_show_themes(pool: PgPool) {
    let moon = create_theme(&pool, "Moon").await;
    let mars = create_theme(&pool, "Mars").await;
    let other = create_theme(&pool, "Other").await;
    let s1 = create_show(&pool, "Moon", vec![moon]).await;
    let s2 = create_show(&pool, "Mars", vec![mars]).await;
    let _s3 = create_show(&pool, "Unthemed", vec![]).await;
    let _s4 = create_show(&pool, "Other", vec![other]).await;
    let app = TestApp::new(pool);

    let response = get_auth(
        app.router(),
        &format!("/api/v1/shows?show_themes={moon},{mars}"),
        &app.user_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![s1, s2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_titles_filter_selects_by_id(pool: PgPool) {
    let a = create_show(&pool, "test_title1", vec![]).await;
    let _b = create_show(&pool, "test_title2", vec![]).await;
    let c = create_show(&pool, "test_title3", vec![]).await;
    let app = TestApp::new(pool);

    let response = get_auth(
        app.router(),
        &format!("/api/v1/shows?titles={a},{c}"),
        &app.user_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![a, c]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_filter_is_ignored(pool: PgPool) {
    let a = create_show(&pool, "A", vec![]).await;
    let app = TestApp::new(pool);

    let response = get_auth(app.router(), "/api/v1/shows?show_themes=", &app.user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![a]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_integer_filter_is_rejected(pool: PgPool) {
    let app = TestApp::new(pool);

    let response = get_auth(
        app.router(),
        "/api/v1/shows?show_themes=1,moon",
        &app.user_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_nests_full_themes(pool: PgPool) {
    let moon = create_theme(&pool, "Moon").await;
    let id = create_show(&pool, "Sample show", vec![moon]).await;
    let app = TestApp::new(pool);

    let response = get_auth(app.router(), &format!("/api/v1/shows/{id}"), &app.user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(
        json["show_themes"],
        serde_json::json!([{ "id": moon, "name": "Moon" }])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_of_missing_show_is_404(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get_auth(app.router(), "/api/v1/shows/999999", &app.user_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_regular_user_cannot_create(pool: PgPool) {
    let app = TestApp::new(pool.clone());

    let response = post_json_auth(
        app.router(),
        "/api/v1/shows",
        &app.user_token(),
        serde_json::json!({ "title": "Sample", "description": "Sample description" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(show_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_creates_show_from_json(pool: PgPool) {
    let moon = create_theme(&pool, "Moon").await;
    let mars = create_theme(&pool, "Mars").await;
    let app = TestApp::new(pool.clone());

    let response = post_json_auth(
        app.router(),
        "/api/v1/shows",
        &app.staff_token(),
        serde_json::json!({
            "title": "Sample",
            "description": "Sample description",
            "show_themes": [moon, mars, 999_999],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Sample");
    assert!(json["image"].is_null());
    let theme_ids: Vec<i64> = json["show_themes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(theme_ids, vec![moon, mars], "unknown theme ids are skipped");
    assert_eq!(show_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_creates_show_from_multipart_and_image_is_ignored(pool: PgPool) {
    let moon = create_theme(&pool, "Moon").await;
    let mars = create_theme(&pool, "Mars").await;
    let app = TestApp::new(pool);
    let jpeg = common::jpeg_bytes();
    let moon_id = moon.to_string();
    let mars_id = mars.to_string();

    let response = post_multipart_auth(
        app.router(),
        "/api/v1/shows",
        &app.staff_token(),
        &[
            Part::Text("title", "Sample"),
            Part::Text("description", "Sample description"),
            Part::Text("show_themes", &moon_id),
            Part::Text("show_themes", &mars_id),
            Part::File {
                name: "image",
                filename: "sky.jpg",
                content_type: "image/jpeg",
                data: &jpeg,
            },
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["description"], "Sample description");
    assert!(json["image"].is_null(), "create never stores an image");
    assert_eq!(json["show_themes"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_title_is_rejected(pool: PgPool) {
    let app = TestApp::new(pool.clone());

    for body in [
        serde_json::json!({ "title": "   " }),
        serde_json::json!({ "description": "No title" }),
    ] {
        let response =
            post_json_auth(app.router(), "/api/v1/shows", &app.staff_token(), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(show_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_are_not_allowed(pool: PgPool) {
    let id = create_show(&pool, "Sample", vec![]).await;
    let app = TestApp::new(pool.clone());
    let uri = format!("/api/v1/shows/{id}");

    for token in [app.staff_token(), app.user_token()] {
        for method in [Method::PUT, Method::PATCH] {
            let response = json_request(
                app.router(),
                method,
                &uri,
                Some(&token),
                serde_json::json!({ "title": "Renamed" }),
            )
            .await;
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body_json(response).await["code"], "METHOD_NOT_ALLOWED");
        }
        let response = send(app.router(), Method::DELETE, &uri, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    let show = ShowRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(show.title, "Sample");
}
