#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use planetarium_api::auth::jwt::{generate_access_token, JwtConfig};
use planetarium_api::config::ServerConfig;
use planetarium_api::router::build_app_router;
use planetarium_api::state::AppState;
use planetarium_core::storage::LocalBlobStore;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const MEDIA_URL: &str = "/media";
const BOUNDARY: &str = "----planetarium-test-boundary";

/// Ids carried by the tokens minted below. Catalog handlers only inspect
/// the claims, so no matching user row is needed.
pub const STAFF_USER_ID: i64 = 1_000;
pub const REGULAR_USER_ID: i64 = 2_000;

/// Build a test `ServerConfig` with safe defaults and media under `media_root`.
pub fn test_config(media_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 10 * 1024 * 1024,
        media_root,
        media_url: MEDIA_URL.to_string(),
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Application under test: the production router over a scratch media dir.
pub struct TestApp {
    pub pool: PgPool,
    pub config: ServerConfig,
    pub store: LocalBlobStore,
    router: Router,
    _media: TempDir,
}

impl TestApp {
    pub fn new(pool: PgPool) -> Self {
        let media = tempfile::tempdir().expect("temp media dir");
        let config = test_config(media.path().to_path_buf());
        let store = LocalBlobStore::new(media.path(), MEDIA_URL);

        let state = AppState {
            pool: pool.clone(),
            config: Arc::new(config.clone()),
            blob_store: Arc::new(store.clone()),
        };
        let router = build_app_router(state, &config);

        Self {
            pool,
            config,
            store,
            router,
            _media: media,
        }
    }

    /// A fresh handle on the router; `oneshot` consumes it.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn staff_token(&self) -> String {
        generate_access_token(STAFF_USER_ID, true, &self.config.jwt).unwrap()
    }

    pub fn user_token(&self) -> String {
        generate_access_token(REGULAR_USER_ID, false, &self.config.jwt).unwrap()
    }

    /// Filesystem path behind an image handle returned by the API.
    pub fn media_path(&self, handle: &str) -> PathBuf {
        self.store
            .path_for_handle(handle)
            .unwrap_or_else(|| panic!("handle {handle} is not a media url"))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token)).await
}

/// Send a body-less request with an optional bearer token.
pub async fn send(app: Router, method: Method, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, None, body).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, Method::POST, uri, Some(token), body).await
}

pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// One part of a `multipart/form-data` body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    parts: &[Part<'_>],
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A small JPEG encoded on the fly.
pub fn jpeg_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([20, 30, 120]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Jpeg)
        .unwrap();
    buf.into_inner()
}

/// A small PNG encoded on the fly.
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 255, 255]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
