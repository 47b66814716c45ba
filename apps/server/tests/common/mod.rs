#![allow(dead_code)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use nivesh_server::{api::app_router, build_state, config::Config};
use tempfile::TempDir;

pub const SECRET: &str = "test-secret-that-is-at-least-32-bytes";

pub fn test_config(tmp: &TempDir, jwt_secret: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp
            .path()
            .join("db")
            .join("test.db")
            .to_string_lossy()
            .to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        jwt_secret: jwt_secret.map(str::to_string),
        default_user_id: "local".to_string(),
    }
}

pub async fn build_test_router(jwt_secret: Option<&str>) -> (TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp, jwt_secret);
    let state = build_state(&config).await.unwrap();
    let router = app_router(state, &config).unwrap();
    (tmp, router)
}

pub fn token_for(user_id: &str) -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 3600;
    let claims = serde_json::json!({ "sub": user_id, "exp": exp });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
