mod common;

use axum::body::to_bytes;
use common::{build_test_router, get, SECRET};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works_without_token() {
    let (_tmp, app) = build_test_router(Some(SECRET)).await;

    let response = app.oneshot(get("/api/v1/healthz", None)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}
