use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, Response};
use serde_json::Value;

/// GET request with an optional Cookie header, e.g. "token=abc; role=admin"
pub fn get(path: &str, cookies: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::empty()).expect("request")
}

/// POST request with a JSON body and an optional Cookie header
pub fn post_json(path: &str, cookies: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
