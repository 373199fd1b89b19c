use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Request id attached by [`request_id_layer`], or "-" outside of it.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
}

fn new_request_id() -> String {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    format!("req-{nanos}")
}

fn incoming_id(headers: &HeaderMap) -> Option<HeaderValue> {
    let v = headers.get(REQUEST_ID_HEADER)?;
    let s = v.to_str().ok()?;
    if s.trim().is_empty() {
        return None;
    }
    Some(v.clone())
}

/// Keeps a caller-supplied `X-Request-Id` or mints one, so handlers can log
/// it, and echoes it on the response.
pub async fn request_id_layer(mut req: Request<Body>, next: Next) -> Response {
    let id = match incoming_id(req.headers()) {
        Some(v) => v,
        None => match HeaderValue::from_str(&new_request_id()) {
            Ok(v) => v,
            Err(_) => return next.run(req).await,
        },
    };

    req.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
    let mut res = next.run(req).await;
    res.headers_mut().insert(REQUEST_ID_HEADER, id);
    res
}
