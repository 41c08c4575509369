use super::format::format_number;
use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Log method, path, status, size and duration of every request.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let size = size.map(format_number).unwrap_or_else(|| "-".to_string());
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    }

    response
}
