/// 请求日志中间件
pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        "{} {} -> {} ({}ms)",
        method,
        path,
        response.status(),
        start.elapsed().as_millis()
    );
    response
}
