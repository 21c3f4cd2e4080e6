use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::{info, Instrument};
use uuid::Uuid;

/// 요청 ID 헤더 이름
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청마다 ID를 붙이고 span 안에서 처리 결과를 기록
///
/// 클라이언트가 보낸 `x-request-id`가 있으면 그대로 쓰고, 없으면 새로 발급합니다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        info!(
            duration_ms = duration_ms,
            status = status,
            method = %method,
            path = %path,
            "request completed"
        );

        response.headers_mut().insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&request_id)
                .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
        );
        response
    }
    .instrument(span)
    .await
}
