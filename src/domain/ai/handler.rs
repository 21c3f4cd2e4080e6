use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::dto::{
    FeedbackSummaryRequest, FeedbackSummaryResult, ProductDescriptionRequest,
    ProductDescriptionResult,
};
use crate::state::AppState;
use crate::utils::{error::AppError, response::BaseResponse};

/// 의약품 설명 생성
///
/// 관리자가 입력한 이름, 카테고리, 부분 설명/복용법을 바탕으로 카탈로그용 설명과 복용법을 생성합니다.
#[utoipa::path(
    post,
    path = "/api/ai/products/description",
    tag = "AI",
    request_body = ProductDescriptionRequest,
    responses(
        (status = 200, description = "생성 성공", body = crate::domain::ai::dto::ProductDescriptionSuccessResponse),
        (status = 400, description = "잘못된 요청", body = crate::utils::response::ErrorResponse),
        (status = 429, description = "AI 요청 한도 초과", body = crate::utils::response::ErrorResponse),
        (status = 502, description = "AI 호출 실패 또는 응답 형식 오류", body = crate::utils::response::ErrorResponse),
        (status = 503, description = "AI 서비스 일시 장애", body = crate::utils::response::ErrorResponse)
    )
)]
pub async fn generate_product_description(
    State(state): State<AppState>,
    request: Result<Json<ProductDescriptionRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<ProductDescriptionResult>>, AppError> {
    // JSON 파싱 에러 처리
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        name = request.name.as_deref().unwrap_or_default(),
        category = request.category.as_deref().unwrap_or_default(),
        "Product description request received"
    );

    let result = state.ai_service.generate_product_description(&request).await?;

    tracing::info!(
        description_length = result.description.len(),
        usage_length = result.usage.len(),
        "Product description generated successfully"
    );

    Ok(Json(BaseResponse::success(result)))
}

/// 기사 피드백 요약
///
/// 기사에 대한 자유 형식 피드백을 개선점 중심으로 요약합니다.
#[utoipa::path(
    post,
    path = "/api/ai/drivers/feedback-summary",
    tag = "AI",
    request_body = FeedbackSummaryRequest,
    responses(
        (status = 200, description = "요약 성공", body = crate::domain::ai::dto::FeedbackSummarySuccessResponse),
        (status = 400, description = "잘못된 요청", body = crate::utils::response::ErrorResponse),
        (status = 429, description = "AI 요청 한도 초과", body = crate::utils::response::ErrorResponse),
        (status = 502, description = "AI 호출 실패 또는 응답 형식 오류", body = crate::utils::response::ErrorResponse),
        (status = 503, description = "AI 서비스 일시 장애", body = crate::utils::response::ErrorResponse)
    )
)]
pub async fn summarize_driver_feedback(
    State(state): State<AppState>,
    request: Result<Json<FeedbackSummaryRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<FeedbackSummaryResult>>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        feedback_length = request.feedback.as_deref().map(str::len).unwrap_or(0),
        "Feedback summary request received"
    );

    let result = state.ai_service.summarize_driver_feedback(&request).await?;

    tracing::info!(
        summary_length = result.summary.len(),
        "Feedback summarized successfully"
    );

    Ok(Json(BaseResponse::success(result)))
}
