use std::time::Duration;

use super::{
    client::AiClient,
    dto::{
        FeedbackSummaryRequest, FeedbackSummaryResult, ProductDescriptionRequest,
        ProductDescriptionResult,
    },
    flow::{run_flow, FeedbackSummaryFlow, ProductDescriptionFlow},
};
use crate::utils::error::AppError;

/// AI 서비스
///
/// 두 프롬프트 플로우의 호출 진입점입니다. 공유하는 것은 읽기 전용 클라이언트뿐이라
/// 여러 요청을 동시에 처리해도 서로 영향을 주지 않습니다.
/// 실패 로그는 응답 변환 시점(`AppError::into_response`)에서 한 번만 남깁니다.
#[derive(Clone)]
pub struct AiService {
    client: AiClient,
    timeout: Duration,
}

impl AiService {
    pub fn new(client: AiClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// 키워드와 부분 정보로 의약품 설명과 복용법 생성
    pub async fn generate_product_description(
        &self,
        request: &ProductDescriptionRequest,
    ) -> Result<ProductDescriptionResult, AppError> {
        run_flow::<ProductDescriptionFlow>(self.client.as_ref(), request, self.timeout).await
    }

    /// 기사 피드백을 개선점 중심으로 요약
    pub async fn summarize_driver_feedback(
        &self,
        request: &FeedbackSummaryRequest,
    ) -> Result<FeedbackSummaryResult, AppError> {
        run_flow::<FeedbackSummaryFlow>(self.client.as_ref(), request, self.timeout).await
    }
}
