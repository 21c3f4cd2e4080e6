use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 공백만 있는 문자열 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("빈 값일 수 없습니다".into());
        return Err(error);
    }
    Ok(())
}

/// 의약품 설명 생성 요청 DTO
///
/// 네 필드 모두 필수이며 `description`, `usage`는 빈 문자열을 허용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptionRequest {
    /// 의약품 이름
    #[validate(
        required(message = "name은 필수입니다"),
        length(max = 200, message = "name은 200자 이하여야 합니다")
    )]
    #[serde(default)]
    #[schema(example = "Ibuprofen 200mg")]
    pub name: Option<String>,

    /// 카테고리
    #[validate(
        required(message = "category는 필수입니다"),
        length(max = 100, message = "category는 100자 이하여야 합니다")
    )]
    #[serde(default)]
    #[schema(example = "Pain Relief")]
    pub category: Option<String>,

    /// 작성 중인 설명 또는 키워드 (빈 문자열 허용)
    #[validate(
        required(message = "description은 필수입니다"),
        length(max = 5000, message = "description은 5000자 이하여야 합니다")
    )]
    #[serde(default)]
    #[schema(example = "anti-inflammatory, fever")]
    pub description: Option<String>,

    /// 작성 중인 복용법 (빈 문자열 허용)
    #[validate(
        required(message = "usage는 필수입니다"),
        length(max = 5000, message = "usage는 5000자 이하여야 합니다")
    )]
    #[serde(default)]
    #[schema(example = "")]
    pub usage: Option<String>,
}

impl ProductDescriptionRequest {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            description: Some(description.into()),
            usage: Some(usage.into()),
        }
    }
}

/// 의약품 설명 생성 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptionResult {
    /// 다듬어진 의약품 설명
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Ibuprofen 200mg is a nonsteroidal anti-inflammatory drug (NSAID)...")]
    pub description: String,

    /// 다듬어진 복용법
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Take one tablet every 4 to 6 hours with food...")]
    pub usage: String,
}

/// 기사 피드백 요약 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummaryRequest {
    /// 기사에 대한 자유 형식 피드백 (여러 문단 가능)
    #[validate(
        required(message = "feedback은 필수입니다"),
        length(min = 1, max = 10000, message = "feedback은 1자 이상 10000자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    #[serde(default)]
    #[schema(example = "Driver was late three times.")]
    pub feedback: Option<String>,
}

impl FeedbackSummaryRequest {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: Some(feedback.into()),
        }
    }
}

/// 기사 피드백 요약 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummaryResult {
    /// 개선점 중심의 요약
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Punctuality is the main issue: the driver arrived late on three deliveries.")]
    pub summary: String,
}

/// 의약품 설명 생성 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptionSuccessResponse {
    /// 성공 여부
    #[schema(example = true)]
    pub is_success: bool,

    /// 응답 코드
    #[schema(example = "COMMON200")]
    pub code: String,

    /// 응답 메시지
    #[schema(example = "성공입니다.")]
    pub message: String,

    /// 생성 결과
    pub result: ProductDescriptionResult,
}

/// 피드백 요약 성공 응답 (OpenAPI 스키마용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummarySuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,

    #[schema(example = "COMMON200")]
    pub code: String,

    #[schema(example = "성공입니다.")]
    pub message: String,

    /// 요약 결과
    pub result: FeedbackSummaryResult,
}
