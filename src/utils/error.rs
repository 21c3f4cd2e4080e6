use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::response::ErrorResponse;

/// 에러 분류
///
/// 프롬프트 플로우의 실패는 모두 아래 세 가지 중 하나로 귀결됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 모델 호출 전 입력 검증 실패
    Validation,
    /// 모델 제공자 호출 실패 (네트워크, 인증, 한도, 타임아웃)
    ModelInvocation,
    /// 모델이 응답했으나 선언된 스키마와 맞지 않음
    SchemaMismatch,
    /// 그 외 서버 내부 오류
    Internal,
}

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    #[error("AI 서비스 인증에 실패했습니다.")]
    ModelAuthError,

    #[error("AI 서비스 요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.")]
    ModelRateLimited,

    #[error("AI 서비스가 일시적으로 응답하지 않습니다: {0}")]
    ModelUnavailable(String),

    #[error("AI 서비스 호출에 실패했습니다: {0}")]
    ModelInvocationError(String),

    #[error("AI 응답 형식이 올바르지 않습니다: {0}")]
    SchemaMismatchError(String),

    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 분류 반환
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) | AppError::JsonParseFailed(_) => ErrorKind::Validation,
            AppError::ModelAuthError
            | AppError::ModelRateLimited
            | AppError::ModelUnavailable(_)
            | AppError::ModelInvocationError(_) => ErrorKind::ModelInvocation,
            AppError::SchemaMismatchError(_) => ErrorKind::SchemaMismatch,
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::ModelAuthError => "AI_001",
            AppError::ModelRateLimited => "AI_002",
            AppError::ModelUnavailable(_) => "AI_003",
            AppError::ModelInvocationError(_) => "AI_004",
            AppError::SchemaMismatchError(_) => "AI_005",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::ModelAuthError => StatusCode::BAD_GATEWAY,
            AppError::ModelRateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ModelInvocationError(_) => StatusCode::BAD_GATEWAY,
            AppError::SchemaMismatchError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match self.kind() {
            ErrorKind::Validation => {
                warn!(code = %error_code, "Rejected request: {}", message);
            }
            ErrorKind::Internal => {
                error!("Internal Server Error: {}", message);
            }
            _ => {
                error!(code = %error_code, "AI flow failed: {}", message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// validator 검증 실패를 AppError로 변환
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의 함수들
impl AppError {
    pub fn validation_error(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        AppError::SchemaMismatchError(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }
}
