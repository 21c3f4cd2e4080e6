use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};

use crate::utils::error::AppError;

/// 모델에 보낼 렌더링된 프롬프트
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// 모델 응답이 따라야 하는 출력 스키마 기술자
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
}

/// 제공자 연결 실패 시 클라이언트에 노출하는 메시지
const PROVIDER_UNREACHABLE: &str = "AI 제공자에 연결할 수 없습니다";
/// 제공자 서버 오류 시 클라이언트에 노출하는 메시지
const PROVIDER_SERVER_ERROR: &str = "AI 제공자 서버 오류";
/// 그 외 전송 실패 시 클라이언트에 노출하는 메시지
const PROVIDER_REQUEST_FAILED: &str = "AI 제공자 요청이 실패했습니다";

/// OpenAI 에러를 세분화된 AppError로 변환
///
/// 제공자 원문(URL 포함)은 로그에만 남기고 응답에는 고정 메시지를 담습니다.
fn classify_openai_error(error: OpenAIError) -> AppError {
    match &error {
        OpenAIError::ApiError(api_err) => {
            let err_type = api_err.r#type.as_deref().unwrap_or("");
            let err_code = api_err.code.as_deref().unwrap_or("");
            let message = &api_err.message;

            if err_code == "invalid_api_key"
                || (err_type == "invalid_request_error" && message.contains("API key"))
            {
                AppError::ModelAuthError
            } else if err_code == "rate_limit_exceeded"
                || err_type == "rate_limit_error"
                || err_type == "insufficient_quota"
                || message.contains("rate limit")
            {
                AppError::ModelRateLimited
            } else if err_type == "server_error"
                || err_code.contains("server")
                || message.contains("server")
            {
                tracing::warn!(error_type = %err_type, error_code = %err_code, "OpenAI server error: {}", message);
                AppError::ModelUnavailable(PROVIDER_SERVER_ERROR.to_string())
            } else {
                AppError::ModelInvocationError(message.clone())
            }
        }
        OpenAIError::Reqwest(req_err) => {
            tracing::warn!(error = %req_err, "OpenAI transport error");
            classify_transport_failure(
                req_err.is_timeout() || req_err.is_connect(),
                req_err.status().map(|s| s.as_u16()),
            )
        }
        _ => AppError::ModelInvocationError(error.to_string()),
    }
}

/// 전송 계층 실패 분류 (연결 실패 여부와 HTTP 상태만 사용)
fn classify_transport_failure(unreachable: bool, status: Option<u16>) -> AppError {
    match status {
        _ if unreachable => AppError::ModelUnavailable(PROVIDER_UNREACHABLE.to_string()),
        Some(401) => AppError::ModelAuthError,
        Some(429) => AppError::ModelRateLimited,
        Some(s) if s >= 500 => AppError::ModelUnavailable(PROVIDER_SERVER_ERROR.to_string()),
        _ => AppError::ModelInvocationError(PROVIDER_REQUEST_FAILED.to_string()),
    }
}

/// 모델 호출 인터페이스
///
/// 프롬프트와 출력 스키마를 받아 모델이 생성한 원문을 돌려줍니다.
/// 원문이 스키마에 맞는지는 호출 측에서 검증합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &PromptRequest,
        schema: &OutputSchema,
    ) -> Result<String, AppError>;
}

/// Arc로 래핑된 모델 클라이언트 (Clone 지원)
pub type AiClient = Arc<dyn ModelClient>;

/// OpenAI API 클라이언트 구현체
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, api_base: &str, model: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl ModelClient for OpenAiClient {
    async fn generate(
        &self,
        prompt: &PromptRequest,
        schema: &OutputSchema,
    ) -> Result<String, AppError> {
        let messages = vec![
            build_system_message(&prompt.system)?,
            build_user_message(&prompt.user)?,
        ];

        let response_format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: schema.name.clone(),
                description: Some(schema.description.clone()),
                schema: Some(schema.schema.clone()),
                strict: Some(false),
            },
        };

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .temperature(prompt.temperature)
            .response_format(response_format)
            .build()
            .map_err(|e| AppError::internal_error(e.to_string()))?;

        tracing::debug!(model = %self.model, schema = %schema.name, "Calling OpenAI chat completion");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(classify_openai_error)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::schema_mismatch("모델이 빈 응답을 반환했습니다"))
    }
}

/// 메시지 빌더 헬퍼 함수 (crate 내부용)
pub(crate) fn build_system_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::System(
        ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal_error(e.to_string()))?,
    ))
}

pub(crate) fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal_error(e.to_string()))?,
    ))
}
