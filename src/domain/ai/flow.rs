//! 프롬프트 플로우
//!
//! 입력 검증 → 템플릿 렌더링 → 모델 호출 → 출력 스키마 검증 → 타입 결과.
//! 각 플로우는 상태를 갖지 않으며 호출 한 번에 요청 한 번만 보냅니다.
//! 재시도, 캐싱, 스트리밍은 하지 않습니다.

use std::time::Duration;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::client::{ModelClient, OutputSchema, PromptRequest};
use super::dto::{
    FeedbackSummaryRequest, FeedbackSummaryResult, ProductDescriptionRequest,
    ProductDescriptionResult,
};
use super::prompt::{
    render, FEEDBACK_SUMMARY_SYSTEM_PROMPT, FEEDBACK_SUMMARY_USER_TEMPLATE,
    PRODUCT_DESCRIPTION_SYSTEM_PROMPT, PRODUCT_DESCRIPTION_USER_TEMPLATE,
};
use crate::utils::error::AppError;

/// 입력/출력 스키마와 프롬프트 템플릿의 묶음
pub trait PromptFlow {
    type Input: Validate + Sync;
    type Output: DeserializeOwned + JsonSchema + Validate;

    /// 플로우 이름 (출력 스키마 이름으로도 사용)
    const NAME: &'static str;
    /// 출력 스키마 설명
    const DESCRIPTION: &'static str;
    const SYSTEM_PROMPT: &'static str;
    const USER_TEMPLATE: &'static str;
    const TEMPERATURE: f32;

    /// 템플릿에 치환할 필드 목록
    fn fields(input: &Self::Input) -> Vec<(&'static str, &str)>;

    /// 검증된 입력으로 프롬프트 생성
    fn prompt(input: &Self::Input) -> PromptRequest {
        PromptRequest {
            system: Self::SYSTEM_PROMPT.to_string(),
            user: render(Self::USER_TEMPLATE, &Self::fields(input)),
            temperature: Self::TEMPERATURE,
        }
    }

    /// 출력 타입에서 생성한 JSON Schema
    fn output_schema() -> Result<OutputSchema, AppError> {
        let mut schema = serde_json::to_value(schemars::schema_for!(Self::Output))
            .map_err(|e| AppError::internal_error(format!("스키마 생성 실패: {}", e)))?;

        if let Some(object) = schema.as_object_mut() {
            object.remove("$schema");
        }

        Ok(OutputSchema {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            schema,
        })
    }
}

/// 의약품 설명 생성 플로우
pub struct ProductDescriptionFlow;

impl PromptFlow for ProductDescriptionFlow {
    type Input = ProductDescriptionRequest;
    type Output = ProductDescriptionResult;

    const NAME: &'static str = "product_description";
    const DESCRIPTION: &'static str =
        "Professional medicine description and usage instructions for a catalog listing";
    const SYSTEM_PROMPT: &'static str = PRODUCT_DESCRIPTION_SYSTEM_PROMPT;
    const USER_TEMPLATE: &'static str = PRODUCT_DESCRIPTION_USER_TEMPLATE;
    const TEMPERATURE: f32 = 0.4;

    fn fields(input: &Self::Input) -> Vec<(&'static str, &str)> {
        vec![
            ("name", input.name.as_deref().unwrap_or_default()),
            ("category", input.category.as_deref().unwrap_or_default()),
            ("description", input.description.as_deref().unwrap_or_default()),
            ("usage", input.usage.as_deref().unwrap_or_default()),
        ]
    }
}

/// 기사 피드백 요약 플로우
pub struct FeedbackSummaryFlow;

impl PromptFlow for FeedbackSummaryFlow {
    type Input = FeedbackSummaryRequest;
    type Output = FeedbackSummaryResult;

    const NAME: &'static str = "feedback_summary";
    const DESCRIPTION: &'static str = "Improvement-focused summary of driver feedback";
    const SYSTEM_PROMPT: &'static str = FEEDBACK_SUMMARY_SYSTEM_PROMPT;
    const USER_TEMPLATE: &'static str = FEEDBACK_SUMMARY_USER_TEMPLATE;
    const TEMPERATURE: f32 = 0.3;

    fn fields(input: &Self::Input) -> Vec<(&'static str, &str)> {
        vec![("feedback", input.feedback.as_deref().unwrap_or_default())]
    }
}

/// 플로우 한 번 실행
///
/// 입력 검증에 실패하면 모델을 호출하지 않습니다.
/// `timeout` 안에 모델이 응답하지 않으면 `ModelUnavailable`로 실패합니다.
pub async fn run_flow<F: PromptFlow>(
    client: &dyn ModelClient,
    input: &F::Input,
    timeout: Duration,
) -> Result<F::Output, AppError> {
    input.validate()?;

    let prompt = F::prompt(input);
    let schema = F::output_schema()?;

    tracing::debug!(
        flow = F::NAME,
        prompt_length = prompt.user.len(),
        "Prompt rendered"
    );

    let raw = tokio::time::timeout(timeout, client.generate(&prompt, &schema))
        .await
        .map_err(|_| {
            AppError::ModelUnavailable(format!("{}초 안에 응답하지 않았습니다", timeout.as_secs()))
        })??;

    let output = parse_output::<F::Output>(&raw)?;

    tracing::debug!(flow = F::NAME, response_length = raw.len(), "Model output accepted");

    Ok(output)
}

/// 모델 원문을 출력 타입으로 엄격하게 파싱
///
/// 코드 펜스나 앞뒤 문장으로 감싼 단일 JSON 객체까지만 허용합니다.
pub fn parse_output<T>(raw: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let json = extract_json_object(raw)?;

    let output: T =
        serde_json::from_str(json).map_err(|e| AppError::schema_mismatch(e.to_string()))?;

    output
        .validate()
        .map_err(|e| AppError::schema_mismatch(e.to_string()))?;

    Ok(output)
}

/// 원문에서 완결된 JSON 객체 하나를 추출
///
/// 앞뒤 문장에 중괄호가 있어도 괜찮지만, 완결된 객체가 두 개 이상이면 거부합니다.
fn extract_json_object(raw: &str) -> Result<&str, AppError> {
    let (start, end) = find_json_object(raw, 0)
        .ok_or_else(|| AppError::schema_mismatch("JSON 객체를 찾을 수 없습니다"))?;

    if find_json_object(raw, end).is_some() {
        return Err(AppError::schema_mismatch("JSON 객체가 두 개 이상입니다"));
    }

    Ok(&raw[start..end])
}

/// `from` 이후 처음으로 완결된 객체를 이루는 `{`의 바이트 구간
fn find_json_object(raw: &str, from: usize) -> Option<(usize, usize)> {
    raw[from..].match_indices('{').find_map(|(offset, _)| {
        let start = from + offset;
        let mut stream =
            serde_json::Deserializer::from_str(&raw[start..]).into_iter::<serde_json::Value>();
        match stream.next() {
            Some(Ok(serde_json::Value::Object(_))) => Some((start, start + stream.byte_offset())),
            _ => None,
        }
    })
}
