//! AI 프롬프트 모듈
//!
//! 의약품 설명 생성과 기사 피드백 요약에 사용되는 프롬프트를 관리합니다.
//!
//! ## 구조
//! - `template`: `{{field}}` 치환 렌더러
//! - `product_description`: 의약품 설명 생성 프롬프트
//! - `feedback_summary`: 피드백 요약 프롬프트

mod feedback_summary;
mod product_description;
pub mod template;

// 의약품 설명 프롬프트 재노출
pub use product_description::SYSTEM_PROMPT as PRODUCT_DESCRIPTION_SYSTEM_PROMPT;
pub use product_description::USER_TEMPLATE as PRODUCT_DESCRIPTION_USER_TEMPLATE;

// 피드백 요약 프롬프트 재노출
pub use feedback_summary::SYSTEM_PROMPT as FEEDBACK_SUMMARY_SYSTEM_PROMPT;
pub use feedback_summary::USER_TEMPLATE as FEEDBACK_SUMMARY_USER_TEMPLATE;

pub use template::render;
