use serde::Serialize;
use utoipa::ToSchema;

/// API 명세에 맞는 기본 응답 구조체
///
/// 형식:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "성공입니다.",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 성공 응답 생성
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "성공입니다.".to_string(),
            result: Some(result),
        }
    }
}

/// 에러 응답 구조체
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 성공 여부 (에러 시 항상 false)
    #[schema(example = false)]
    pub is_success: bool,

    /// 에러 코드
    #[schema(example = "AI_004")]
    pub code: String,

    /// 에러 메시지
    #[schema(example = "AI 서비스 호출에 실패했습니다.")]
    pub message: String,

    pub result: Option<()>,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_format() {
        #[derive(Serialize)]
        struct TestData {
            value: String,
        }

        let response = BaseResponse::success(TestData {
            value: "test".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isSuccess"], true);
        assert_eq!(json["code"], "COMMON200");
        assert_eq!(json["message"], "성공입니다.");
        assert_eq!(json["result"]["value"], "test");
    }

    #[test]
    fn test_error_response_format() {
        let response = ErrorResponse::new("AI_005", "AI 응답 형식이 올바르지 않습니다.");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["code"], "AI_005");
        assert!(json["result"].is_null());
    }
}
