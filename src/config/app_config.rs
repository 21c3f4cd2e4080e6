use std::env;
use std::time::Duration;

/// OpenAI 기본 엔드포인트
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// 기본 채팅 모델
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// 모델 호출 기본 타임아웃 (초)
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 25;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,

    // AI Service
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub openai_model: String,
    pub ai_timeout_secs: u64,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "OPENAI_API_KEY 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "test-key".to_string()
        });

        let openai_api_base =
            env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string());

        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string());

        let ai_timeout_secs = match env::var("AI_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_AI_TIMEOUT_SECS,
        };

        Ok(Self {
            server_port,
            openai_api_key,
            openai_api_base,
            openai_model,
            ai_timeout_secs,
        })
    }

    /// 모델 호출 타임아웃
    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidTimeout(raw.to_string())),
        Ok(secs) => Ok(secs),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid AI timeout: {0} (must be a positive number of seconds)")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positive_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), 30);
        assert_eq!(parse_timeout(" 5 ").unwrap(), 5);
    }

    #[test]
    fn should_reject_zero_timeout() {
        assert!(matches!(
            parse_timeout("0"),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn should_reject_non_numeric_timeout() {
        assert!(matches!(
            parse_timeout("soon"),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn should_convert_timeout_to_duration() {
        let config = AppConfig {
            server_port: 8080,
            openai_api_key: "test-key".to_string(),
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            ai_timeout_secs: 12,
        };

        assert_eq!(config.ai_timeout(), Duration::from_secs(12));
    }
}
