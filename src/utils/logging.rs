//! 로깅 초기화 모듈
//!
//! JSON 형식의 구조화된 로깅을 제공합니다.
//! stdout과 일별 로그 파일에 동시 출력합니다.

use tracing_appender::rolling;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// 기본 로그 필터
pub const DEFAULT_LOG_FILTER: &str = "info,meddash_ai=debug,tower_http=debug";

/// 로깅 시스템을 초기화합니다.
///
/// 환경 변수 `RUST_LOG`로 로그 레벨을 바꿀 수 있고, 없으면 [`DEFAULT_LOG_FILTER`]를 사용합니다.
/// 파일 로그는 `log_dir` 아래 `meddash-ai.log.YYYY-MM-DD` 형식으로 남습니다.
///
/// 반환되는 `WorkerGuard`를 main에서 유지해야 종료 시 버퍼링된 로그가 손실되지 않습니다.
pub fn init_logging(log_dir: &str) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily(log_dir, "meddash-ai.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // 이미 초기화된 경우(테스트 등)는 무시
            if is_already_initialized(&err) {
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok();

    guard
}

/// 전역 subscriber가 이미 설정되어 실패한 것인지 확인
fn is_already_initialized(err: &TryInitError) -> bool {
    use std::error::Error;

    err.source()
        .and_then(|source| source.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
        .is_some()
}
