//! 진단 로그 모듈
//!
//! tracing-subscriber를 stderr에 연결합니다. stdout은 로그 출력 전용입니다.
//!
//! 우선순위: RUST_LOG 환경 변수 > --verbose (debug) > 기본값 "warn"

use tracing_subscriber::EnvFilter;

/// 기본 로그 레벨
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 로그 필터 생성
pub fn build_filter(verbose: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// 로그 서브시스템 초기화
///
/// 전역 구독자가 이미 설정되어 있으면 아무것도 하지 않습니다.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "로그 초기화 완료"
        );
    }
}
