//! logparse - DOCKER-COMPOSE LOG PARSER
//!
//! `docker-compose logs` 출력에서 서비스 이름과 내장 JSON 메시지를 추출하고,
//! JSON 필드 값으로 필터링하여 `서비스 | 메시지` 형식으로 다시 출력하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🎯 **필드 선택**: 점 표기법으로 중첩 JSON 필드를 메시지로 출력
//! - 🔍 **필드 필터링**: JSON 필드 값이 일치하는 라인만 출력
//! - 🧩 **JSON 전용 모드**: JSON이 없는 텍스트 로그 숨기기
//! - ↩️ **줄바꿈 들여쓰기**: 메시지 내 `\n`을 들여쓴 줄바꿈으로 변환
//! - 🎨 **컬러 출력**: 가독성 높은 구분자 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! docker-compose logs | logparse
//!
//! # 중첩 필드를 메시지로 출력
//! docker-compose logs | logparse --path fields.verboseMessage
//!
//! # ERROR 레벨만 출력
//! docker-compose logs | logparse --filter-path level --filter-value ERROR
//! ```

pub mod cli;
pub mod error;
pub mod field_path;
pub mod logging;
pub mod output;
pub mod parser;
pub mod stats;
pub mod stream;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{LogParseError, Result};
pub use field_path::FieldPath;
pub use output::format_line;
pub use parser::{parse_line, ParseConfig, ParsedLine};
pub use stats::{format_bytes, Statistics};
pub use stream::process_stream;
