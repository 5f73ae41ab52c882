//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::parser::ParseConfig;

/// logparse CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "logparse",
    author = "YourName <your@email.com>",
    version,
    about = "DOCKER-COMPOSE LOG PARSER - compose 로그에서 JSON 메시지를 추출/필터링하는 CLI 도구",
    long_about = r#"
DOCKER-COMPOSE LOG PARSER
=========================

`서비스 | 메시지` 형식의 로그를 표준 입력으로 받아
메시지에 포함된 JSON에서 원하는 필드만 골라 출력합니다.

특징:
  • 점 표기법으로 중첩 필드 선택 (fields.verboseMessage)
  • JSON 필드 값 기반 필터링
  • JSON이 아닌 라인 숨기기

예제:
  docker-compose logs | logparse
  docker-compose logs | logparse --path fields.verboseMessage
  docker-compose logs | logparse --filter-path level --filter-value ERROR
  docker-compose logs | logparse --json-only
"#
)]
pub struct Args {
    /// 로그 메시지로 출력할 JSON 필드 경로 (점 표기법)
    #[arg(short, long, env = "LOGPARSE_PATH", default_value = "message")]
    pub path: String,

    /// 필터링에 사용할 JSON 필드 경로 (--filter-value와 함께 사용)
    #[arg(
        long,
        alias = "filterPath",
        env = "LOGPARSE_FILTER_PATH",
        default_value = ""
    )]
    pub filter_path: String,

    /// 필터 값 (--filter-path가 없으면 JSON이 아닌 라인 전체에서 검색)
    #[arg(
        long,
        alias = "filterValue",
        env = "LOGPARSE_FILTER_VALUE",
        default_value = ""
    )]
    pub filter_value: String,

    /// 텍스트 로그를 무시하고 JSON 로그만 출력
    #[arg(long, alias = "JSONOnly")]
    pub json_only: bool,

    /// 입력 파일 경로 (기본값: 표준 입력)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 컬러 출력 끄기
    #[arg(long)]
    pub no_color: bool,

    /// 종료 시 처리 통계를 stderr에 출력
    #[arg(long)]
    pub stats: bool,

    /// 상세 진단 로그 (stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 파싱 옵션으로 변환
    pub fn to_parse_config(&self) -> ParseConfig {
        ParseConfig::new()
            .with_message_path(self.path.as_str())
            .with_filter_path(self.filter_path.as_str())
            .with_filter_value(self.filter_value.as_str())
            .with_json_only(self.json_only)
    }

    /// 필터 값만 있고 필터 경로가 없는지 확인
    pub fn has_bare_filter_value(&self) -> bool {
        self.filter_path.is_empty() && !self.filter_value.is_empty()
    }
}
