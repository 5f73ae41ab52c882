//! 로그 라인 파싱 모듈
//!
//! docker-compose 로그 한 줄에서 서비스 이름과 내장 JSON 메시지를 추출하고
//! 필터 조건에 따라 표시 여부를 결정합니다.

use serde_json::Value;
use tracing::trace;

use crate::field_path::FieldPath;

/// 서비스 이름과 메시지를 구분하는 문자
pub const SERVICE_SEPARATOR: char = '|';

/// 메시지 내 `\n` 시퀀스를 치환할 때 사용하는 들여쓰기
pub const CONTINUATION_INDENT: &str = "\n    ";

/// 라인 파싱 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 서비스 이름 (구분자가 없으면 빈 문자열)
    pub service: String,
    /// 표시할 메시지
    pub message: String,
    /// 출력 여부
    pub display: bool,
    /// 내장 JSON 파싱 성공 여부
    pub is_json: bool,
}

/// 라인 파싱 옵션
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// 출력할 메시지 필드 경로
    pub message_path: FieldPath,
    /// 필터 비교에 사용할 필드 경로 (비어 있으면 필터 없음)
    pub filter_path: FieldPath,
    /// 필터 값
    pub filter_value: String,
    /// JSON이 없는 라인 숨기기
    pub json_only: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            message_path: FieldPath::new("message"),
            filter_path: FieldPath::default(),
            filter_value: String::new(),
            json_only: false,
        }
    }
}

impl ParseConfig {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 메시지 필드 경로 설정
    pub fn with_message_path(mut self, path: impl Into<FieldPath>) -> Self {
        self.message_path = path.into();
        self
    }

    /// 필터 필드 경로 설정
    pub fn with_filter_path(mut self, path: impl Into<FieldPath>) -> Self {
        self.filter_path = path.into();
        self
    }

    /// 필터 값 설정
    pub fn with_filter_value(mut self, value: impl Into<String>) -> Self {
        self.filter_value = value.into();
        self
    }

    /// JSON 전용 모드 설정
    pub fn with_json_only(mut self, json_only: bool) -> Self {
        self.json_only = json_only;
        self
    }
}

/// 로그 한 줄 파싱
///
/// 실패하지 않습니다. 잘못된 JSON이나 없는 필드는 일반 텍스트 처리로 대체됩니다.
///
/// # Arguments
/// * `line` - 원본 로그 라인 (줄바꿈 제외)
/// * `config` - 파싱 옵션
///
/// # Examples
/// ```
/// use logparse::parser::{parse_line, ParseConfig};
///
/// let config = ParseConfig::new();
/// let parsed = parse_line(r#"web_1  | {"message": "started"}"#, &config);
///
/// assert_eq!(parsed.service, "web_1  ");
/// assert_eq!(parsed.message, "started");
/// assert!(parsed.display);
/// ```
pub fn parse_line(line: &str, config: &ParseConfig) -> ParsedLine {
    let (service, raw_message) = split_service(line);
    let mut message = raw_message.to_string();
    let mut display = true;

    let document = parse_embedded_json(raw_message);
    let is_json = document.is_some();

    match document {
        Some(json) => {
            match config.message_path.resolve(&json) {
                Some(Value::String(text)) => message = indent_newlines(text),
                Some(other) => trace!(
                    path = %config.message_path,
                    value = %other,
                    "메시지 필드가 문자열이 아님, 원본 유지"
                ),
                None => trace!(path = %config.message_path, "메시지 필드 없음, 원본 유지"),
            }

            if !config.filter_path.is_empty() {
                let matched = config
                    .filter_path
                    .resolve(&json)
                    .is_some_and(|value| value_matches(value, &config.filter_value));
                display = matched;
            }
        }
        None => {
            if config.json_only {
                display = false;
            } else if !config.filter_value.is_empty() && message.contains(&config.filter_value) {
                display = false;
            }
        }
    }

    ParsedLine {
        service: service.to_string(),
        message,
        display,
        is_json,
    }
}

/// 첫 번째 구분자를 기준으로 서비스 이름과 메시지 분리
///
/// 구분자가 없으면 서비스는 빈 문자열, 메시지는 라인 전체입니다.
pub fn split_service(line: &str) -> (&str, &str) {
    line.split_once(SERVICE_SEPARATOR).unwrap_or(("", line))
}

/// 메시지에서 첫 `{`부터 마지막 `}`까지의 구간 추출
///
/// 쌍이 없으면 빈 문자열을 반환합니다.
pub fn extract_json(message: &str) -> &str {
    match (message.find('{'), message.rfind('}')) {
        (Some(start), Some(end)) if start < end => &message[start..=end],
        _ => "",
    }
}

/// 내장 JSON 파싱 (후보가 없거나 파싱 실패 시 `None`)
fn parse_embedded_json(message: &str) -> Option<Value> {
    let candidate = extract_json(message);
    if candidate.is_empty() {
        return None;
    }

    match serde_json::from_str(candidate) {
        Ok(json) => Some(json),
        Err(e) => {
            trace!(error = %e, "JSON 후보 파싱 실패, 일반 텍스트로 처리");
            None
        }
    }
}

/// 리터럴 `\n` 두 글자를 줄바꿈 + 4칸 들여쓰기로 치환
pub fn indent_newlines(text: &str) -> String {
    text.replace("\\n", CONTINUATION_INDENT)
}

/// 필터 필드 값과 필터 값 비교
///
/// 문자열/숫자/불리언은 정규 문자열 표현으로 비교합니다 (`500`, `true`).
/// null, 배열, 객체는 항상 불일치입니다.
pub fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        Value::Bool(b) => b.to_string() == expected,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}
