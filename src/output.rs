//! 출력 포맷 모듈
//!
//! 파싱된 라인을 `서비스 | 메시지` 형식으로 렌더링합니다.

use colored::Colorize;

use crate::parser::ParsedLine;

/// 서비스 이름 최소 표시 폭
pub const SERVICE_WIDTH: usize = 10;

/// 출력 라인 생성 (줄바꿈 제외)
///
/// # Examples
/// ```
/// use logparse::output::format_line;
/// use logparse::parser::{parse_line, ParseConfig};
///
/// let parsed = parse_line(r#"web | {"message": "ready"}"#, &ParseConfig::new());
/// assert_eq!(format_line(&parsed, false), "web        | ready");
/// ```
pub fn format_line(parsed: &ParsedLine, color: bool) -> String {
    if color {
        // compose가 서비스 이름에 붙인 색상을 구분자 뒤에서 끊는다
        format!(
            "{:<width$} {}\x1b[0m {}",
            parsed.service,
            "|".dimmed(),
            parsed.message,
            width = SERVICE_WIDTH
        )
    } else {
        format!(
            "{:<width$} | {}",
            parsed.service,
            parsed.message,
            width = SERVICE_WIDTH
        )
    }
}
