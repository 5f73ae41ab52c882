//! 스트림 처리 모듈
//!
//! 입력 스트림을 한 줄씩 읽어 파싱하고, 표시 대상 라인을 출력합니다.

use std::borrow::Cow;
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

use crate::error::{LogParseError, Result};
use crate::output::format_line;
use crate::parser::{parse_line, ParseConfig};
use crate::stats::Statistics;

/// 입력 스트림 전체 처리
///
/// 입력 읽기 실패는 치명적이며 즉시 반환됩니다.
/// 출력 측 파이프가 닫힌 경우(`| head` 등)는 정상 종료로 취급합니다.
///
/// # Arguments
/// * `reader` - 줄 단위 입력
/// * `writer` - 출력 대상
/// * `config` - 파싱 옵션
/// * `color` - 컬러 출력 여부
/// * `stats` - 통계 수집기
pub fn process_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &ParseConfig,
    color: bool,
    stats: &mut Statistics,
) -> Result<()> {
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        let bytes = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LogParseError::Read {
                line: line_no + 1,
                source,
            })?;

        if bytes == 0 {
            break;
        }
        line_no += 1;

        let line = decode_line(&buf);
        let parsed = parse_line(&line, config);
        stats.record(&parsed, bytes as u64);

        if !parsed.display {
            continue;
        }

        let rendered = format_line(&parsed, color);
        match writeln!(writer, "{}", rendered).and_then(|_| writer.flush()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(line = line_no, "출력 파이프 닫힘, 처리 중단");
                return Ok(());
            }
            Err(source) => return Err(LogParseError::Write { source }),
        }
    }

    debug!(lines = line_no, "입력 스트림 종료");
    Ok(())
}

/// 줄 끝 문자(`\n`, `\r\n`) 제거 및 UTF-8 디코딩
fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    let mut end = buf.len();
    if end > 0 && buf[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && buf[end - 1] == b'\r' {
            end -= 1;
        }
    }
    String::from_utf8_lossy(&buf[..end])
}
