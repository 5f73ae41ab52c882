//! 통계 및 유틸리티 모듈
//!
//! 실행 중 라인 처리 통계 수집 및 포맷팅을 담당합니다.
//! 요약은 stdout(데이터 채널)을 오염시키지 않도록 stderr로 출력합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::parser::ParsedLine;

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 읽은 라인 수
    pub lines_read: u64,
    /// 출력된 라인 수
    pub lines_displayed: u64,
    /// 숨겨진 라인 수
    pub lines_hidden: u64,
    /// JSON 라인 수
    pub json_lines: u64,
    /// 일반 텍스트 라인 수
    pub plain_lines: u64,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파싱 결과 기록
    pub fn record(&mut self, parsed: &ParsedLine, bytes: u64) {
        self.lines_read += 1;
        self.bytes_read += bytes;

        if parsed.is_json {
            self.json_lines += 1;
        } else {
            self.plain_lines += 1;
        }

        if parsed.display {
            self.lines_displayed += 1;
        } else {
            self.lines_hidden += 1;
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력 (stderr)
    pub fn print_summary(&self) {
        eprintln!("\n{}", "═".repeat(50).bright_blue());
        eprintln!("{}", " 📊 처리 통계".bright_white().bold());
        eprintln!("{}", "═".repeat(50).bright_blue());

        eprintln!("  {} 읽은 라인:    {}", "📥".bright_cyan(), self.lines_read);
        eprintln!(
            "  {} 출력:         {}",
            "✅".bright_green(),
            self.lines_displayed.to_string().green()
        );
        eprintln!(
            "  {} 숨김:         {}",
            "🙈".bright_yellow(),
            self.lines_hidden.to_string().yellow()
        );
        eprintln!(
            "  {} JSON/텍스트:  {} / {}",
            "🧩".bright_magenta(),
            self.json_lines,
            self.plain_lines
        );
        eprintln!(
            "  {} 입력 용량:    {}",
            "📦".bright_white(),
            format_bytes(self.bytes_read)
        );

        if self.lines_read > 0 {
            let display_rate = (self.lines_displayed as f64 / self.lines_read as f64) * 100.0;
            eprintln!("  {} 출력률:       {:.1}%", "📈".bright_white(), display_rate);
        }

        eprintln!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        eprintln!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use logparse::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
