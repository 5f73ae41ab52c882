//! 통합 테스트 모듈
//!
//! logparse의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::io::Cursor;

use logparse::{process_stream, ParseConfig, Statistics};

/// 테스트용 compose 로그 샘플
const COMPOSE_LOG: &str = r#"Attaching to app_api_1, app_db_1
api_1  | {"level": "INFO", "message": "server started", "port": 8080}
db_1   | LOG:  database system is ready to accept connections
api_1  | {"level": "ERROR", "message": "request failed\\nat handler.rs:42", "status": 500}
api_1  | {not valid json}
worker_1 | {"level": "WARN", "fields": {"verboseMessage": "queue is slow"}}
"#;

/// 스트림 처리 후 출력 문자열 반환
fn run_stream(input: &str, config: &ParseConfig) -> (String, Statistics) {
    let mut output = Vec::new();
    let mut stats = Statistics::new();
    process_stream(Cursor::new(input), &mut output, config, false, &mut stats).unwrap();
    (String::from_utf8(output).unwrap(), stats)
}

mod parser_tests {
    use logparse::{parse_line, ParseConfig};

    #[test]
    fn test_level_filter() {
        let config = ParseConfig::new()
            .with_filter_path("level")
            .with_filter_value("ERROR");

        let error = parse_line(r#"svc | {"level":"ERROR","message":"x"}"#, &config);
        let info = parse_line(r#"svc | {"level":"INFO","message":"x"}"#, &config);

        assert!(error.display);
        assert!(!info.display);
    }

    #[test]
    fn test_lines_without_separator_have_no_service() {
        let config = ParseConfig::new();

        for line in ["plain text", "{\"message\": \"bare json\"}", ""] {
            assert_eq!(parse_line(line, &config).service, "");
        }
        assert_eq!(
            parse_line("{\"message\": \"bare json\"}", &config).message,
            "bare json"
        );
    }

    #[test]
    fn test_reparse_of_plain_output_is_stable() {
        let config = ParseConfig::new();
        let first = parse_line("db_1 | connection reset", &config);

        let rendered = logparse::format_line(&first, false);
        let second = parse_line(&rendered, &config);

        assert_eq!(second.message.trim(), first.message.trim());
        assert_eq!(second.service.trim(), first.service.trim());
    }

    #[test]
    fn test_json_only_with_malformed_json() {
        let config = ParseConfig::new().with_json_only(true);
        assert!(!parse_line("svc | {not valid json}", &config).display);
    }

    #[test]
    fn test_escaped_newlines_indented() {
        let parsed = parse_line(
            r#"svc | {"message": "a\\nb\\nc"}"#,
            &ParseConfig::new(),
        );
        assert_eq!(parsed.message, "a\n    b\n    c");
    }
}

mod stream_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let (output, stats) = run_stream(COMPOSE_LOG, &ParseConfig::new());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "           | Attaching to app_api_1, app_db_1");
        assert_eq!(lines[1], "api_1      | server started");
        assert_eq!(
            lines[2],
            "db_1       |  LOG:  database system is ready to accept connections"
        );
        assert_eq!(lines[3], "api_1      | request failed");
        assert_eq!(lines[4], "    at handler.rs:42");
        assert_eq!(lines[5], "api_1      |  {not valid json}");
        assert!(lines[6].starts_with("worker_1   |  {\"level\": \"WARN\""));

        assert_eq!(stats.lines_read, 6);
        assert_eq!(stats.lines_displayed, 6);
        assert_eq!(stats.json_lines, 3);
        assert_eq!(stats.plain_lines, 3);
    }

    #[test]
    fn test_filter_by_level() {
        let config = ParseConfig::new()
            .with_filter_path("level")
            .with_filter_value("ERROR");
        let (output, stats) = run_stream(COMPOSE_LOG, &config);

        // 텍스트 라인은 필터 값 미포함이므로 그대로 출력
        assert!(output.contains("Attaching to"));
        assert!(output.contains("request failed"));
        assert!(!output.contains("server started"));
        assert!(!output.contains("queue is slow"));
        assert_eq!(stats.lines_hidden, 2);
    }

    #[test]
    fn test_filter_by_numeric_status() {
        let config = ParseConfig::new()
            .with_filter_path("status")
            .with_filter_value("500")
            .with_json_only(true);
        let (output, _) = run_stream(COMPOSE_LOG, &config);

        assert_eq!(output, "api_1      | request failed\n    at handler.rs:42\n");
    }

    #[test]
    fn test_nested_message_path() {
        let config = ParseConfig::new()
            .with_message_path("fields.verboseMessage")
            .with_json_only(true);
        let (output, _) = run_stream(COMPOSE_LOG, &config);

        assert!(output.contains("worker_1   | queue is slow\n"));
        // 경로가 없는 JSON 라인은 원본 텍스트 유지
        assert!(output.contains("api_1      |  {\"level\": \"INFO\""));
    }

    #[test]
    fn test_substring_filter_on_plain_lines() {
        let config = ParseConfig::new().with_filter_value("database");
        let (output, _) = run_stream(COMPOSE_LOG, &config);

        assert!(!output.contains("database system"));
        assert!(output.contains("Attaching to"));
        assert!(output.contains("server started"));
    }

    #[test]
    fn test_json_only() {
        let config = ParseConfig::new().with_json_only(true);
        let (_, stats) = run_stream(COMPOSE_LOG, &config);

        assert_eq!(stats.lines_displayed, 3);
        assert_eq!(stats.lines_hidden, 3);
    }
}

mod file_input_tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::BufReader;
    use tempfile::TempDir;

    #[test]
    fn test_process_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compose.log");
        fs::write(&path, COMPOSE_LOG).unwrap();

        let reader = BufReader::new(File::open(&path).unwrap());
        let mut output = Vec::new();
        let mut stats = Statistics::new();
        process_stream(reader, &mut output, &ParseConfig::new(), false, &mut stats).unwrap();

        assert_eq!(stats.lines_read, 6);
        assert_eq!(stats.bytes_read, COMPOSE_LOG.len() as u64);
    }
}

mod error_tests {
    use logparse::error::LogParseError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_input_open_display() {
        let error = LogParseError::InputOpen {
            path: PathBuf::from("/nonexistent.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = error.to_string();
        assert!(msg.contains("입력 파일을 열 수 없습니다"));
        assert!(msg.contains("/nonexistent.log"));
    }

    #[test]
    fn test_read_error_display() {
        let error = LogParseError::Read {
            line: 12,
            source: io::Error::new(io::ErrorKind::Other, "device gone"),
        };
        let msg = error.to_string();
        assert!(msg.contains("12번째 줄"));
        assert!(msg.contains("device gone"));
    }
}

mod cli_tests {
    use clap::Parser;
    use logparse::cli::Args;

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "logparse",
            "--path",
            "fields.verboseMessage",
            "--filter-path",
            "level",
            "--filter-value",
            "ERROR",
            "--json-only",
            "--stats",
        ]);
        let config = args.to_parse_config();

        assert_eq!(config.message_path.as_str(), "fields.verboseMessage");
        assert_eq!(config.filter_path.as_str(), "level");
        assert_eq!(config.filter_value, "ERROR");
        assert!(config.json_only);
        assert!(args.stats);
        assert!(!args.has_bare_filter_value());
    }
}
