//! logparse - DOCKER-COMPOSE LOG PARSER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use tracing::debug;

use logparse::{cli::Args, error::LogParseError, logging, stats::Statistics, stream::process_stream};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    let color = !args.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    if args.has_bare_filter_value() {
        debug!(
            filter_value = %args.filter_value,
            "필터 경로 없음: JSON이 아닌 라인에서만 필터 값을 검색합니다"
        );
    }

    let config = args.to_parse_config();
    debug!(?config, "파싱 옵션");

    let reader = open_input(&args)?;
    let stdout = io::stdout();
    let mut stats = Statistics::new();

    process_stream(reader, stdout.lock(), &config, color, &mut stats)
        .context("로그 처리 실패")?;

    if args.stats {
        stats.print_summary();
    }

    Ok(())
}

/// 입력 스트림 열기 (파일 또는 표준 입력)
fn open_input(args: &Args) -> Result<Box<dyn BufRead>> {
    match args.input {
        Some(ref path) => {
            let file = File::open(path).map_err(|source| LogParseError::InputOpen {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
