//! 에러 타입 정의 모듈
//!
//! logparse에서 발생할 수 있는 에러 타입을 정의합니다.
//! 라인 단위 파싱 실패(잘못된 JSON, 없는 필드)는 에러가 아니며 여기에 포함되지 않습니다.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// logparse에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum LogParseError {
    /// 입력 파일 열기 실패
    #[error("입력 파일을 열 수 없습니다 ({path}): {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 입력 스트림 읽기 실패 (치명적)
    #[error("입력 스트림 읽기 실패 ({line}번째 줄): {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// 출력 쓰기 실패
    #[error("출력 쓰기 실패: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

/// logparse 결과 타입 별칭
pub type Result<T> = std::result::Result<T, LogParseError>;
