//! 필드 경로 모듈
//!
//! 점(.)으로 구분된 필드 경로를 사용한 중첩 JSON 값 조회를 담당합니다.

use serde_json::Value;
use std::fmt;

/// 컴파일된 필드 경로 (예: "fields.verboseMessage")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// 새 필드 경로 생성
    ///
    /// # Arguments
    /// * `path` - 점으로 구분된 경로 문자열 (빈 문자열이면 비어 있는 경로)
    ///
    /// # Examples
    /// ```
    /// use logparse::field_path::FieldPath;
    /// use serde_json::json;
    ///
    /// let path = FieldPath::new("fields.verboseMessage");
    /// let doc = json!({"fields": {"verboseMessage": "A very verbose log message"}});
    /// assert_eq!(path.resolve(&doc), Some(&json!("A very verbose log message")));
    /// ```
    pub fn new(path: &str) -> Self {
        let segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.').map(str::to_string).collect()
        };

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// 경로가 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 원본 경로 문자열 반환
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 경로 세그먼트 목록 반환
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// JSON 문서에서 경로가 가리키는 값 조회
    ///
    /// 객체는 키로, 배열은 숫자 인덱스로 내려갑니다.
    /// 빈 경로이거나 중간 세그먼트가 없으면 `None`을 반환합니다.
    pub fn resolve<'a>(&self, json: &'a Value) -> Option<&'a Value> {
        if self.segments.is_empty() {
            return None;
        }

        let mut current = json;
        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
