//! 파라미터화된 SQL 문장
//!
//! 값이 SQL에 들어가는 유일한 경로입니다. 빌더는 본문에 `$1`, `$2`, …
//! 자리표시자를 쓰고 실제 값은 `params`에 같은 순서로 쌓습니다.

use tbk_core::SqlValue;

/// SQL 본문 + 위치 파라미터
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// 파라미터 없는 문장
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// `$1`부터 시작하는 자리표시자 목록을 만들어 줍니다.
pub(crate) fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "$1");
        assert_eq!(placeholders(3), "$1, $2, $3");
    }
}
