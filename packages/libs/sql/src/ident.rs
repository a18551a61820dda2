//! 동적 식별자
//!
//! 스키마/테이블/컬럼 이름이 SQL 본문에 들어가는 유일한 경로입니다.
//! 식별자는 신뢰된 입력으로 취급되며 파라미터로 바인딩되지 않습니다.

use std::fmt;

/// 동적 식별자 (스키마, 테이블, 컬럼 이름)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 큰따옴표로 감싼 형태. 컬럼 이름에 사용해 대소문자와 특수문자를
    /// 보존합니다.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Ident::new(name)
    }
}

/// 스키마로 한정된 테이블 참조
///
/// `<schema>.<table>` 형태로 본문에 삽입됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Ident,
    pub table: Ident,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: Ident::new(schema),
            table: Ident::new(table),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ref_display() {
        let table = TableRef::new("public", "users");
        assert_eq!(table.to_string(), "public.users");
    }

    #[test]
    fn test_column_quoting_preserves_case() {
        let column = Ident::new("createdAt");
        assert_eq!(column.quoted(), "\"createdAt\"");
    }
}
