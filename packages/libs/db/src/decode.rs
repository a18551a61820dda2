//! 동적 행 디코딩
//!
//! 컬럼 타입을 컴파일 타임에 모르므로, Postgres 타입 이름을 보고
//! `SqlValue`로 변환합니다. 디코딩할 수 없는 값은 NULL로 내려갑니다.

use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

use tbk_core::{Record, SqlValue};

/// 디코딩된 행: (컬럼 이름, 값) 쌍의 순서 있는 목록
#[derive(Debug, Clone, PartialEq)]
pub struct SqlRow {
    pairs: Vec<(String, SqlValue)>,
}

impl SqlRow {
    pub fn from_pairs(pairs: Vec<(String, SqlValue)>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, SqlValue)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, SqlValue)> {
        self.pairs
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.pairs
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(SqlValue::as_str)
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(SqlValue::as_i64)
    }

    /// 행을 출처 태그가 붙은 Record로 감쌉니다.
    pub fn into_record(self, schema: impl Into<String>, table: impl Into<String>) -> Record {
        Record::from_pairs(schema, table, self.pairs)
    }
}

/// `PgRow` → `SqlRow`
///
/// 타입 이름 기준 디코딩. 정수/실수는 넓은 타입으로 받고, UUID와
/// 타임스탬프는 문자열 표현으로 내립니다.
pub fn decode_row(row: &PgRow) -> SqlRow {
    let mut pairs = Vec::with_capacity(row.columns().len());

    for column in row.columns() {
        let name = column.name();
        let type_name = column.type_info().name().to_ascii_uppercase();
        let value = match type_name.as_str() {
            "INT2" | "INT4" | "INT8" | "INTEGER" | "BIGINT" => row
                .try_get::<Option<i64>, _>(name)
                .ok()
                .flatten()
                .map(SqlValue::Int),
            "FLOAT4" | "FLOAT8" | "DOUBLE PRECISION" => row
                .try_get::<Option<f64>, _>(name)
                .ok()
                .flatten()
                .map(SqlValue::Float),
            "BOOL" | "BOOLEAN" => row
                .try_get::<Option<bool>, _>(name)
                .ok()
                .flatten()
                .map(SqlValue::Bool),
            "JSON" | "JSONB" => row
                .try_get::<Option<serde_json::Value>, _>(name)
                .ok()
                .flatten()
                .map(SqlValue::Json),
            "UUID" => row
                .try_get::<Option<uuid::Uuid>, _>(name)
                .ok()
                .flatten()
                .map(|v| SqlValue::Text(v.to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name)
                .ok()
                .flatten()
                .map(|v| SqlValue::Text(v.to_rfc3339())),
            "TIMESTAMP" => row
                .try_get::<Option<chrono::NaiveDateTime>, _>(name)
                .ok()
                .flatten()
                .map(|v| SqlValue::Text(v.to_string())),
            _ => row
                .try_get::<Option<String>, _>(name)
                .ok()
                .flatten()
                .map(SqlValue::Text),
        }
        .unwrap_or(SqlValue::Null);

        pairs.push((name.to_string(), value));
    }

    SqlRow::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lookup() {
        let row = SqlRow::from_pairs(vec![
            ("id".to_string(), SqlValue::Int(1)),
            ("name".to_string(), SqlValue::Text("kim".to_string())),
        ]);
        assert_eq!(row.int("id"), Some(1));
        assert_eq!(row.text("name"), Some("kim"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_into_record_tags_origin() {
        let row = SqlRow::from_pairs(vec![("id".to_string(), SqlValue::Int(4))]);
        let record = row.into_record("public", "users");
        assert_eq!(record.schema(), "public");
        assert_eq!(record.table(), "users");
        assert_eq!(record.id(), Some(4));
    }
}
