//! 스키마 카탈로그
//!
//! information_schema 뷰를 읽어 스키마/테이블/컬럼 메타데이터를
//! 조회합니다. 존재하지 않는 테이블은 에러가 아니라 빈 결과입니다 —
//! 사전 존재 검사는 하지 않습니다.

use tbk_core::{ColumnMeta, Record, SqlValue, TableInfo};
use tbk_sql::{build_select, build_select_by_id, Statement, TableRef};

use crate::decode::SqlRow;
use crate::error::Result;
use crate::gateway::Gateway;

const SCHEMAS_SQL: &str = "SELECT schema_name FROM information_schema.schemata";

const TABLES_SQL: &str = "SELECT table_schema, table_name, table_type \
     FROM information_schema.tables WHERE table_schema = $1";

const COLUMNS_SQL: &str = "SELECT table_schema, table_name, column_name, data_type, is_nullable \
     FROM information_schema.columns WHERE table_schema = $1 AND table_name = $2 \
     ORDER BY ordinal_position";

/// 데이터베이스의 모든 스키마 이름
pub async fn list_schemas(gateway: &Gateway) -> Result<Vec<String>> {
    let rows = gateway.fetch(&Statement::new(SCHEMAS_SQL)).await?;
    Ok(rows
        .iter()
        .filter_map(|row| row.text("schema_name").map(str::to_string))
        .collect())
}

/// 스키마의 테이블 목록. 테이블이 없으면 빈 목록.
pub async fn list_tables(gateway: &Gateway, schema: &str) -> Result<Vec<TableInfo>> {
    let stmt = Statement::with_params(TABLES_SQL, vec![SqlValue::from(schema)]);
    let rows = gateway.fetch(&stmt).await?;
    Ok(rows.iter().map(table_from_row).collect())
}

/// 테이블의 컬럼 메타데이터, ordinal 순서.
pub async fn list_columns(gateway: &Gateway, schema: &str, table: &str) -> Result<Vec<ColumnMeta>> {
    let rows = gateway.fetch(&columns_statement(schema, table)).await?;
    Ok(rows.iter().map(column_from_row).collect())
}

/// 컬럼 메타데이터 + id로 찾은 행 하나를 한 번의 왕복으로
///
/// 결과 셋 순서는 항상 메타데이터 먼저, 데이터 다음입니다.
pub async fn get_columns_and_record(
    gateway: &Gateway,
    schema: &str,
    table: &str,
    id: i64,
) -> Result<(Vec<ColumnMeta>, Option<Record>)> {
    let table_ref = TableRef::new(schema, table);
    let batch = [
        columns_statement(schema, table),
        build_select_by_id(&table_ref, id),
    ];
    let (meta_rows, data_rows) = split_pair(gateway.fetch_batch(&batch).await?);

    let columns = meta_rows.iter().map(column_from_row).collect();
    let record = data_rows
        .into_iter()
        .next()
        .map(|row| row.into_record(schema, table));
    Ok((columns, record))
}

/// 컬럼 메타데이터 + 테이블 전체 행을 한 번의 왕복으로
pub async fn get_columns_and_records(
    gateway: &Gateway,
    schema: &str,
    table: &str,
) -> Result<(Vec<ColumnMeta>, Vec<Record>)> {
    let table_ref = TableRef::new(schema, table);
    let batch = [columns_statement(schema, table), build_select(&table_ref)];
    let (meta_rows, data_rows) = split_pair(gateway.fetch_batch(&batch).await?);

    let columns = meta_rows.iter().map(column_from_row).collect();
    let records = data_rows
        .into_iter()
        .map(|row| row.into_record(schema, table))
        .collect();
    Ok((columns, records))
}

/// 컬럼 메타데이터 조회 문장. 배치 경로와 단독 경로가 같은 문장을 씁니다.
fn columns_statement(schema: &str, table: &str) -> Statement {
    Statement::with_params(
        COLUMNS_SQL,
        vec![SqlValue::from(schema), SqlValue::from(table)],
    )
}

/// 두 문장 배치의 결과 셋을 (첫 번째, 두 번째)로 분리
fn split_pair(mut results: Vec<Vec<SqlRow>>) -> (Vec<SqlRow>, Vec<SqlRow>) {
    let second = if results.len() > 1 {
        results.pop().unwrap_or_default()
    } else {
        Vec::new()
    };
    let first = results.pop().unwrap_or_default();
    (first, second)
}

fn table_from_row(row: &SqlRow) -> TableInfo {
    TableInfo {
        schema: row.text("table_schema").unwrap_or_default().to_string(),
        name: row.text("table_name").unwrap_or_default().to_string(),
        kind: row.text("table_type").unwrap_or_default().to_string(),
    }
}

fn column_from_row(row: &SqlRow) -> ColumnMeta {
    ColumnMeta {
        schema: row.text("table_schema").unwrap_or_default().to_string(),
        table: row.text("table_name").unwrap_or_default().to_string(),
        name: row.text("column_name").unwrap_or_default().to_string(),
        data_type: row.text("data_type").unwrap_or_default().to_string(),
        nullable: row.text("is_nullable") == Some("YES"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_row(name: &str, data_type: &str, nullable: &str) -> SqlRow {
        SqlRow::from_pairs(vec![
            ("table_schema".to_string(), SqlValue::from("public")),
            ("table_name".to_string(), SqlValue::from("users")),
            ("column_name".to_string(), SqlValue::from(name)),
            ("data_type".to_string(), SqlValue::from(data_type)),
            ("is_nullable".to_string(), SqlValue::from(nullable)),
        ])
    }

    #[test]
    fn test_column_from_row() {
        let meta = column_from_row(&column_row("email", "text", "YES"));
        assert_eq!(meta.name, "email");
        assert_eq!(meta.data_type, "text");
        assert!(meta.nullable);

        let meta = column_from_row(&column_row("id", "integer", "NO"));
        assert!(!meta.nullable);
    }

    #[test]
    fn test_columns_statement_binds_names_as_values() {
        // 카탈로그 뷰 조회에서 스키마/테이블 이름은 값으로 바인딩된다
        let stmt = columns_statement("public", "users");
        assert!(stmt.sql.contains("$1") && stmt.sql.contains("$2"));
        assert_eq!(
            stmt.params,
            vec![SqlValue::from("public"), SqlValue::from("users")]
        );
    }

    #[test]
    fn test_split_pair_preserves_statement_order() {
        let first = vec![SqlRow::from_pairs(vec![(
            "a".to_string(),
            SqlValue::Int(1),
        )])];
        let second = vec![SqlRow::from_pairs(vec![(
            "b".to_string(),
            SqlValue::Int(2),
        )])];
        let (m, d) = split_pair(vec![first.clone(), second.clone()]);
        assert_eq!(m, first);
        assert_eq!(d, second);
    }
}
