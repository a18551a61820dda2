//! 외래키 resolver
//!
//! 카탈로그에서 외래키 제약을 발견하고, 참조 행을 제약당 한 번의 쿼리로
//! 모아 조회한 뒤, Record의 외래키 슬롯을 중첩 Record로 하이드레이션
//! 합니다. 행 수와 무관하게 제약 k개면 추가 왕복은 k번입니다.

use std::collections::HashMap;

use tbk_core::{ForeignKey, Record, SqlValue};
use tbk_sql::{build_select, build_select_in, Ident, Statement, TableRef};

use crate::decode::SqlRow;
use crate::error::Result;
use crate::gateway::Gateway;

const FOREIGN_KEYS_SQL: &str = "SELECT \
         kcu.column_name, \
         ccu.table_schema AS foreign_table_schema, \
         ccu.table_name AS foreign_table_name, \
         ccu.column_name AS foreign_column_name \
     FROM information_schema.table_constraints AS tc \
     JOIN information_schema.key_column_usage AS kcu \
         ON tc.constraint_name = kcu.constraint_name \
     JOIN information_schema.constraint_column_usage AS ccu \
         ON ccu.constraint_name = tc.constraint_name \
     WHERE tc.constraint_type = 'FOREIGN KEY' \
         AND tc.table_schema = $1 AND tc.table_name = $2";

/// 테이블의 외래키 제약 목록. 제약이 없으면 빈 목록 (에러 아님).
pub async fn get_foreign_keys(
    gateway: &Gateway,
    schema: &str,
    table: &str,
) -> Result<Vec<ForeignKey>> {
    let stmt = Statement::with_params(
        FOREIGN_KEYS_SQL,
        vec![SqlValue::from(schema), SqlValue::from(table)],
    );
    let rows = gateway.fetch(&stmt).await?;
    Ok(rows.iter().map(foreign_key_from_row).collect())
}

/// Record들의 외래키 컬럼을 참조 행으로 하이드레이션
///
/// 제약마다: 모든 Record의 로컬 컬럼 원본 값 중 NULL이 아닌 것을 모아
/// IN 쿼리 한 번으로 참조 행을 가져오고, 각 Record의 해당 슬롯을 참조
/// 스키마/테이블 태그가 붙은 중첩 Record로 덮어씁니다. NULL 값과 일치
/// 행이 없는 값(dangling)은 슬롯을 건드리지 않습니다.
///
/// 제약 하나의 조회가 실패하면 호출 전체가 실패합니다 — 일부만
/// 하이드레이션된 상태를 성공으로 보고하지 않습니다.
pub async fn populate_foreign_values(
    gateway: &Gateway,
    schema: &str,
    table: &str,
    records: &mut [Record],
) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let foreign_keys = get_foreign_keys(gateway, schema, table).await?;
    for fk in &foreign_keys {
        let ids = collect_local_values(records, &fk.column);
        if ids.is_empty() {
            // 전부 NULL이면 조회할 것이 없다
            continue;
        }

        let table_ref = TableRef::new(fk.foreign_schema.as_str(), fk.foreign_table.as_str());
        let stmt = build_select_in(&table_ref, &Ident::new(fk.foreign_column.as_str()), ids);
        let rows = gateway.fetch(&stmt).await?;
        apply_foreign_rows(records, fk, &rows);
    }
    Ok(())
}

/// 제약마다 참조 테이블의 **전체** 행을 가져옵니다
///
/// 특정 Record를 하이드레이션하는 대신, 선택 UI 등에 쓸 후보 전체가
/// 필요할 때 사용합니다. 모든 제약의 조회를 한 번의 배치 왕복으로 묶고,
/// 결과는 도착 순서가 아니라 제약 순서(= 문장 순서)로 매핑합니다.
pub async fn get_foreign_records(
    gateway: &Gateway,
    schema: &str,
    table: &str,
) -> Result<HashMap<String, Vec<Record>>> {
    let foreign_keys = get_foreign_keys(gateway, schema, table).await?;
    if foreign_keys.is_empty() {
        return Ok(HashMap::new());
    }

    let statements = foreign_record_statements(&foreign_keys);
    let results = gateway.fetch_batch(&statements).await?;

    let mut map = HashMap::new();
    for (fk, rows) in foreign_keys.iter().zip(results) {
        let records = rows
            .into_iter()
            .map(|row| row.into_record(fk.foreign_schema.as_str(), fk.foreign_table.as_str()))
            .collect();
        // 같은 컬럼에 제약이 여럿이면 마지막 것이 남는다
        map.insert(fk.column.clone(), records);
    }
    Ok(map)
}

/// 제약 목록 → 참조 테이블 전체 조회 문장, 제약 순서 그대로
fn foreign_record_statements(foreign_keys: &[ForeignKey]) -> Vec<Statement> {
    foreign_keys
        .iter()
        .map(|fk| {
            build_select(&TableRef::new(
                fk.foreign_schema.as_str(),
                fk.foreign_table.as_str(),
            ))
        })
        .collect()
}

/// 로컬 컬럼의 NULL 아닌 원본 값 수집 (중복 제거, 등장 순서 유지)
fn collect_local_values(records: &[Record], column: &str) -> Vec<SqlValue> {
    let mut values = Vec::new();
    for record in records {
        if let Some(value) = record.original_value(column) {
            if !value.is_null() && !values.contains(value) {
                values.push(value.clone());
            }
        }
    }
    values
}

/// 참조 행들로 Record들의 슬롯을 하이드레이션
///
/// 참조 컬럼 값이 유니크하지 않으면 첫 번째 일치 행이 쓰입니다
/// (비결정적일 수 있음).
fn apply_foreign_rows(records: &mut [Record], fk: &ForeignKey, rows: &[SqlRow]) {
    for record in records.iter_mut() {
        let Some(index) = record.column_index(&fk.column) else {
            continue;
        };
        let local = match record.original_value(&fk.column) {
            Some(value) if !value.is_null() => value.clone(),
            _ => continue,
        };

        if let Some(row) = rows.iter().find(|row| row.get(&fk.foreign_column) == Some(&local)) {
            let nested = row
                .clone()
                .into_record(fk.foreign_schema.as_str(), fk.foreign_table.as_str());
            record.set_value_at(index, SqlValue::Record(Box::new(nested)));
        }
        // 일치 행 없음(dangling): 원본 스칼라 유지
    }
}

fn foreign_key_from_row(row: &SqlRow) -> ForeignKey {
    ForeignKey {
        column: row.text("column_name").unwrap_or_default().to_string(),
        foreign_schema: row
            .text("foreign_table_schema")
            .unwrap_or_default()
            .to_string(),
        foreign_table: row
            .text("foreign_table_name")
            .unwrap_or_default()
            .to_string(),
        foreign_column: row
            .text("foreign_column_name")
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, customer_id: SqlValue) -> Record {
        Record::from_pairs(
            "public",
            "orders",
            vec![
                ("id".to_string(), SqlValue::Int(id)),
                ("customer_id".to_string(), customer_id),
            ],
        )
    }

    fn customer_row(id: i64, name: &str) -> SqlRow {
        SqlRow::from_pairs(vec![
            ("id".to_string(), SqlValue::Int(id)),
            ("name".to_string(), SqlValue::from(name)),
        ])
    }

    fn customers_fk() -> ForeignKey {
        ForeignKey {
            column: "customer_id".to_string(),
            foreign_schema: "public".to_string(),
            foreign_table: "customers".to_string(),
            foreign_column: "id".to_string(),
        }
    }

    #[test]
    fn test_collect_skips_null_and_dedups() {
        let records = vec![
            order(1, SqlValue::Int(5)),
            order(2, SqlValue::Null),
            order(3, SqlValue::Int(5)),
            order(4, SqlValue::Int(8)),
        ];
        let values = collect_local_values(&records, "customer_id");
        assert_eq!(values, vec![SqlValue::Int(5), SqlValue::Int(8)]);
    }

    #[test]
    fn test_hydration_replaces_matches_and_keeps_null() {
        let mut records = vec![order(1, SqlValue::Int(5)), order(2, SqlValue::Null)];
        let rows = vec![customer_row(5, "kim")];

        apply_foreign_rows(&mut records, &customers_fk(), &rows);

        let nested = records[0].value("customer_id").unwrap().as_record().unwrap();
        assert_eq!(nested.table(), "customers");
        assert_eq!(nested.id(), Some(5));
        // NULL 슬롯은 그대로
        assert_eq!(records[1].value("customer_id"), Some(&SqlValue::Null));
        // 불변식: 길이/정렬 유지
        for record in &records {
            assert_eq!(record.columns().len(), record.values().len());
        }
    }

    #[test]
    fn test_dangling_reference_keeps_scalar() {
        // 참조 행이 없는 NULL 아닌 값은 원본 스칼라를 유지한다
        let mut records = vec![order(1, SqlValue::Int(99))];
        apply_foreign_rows(&mut records, &customers_fk(), &[customer_row(5, "kim")]);
        assert_eq!(records[0].value("customer_id"), Some(&SqlValue::Int(99)));
    }

    #[test]
    fn test_first_match_wins_on_duplicate_foreign_values() {
        let mut records = vec![order(1, SqlValue::Int(5))];
        let rows = vec![customer_row(5, "first"), customer_row(5, "second")];
        apply_foreign_rows(&mut records, &customers_fk(), &rows);

        let nested = records[0].value("customer_id").unwrap().as_record().unwrap();
        assert_eq!(nested.value("name"), Some(&SqlValue::from("first")));
    }

    #[test]
    fn test_no_foreign_rows_is_a_no_op() {
        let mut records = vec![order(1, SqlValue::Int(5))];
        let before = records.clone();
        apply_foreign_rows(&mut records, &customers_fk(), &[]);
        assert_eq!(records, before);
    }

    #[test]
    fn test_foreign_record_statements_follow_constraint_order() {
        let fks = vec![
            customers_fk(),
            ForeignKey {
                column: "product_id".to_string(),
                foreign_schema: "public".to_string(),
                foreign_table: "products".to_string(),
                foreign_column: "id".to_string(),
            },
        ];
        let statements = foreign_record_statements(&fks);
        assert_eq!(statements[0].sql, "SELECT * FROM public.customers");
        assert_eq!(statements[1].sql, "SELECT * FROM public.products");
    }
}
