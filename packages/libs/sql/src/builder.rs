//! CRUD SQL 빌더
//!
//! Record와 테이블 참조를 받아 파라미터화된 문장을 생성합니다.
//! 컬럼 목록은 Record의 컬럼 순서를 그대로 따르고, 값은 같은 순서의
//! 위치 파라미터로 바인딩됩니다.

use tbk_core::{Record, SqlValue};

use crate::ident::{Ident, TableRef};
use crate::statement::{placeholders, Statement};

/// `SELECT * FROM <schema>.<table>`
pub fn build_select(table: &TableRef) -> Statement {
    Statement::new(format!("SELECT * FROM {}", table))
}

/// `SELECT * FROM <schema>.<table> WHERE id = <id>`
///
/// id는 호출자가 숫자임을 보장하는 신뢰된 입력이라 리터럴로 삽입됩니다.
pub fn build_select_by_id(table: &TableRef, id: i64) -> Statement {
    Statement::new(format!("SELECT * FROM {} WHERE id = {}", table, id))
}

/// `INSERT INTO … (<cols>) VALUES ($1, …) RETURNING id`
///
/// `id`라는 이름의 컬럼(대소문자 무시)은 컬럼 목록과 값 목록 양쪽에서
/// 제외됩니다. 테이블에 `id` 컬럼이 없으면 `RETURNING id`가 데이터베이스
/// 에러로 표면화됩니다 — 여기서 검증하지 않습니다.
pub fn build_insert(table: &TableRef, record: &Record) -> Statement {
    let mut columns = Vec::new();
    let mut params = Vec::new();
    for (column, value) in record.columns().iter().zip(record.values().iter()) {
        if column.eq_ignore_ascii_case("id") {
            continue;
        }
        columns.push(Ident::new(column.as_str()).quoted());
        params.push(value.clone());
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        table,
        columns.join(", "),
        placeholders(params.len()),
    );
    Statement::with_params(sql, params)
}

/// `UPDATE … SET (<cols>) = ($1, …) WHERE id = <id>`
///
/// Record의 모든 컬럼을 사용합니다. `id` 컬럼이 SET 목록에 들어가도
/// WHERE 절이 같은 행을 고정하므로 무해합니다.
pub fn build_update(table: &TableRef, record: &Record, id: i64) -> Statement {
    let columns: Vec<String> = record
        .columns()
        .iter()
        .map(|c| Ident::new(c.as_str()).quoted())
        .collect();
    let params: Vec<SqlValue> = record.values().to_vec();

    let sql = format!(
        "UPDATE {} SET ({}) = ({}) WHERE id = {}",
        table,
        columns.join(", "),
        placeholders(params.len()),
        id,
    );
    Statement::with_params(sql, params)
}

/// `DELETE FROM … WHERE id = $1`
pub fn build_delete(table: &TableRef, id: i64) -> Statement {
    Statement::with_params(
        format!("DELETE FROM {} WHERE id = $1", table),
        vec![SqlValue::Int(id)],
    )
}

/// `SELECT * FROM … WHERE "<column>" IN ($1, …, $n)`
///
/// 외래키 resolver가 참조 행을 한 번에 조회할 때 사용합니다.
pub fn build_select_in(table: &TableRef, column: &Ident, values: Vec<SqlValue>) -> Statement {
    let sql = format!(
        "SELECT * FROM {} WHERE {} IN ({})",
        table,
        column.quoted(),
        placeholders(values.len()),
    );
    Statement::with_params(sql, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(pairs: Vec<(&str, SqlValue)>) -> Record {
        Record::from_pairs(
            "public",
            "users",
            pairs
                .into_iter()
                .map(|(c, v)| (c.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_select_shapes() {
        let table = TableRef::new("public", "users");
        assert_eq!(build_select(&table).sql, "SELECT * FROM public.users");
        assert_eq!(
            build_select_by_id(&table, 7).sql,
            "SELECT * FROM public.users WHERE id = 7"
        );
    }

    #[test]
    fn test_insert_excludes_id_case_insensitive() {
        let table = TableRef::new("public", "users");
        for id_name in ["id", "ID", "Id"] {
            let record = record_with(vec![
                (id_name, SqlValue::Int(1)),
                ("name", SqlValue::Text("kim".to_string())),
            ]);
            let stmt = build_insert(&table, &record);
            assert_eq!(
                stmt.sql,
                "INSERT INTO public.users (\"name\") VALUES ($1) RETURNING id"
            );
            assert_eq!(stmt.params, vec![SqlValue::Text("kim".to_string())]);
        }
    }

    #[test]
    fn test_insert_keeps_id_like_columns() {
        // 정확히 "id"인 컬럼만 제외 — user_id 등은 남는다
        let table = TableRef::new("public", "orders");
        let record = record_with(vec![
            ("id", SqlValue::Int(1)),
            ("user_id", SqlValue::Int(5)),
            ("uuid", SqlValue::Text("x".to_string())),
        ]);
        let stmt = build_insert(&table, &record);
        assert_eq!(
            stmt.sql,
            "INSERT INTO public.orders (\"user_id\", \"uuid\") VALUES ($1, $2) RETURNING id"
        );
        assert_eq!(stmt.params.len(), 2);
    }

    #[test]
    fn test_insert_without_id_column() {
        // id 컬럼이 없어도 문장은 만들어진다 (RETURNING id는 DB 에러로 표면화)
        let table = TableRef::new("public", "tags");
        let record = record_with(vec![("name", SqlValue::Text("a".to_string()))]);
        let stmt = build_insert(&table, &record);
        assert_eq!(
            stmt.sql,
            "INSERT INTO public.tags (\"name\") VALUES ($1) RETURNING id"
        );
    }

    #[test]
    fn test_update_binds_every_value_and_pins_id() {
        let table = TableRef::new("public", "users");
        let record = record_with(vec![
            ("id", SqlValue::Int(3)),
            ("name", SqlValue::Text("lee".to_string())),
            ("age", SqlValue::Int(20)),
        ]);
        let stmt = build_update(&table, &record, 3);
        assert_eq!(
            stmt.sql,
            "UPDATE public.users SET (\"id\", \"name\", \"age\") = ($1, $2, $3) WHERE id = 3"
        );
        // 값은 전부 파라미터로만 — 본문에는 자리표시자와 id 리터럴뿐
        assert_eq!(stmt.params.len(), 3);
        assert!(!stmt.sql.contains("lee"));
        assert!(!stmt.sql.contains("20"));
    }

    #[test]
    fn test_delete_binds_id() {
        let table = TableRef::new("public", "users");
        let stmt = build_delete(&table, 9);
        assert_eq!(stmt.sql, "DELETE FROM public.users WHERE id = $1");
        assert_eq!(stmt.params, vec![SqlValue::Int(9)]);
    }

    #[test]
    fn test_select_in_binds_all_values() {
        let table = TableRef::new("public", "customers");
        let stmt = build_select_in(
            &table,
            &Ident::new("id"),
            vec![SqlValue::Int(5), SqlValue::Int(8)],
        );
        assert_eq!(
            stmt.sql,
            "SELECT * FROM public.customers WHERE \"id\" IN ($1, $2)"
        );
        assert_eq!(stmt.params, vec![SqlValue::Int(5), SqlValue::Int(8)]);
    }
}
