//! Record: 한 행 + 출처 메타데이터
//!
//! 데이터 쿼리로 받은 행을 컬럼 순서 그대로 보관합니다. `original`은
//! 조회 당시의 원본 값, `values`는 작업용 값입니다. 외래키 하이드레이션은
//! `values`의 해당 슬롯을 중첩 Record로 덮어쓰고, 수정을 준비하는 호출자는
//! `values`에 새 스칼라를 할당한 뒤 쿼리 빌더에 넘깁니다.
//!
//! 불변식: `columns`, `original`, `values`는 항상 같은 길이이며 인덱스가
//! 정렬되어 있습니다. 세 벡터는 비공개이고 함께만 만들어지므로 이 불변식은
//! 구조적으로 유지됩니다.

use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::Serialize;

use crate::value::SqlValue;

/// 기본키 컬럼 이름. 이 계층은 `id`라는 이름의 숫자 기본키를 전제합니다.
pub const ID_COLUMN: &str = "id";

/// 데이터베이스 한 행의 메모리 표현
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: String,
    table: String,
    id: Option<i64>,
    columns: Vec<String>,
    original: Vec<SqlValue>,
    values: Vec<SqlValue>,
}

impl Record {
    /// 데이터 쿼리 결과의 (컬럼, 값) 쌍으로 Record 생성
    ///
    /// `id` 컬럼이 있고 정수이면 기본키 값으로 추출합니다.
    pub fn from_pairs(
        schema: impl Into<String>,
        table: impl Into<String>,
        pairs: Vec<(String, SqlValue)>,
    ) -> Self {
        let mut columns = Vec::with_capacity(pairs.len());
        let mut original = Vec::with_capacity(pairs.len());
        for (column, value) in pairs {
            columns.push(column);
            original.push(value);
        }

        let id = columns
            .iter()
            .position(|c| c == ID_COLUMN)
            .and_then(|i| original[i].as_i64());

        let values = original.clone();
        Self {
            schema: schema.into(),
            table: table.into(),
            id,
            columns,
            original,
            values,
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// 기본키 값 (`id` 컬럼이 없거나 숫자가 아니면 None)
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// 기본키 값 재지정
    ///
    /// 요청 경로의 id가 본문의 값보다 우선해야 할 때 사용합니다.
    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// 컬럼 이름 목록 (조회 순서)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 작업용 값 목록 (`columns`와 인덱스 정렬)
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// 컬럼 이름 → 인덱스
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// 원본 값 조회 (하이드레이션의 영향을 받지 않음)
    pub fn original_value(&self, column: &str) -> Option<&SqlValue> {
        self.column_index(column).map(|i| &self.original[i])
    }

    /// 현재 값 조회
    pub fn value(&self, column: &str) -> Option<&SqlValue> {
        self.column_index(column).map(|i| &self.values[i])
    }

    /// 인덱스 위치의 값을 교체
    ///
    /// 인덱스는 `column_index`로 얻은 유효한 값이어야 합니다.
    pub fn set_value_at(&mut self, index: usize, value: SqlValue) {
        self.values[index] = value;
    }

    /// 컬럼 이름으로 값을 교체. 컬럼이 없으면 false.
    pub fn set_value(&mut self, column: &str, value: SqlValue) -> bool {
        match self.column_index(column) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }
}

/// `values`를 컬럼 이름 순서의 JSON 객체로 직렬화
struct ValueMap<'a>(&'a Record);

impl Serialize for ValueMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.columns.len()))?;
        for (column, value) in self.0.columns.iter().zip(self.0.values.iter()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 4)?;
        state.serialize_field("schema", &self.schema)?;
        state.serialize_field("table", &self.table)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("values", &ValueMap(self))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::from_pairs(
            "public",
            "orders",
            vec![
                ("id".to_string(), SqlValue::Int(3)),
                ("customer_id".to_string(), SqlValue::Int(5)),
                ("note".to_string(), SqlValue::Null),
            ],
        )
    }

    #[test]
    fn test_alignment_invariant() {
        let record = sample();
        assert_eq!(record.columns().len(), record.values().len());
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_id_extraction() {
        let record = sample();
        assert_eq!(record.id(), Some(3));

        let no_id = Record::from_pairs(
            "public",
            "tags",
            vec![("name".to_string(), SqlValue::Text("a".to_string()))],
        );
        assert_eq!(no_id.id(), None);
    }

    #[test]
    fn test_alignment_survives_hydration() {
        let mut record = sample();
        let nested = Record::from_pairs(
            "public",
            "customers",
            vec![("id".to_string(), SqlValue::Int(5))],
        );
        let index = record.column_index("customer_id").unwrap();
        record.set_value_at(index, SqlValue::Record(Box::new(nested)));

        assert_eq!(record.columns().len(), record.values().len());
        assert!(record.value("customer_id").unwrap().as_record().is_some());
        // 원본은 스칼라 그대로
        assert_eq!(record.original_value("customer_id"), Some(&SqlValue::Int(5)));
    }

    #[test]
    fn test_serializes_values_by_column() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["schema"], "public");
        assert_eq!(json["table"], "orders");
        assert_eq!(json["id"], 3);
        assert_eq!(json["values"]["customer_id"], 5);
        assert_eq!(json["values"]["note"], serde_json::Value::Null);
    }
}
