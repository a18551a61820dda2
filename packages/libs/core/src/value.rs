//! 동적 스칼라 값
//!
//! 테이블 구조를 런타임에야 알 수 있으므로, 컬럼 값은 태그 있는 enum으로
//! 표현합니다. 외래키 하이드레이션이 스칼라를 중첩 Record로 교체할 수
//! 있도록 `Record` variant를 포함합니다.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// 컬럼 하나의 값
///
/// JSON 경계에서는 평범한 JSON 값으로 직렬화됩니다. 중첩 Record는
/// 참조된 행의 객체 표현으로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// JSON/JSONB 컬럼 값
    Json(serde_json::Value),
    /// 하이드레이션된 외래키 (참조된 행)
    Record(Box<Record>),
}

impl SqlValue {
    /// NULL 여부
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SqlValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// 하이드레이션된 Record 참조
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            SqlValue::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => SqlValue::Null,
            serde_json::Value::Bool(b) => SqlValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    SqlValue::Float(f)
                } else {
                    SqlValue::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => SqlValue::Text(s),
            value @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                SqlValue::Json(value)
            }
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl Serialize for SqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SqlValue::Null => serializer.serialize_unit(),
            SqlValue::Bool(b) => serializer.serialize_bool(*b),
            SqlValue::Int(i) => serializer.serialize_i64(*i),
            SqlValue::Float(f) => serializer.serialize_f64(*f),
            SqlValue::Text(s) => serializer.serialize_str(s),
            SqlValue::Json(v) => v.serialize(serializer),
            SqlValue::Record(r) => r.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SqlValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(SqlValue::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(SqlValue::from(serde_json::json!(null)), SqlValue::Null);
        assert_eq!(SqlValue::from(serde_json::json!(true)), SqlValue::Bool(true));
        assert_eq!(SqlValue::from(serde_json::json!(42)), SqlValue::Int(42));
        assert_eq!(SqlValue::from(serde_json::json!(1.5)), SqlValue::Float(1.5));
        assert_eq!(
            SqlValue::from(serde_json::json!("abc")),
            SqlValue::Text("abc".to_string())
        );
    }

    #[test]
    fn test_from_json_compound_stays_json() {
        let value = SqlValue::from(serde_json::json!({ "a": 1 }));
        assert!(matches!(value, SqlValue::Json(_)));
    }

    #[test]
    fn test_serializes_to_plain_json() {
        let values = vec![
            SqlValue::Null,
            SqlValue::Int(7),
            SqlValue::Text("x".to_string()),
        ];
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!([null, 7, "x"]));
    }
}
