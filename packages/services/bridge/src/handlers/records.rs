//! 동적 CRUD 핸들러
//!
//! 요청 본문의 `values` 객체가 Record가 되고, 하이드레이션은 `?expand`로
//! 선택합니다.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use tbk_core::{Record, SqlValue};

use crate::error::{BridgeError, Result};
use crate::state::AppState;

/// `?expand=true` — 외래키 컬럼을 참조 행으로 하이드레이션
#[derive(Debug, Default, Deserialize)]
pub struct ExpandQuery {
    #[serde(default)]
    pub expand: bool,
}

/// INSERT/UPDATE 요청 본문
#[derive(Debug, Deserialize)]
pub struct RecordPayload {
    /// 컬럼 → 값
    pub values: serde_json::Map<String, Value>,
}

fn record_from_payload(schema: &str, table: &str, payload: RecordPayload) -> Record {
    let pairs = payload
        .values
        .into_iter()
        .map(|(column, value)| (column, SqlValue::from(value)))
        .collect();
    Record::from_pairs(schema, table, pairs)
}

/// `GET /schemas/{schema}/tables/{table}/records`
///
/// 컬럼 메타데이터와 전체 행을 한 번의 배치 왕복으로 가져옵니다.
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
    Query(query): Query<ExpandQuery>,
) -> Result<Json<Value>> {
    let (columns, mut records) = state.db.get_columns_and_records(&schema, &table).await?;
    if query.expand {
        state
            .db
            .populate_foreign_values(&schema, &table, &mut records)
            .await?;
    }
    Ok(Json(
        serde_json::json!({ "columns": columns, "records": records }),
    ))
}

/// `GET /schemas/{schema}/tables/{table}/records/{id}`
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((schema, table, id)): Path<(String, String, i64)>,
    Query(query): Query<ExpandQuery>,
) -> Result<Json<Value>> {
    let (columns, record) = state.db.get_columns_and_record(&schema, &table, id).await?;
    let Some(mut record) = record else {
        return Err(BridgeError::NotFound {
            message: format!("No record {} in {}.{}", id, schema, table),
        });
    };

    if query.expand {
        state
            .db
            .populate_foreign_values(&schema, &table, std::slice::from_mut(&mut record))
            .await?;
    }
    Ok(Json(
        serde_json::json!({ "columns": columns, "record": record }),
    ))
}

/// `POST /schemas/{schema}/tables/{table}/records`
pub async fn insert_record(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Value>> {
    if payload.values.is_empty() {
        return Err(BridgeError::BadRequest {
            message: "values must not be empty".to_string(),
        });
    }

    let record = record_from_payload(&schema, &table, payload);
    let id = state.db.insert_record(&schema, &table, &record).await?;
    Ok(Json(serde_json::json!({ "id": id })))
}

/// `PUT /schemas/{schema}/tables/{table}/records/{id}`
///
/// 경로의 id가 본문의 id 값보다 우선합니다.
pub async fn update_record(
    State(state): State<Arc<AppState>>,
    Path((schema, table, id)): Path<(String, String, i64)>,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Value>> {
    if payload.values.is_empty() {
        return Err(BridgeError::BadRequest {
            message: "values must not be empty".to_string(),
        });
    }

    let mut record = record_from_payload(&schema, &table, payload);
    record.set_id(Some(id));
    let affected = state.db.update_record(&schema, &table, &record).await?;
    Ok(Json(serde_json::json!({ "affected": affected })))
}

/// `DELETE /schemas/{schema}/tables/{table}/records/{id}`
pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path((schema, table, id)): Path<(String, String, i64)>,
) -> Result<Json<Value>> {
    let affected = state.db.delete_record(&schema, &table, id).await?;
    Ok(Json(serde_json::json!({ "affected": affected })))
}
