//! 외래키 핸들러

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::Result;
use crate::state::AppState;

/// `GET /schemas/{schema}/tables/{table}/foreign-keys`
///
/// 제약이 없는 테이블은 빈 목록입니다.
pub async fn list_foreign_keys(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let foreign_keys = state.db.get_foreign_keys(&schema, &table).await?;
    Ok(Json(serde_json::json!({ "foreignKeys": foreign_keys })))
}

/// `GET /schemas/{schema}/tables/{table}/foreign-records`
///
/// 외래키 컬럼별 참조 테이블 전체 행. 선택 UI의 후보 목록용입니다.
pub async fn list_foreign_records(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let foreign_records = state.db.get_foreign_records(&schema, &table).await?;
    Ok(Json(serde_json::json!({ "foreignRecords": foreign_records })))
}
