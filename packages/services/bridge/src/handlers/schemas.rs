//! 카탈로그 탐색 핸들러

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::Result;
use crate::state::AppState;

/// `GET /schemas`
pub async fn list_schemas(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let schemas = state.db.list_schemas().await?;
    Ok(Json(serde_json::json!({ "schemas": schemas })))
}

/// `GET /schemas/{schema}/tables`
///
/// 스키마에 테이블이 없으면 빈 목록입니다 (404 아님).
pub async fn list_tables(
    State(state): State<Arc<AppState>>,
    Path(schema): Path<String>,
) -> Result<Json<Value>> {
    let tables = state.db.list_tables(&schema).await?;
    Ok(Json(serde_json::json!({ "tables": tables })))
}

/// `GET /schemas/{schema}/tables/{table}/columns`
pub async fn list_columns(
    State(state): State<Arc<AppState>>,
    Path((schema, table)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let columns = state.db.list_columns(&schema, &table).await?;
    Ok(Json(serde_json::json!({ "columns": columns })))
}
