//! Database facade
//!
//! Bridge와 라이브러리 사용자가 쓰는 진입점입니다. 카탈로그, 쿼리 빌더,
//! resolver, 게이트웨이를 하나의 API로 묶습니다. Record는 요청 범위가
//! 소유하며, 이 facade는 요청 사이에 아무 상태도 공유하지 않습니다.

use std::collections::HashMap;

use tbk_core::{ColumnMeta, ForeignKey, Record, SqlValue, TableInfo};
use tbk_sql::{build_delete, build_insert, build_select, build_select_by_id, build_update, TableRef};

use crate::catalog;
use crate::error::{Error, Result};
use crate::gateway::{DbConfig, Gateway};
use crate::resolver;

/// 스키마 불문 데이터 접근 facade
pub struct Database {
    gateway: Gateway,
}

impl Database {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// 설정으로 연결해 facade 생성
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        Ok(Self::new(Gateway::connect(config).await?))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// 모든 스키마 이름
    pub async fn list_schemas(&self) -> Result<Vec<String>> {
        catalog::list_schemas(&self.gateway).await
    }

    /// 스키마의 테이블 목록
    pub async fn list_tables(&self, schema: &str) -> Result<Vec<TableInfo>> {
        catalog::list_tables(&self.gateway, schema).await
    }

    /// 테이블의 컬럼 메타데이터
    pub async fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnMeta>> {
        catalog::list_columns(&self.gateway, schema, table).await
    }

    /// 테이블 전체 행
    pub async fn get_records(&self, schema: &str, table: &str) -> Result<Vec<Record>> {
        let table_ref = TableRef::new(schema, table);
        let rows = self.gateway.fetch(&build_select(&table_ref)).await?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_record(schema, table))
            .collect())
    }

    /// id로 행 하나. 없으면 None (에러 아님).
    pub async fn get_record(&self, schema: &str, table: &str, id: i64) -> Result<Option<Record>> {
        let table_ref = TableRef::new(schema, table);
        let rows = self.gateway.fetch(&build_select_by_id(&table_ref, id)).await?;
        Ok(rows.into_iter().next().map(|row| row.into_record(schema, table)))
    }

    /// 컬럼 메타데이터 + 행 하나, 한 번의 왕복
    pub async fn get_columns_and_record(
        &self,
        schema: &str,
        table: &str,
        id: i64,
    ) -> Result<(Vec<ColumnMeta>, Option<Record>)> {
        catalog::get_columns_and_record(&self.gateway, schema, table, id).await
    }

    /// 컬럼 메타데이터 + 전체 행, 한 번의 왕복
    pub async fn get_columns_and_records(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<(Vec<ColumnMeta>, Vec<Record>)> {
        catalog::get_columns_and_records(&self.gateway, schema, table).await
    }

    /// 테이블의 외래키 제약
    pub async fn get_foreign_keys(&self, schema: &str, table: &str) -> Result<Vec<ForeignKey>> {
        resolver::get_foreign_keys(&self.gateway, schema, table).await
    }

    /// Record들의 외래키 슬롯을 중첩 Record로 하이드레이션 (제자리 변경)
    pub async fn populate_foreign_values(
        &self,
        schema: &str,
        table: &str,
        records: &mut [Record],
    ) -> Result<()> {
        resolver::populate_foreign_values(&self.gateway, schema, table, records).await
    }

    /// 외래키 컬럼별 참조 테이블 전체 행
    pub async fn get_foreign_records(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<HashMap<String, Vec<Record>>> {
        resolver::get_foreign_records(&self.gateway, schema, table).await
    }

    /// 행 삽입, 새 id 반환
    pub async fn insert_record(&self, schema: &str, table: &str, record: &Record) -> Result<i64> {
        let table_ref = TableRef::new(schema, table);
        let rows = self.gateway.fetch(&build_insert(&table_ref, record)).await?;
        rows.first()
            .and_then(|row| row.get("id"))
            .and_then(SqlValue::as_i64)
            .ok_or_else(|| Error::MissingId {
                schema: schema.to_string(),
                table: table.to_string(),
            })
    }

    /// 행 갱신, 영향 받은 행 수 반환. Record에 id가 있어야 합니다.
    pub async fn update_record(&self, schema: &str, table: &str, record: &Record) -> Result<u64> {
        let id = record.id().ok_or_else(|| Error::MissingId {
            schema: schema.to_string(),
            table: table.to_string(),
        })?;
        let table_ref = TableRef::new(schema, table);
        self.gateway.execute(&build_update(&table_ref, record, id)).await
    }

    /// id로 행 삭제, 영향 받은 행 수 반환
    pub async fn delete_record(&self, schema: &str, table: &str, id: i64) -> Result<u64> {
        let table_ref = TableRef::new(schema, table);
        self.gateway.execute(&build_delete(&table_ref, id)).await
    }
}
