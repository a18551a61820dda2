//! 카탈로그 메타데이터 타입
//!
//! information_schema 조회 결과를 담는 읽기 전용 타입들입니다.

use serde::{Deserialize, Serialize};

/// 테이블 서술자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// 소속 스키마
    pub schema: String,

    /// 테이블 이름
    pub name: String,

    /// 테이블 종류 (`BASE TABLE`, `VIEW` 등)
    pub kind: String,
}

/// 컬럼 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub schema: String,
    pub table: String,

    /// 컬럼 이름
    pub name: String,

    /// 데이터 타입 (`integer`, `text`, `timestamp with time zone` 등)
    pub data_type: String,

    /// NULL 허용 여부
    pub nullable: bool,
}

/// 외래키 제약
///
/// 카탈로그 introspection으로 발견된 관계입니다. 한 테이블에 0개 이상
/// 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// 로컬 컬럼 이름
    pub column: String,

    /// 참조 스키마
    pub foreign_schema: String,

    /// 참조 테이블
    pub foreign_table: String,

    /// 참조 컬럼 이름
    pub foreign_column: String,
}
