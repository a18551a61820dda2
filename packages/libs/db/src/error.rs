//! 데이터 접근 계층 에러 타입
//!
//! 이 계층은 재시도, 캐싱, 에러 번역을 하지 않습니다. 드라이버 에러는
//! 그대로 호출자에게 전파됩니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 데이터 접근 에러
#[derive(Debug, Error)]
pub enum Error {
    /// 게이트웨이에 도달할 수 없음 (연결 생성/획득 실패)
    #[error("database unavailable: {0}")]
    Unavailable(String),

    /// 드라이버가 반환한 쿼리 에러 (문장 오류, 제약 위반, 연결 유실)
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// 기본키가 필요한 연산인데 Record에 id가 없음
    #[error("record has no id for {schema}.{table}")]
    MissingId { schema: String, table: String },
}
