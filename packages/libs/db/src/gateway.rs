//! 연결 게이트웨이
//!
//! wire 프로토콜을 만지는 유일한 모듈입니다. 풀에서 연결을 얻어 문장을
//! 실행하고 결과를 돌려준 뒤 연결을 반납합니다. 다른 모든 모듈은 연결을
//! 직접 관리하지 않습니다.

use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};

use tbk_core::SqlValue;
use tbk_sql::Statement;

use crate::decode::{decode_row, SqlRow};
use crate::error::{Error, Result};

/// 연결 설정
///
/// 자격 증명 검증과 설정 파일 로딩은 이 계층 바깥의 몫입니다. 여기에는
/// 이미 검증된 값이 들어옵니다.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres 연결 URL
    pub url: String,

    /// 풀 최대 연결 수
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
        }
    }
}

/// 쿼리 실행 게이트웨이
pub struct Gateway {
    pool: PgPool,
}

impl Gateway {
    /// 풀을 만들어 게이트웨이 생성. 연결 실패는 즉시 `Unavailable`.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;
        Ok(Self { pool })
    }

    /// 기존 풀로 게이트웨이 생성 (테스트/임베딩용)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 단일 문장 실행, 행 반환
    pub async fn fetch(&self, stmt: &Statement) -> Result<Vec<SqlRow>> {
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "fetch");
        let rows = bind_params(stmt).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(decode_row).collect())
    }

    /// 단일 문장 실행, 영향 받은 행 수 반환
    pub async fn execute(&self, stmt: &Statement) -> Result<u64> {
        tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "execute");
        let result = bind_params(stmt).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// 문장 묶음을 하나의 연결로 실행
    ///
    /// 연결을 한 번만 획득해 문장을 순서대로 실행하고, 결과 셋을 문장
    /// 순서 그대로 반환합니다. 묶음 전체가 끝나야 연결이 반납됩니다.
    /// 어느 문장이든 실패하면 즉시 전파합니다.
    pub async fn fetch_batch(&self, statements: &[Statement]) -> Result<Vec<Vec<SqlRow>>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;

        let mut results = Vec::with_capacity(statements.len());
        for stmt in statements {
            tracing::debug!(sql = %stmt.sql, params = stmt.params.len(), "fetch_batch");
            let rows = bind_params(stmt).fetch_all(&mut *conn).await?;
            results.push(rows.iter().map(decode_row).collect());
        }
        Ok(results)
    }
}

/// `Statement`의 파라미터를 순서대로 바인딩
///
/// 하이드레이션된 Record가 값 자리에 있으면 참조 행의 id를 바인딩합니다
/// (외래키 컬럼이 담아야 할 값이 바로 그것이므로).
fn bind_params<'q>(stmt: &'q Statement) -> Query<'q, Postgres, PgArguments> {
    let mut query = sqlx::query::<Postgres>(&stmt.sql);
    for param in &stmt.params {
        query = match param {
            SqlValue::Null => query.bind(Option::<String>::None),
            SqlValue::Bool(b) => query.bind(*b),
            SqlValue::Int(i) => query.bind(*i),
            SqlValue::Float(f) => query.bind(*f),
            SqlValue::Text(s) => query.bind(s.as_str()),
            SqlValue::Json(v) => query.bind(sqlx::types::Json(v.clone())),
            SqlValue::Record(r) => query.bind(r.id()),
        };
    }
    query
}
