//! Bridge 설정

use std::env;

/// Bridge 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트
    pub port: u16,

    /// Postgres 연결 URL
    pub database_url: String,

    /// 풀 최대 연결 수
    pub max_connections: u32,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("TBK_BRIDGE_PORT")
                .unwrap_or_else(|_| "4800".to_string())
                .parse()?,

            database_url: env::var("TBK_DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("TBK_DATABASE_URL must be set"))?,

            max_connections: env::var("TBK_DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }
}
