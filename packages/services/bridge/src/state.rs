//! Bridge 앱 상태

use tbk_db::{Database, DbConfig};

use crate::config::Config;

/// 앱 상태
///
/// 모든 핸들러에서 공유하는 상태입니다. 데이터베이스 facade가 풀을
/// 소유하고, 핸들러는 요청 범위 안에서만 Record를 다룹니다.
pub struct AppState {
    /// 설정
    pub config: Config,

    /// 데이터 접근 facade
    pub db: Database,
}

impl AppState {
    /// 새 상태 생성. 연결 실패는 그대로 전파됩니다.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let mut db_config = DbConfig::new(config.database_url.clone());
        db_config.max_connections = config.max_connections;

        let db = Database::connect(&db_config).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
