//! Tablekit Bridge
//!
//! 스키마 불문 데이터 접근 계층을 REST 엔드포인트로 노출합니다.
//! 스키마/테이블/컬럼 탐색, 동적 CRUD, 외래키 하이드레이션을 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod middleware;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "tbk_bridge=debug,tbk_db=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!("Starting Bridge on port {}", config.port);

    // 앱 상태 초기화 (연결 실패는 여기서 즉시 종료)
    let state = AppState::new(&config).await?;
    let state = Arc::new(state);

    // 라우터 구성
    let app = create_router(state);

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Bridge listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// 라우터 생성
fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // 카탈로그 탐색
        .route("/schemas", get(handlers::schemas::list_schemas))
        .route("/schemas/:schema/tables", get(handlers::schemas::list_tables))
        .route(
            "/schemas/:schema/tables/:table/columns",
            get(handlers::schemas::list_columns),
        )
        // 동적 CRUD
        .route(
            "/schemas/:schema/tables/:table/records",
            get(handlers::records::list_records).post(handlers::records::insert_record),
        )
        .route(
            "/schemas/:schema/tables/:table/records/:id",
            get(handlers::records::get_record)
                .put(handlers::records::update_record)
                .delete(handlers::records::delete_record),
        )
        // 외래키
        .route(
            "/schemas/:schema/tables/:table/foreign-keys",
            get(handlers::foreign::list_foreign_keys),
        )
        .route(
            "/schemas/:schema/tables/:table/foreign-records",
            get(handlers::foreign::list_foreign_records),
        )
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::request_id))
        // State
        .with_state(state)
}
