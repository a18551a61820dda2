//! Repo Context 관리
//!
//! `.tbk/context.json` 파일을 통해 repo-local 컨텍스트(Bridge URL,
//! 기본 스키마)를 관리합니다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Repo Context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// Effective Context (최종 결정된 컨텍스트)
#[derive(Debug, Clone)]
pub struct EffectiveContext {
    pub bridge_url: Option<String>,
    pub schema: Option<String>,
}

impl EffectiveContext {
    /// schema 필수 검증
    pub fn require_schema(&self) -> anyhow::Result<&str> {
        self.schema
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Schema not specified. Use --schema or 'tbk context set'"))
    }
}

impl RepoContext {
    /// 컨텍스트 파일 경로
    fn context_path() -> PathBuf {
        PathBuf::from(".tbk/context.json")
    }

    /// 컨텍스트 로드
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::context_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let ctx: RepoContext = serde_json::from_str(&content)?;
            Ok(ctx)
        } else {
            Ok(Self::default())
        }
    }

    /// 컨텍스트 저장
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::context_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// 컨텍스트 삭제
    pub fn clear() -> anyhow::Result<()> {
        let path = Self::context_path();
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// 컨텍스트 결정 (CLI 옵션 > repo context)
pub fn resolve_context(
    bridge: Option<&str>,
    schema: Option<&str>,
) -> anyhow::Result<EffectiveContext> {
    let repo_ctx = RepoContext::load().unwrap_or_default();

    Ok(EffectiveContext {
        bridge_url: bridge.map(|s| s.to_string()).or(repo_ctx.bridge_url),
        schema: schema.map(|s| s.to_string()).or(repo_ctx.schema),
    })
}
