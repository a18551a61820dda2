//! CLI 설정

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 기본 Bridge URL
    pub default_bridge: Option<String>,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".tbk").join("config.json"))
    }

    /// 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: CliConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Bridge URL 결정
    pub fn bridge_url(&self) -> anyhow::Result<String> {
        self.default_bridge
            .clone()
            .or_else(|| std::env::var("TBK_BRIDGE_URL").ok())
            .ok_or_else(|| anyhow::anyhow!("Bridge URL not configured. Use 'tbk context set --bridge <url>' or set TBK_BRIDGE_URL"))
    }
}
