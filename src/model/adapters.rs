// src/model/adapters.rs

use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::CampaignError;
use crate::mock;
use crate::model::campaign::Campaign;

/// Campaign 的数据来源（负责填充 Campaign）
pub trait CampaignSource: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Vec<Campaign>, CampaignError>> + Send;
}

/// 从 JSON 文件读取 Campaign 列表
pub struct FileCampaignSource {
    pub path: PathBuf,
}

impl FileCampaignSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CampaignSource for FileCampaignSource {
    async fn load(&self) -> Result<Vec<Campaign>, CampaignError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CampaignError::Io {
                path: self.path.clone(),
                source,
            })?;
        let campaigns: Vec<Campaign> =
            serde_json::from_str(&content).map_err(|source| CampaignError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), count = campaigns.len(), "loaded campaigns from file");
        Ok(campaigns)
    }
}

/// 随机生成 Campaign（演示用）
pub struct MockCampaignSource {
    pub count: usize,
}

impl MockCampaignSource {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl CampaignSource for MockCampaignSource {
    async fn load(&self) -> Result<Vec<Campaign>, CampaignError> {
        let campaigns = mock::generate(self.count)?;
        info!(count = campaigns.len(), "generated mock campaigns");
        Ok(campaigns)
    }
}
