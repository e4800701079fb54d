// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// 加载、查询 campaign 时可能出现的错误（Campaign 本身的读写不会失败）
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("failed to read campaign file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaign file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown campaign field: {0}")]
    UnknownField(String),

    #[error("failed to generate mock campaigns: {0}")]
    Generate(String),

    #[error("failed to render campaigns")]
    Render(#[source] serde_json::Error),

    #[error("campaign not found: {0}")]
    NotFound(String),
}
