// src/config/config_manager.rs

use clap::Parser;
use std::path::PathBuf;

use crate::error::CampaignError;
use crate::model::campaign::CampaignField;

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "Load and inspect ad campaign records")]
pub struct CliArgs {
    /// campaign JSON 文件
    #[arg(long, default_value = "static/campaigns.json")]
    pub campaigns: PathBuf,
    /// 忽略文件，随机生成 N 个 campaign
    #[arg(long)]
    pub mock: Option<usize>,
    /// 只输出指定 id 的 campaign
    #[arg(long)]
    pub id: Option<String>,
    /// 只输出某个字段，例如 clickURL
    #[arg(long)]
    pub field: Option<String>,
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

/// campaign 从哪里加载
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    File(PathBuf),
    Mock(usize),
}

#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub source: SourceKind,
    pub campaign_id: Option<String>,
    pub field: Option<CampaignField>,
    pub log_dir: PathBuf,
}

impl ConfigManager {
    pub fn from_args(args: CliArgs) -> Result<Self, CampaignError> {
        let field = args.field.as_deref().map(str::parse::<CampaignField>).transpose()?;
        let source = match args.mock {
            Some(count) => SourceKind::Mock(count),
            None => SourceKind::File(args.campaigns),
        };
        Ok(ConfigManager {
            source,
            campaign_id: args.id,
            field,
            log_dir: args.log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<ConfigManager, CampaignError> {
        let args = CliArgs::try_parse_from(std::iter::once("impact-campaign").chain(argv.iter().copied())).unwrap();
        ConfigManager::from_args(args)
    }

    #[test]
    fn defaults_read_static_file() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.source, SourceKind::File(PathBuf::from("static/campaigns.json")));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.campaign_id.is_none());
        assert!(config.field.is_none());
    }

    #[test]
    fn mock_overrides_file_and_field_is_parsed() {
        let config = parse(&["--mock", "3", "--field", "trailerStreamingURL", "--id", "c1"]).unwrap();
        assert_eq!(config.source, SourceKind::Mock(3));
        assert_eq!(config.field, Some(CampaignField::TrailerStreamingUrl));
        assert_eq!(config.campaign_id.as_deref(), Some("c1"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse(&["--field", "bannerURL"]).unwrap_err();
        assert!(matches!(err, CampaignError::UnknownField(_)));
    }
}
