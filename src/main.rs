// src/main.rs

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use impact_campaign::config::{CliArgs, ConfigManager, SourceKind};
use impact_campaign::logging;
use impact_campaign::model::adapters::{CampaignSource, FileCampaignSource, MockCampaignSource};
use impact_campaign::report;
use impact_campaign::CampaignManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigManager::from_args(CliArgs::parse())?;

    let _guard = logging::init(&config.log_dir)
        .with_context(|| format!("Unable to initialize logging in {}", config.log_dir.display()))?;
    info!(source = ?config.source, "campaign loader starting");

    let campaigns = match &config.source {
        SourceKind::File(path) => FileCampaignSource::new(path).load().await?,
        SourceKind::Mock(count) => MockCampaignSource::new(*count).load().await?,
    };

    let mut manager = CampaignManager::new();
    manager.extend(campaigns);
    let missing_ids = manager.campaigns().iter().filter(|c| c.id.is_none()).count();
    if missing_ids > 0 {
        warn!(missing_ids, "some campaigns have no id");
    }
    info!(count = manager.len(), "campaigns ready");

    let output = report::render(&manager, config.campaign_id.as_deref(), config.field)?;
    println!("{}", output);

    info!("campaign loader finished");
    Ok(())
}
