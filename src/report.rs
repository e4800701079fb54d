// src/report.rs

use std::sync::Arc;

use crate::error::CampaignError;
use crate::model::campaign::{Campaign, CampaignField};
use crate::model::campaign_manager::CampaignManager;

/// 缺省值的占位符
const ABSENT: &str = "-";

/// 按 id 选出 campaign；不指定 id 时返回全部
pub fn select(manager: &CampaignManager, campaign_id: Option<&str>) -> Result<Vec<Arc<Campaign>>, CampaignError> {
    match campaign_id {
        Some(id) => manager
            .get_campaign(id)
            .map(|campaign| vec![campaign])
            .ok_or_else(|| CampaignError::NotFound(id.to_string())),
        None => Ok(manager.campaigns().to_vec()),
    }
}

/// 生成 CLI 输出
///
/// - 指定 `field` 时每行输出 `id<TAB>value`，缺省值输出 `-`
/// - 否则输出 campaign 数组的 pretty JSON（空字段不输出）
pub fn render(
    manager: &CampaignManager,
    campaign_id: Option<&str>,
    field: Option<CampaignField>,
) -> Result<String, CampaignError> {
    let selected = select(manager, campaign_id)?;

    match field {
        Some(field) => Ok(selected
            .iter()
            .map(|campaign| {
                format!(
                    "{}\t{}",
                    campaign.id.as_deref().unwrap_or(ABSENT),
                    campaign.get(field).unwrap_or(ABSENT)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        None => {
            let records: Vec<&Campaign> = selected.iter().map(|c| c.as_ref()).collect();
            serde_json::to_string_pretty(&records).map_err(CampaignError::Render)
        }
    }
}
