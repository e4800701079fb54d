// src/model/campaign_manager.rs

use std::sync::Arc;

use crate::model::campaign::Campaign;

/// **Campaign 管理器**
///
/// 填充完成的 Campaign 交给管理器后即不可变，对外只借出 `Arc<Campaign>`。
/// 保持插入顺序；不要求 id 唯一，也允许 id 为空。
#[derive(Clone, Debug, Default)]
pub struct CampaignManager {
    campaigns: Vec<Arc<Campaign>>,
}

impl CampaignManager {
    /// 创建一个新的 CampaignManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加 Campaign，返回共享句柄
    pub fn add_campaign(&mut self, campaign: Campaign) -> Arc<Campaign> {
        let campaign = Arc::new(campaign);
        self.campaigns.push(Arc::clone(&campaign));
        campaign
    }

    /// 删除第一个匹配 id 的 Campaign，已借出的句柄仍然有效
    pub fn remove_campaign(&mut self, campaign_id: &str) -> Option<Arc<Campaign>> {
        let pos = self.position(campaign_id)?;
        Some(self.campaigns.remove(pos))
    }

    /// 获取第一个匹配 id 的 Campaign
    pub fn get_campaign(&self, campaign_id: &str) -> Option<Arc<Campaign>> {
        self.position(campaign_id).map(|pos| Arc::clone(&self.campaigns[pos]))
    }

    pub fn campaigns(&self) -> &[Arc<Campaign>] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    fn position(&self, campaign_id: &str) -> Option<usize> {
        self.campaigns
            .iter()
            .position(|c| c.id.as_deref() == Some(campaign_id))
    }
}

impl Extend<Campaign> for CampaignManager {
    fn extend<T: IntoIterator<Item = Campaign>>(&mut self, iter: T) {
        for campaign in iter {
            self.add_campaign(campaign);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: Option<&str>, game_name: &str) -> Campaign {
        Campaign {
            id: id.map(str::to_string),
            game_name: Some(game_name.to_string()),
            ..Campaign::new()
        }
    }

    #[test]
    fn keeps_insertion_order_and_campaigns_without_id() {
        let mut manager = CampaignManager::new();
        assert!(manager.is_empty());

        manager.add_campaign(campaign(Some("b"), "Second"));
        manager.add_campaign(campaign(None, "Anonymous"));
        manager.add_campaign(campaign(Some("a"), "First"));

        let names: Vec<_> = manager
            .campaigns()
            .iter()
            .map(|c| c.game_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["Second", "Anonymous", "First"]);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn lookup_returns_first_match_for_duplicate_ids() {
        let mut manager = CampaignManager::new();
        manager.extend([campaign(Some("dup"), "One"), campaign(Some("dup"), "Two")]);

        let found = manager.get_campaign("dup").unwrap();
        assert_eq!(found.game_name.as_deref(), Some("One"));
        assert!(manager.get_campaign("missing").is_none());
    }

    #[test]
    fn lent_handle_survives_removal() {
        let mut manager = CampaignManager::new();
        let lent = manager.add_campaign(campaign(Some("c1"), "Kept"));

        let removed = manager.remove_campaign("c1").unwrap();
        assert!(Arc::ptr_eq(&lent, &removed));
        assert!(manager.is_empty());
        assert_eq!(lent.game_name.as_deref(), Some("Kept"));
        assert!(manager.remove_campaign("c1").is_none());
    }
}
