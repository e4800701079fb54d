// src/model/campaign.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CampaignError;

/// **广告活动（Campaign）**
///
/// 只负责保存素材地址和标识信息，由解析层填充、展示层读取。
/// 所有字段相互独立且均可缺省，赋值时不做任何校验（URL 不检查格式，字符串不检查是否为空）。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Campaign {
    /// 应用图标地址
    #[serde(rename = "appIconURL", default, skip_serializing_if = "Option::is_none")]
    pub app_icon_url: Option<String>,
    /// 点击后打开的地址
    #[serde(rename = "clickURL", default, skip_serializing_if = "Option::is_none")]
    pub click_url: Option<String>,
    /// 静态图片素材地址
    #[serde(rename = "pictureURL", default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// 可下载的视频素材地址
    #[serde(rename = "trailerDownloadableURL", default, skip_serializing_if = "Option::is_none")]
    pub trailer_downloadable_url: Option<String>,
    /// 可流式播放的视频素材地址
    #[serde(rename = "trailerStreamingURL", default, skip_serializing_if = "Option::is_none")]
    pub trailer_streaming_url: Option<String>,
    /// 商店目录中的游戏 ID
    #[serde(rename = "gameID", default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    /// 游戏名称
    #[serde(rename = "gameName", default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// campaign 自身的 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Campaign {
    /// 创建一个所有字段都为空的 Campaign
    pub fn new() -> Self {
        Self::default()
    }

    /// 按字段读取
    pub fn get(&self, field: CampaignField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// 按字段赋值，直接替换旧值；传入 `None` 即清空该字段
    pub fn set<S: Into<String>>(&mut self, field: CampaignField, value: Option<S>) {
        *self.slot_mut(field) = value.map(Into::into);
    }

    fn slot(&self, field: CampaignField) -> &Option<String> {
        match field {
            CampaignField::AppIconUrl => &self.app_icon_url,
            CampaignField::ClickUrl => &self.click_url,
            CampaignField::PictureUrl => &self.picture_url,
            CampaignField::TrailerDownloadableUrl => &self.trailer_downloadable_url,
            CampaignField::TrailerStreamingUrl => &self.trailer_streaming_url,
            CampaignField::GameId => &self.game_id,
            CampaignField::GameName => &self.game_name,
            CampaignField::Id => &self.id,
        }
    }

    fn slot_mut(&mut self, field: CampaignField) -> &mut Option<String> {
        match field {
            CampaignField::AppIconUrl => &mut self.app_icon_url,
            CampaignField::ClickUrl => &mut self.click_url,
            CampaignField::PictureUrl => &mut self.picture_url,
            CampaignField::TrailerDownloadableUrl => &mut self.trailer_downloadable_url,
            CampaignField::TrailerStreamingUrl => &mut self.trailer_streaming_url,
            CampaignField::GameId => &mut self.game_id,
            CampaignField::GameName => &mut self.game_name,
            CampaignField::Id => &mut self.id,
        }
    }
}

/// Campaign 的字段，顺序与 JSON key 一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignField {
    AppIconUrl,
    ClickUrl,
    PictureUrl,
    TrailerDownloadableUrl,
    TrailerStreamingUrl,
    GameId,
    GameName,
    Id,
}

impl CampaignField {
    pub const ALL: [CampaignField; 8] = [
        CampaignField::AppIconUrl,
        CampaignField::ClickUrl,
        CampaignField::PictureUrl,
        CampaignField::TrailerDownloadableUrl,
        CampaignField::TrailerStreamingUrl,
        CampaignField::GameId,
        CampaignField::GameName,
        CampaignField::Id,
    ];

    /// 序列化时使用的 key
    pub fn key(self) -> &'static str {
        match self {
            CampaignField::AppIconUrl => "appIconURL",
            CampaignField::ClickUrl => "clickURL",
            CampaignField::PictureUrl => "pictureURL",
            CampaignField::TrailerDownloadableUrl => "trailerDownloadableURL",
            CampaignField::TrailerStreamingUrl => "trailerStreamingURL",
            CampaignField::GameId => "gameID",
            CampaignField::GameName => "gameName",
            CampaignField::Id => "id",
        }
    }

    pub fn is_url(self) -> bool {
        matches!(
            self,
            CampaignField::AppIconUrl
                | CampaignField::ClickUrl
                | CampaignField::PictureUrl
                | CampaignField::TrailerDownloadableUrl
                | CampaignField::TrailerStreamingUrl
        )
    }
}

impl fmt::Display for CampaignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CampaignField {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CampaignError::UnknownField(s.to_string()))
    }
}
