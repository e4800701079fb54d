// src/mock.rs

use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use tracing::debug;

use crate::error::CampaignError;
use crate::model::campaign::Campaign;

/// 生成形如 `https://cdn.<host>.com/<kind>/<token>` 的素材地址
fn url_strategy(kind: &'static str) -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z0-9]{8,16}")
        .prop_map(move |(host, token)| format!("https://cdn.{}.com/{}/{}", host, kind, token))
}

/// 任意字符串，包括空串和非法 URL，用来验证 Campaign 不做校验
pub fn field_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,8}://[a-z.]{1,12}/[a-z0-9/]{0,12}",
        ".{0,32}",
    ]
}

/// 使用 proptest 生成随机的 Campaign
/// 每个字段独立地为空或有值
pub fn campaign_strategy() -> impl Strategy<Value = Campaign> {
    (
        prop::option::of(url_strategy("icon")),
        prop::option::of(url_strategy("click")),
        prop::option::of(url_strategy("picture")),
        prop::option::of(url_strategy("trailer.mp4")),
        prop::option::of(url_strategy("trailer.m3u8")),
        prop::option::of("[1-9][0-9]{4,8}"),
        prop::option::of("[A-Z][a-z]{3,10}( [A-Z][a-z]{3,10}){0,2}"),
        prop::option::of("[0-9a-f]{24}"),
    )
        .prop_map(
            |(app_icon_url, click_url, picture_url, trailer_downloadable_url, trailer_streaming_url, game_id, game_name, id)| {
                Campaign {
                    app_icon_url,
                    click_url,
                    picture_url,
                    trailer_downloadable_url,
                    trailer_streaming_url,
                    game_id,
                    game_name,
                    id,
                }
            },
        )
}

/// 生成 `count` 个随机 Campaign
pub fn generate(count: usize) -> Result<Vec<Campaign>, CampaignError> {
    let mut runner = TestRunner::default();
    let campaigns = prop::collection::vec(campaign_strategy(), count)
        .new_tree(&mut runner)
        .map_err(|e| CampaignError::Generate(e.to_string()))?
        .current();

    debug!(count = campaigns.len(), "generated mock campaigns");
    Ok(campaigns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::campaign::CampaignField;

    #[test]
    fn generate_returns_requested_count() {
        assert_eq!(generate(0).unwrap().len(), 0);
        assert_eq!(generate(7).unwrap().len(), 7);
    }

    proptest! {
        #[test]
        fn generated_urls_point_at_cdn(campaign in campaign_strategy()) {
            for field in CampaignField::ALL.into_iter().filter(|f| f.is_url()) {
                if let Some(url) = campaign.get(field) {
                    prop_assert!(url.starts_with("https://cdn."), "{} = {}", field, url);
                }
            }
        }
    }
}
