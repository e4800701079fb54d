// src/lib.rs

pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod model;
pub mod report;

pub use error::CampaignError;
pub use model::campaign::{Campaign, CampaignField};
pub use model::campaign_manager::CampaignManager;
