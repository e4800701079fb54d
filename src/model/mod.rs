pub mod adapters;
pub mod campaign;
pub mod campaign_manager;
