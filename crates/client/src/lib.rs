#![warn(clippy::unwrap_used)]

pub mod api;
pub mod http;
pub mod query;

pub use api::CampaignApi;
pub use http::HttpCampaignClient;
pub use query::{CampaignQuery, QueryFilters};
