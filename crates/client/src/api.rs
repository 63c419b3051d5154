//! Fetch boundary between the query layer and the campaign service.

use crate::query::CampaignQuery;
use async_trait::async_trait;
use campaign_core::types::{
    CampaignDetail, CampaignSummary, PaginatedCampaigns, PeriodsSummary, SitesSummary,
};
use campaign_core::CampaignResult;

/// Read-only access to the campaign service. Implementations return
/// canonical entities; only transport failures are reported as errors.
#[async_trait]
pub trait CampaignApi: Send + Sync {
    async fn list_campaigns(&self, query: &CampaignQuery) -> CampaignResult<PaginatedCampaigns>;

    async fn campaign_detail(&self, campaign_id: &str) -> CampaignResult<CampaignDetail>;

    async fn sites_summary(&self, campaign_id: &str) -> CampaignResult<SitesSummary>;

    async fn periods_summary(&self, campaign_id: &str) -> CampaignResult<PeriodsSummary>;

    async fn campaign_summary(&self, campaign_id: &str) -> CampaignResult<CampaignSummary>;
}
