//! reqwest-backed [`CampaignApi`] against the campaign analytics service.

use crate::api::CampaignApi;
use crate::query::CampaignQuery;
use async_trait::async_trait;
use campaign_adapter as adapter;
use campaign_core::config::ApiConfig;
use campaign_core::types::{
    CampaignDetail, CampaignSummary, PaginatedCampaigns, PeriodsSummary, SitesSummary,
};
use campaign_core::{CampaignError, CampaignResult, FilterDialect};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

pub struct HttpCampaignClient {
    http: reqwest::Client,
    base_url: Url,
    dialect: FilterDialect,
}

impl HttpCampaignClient {
    pub fn new(config: &ApiConfig) -> CampaignResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CampaignError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(CampaignError::InvalidUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CampaignError::Transport(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %base_url,
            timeout_ms = config.timeout_ms,
            dialect = ?config.filter_dialect,
            "Campaign client configured"
        );

        Ok(Self {
            http,
            base_url,
            dialect: config.filter_dialect,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> CampaignResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CampaignError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url, params: &[(&str, String)]) -> CampaignResult<Value> {
        let started = Instant::now();
        metrics::counter!("campaign_client.requests").increment(1);
        debug!(url = %url, params = params.len(), "Sending campaign request");

        let response = self
            .http
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            metrics::counter!("campaign_client.errors").increment(1);
            warn!(url = %url, status = status.as_u16(), "Campaign service returned an error status");
            return Err(CampaignError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| transport_error(&url, e))?;
        let value = serde_json::from_slice(&body).map_err(|e| {
            metrics::counter!("campaign_client.errors").increment(1);
            warn!(url = %url, error = %e, "Campaign service returned a non-JSON body");
            CampaignError::Decode(e.to_string())
        })?;

        metrics::histogram!("campaign_client.latency_ms")
            .record(started.elapsed().as_secs_f64() * 1000.0);
        Ok(value)
    }
}

fn transport_error(url: &Url, err: reqwest::Error) -> CampaignError {
    metrics::counter!("campaign_client.errors").increment(1);
    warn!(url = %url, error = %err, timeout = err.is_timeout(), "Campaign request failed");
    CampaignError::Transport(err.to_string())
}

#[async_trait]
impl CampaignApi for HttpCampaignClient {
    async fn list_campaigns(&self, query: &CampaignQuery) -> CampaignResult<PaginatedCampaigns> {
        let url = self.endpoint(&["campaigns", ""])?;
        let raw = self.get_json(url, &query.to_params(self.dialect)).await?;
        Ok(adapter::map_page(&raw))
    }

    async fn campaign_detail(&self, campaign_id: &str) -> CampaignResult<CampaignDetail> {
        let url = self.endpoint(&["campaigns", campaign_id])?;
        let raw = self.get_json(url, &[]).await?;
        Ok(adapter::map_detail(&raw))
    }

    async fn sites_summary(&self, campaign_id: &str) -> CampaignResult<SitesSummary> {
        let url = self.endpoint(&["campaigns", campaign_id, "sites", "summary"])?;
        let raw = self.get_json(url, &[]).await?;
        Ok(adapter::map_sites_summary(&raw))
    }

    async fn periods_summary(&self, campaign_id: &str) -> CampaignResult<PeriodsSummary> {
        let url = self.endpoint(&["campaigns", campaign_id, "periods", "summary"])?;
        let raw = self.get_json(url, &[]).await?;
        Ok(adapter::map_periods_summary(&raw))
    }

    async fn campaign_summary(&self, campaign_id: &str) -> CampaignResult<CampaignSummary> {
        let url = self.endpoint(&["campaigns", campaign_id, "summary"])?;
        let raw = self.get_json(url, &[]).await?;
        Ok(adapter::map_campaign_summary(&raw))
    }
}
