//! Per-campaign insights loader for the detail view.

use campaign_client::CampaignApi;
use campaign_core::types::CampaignInsights;
use campaign_core::CampaignResult;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

pub struct SummaryLoader {
    api: Arc<dyn CampaignApi>,
    state: Mutex<LoaderState>,
}

#[derive(Default)]
struct LoaderState {
    generation: u64,
    loaded: Option<(String, CampaignInsights)>,
}

impl SummaryLoader {
    pub fn new(api: Arc<dyn CampaignApi>) -> Self {
        Self {
            api,
            state: Mutex::new(LoaderState::default()),
        }
    }

    /// Fetches the sites, periods and demographic summaries concurrently.
    ///
    /// Returns `Ok(None)` when a later `load` or [`clear`](Self::clear)
    /// superseded this one. A failed load leaves the cached campaign as is.
    pub async fn load(&self, campaign_id: &str) -> CampaignResult<Option<CampaignInsights>> {
        let generation = {
            let mut state = self.state.lock();
            if let Some((loaded_id, insights)) = &state.loaded {
                if loaded_id == campaign_id {
                    debug!(campaign_id, "Insights served from cache");
                    return Ok(Some(insights.clone()));
                }
            }
            state.generation += 1;
            state.generation
        };

        let result = tokio::try_join!(
            self.api.sites_summary(campaign_id),
            self.api.periods_summary(campaign_id),
            self.api.campaign_summary(campaign_id),
        );

        let mut state = self.state.lock();
        if generation != state.generation {
            metrics::counter!("campaign_query.stale_discarded").increment(1);
            debug!(campaign_id, generation, "Discarding stale insights");
            return Ok(None);
        }

        let (sites, periods, demographics) = result?;
        let insights = CampaignInsights {
            sites,
            periods,
            demographics,
        };
        info!(
            campaign_id,
            total_sites = insights.sites.total_sites,
            total_periods = insights.periods.total_periods,
            "Campaign insights loaded"
        );
        state.loaded = Some((campaign_id.to_string(), insights.clone()));
        Ok(Some(insights))
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.loaded = None;
    }

    pub fn loaded_campaign(&self) -> Option<String> {
        self.state.lock().loaded.as_ref().map(|(id, _)| id.clone())
    }
}
