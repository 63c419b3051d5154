//! Read-only views of the controller state handed to the view layer.

use campaign_client::QueryFilters;
use campaign_core::types::CampaignListItem;
use serde::Serialize;

/// Fetch lifecycle. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Immutable copy of the controller state at one transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySnapshot {
    pub phase: LoadPhase,
    /// Committed filters, i.e. the ones the last issued fetch used.
    pub filters: QueryFilters,
    /// Search text as typed, possibly not yet committed.
    pub search_input: String,
    pub search_pending: bool,
    pub page_size: u64,
    pub campaigns: Vec<CampaignListItem>,
    pub total: u64,
    pub error: Option<String>,
}

/// Aggregates over the campaigns of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PageStats {
    pub total_people_impacts: f64,
    pub total_reach: f64,
    pub total_sites: u64,
}

impl QuerySnapshot {
    pub(crate) fn initial(filters: QueryFilters, page_size: u64) -> Self {
        Self {
            phase: LoadPhase::Idle,
            search_input: filters.search.clone(),
            filters,
            search_pending: false,
            page_size,
            campaigns: Vec::new(),
            total: 0,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// No fetch outstanding and no search waiting to be committed.
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && !self.search_pending
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn stats(&self) -> PageStats {
        self.campaigns.iter().fold(PageStats::default(), |mut acc, item| {
            acc.total_people_impacts += item.campaign.people_impacts;
            acc.total_reach += item.campaign.reach;
            acc.total_sites = acc.total_sites.saturating_add(item.sites_count);
            acc
        })
    }
}
