//! Query controller: owns the filter/pagination/search state and the result
//! set of one campaign list view.
//!
//! Every triggering operation bumps a generation token and spawns one fetch.
//! A fetch may only commit when its token is still current, so whichever
//! request was issued last wins regardless of completion order. Search input
//! is debounced: the committed search only changes once typing pauses.
//!
//! All operations must be called from within a Tokio runtime.

use crate::debounce::Debouncer;
use crate::state::{LoadPhase, QuerySnapshot};
use campaign_client::{CampaignApi, CampaignQuery, QueryFilters};
use campaign_core::config::QueryConfig;
use campaign_core::types::{CampaignListItem, DateRange, PaginatedCampaigns};
use campaign_core::CampaignResult;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub struct QueryController {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn CampaignApi>,
    page_size: u64,
    state: Mutex<ControllerState>,
    snapshots: watch::Sender<QuerySnapshot>,
}

struct ControllerState {
    filters: QueryFilters,
    search_input: String,
    generation: u64,
    phase: LoadPhase,
    campaigns: Vec<CampaignListItem>,
    total: u64,
    error: Option<String>,
    debounce: Debouncer,
}

impl QueryController {
    pub fn new(api: Arc<dyn CampaignApi>, settings: &QueryConfig) -> Self {
        Self::with_filters(api, settings, QueryFilters::default())
    }

    /// Starts from preset filters. Nothing is fetched until the first
    /// triggering operation or [`refresh`](Self::refresh).
    pub fn with_filters(api: Arc<dyn CampaignApi>, settings: &QueryConfig, filters: QueryFilters) -> Self {
        let page_size = settings.page_size.max(1);
        let filters = QueryFilters {
            page: filters.page.max(1),
            ..filters
        };
        let (snapshots, _) = watch::channel(QuerySnapshot::initial(filters.clone(), page_size));

        Self {
            inner: Arc::new(Inner {
                api,
                page_size,
                state: Mutex::new(ControllerState {
                    search_input: filters.search.clone(),
                    filters,
                    generation: 0,
                    phase: LoadPhase::Idle,
                    campaigns: Vec::new(),
                    total: 0,
                    error: None,
                    debounce: Debouncer::new(settings.debounce()),
                }),
                snapshots,
            }),
        }
    }

    pub fn set_campaign_type(&self, campaign_type: Option<String>) {
        self.inner.update("campaign_type", |state| {
            state.filters.campaign_type = campaign_type;
            state.filters.page = 1;
        });
    }

    pub fn set_date_range(&self, range: Option<DateRange>) {
        self.inner.update("date_range", |state| {
            state.filters.date_range = range;
            state.filters.page = 1;
        });
    }

    /// Both bounds set a range and no bounds clear it. A half-filled range
    /// is ignored, and an inverted one is rejected; neither touches state.
    pub fn set_date_bounds(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> CampaignResult<()> {
        let range = match (start, end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            (None, None) => None,
            _ => {
                debug!(?start, ?end, "Half-filled date range ignored");
                return Ok(());
            }
        };
        self.set_date_range(range);
        Ok(())
    }

    /// Updates the visible search text now; the committed search follows
    /// once no further call arrives within the debounce delay.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let weak = Arc::downgrade(&self.inner);
        let mut state = self.inner.state.lock();
        state.search_input = text.into();
        state.debounce.rearm(move |seq| {
            if let Some(inner) = weak.upgrade() {
                inner.settle_search(seq);
            }
        });
        metrics::counter!("campaign_query.debounce_rearmed").increment(1);
        self.inner.publish(&state);
    }

    /// Page numbers are 1-based; 0 is treated as 1.
    pub fn set_page(&self, page: u64) {
        self.inner.update("page", |state| {
            state.filters.page = page.max(1);
        });
    }

    pub fn clear_all_filters(&self) {
        self.inner.update("clear_filters", |state| {
            if state.debounce.cancel() {
                debug!("Pending search discarded by filter reset");
            }
            state.filters = QueryFilters::default();
            state.search_input.clear();
        });
    }

    /// Fetches again with the current filters.
    pub fn refresh(&self) {
        self.inner.update("refresh", |_| {});
    }

    /// Hides the current error message; results and phase are unchanged.
    pub fn dismiss_error(&self) {
        let mut state = self.inner.state.lock();
        if state.error.take().is_some() {
            self.inner.publish(&state);
        }
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        self.inner.snapshots.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Waits until no fetch is outstanding and no search is pending.
    pub async fn settled(&self) -> QuerySnapshot {
        let mut snapshots = self.subscribe();
        let settled = snapshots.wait_for(QuerySnapshot::is_settled).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| self.snapshot())
    }
}

impl Drop for QueryController {
    fn drop(&mut self) {
        self.inner.state.lock().debounce.cancel();
    }
}

impl Inner {
    fn update(self: &Arc<Self>, reason: &'static str, mutate: impl FnOnce(&mut ControllerState)) {
        let mut state = self.state.lock();
        mutate(&mut *state);
        self.issue_fetch(&mut state, reason);
    }

    fn settle_search(self: &Arc<Self>, seq: u64) {
        let mut state = self.state.lock();
        if !state.debounce.finish(seq) {
            return;
        }
        state.filters.search = state.search_input.clone();
        state.filters.page = 1;
        self.issue_fetch(&mut state, "search");
    }

    fn issue_fetch(self: &Arc<Self>, state: &mut ControllerState, reason: &'static str) {
        state.generation += 1;
        state.phase = LoadPhase::Loading;
        state.error = None;
        let generation = state.generation;
        let query = CampaignQuery::for_page(&state.filters, self.page_size);
        self.publish(state);

        metrics::counter!("campaign_query.fetches").increment(1);
        debug!(
            generation,
            reason,
            skip = query.skip,
            limit = query.limit,
            campaign_type = ?query.campaign_type,
            search = ?query.search,
            "Issuing campaign fetch"
        );

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = inner.api.list_campaigns(&query).await;
            inner.complete(generation, result);
        });
    }

    fn complete(&self, generation: u64, result: CampaignResult<PaginatedCampaigns>) {
        let mut state = self.state.lock();
        if generation != state.generation {
            metrics::counter!("campaign_query.stale_discarded").increment(1);
            debug!(generation, current = state.generation, "Discarding stale campaign response");
            return;
        }

        match result {
            Ok(page) => {
                info!(generation, rows = page.data.len(), total = page.total, "Campaign page loaded");
                state.campaigns = page.data;
                state.total = page.total;
                state.error = None;
                state.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                warn!(generation, error = %e, "Campaign fetch failed");
                state.campaigns.clear();
                state.total = 0;
                state.error = Some(e.to_string());
                state.phase = LoadPhase::Errored;
            }
        }
        self.publish(&state);
    }

    fn publish(&self, state: &ControllerState) {
        self.snapshots.send_replace(QuerySnapshot {
            phase: state.phase,
            filters: state.filters.clone(),
            search_input: state.search_input.clone(),
            search_pending: state.debounce.is_armed(),
            page_size: self.page_size,
            campaigns: state.campaigns.clone(),
            total: state.total,
            error: state.error.clone(),
        });
    }
}
