//! In-memory [`CampaignApi`] for controller and loader tests.

use async_trait::async_trait;
use campaign_client::{CampaignApi, CampaignQuery};
use campaign_core::types::{
    Campaign, CampaignDetail, CampaignListItem, CampaignSummary, DemographicShare,
    PaginatedCampaigns, PeriodsSummary, SitesSummary,
};
use campaign_core::{CampaignError, CampaignResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};

type ListReply = CampaignResult<PaginatedCampaigns>;

/// Immediate mode answers every list call with a page named after its
/// offset. Gated mode parks each list call until [`FakeApi::resolve`].
/// Summary calls always wait until their campaign is released.
pub(crate) struct FakeApi {
    gated: bool,
    fail_lists: AtomicBool,
    queries: Mutex<Vec<CampaignQuery>>,
    replies: Mutex<Vec<Option<oneshot::Sender<ListReply>>>>,
    returned: AtomicUsize,
    summary_calls: Mutex<Vec<String>>,
    fail_summaries: AtomicBool,
    gates: Mutex<HashMap<String, watch::Sender<bool>>>,
}

impl FakeApi {
    fn build(gated: bool) -> Arc<Self> {
        Arc::new(Self {
            gated,
            fail_lists: AtomicBool::new(false),
            queries: Mutex::new(Vec::new()),
            replies: Mutex::new(Vec::new()),
            returned: AtomicUsize::new(0),
            summary_calls: Mutex::new(Vec::new()),
            fail_summaries: AtomicBool::new(false),
            gates: Mutex::new(HashMap::new()),
        })
    }

    pub(crate) fn immediate() -> Arc<Self> {
        Self::build(false)
    }

    pub(crate) fn gated() -> Arc<Self> {
        Self::build(true)
    }

    pub(crate) fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_summaries(&self, fail: bool) {
        self.fail_summaries.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn queries(&self) -> Vec<CampaignQuery> {
        self.queries.lock().clone()
    }

    pub(crate) fn summary_calls(&self) -> Vec<String> {
        self.summary_calls.lock().clone()
    }

    /// Completes the `index`-th list call (0-based, in issue order).
    pub(crate) fn resolve(&self, index: usize, reply: ListReply) {
        let sender = self.replies.lock()[index].take();
        if let Some(sender) = sender {
            let _ = sender.send(reply);
        }
    }

    pub(crate) fn release(&self, campaign_id: &str) {
        self.gates
            .lock()
            .entry(campaign_id.to_string())
            .or_insert_with(|| watch::channel(false).0)
            .send_replace(true);
    }

    pub(crate) async fn wait_for_list_calls(&self, count: usize) {
        while self.queries.lock().len() < count {
            tokio::task::yield_now().await;
        }
    }

    /// Waits until `count` list calls have returned to the controller.
    pub(crate) async fn wait_for_returns(&self, count: usize) {
        while self.returned.load(Ordering::SeqCst) < count {
            tokio::task::yield_now().await;
        }
    }

    pub(crate) async fn wait_for_summary_calls(&self, count: usize) {
        while self.summary_calls.lock().len() < count {
            tokio::task::yield_now().await;
        }
    }

    fn gate(&self, campaign_id: &str) -> watch::Receiver<bool> {
        self.gates
            .lock()
            .entry(campaign_id.to_string())
            .or_insert_with(|| watch::channel(false).0)
            .subscribe()
    }

    async fn summary_call(&self, campaign_id: &str) -> CampaignResult<()> {
        self.summary_calls.lock().push(campaign_id.to_string());
        let mut open = self.gate(campaign_id);
        let _ = open.wait_for(|released| *released).await;
        if self.fail_summaries.load(Ordering::SeqCst) {
            return Err(CampaignError::Transport("connection reset".into()));
        }
        Ok(())
    }
}

pub(crate) fn page_of(names: &[&str], total: u64) -> PaginatedCampaigns {
    PaginatedCampaigns {
        data: names
            .iter()
            .map(|name| CampaignListItem {
                campaign: Campaign {
                    name: name.to_string(),
                    ..Default::default()
                },
                sites_count: 1,
                periods_count: 1,
            })
            .collect(),
        total,
        ..Default::default()
    }
}

pub(crate) fn names(items: &[CampaignListItem]) -> Vec<String> {
    items.iter().map(|item| item.campaign.name.clone()).collect()
}

#[async_trait]
impl CampaignApi for FakeApi {
    async fn list_campaigns(&self, query: &CampaignQuery) -> CampaignResult<PaginatedCampaigns> {
        self.queries.lock().push(query.clone());

        let reply = if self.gated {
            let (tx, rx) = oneshot::channel();
            self.replies.lock().push(Some(tx));
            rx.await
                .unwrap_or_else(|_| Err(CampaignError::Transport("reply dropped".into())))
        } else if self.fail_lists.load(Ordering::SeqCst) {
            Err(CampaignError::Transport("connection refused".into()))
        } else {
            Ok(page_of(&[&format!("skip-{}", query.skip)], 42))
        };

        self.returned.fetch_add(1, Ordering::SeqCst);
        reply
    }

    async fn campaign_detail(&self, campaign_id: &str) -> CampaignResult<CampaignDetail> {
        Ok(CampaignDetail {
            campaign: Campaign {
                name: campaign_id.to_string(),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn sites_summary(&self, campaign_id: &str) -> CampaignResult<SitesSummary> {
        self.summary_call(campaign_id).await?;
        Ok(SitesSummary {
            total_sites: campaign_id.len() as u64,
            ..Default::default()
        })
    }

    async fn periods_summary(&self, campaign_id: &str) -> CampaignResult<PeriodsSummary> {
        self.summary_call(campaign_id).await?;
        Ok(PeriodsSummary::default())
    }

    async fn campaign_summary(&self, campaign_id: &str) -> CampaignResult<CampaignSummary> {
        self.summary_call(campaign_id).await?;
        Ok(CampaignSummary {
            gender_distribution: vec![DemographicShare {
                label: campaign_id.to_string(),
                value: 1.0,
            }],
            ..Default::default()
        })
    }
}
