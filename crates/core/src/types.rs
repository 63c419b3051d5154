//! Canonical campaign model. Every entity here is produced by the response
//! mapper from a raw server record and is never mutated afterwards.

use crate::error::{CampaignError, CampaignResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Campaign ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub campaign_type: String,
    /// ISO `YYYY-MM-DD`, empty when the server omitted it.
    pub start_date: String,
    pub end_date: String,
    pub metro_zone_universe: f64,
    pub people_impacts: f64,
    pub vehicle_impacts: f64,
    pub calculated_frequency: f64,
    pub average_frequency: f64,
    pub reach: f64,
    pub ses: SocioeconomicShares,
    pub age: AgeShares,
    pub gender: GenderShares,
}

/// Audience share per socioeconomic segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SocioeconomicShares {
    pub ab: f64,
    pub c: f64,
    pub c_plus: f64,
    pub d: f64,
    pub d_plus: f64,
    pub e: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeShares {
    pub age_0_14: f64,
    pub age_15_19: f64,
    pub age_20_24: f64,
    pub age_25_34: f64,
    pub age_35_44: f64,
    pub age_45_64: f64,
    pub age_65_plus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderShares {
    pub men: f64,
    pub women: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignListItem {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub sites_count: u64,
    pub periods_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub periods: Vec<Period>,
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Period {
    pub id: u64,
    pub campaign_name: String,
    pub period: String,
    pub people_impacts: f64,
    pub vehicle_impacts: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Site {
    pub id: u64,
    pub campaign_name: String,
    pub site_code: String,
    pub furniture_type: String,
    pub ad_type: String,
    pub state: String,
    pub municipality: String,
    pub metro_area: String,
    pub frequency_biweekly: f64,
    pub frequency_monthly: f64,
    pub impacts_biweekly: f64,
    pub impacts_monthly: f64,
    pub reach_monthly: f64,
}

// ─── Summaries ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SitesSummary {
    pub total_sites: u64,
    pub by_type: Vec<SiteTypeBreakdown>,
    pub by_municipality: Vec<MunicipalityBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteTypeBreakdown {
    pub furniture_type: String,
    pub count: u64,
    pub total_impacts: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MunicipalityBreakdown {
    pub municipality: String,
    pub count: u64,
    pub total_impacts: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodsSummary {
    pub total_periods: u64,
    pub data: Vec<PeriodImpacts>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodImpacts {
    pub period: String,
    pub people_impacts: f64,
    pub vehicle_impacts: f64,
}

/// Demographic distributions as (label, share) pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub ses_distribution: Vec<DemographicShare>,
    pub age_distribution: Vec<DemographicShare>,
    pub gender_distribution: Vec<DemographicShare>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemographicShare {
    pub label: String,
    pub value: f64,
}

/// The three per-campaign summaries shown together in a detail view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignInsights {
    pub sites: SitesSummary,
    pub periods: PeriodsSummary,
    pub demographics: CampaignSummary,
}

// ─── Pagination ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaginatedCampaigns {
    pub data: Vec<CampaignListItem>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

// ─── Filters ───────────────────────────────────────────────────────────────

/// Inclusive calendar range used to filter campaigns by their run dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CampaignResult<Self> {
        if end < start {
            return Err(CampaignError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Both bounds make a range; a missing bound means no range at all.
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> CampaignResult<Option<Self>> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Wire form of the start bound (`YYYY-MM-DD`).
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}
