//! Page request composition for the campaign list endpoint.

use campaign_core::types::DateRange;
use campaign_core::FilterDialect;
use serde::Serialize;

/// User-facing filter state. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryFilters {
    pub page: u64,
    pub campaign_type: Option<String>,
    pub date_range: Option<DateRange>,
    pub search: String,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            page: 1,
            campaign_type: None,
            date_range: None,
            search: String::new(),
        }
    }
}

/// One request against `GET /campaigns/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignQuery {
    pub skip: u64,
    pub limit: u64,
    pub campaign_type: Option<String>,
    pub date_range: Option<DateRange>,
    pub search: Option<String>,
}

impl CampaignQuery {
    /// Offset is `(page - 1) * page_size`; empty type and search are left out.
    pub fn for_page(filters: &QueryFilters, page_size: u64) -> Self {
        let page = filters.page.max(1);
        Self {
            skip: (page - 1).saturating_mul(page_size),
            limit: page_size,
            campaign_type: filters
                .campaign_type
                .clone()
                .filter(|value| !value.is_empty()),
            date_range: filters.date_range,
            search: Some(filters.search.clone()).filter(|value| !value.is_empty()),
        }
    }

    /// Query-string pairs in the given dialect.
    pub fn to_params(&self, dialect: FilterDialect) -> Vec<(&'static str, String)> {
        let (type_key, start_key, end_key) = match dialect {
            FilterDialect::Canonical => ("campaign_type", "start_date", "end_date"),
            FilterDialect::Localized => ("tipo_campania", "fecha_inicio", "fecha_fin"),
        };

        let mut params = vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())];
        if let Some(campaign_type) = &self.campaign_type {
            params.push((type_key, campaign_type.clone()));
        }
        if let Some(range) = &self.date_range {
            params.push((start_key, range.start_param()));
            params.push((end_key, range.end_param()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}
