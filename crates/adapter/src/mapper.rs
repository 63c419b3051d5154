//! Raw server record → canonical entity transforms.
//!
//! Every function is pure and total: a malformed record yields an entity
//! filled with defaults, never an error.

use crate::keys::{campaign, page, period, site, summary};
use crate::resolver::Record;
use campaign_core::types::{
    AgeShares, Campaign, CampaignDetail, CampaignListItem, CampaignSummary, DemographicShare,
    GenderShares, MunicipalityBreakdown, PaginatedCampaigns, Period, PeriodImpacts,
    PeriodsSummary, Site, SiteTypeBreakdown, SitesSummary, SocioeconomicShares,
};
use serde_json::Value;

fn map_all<T>(items: &[Value], map: fn(&Value) -> T) -> Vec<T> {
    items.iter().map(map).collect()
}

// ─── Campaign ──────────────────────────────────────────────────────────────

pub fn map_campaign(raw: &Value) -> Campaign {
    let r = Record::new(raw);
    Campaign {
        name: r.string(campaign::NAME),
        campaign_type: r.string(campaign::CAMPAIGN_TYPE),
        start_date: r.string(campaign::START_DATE),
        end_date: r.string(campaign::END_DATE),
        metro_zone_universe: r.number(campaign::METRO_ZONE_UNIVERSE),
        people_impacts: r.number(campaign::PEOPLE_IMPACTS),
        vehicle_impacts: r.number(campaign::VEHICLE_IMPACTS),
        calculated_frequency: r.number(campaign::CALCULATED_FREQUENCY),
        average_frequency: r.number(campaign::AVERAGE_FREQUENCY),
        reach: r.number(campaign::REACH),
        ses: SocioeconomicShares {
            ab: r.number(campaign::SES_AB),
            c: r.number(campaign::SES_C),
            c_plus: r.number(campaign::SES_C_PLUS),
            d: r.number(campaign::SES_D),
            d_plus: r.number(campaign::SES_D_PLUS),
            e: r.number(campaign::SES_E),
        },
        age: AgeShares {
            age_0_14: r.number(campaign::AGE_0_14),
            age_15_19: r.number(campaign::AGE_15_19),
            age_20_24: r.number(campaign::AGE_20_24),
            age_25_34: r.number(campaign::AGE_25_34),
            age_35_44: r.number(campaign::AGE_35_44),
            age_45_64: r.number(campaign::AGE_45_64),
            age_65_plus: r.number(campaign::AGE_65_PLUS),
        },
        gender: GenderShares {
            men: r.number(campaign::MEN),
            women: r.number(campaign::WOMEN),
        },
    }
}

pub fn map_list_item(raw: &Value) -> CampaignListItem {
    let r = Record::new(raw);
    CampaignListItem {
        campaign: map_campaign(raw),
        sites_count: r.count(campaign::SITES_COUNT),
        periods_count: r.count(campaign::PERIODS_COUNT),
    }
}

pub fn map_period(raw: &Value) -> Period {
    let r = Record::new(raw);
    Period {
        id: r.count(period::ID),
        campaign_name: r.string(period::CAMPAIGN_NAME),
        period: r.string(period::PERIOD),
        people_impacts: r.number(period::PEOPLE_IMPACTS),
        vehicle_impacts: r.number(period::VEHICLE_IMPACTS),
    }
}

pub fn map_site(raw: &Value) -> Site {
    let r = Record::new(raw);
    Site {
        id: r.count(site::ID),
        campaign_name: r.string(site::CAMPAIGN_NAME),
        site_code: r.string(site::SITE_CODE),
        furniture_type: r.string(site::FURNITURE_TYPE),
        ad_type: r.string(site::AD_TYPE),
        state: r.string(site::STATE),
        municipality: r.string(site::MUNICIPALITY),
        metro_area: r.string(site::METRO_AREA),
        frequency_biweekly: r.number(site::FREQUENCY_BIWEEKLY),
        frequency_monthly: r.number(site::FREQUENCY_MONTHLY),
        impacts_biweekly: r.number(site::IMPACTS_BIWEEKLY),
        impacts_monthly: r.number(site::IMPACTS_MONTHLY),
        reach_monthly: r.number(site::REACH_MONTHLY),
    }
}

pub fn map_detail(raw: &Value) -> CampaignDetail {
    let r = Record::new(raw);
    CampaignDetail {
        campaign: map_campaign(raw),
        periods: map_all(r.array(campaign::PERIODS), map_period),
        sites: map_all(r.array(campaign::SITES), map_site),
    }
}

// ─── Summaries ─────────────────────────────────────────────────────────────

pub fn map_site_type_breakdown(raw: &Value) -> SiteTypeBreakdown {
    let r = Record::new(raw);
    SiteTypeBreakdown {
        furniture_type: r.string(summary::FURNITURE_TYPE),
        count: r.count(summary::COUNT),
        total_impacts: r.number(summary::TOTAL_IMPACTS),
    }
}

pub fn map_municipality_breakdown(raw: &Value) -> MunicipalityBreakdown {
    let r = Record::new(raw);
    MunicipalityBreakdown {
        municipality: r.string(summary::MUNICIPALITY),
        count: r.count(summary::COUNT),
        total_impacts: r.number(summary::TOTAL_IMPACTS),
    }
}

pub fn map_sites_summary(raw: &Value) -> SitesSummary {
    let r = Record::new(raw);
    SitesSummary {
        total_sites: r.count(summary::TOTAL_SITES),
        by_type: map_all(r.array(summary::BY_TYPE), map_site_type_breakdown),
        by_municipality: map_all(r.array(summary::BY_MUNICIPALITY), map_municipality_breakdown),
    }
}

pub fn map_period_impacts(raw: &Value) -> PeriodImpacts {
    let r = Record::new(raw);
    PeriodImpacts {
        period: r.string(summary::PERIOD),
        people_impacts: r.number(summary::PEOPLE_IMPACTS),
        vehicle_impacts: r.number(summary::VEHICLE_IMPACTS),
    }
}

pub fn map_periods_summary(raw: &Value) -> PeriodsSummary {
    let r = Record::new(raw);
    PeriodsSummary {
        total_periods: r.count(summary::TOTAL_PERIODS),
        data: map_all(r.array(summary::PERIOD_DATA), map_period_impacts),
    }
}

pub fn map_demographic_share(raw: &Value) -> DemographicShare {
    let r = Record::new(raw);
    DemographicShare {
        label: r.string(summary::LABEL),
        value: r.number(summary::VALUE),
    }
}

pub fn map_campaign_summary(raw: &Value) -> CampaignSummary {
    let r = Record::new(raw);
    CampaignSummary {
        ses_distribution: map_all(r.array(summary::SES_DISTRIBUTION), map_demographic_share),
        age_distribution: map_all(r.array(summary::AGE_DISTRIBUTION), map_demographic_share),
        gender_distribution: map_all(r.array(summary::GENDER_DISTRIBUTION), map_demographic_share),
    }
}

// ─── Pagination ────────────────────────────────────────────────────────────

pub fn map_page(raw: &Value) -> PaginatedCampaigns {
    let r = Record::new(raw);
    PaginatedCampaigns {
        data: map_all(r.array(page::DATA), map_list_item),
        total: r.count(page::TOTAL),
        page: r.count(page::PAGE),
        page_size: r.count(page::PAGE_SIZE),
        total_pages: r.count(page::TOTAL_PAGES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_localized_list_response() {
        let raw = json!({
            "data": [{"name": "X", "impactos_personas": 100}],
            "total": 1,
            "page": 0,
            "size": 5,
            "total_pages": 1
        });
        let page = map_page(&raw);

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.total_pages, 1);

        let item = &page.data[0];
        assert_eq!(item.campaign.name, "X");
        assert_eq!(item.campaign.people_impacts, 100.0);
        assert_eq!(
            item.campaign,
            Campaign {
                name: "X".into(),
                people_impacts: 100.0,
                ..Default::default()
            }
        );
        assert_eq!(item.sites_count, 0);
        assert_eq!(item.periods_count, 0);
    }

    #[test]
    fn test_page_size_under_either_key() {
        assert_eq!(map_page(&json!({"page_size": 20})).page_size, 20);
        assert_eq!(map_page(&json!({"size": 10, "page_size": 20})).page_size, 10);
    }

    #[test]
    fn test_canonical_campaign_record() {
        let raw = json!({
            "name": "Primavera",
            "campaign_type": "catorcenal",
            "tipo_campania": "mensual",
            "start_date": "2024-03-01",
            "end_date": "2024-03-14",
            "reach": 5400,
            "ses_c_plus": 0.21,
            "nse_cmas": 0.99,
            "age_65_plus": 0.05,
            "women": 0.52,
            "hombres": 0.48
        });
        let campaign = map_campaign(&raw);

        assert_eq!(campaign.campaign_type, "catorcenal");
        assert_eq!(campaign.start_date, "2024-03-01");
        assert_eq!(campaign.end_date, "2024-03-14");
        assert_eq!(campaign.reach, 5400.0);
        assert_eq!(campaign.ses.c_plus, 0.21);
        assert_eq!(campaign.age.age_65_plus, 0.05);
        assert_eq!(campaign.gender.women, 0.52);
        assert_eq!(campaign.gender.men, 0.48);
    }

    #[test]
    fn test_localized_campaign_record() {
        let raw = json!({
            "name": "Invierno",
            "tipo_campania": "mensual",
            "fecha_inicio": "2024-12-01",
            "fecha_fin": "2024-12-31",
            "universo_zona_metro": 21000000,
            "impactos_vehiculos": 3200,
            "frecuencia_calculada": 4.2,
            "frecuencia_promedio": 3.9,
            "alcance": 880,
            "nse_ab": 0.1,
            "nse_dmas": 0.3,
            "edad_0a14": 0.2,
            "edad_45a64": 0.25,
            "mujeres": 0.5
        });
        let campaign = map_campaign(&raw);

        assert_eq!(campaign.campaign_type, "mensual");
        assert_eq!(campaign.start_date, "2024-12-01");
        assert_eq!(campaign.metro_zone_universe, 21_000_000.0);
        assert_eq!(campaign.vehicle_impacts, 3200.0);
        assert_eq!(campaign.calculated_frequency, 4.2);
        assert_eq!(campaign.average_frequency, 3.9);
        assert_eq!(campaign.reach, 880.0);
        assert_eq!(campaign.ses.ab, 0.1);
        assert_eq!(campaign.ses.d_plus, 0.3);
        assert_eq!(campaign.age.age_0_14, 0.2);
        assert_eq!(campaign.age.age_45_64, 0.25);
        assert_eq!(campaign.gender.women, 0.5);
        assert_eq!(campaign.gender.men, 0.0);
    }

    #[test]
    fn test_detail_maps_nested_sequences() {
        let raw = json!({
            "name": "Otoño",
            "periods": [
                {"id": 1, "campaign_name": "Otoño", "period": "2024-10", "impactos_periodo_personas": 10},
                {"id": 2, "campaign_name": "Otoño", "period": "2024-11", "period_impacts_vehicles": 4}
            ],
            "sites": [{
                "id": 9,
                "campaign_name": "Otoño",
                "codigo_del_sitio": "S-001",
                "tipo_de_mueble": "Parabús",
                "ad_type": "digital",
                "estado": "CDMX",
                "municipio": "Coyoacán",
                "zm": "Valle de México",
                "frecuencia_catorcenal": 2.5,
                "frequency_monthly": 5.0,
                "impactos_catorcenal": 100,
                "impacts_monthly": 200,
                "alcance_mensual": 0.4
            }]
        });
        let detail = map_detail(&raw);

        assert_eq!(detail.campaign.name, "Otoño");
        assert_eq!(detail.periods.len(), 2);
        assert_eq!(detail.periods[0].people_impacts, 10.0);
        assert_eq!(detail.periods[1].period, "2024-11");
        assert_eq!(detail.periods[1].vehicle_impacts, 4.0);

        let site = &detail.sites[0];
        assert_eq!(site.id, 9);
        assert_eq!(site.site_code, "S-001");
        assert_eq!(site.furniture_type, "Parabús");
        assert_eq!(site.ad_type, "digital");
        assert_eq!(site.state, "CDMX");
        assert_eq!(site.municipality, "Coyoacán");
        assert_eq!(site.metro_area, "Valle de México");
        assert_eq!(site.frequency_biweekly, 2.5);
        assert_eq!(site.frequency_monthly, 5.0);
        assert_eq!(site.impacts_biweekly, 100.0);
        assert_eq!(site.impacts_monthly, 200.0);
        assert_eq!(site.reach_monthly, 0.4);
    }

    #[test]
    fn test_detail_non_array_sequences_are_empty() {
        let detail = map_detail(&json!({"name": "Y", "periods": "none", "sites": {"id": 1}}));
        assert!(detail.periods.is_empty());
        assert!(detail.sites.is_empty());

        let detail = map_detail(&json!({"name": "Y"}));
        assert!(detail.periods.is_empty());
        assert!(detail.sites.is_empty());
    }

    #[test]
    fn test_sites_summary() {
        let raw = json!({
            "total_sites": 3,
            "by_type": [
                {"tipo_de_mueble": "Parabús", "count": 2, "total_impacts": 500},
                {"furniture_type": "Valla", "count": 1, "total_impacts": 120}
            ],
            "by_municipality": [{"municipality": "Benito Juárez", "count": 3, "total_impacts": 620}]
        });
        let summary = map_sites_summary(&raw);

        assert_eq!(summary.total_sites, 3);
        assert_eq!(summary.by_type[0].furniture_type, "Parabús");
        assert_eq!(summary.by_type[1].furniture_type, "Valla");
        assert_eq!(summary.by_type[0].total_impacts, 500.0);
        assert_eq!(summary.by_municipality[0].municipality, "Benito Juárez");
        assert_eq!(summary.by_municipality[0].count, 3);
    }

    #[test]
    fn test_malformed_summaries_default_to_empty() {
        let sites = map_sites_summary(&json!({"by_type": null, "by_municipality": 4}));
        assert_eq!(sites, SitesSummary::default());

        let periods = map_periods_summary(&json!({"total_periods": "two", "data": {}}));
        assert_eq!(periods, PeriodsSummary::default());

        let demographics = map_campaign_summary(&json!([]));
        assert_eq!(demographics, CampaignSummary::default());
    }

    #[test]
    fn test_periods_summary() {
        let raw = json!({
            "total_periods": 2,
            "data": [
                {"period": "P1", "people_impacts": 10, "vehicle_impacts": 5},
                {"period": "P2", "impactos_personas": 20, "impactos_vehiculos": 8}
            ]
        });
        let summary = map_periods_summary(&raw);

        assert_eq!(summary.total_periods, 2);
        assert_eq!(summary.data[0].people_impacts, 10.0);
        assert_eq!(summary.data[1].people_impacts, 20.0);
        assert_eq!(summary.data[1].vehicle_impacts, 8.0);
    }

    #[test]
    fn test_campaign_summary_accepts_either_ses_key() {
        let raw = json!({
            "nse_distribution": [{"label": "AB", "value": 0.1}, {"label": "C+", "value": 0.2}],
            "age_distribution": [{"label": "0-14", "value": 0.3}],
            "gender_distribution": [{"label": "Hombres", "value": 0.49}, {"label": "Mujeres"}]
        });
        let summary = map_campaign_summary(&raw);

        assert_eq!(summary.ses_distribution.len(), 2);
        assert_eq!(summary.ses_distribution[1].label, "C+");
        assert_eq!(summary.age_distribution[0].value, 0.3);
        assert_eq!(summary.gender_distribution[1].value, 0.0);

        let raw = json!({
            "ses_distribution": [{"label": "E", "value": 0.05}],
            "nse_distribution": [{"label": "AB", "value": 0.1}]
        });
        let summary = map_campaign_summary(&raw);
        assert_eq!(summary.ses_distribution[0].label, "E");
        assert!(summary.age_distribution.is_empty());
    }

    #[test]
    fn test_list_item_counts() {
        let item = map_list_item(&json!({"name": "Z", "sites_count": 12, "periods_count": 3}));
        assert_eq!(item.sites_count, 12);
        assert_eq!(item.periods_count, 3);
    }
}
