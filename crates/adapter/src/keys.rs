//! Field key table for the two server dialects.
//!
//! Each constant lists the canonical key first and the localized (Spanish)
//! key after it. Keep this table in sync with both dialects the server
//! emits; the mappers never spell a key inline.

use crate::resolver::Keys;

pub mod campaign {
    use super::Keys;

    pub const NAME: Keys = &["name"];
    pub const CAMPAIGN_TYPE: Keys = &["campaign_type", "tipo_campania"];
    pub const START_DATE: Keys = &["start_date", "fecha_inicio"];
    pub const END_DATE: Keys = &["end_date", "fecha_fin"];
    pub const METRO_ZONE_UNIVERSE: Keys = &["metro_zone_universe", "universo_zona_metro"];
    pub const PEOPLE_IMPACTS: Keys = &["people_impacts", "impactos_personas"];
    pub const VEHICLE_IMPACTS: Keys = &["vehicle_impacts", "impactos_vehiculos"];
    pub const CALCULATED_FREQUENCY: Keys = &["calculated_frequency", "frecuencia_calculada"];
    pub const AVERAGE_FREQUENCY: Keys = &["average_frequency", "frecuencia_promedio"];
    pub const REACH: Keys = &["reach", "alcance"];

    pub const SES_AB: Keys = &["ses_ab", "nse_ab"];
    pub const SES_C: Keys = &["ses_c", "nse_c"];
    pub const SES_C_PLUS: Keys = &["ses_c_plus", "nse_cmas"];
    pub const SES_D: Keys = &["ses_d", "nse_d"];
    pub const SES_D_PLUS: Keys = &["ses_d_plus", "nse_dmas"];
    pub const SES_E: Keys = &["ses_e", "nse_e"];

    pub const AGE_0_14: Keys = &["age_0_14", "edad_0a14"];
    pub const AGE_15_19: Keys = &["age_15_19", "edad_15a19"];
    pub const AGE_20_24: Keys = &["age_20_24", "edad_20a24"];
    pub const AGE_25_34: Keys = &["age_25_34", "edad_25a34"];
    pub const AGE_35_44: Keys = &["age_35_44", "edad_35a44"];
    pub const AGE_45_64: Keys = &["age_45_64", "edad_45a64"];
    pub const AGE_65_PLUS: Keys = &["age_65_plus", "edad_65mas"];

    pub const MEN: Keys = &["men", "hombres"];
    pub const WOMEN: Keys = &["women", "mujeres"];

    pub const SITES_COUNT: Keys = &["sites_count"];
    pub const PERIODS_COUNT: Keys = &["periods_count"];
    pub const PERIODS: Keys = &["periods"];
    pub const SITES: Keys = &["sites"];
}

pub mod period {
    use super::Keys;

    pub const ID: Keys = &["id"];
    pub const CAMPAIGN_NAME: Keys = &["campaign_name"];
    pub const PERIOD: Keys = &["period"];
    pub const PEOPLE_IMPACTS: Keys = &["period_impacts_people", "impactos_periodo_personas"];
    pub const VEHICLE_IMPACTS: Keys = &["period_impacts_vehicles", "impactos_periodo_vehiculos"];
}

pub mod site {
    use super::Keys;

    pub const ID: Keys = &["id"];
    pub const CAMPAIGN_NAME: Keys = &["campaign_name"];
    pub const SITE_CODE: Keys = &["site_code", "codigo_del_sitio"];
    pub const FURNITURE_TYPE: Keys = &["furniture_type", "tipo_de_mueble"];
    pub const AD_TYPE: Keys = &["ad_type", "tipo_de_anuncio"];
    pub const STATE: Keys = &["state", "estado"];
    pub const MUNICIPALITY: Keys = &["municipality", "municipio"];
    pub const METRO_AREA: Keys = &["metro_area", "zm"];
    pub const FREQUENCY_BIWEEKLY: Keys = &["frequency_biweekly", "frecuencia_catorcenal"];
    pub const FREQUENCY_MONTHLY: Keys = &["frequency_monthly", "frecuencia_mensual"];
    pub const IMPACTS_BIWEEKLY: Keys = &["impacts_biweekly", "impactos_catorcenal"];
    pub const IMPACTS_MONTHLY: Keys = &["impacts_monthly", "impactos_mensuales"];
    pub const REACH_MONTHLY: Keys = &["reach_monthly", "alcance_mensual"];
}

pub mod summary {
    use super::Keys;

    pub const TOTAL_SITES: Keys = &["total_sites"];
    pub const BY_TYPE: Keys = &["by_type"];
    pub const BY_MUNICIPALITY: Keys = &["by_municipality"];
    pub const FURNITURE_TYPE: Keys = super::site::FURNITURE_TYPE;
    pub const MUNICIPALITY: Keys = super::site::MUNICIPALITY;
    pub const COUNT: Keys = &["count"];
    pub const TOTAL_IMPACTS: Keys = &["total_impacts"];

    pub const TOTAL_PERIODS: Keys = &["total_periods"];
    pub const PERIOD_DATA: Keys = &["data"];
    pub const PERIOD: Keys = &["period"];
    pub const PEOPLE_IMPACTS: Keys = super::campaign::PEOPLE_IMPACTS;
    pub const VEHICLE_IMPACTS: Keys = super::campaign::VEHICLE_IMPACTS;

    pub const SES_DISTRIBUTION: Keys = &["ses_distribution", "nse_distribution"];
    pub const AGE_DISTRIBUTION: Keys = &["age_distribution"];
    pub const GENDER_DISTRIBUTION: Keys = &["gender_distribution"];
    pub const LABEL: Keys = &["label"];
    pub const VALUE: Keys = &["value"];
}

pub mod page {
    use super::Keys;

    pub const DATA: Keys = &["data"];
    pub const TOTAL: Keys = &["total"];
    pub const PAGE: Keys = &["page"];
    pub const PAGE_SIZE: Keys = &["size", "page_size"];
    pub const TOTAL_PAGES: Keys = &["total_pages"];
}
