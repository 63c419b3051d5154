//! Campaign Insights — command-line reader for the campaign analytics API.
//!
//! Results are printed as pretty JSON on stdout; logs go to stderr.

use anyhow::bail;
use campaign_client::{CampaignApi, HttpCampaignClient, QueryFilters};
use campaign_core::config::AppConfig;
use campaign_core::types::DateRange;
use campaign_query::{LoadPhase, QueryController, SummaryLoader};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-insights")]
#[command(about = "Browse advertising campaigns and their audience insights")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config)
    #[arg(long, env = "CAMPAIGN_INSIGHTS__API__BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one page of campaigns
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Campaign type filter
        #[arg(long = "type")]
        campaign_type: Option<String>,

        /// Range start, YYYY-MM-DD
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Range end, YYYY-MM-DD
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// Free-text name search
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one campaign with its periods and sites
    Show { campaign: String },
    /// Show the site, period and demographic summaries of one campaign
    Insights { campaign: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campaign_insights=info,campaign_query=info,campaign_client=info".into()
            }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    info!(
        base_url = %config.api.base_url,
        dialect = ?config.api.filter_dialect,
        page_size = config.query.page_size,
        "Configuration loaded"
    );

    let api: Arc<dyn CampaignApi> = Arc::new(HttpCampaignClient::new(&config.api)?);

    match cli.command {
        Command::List {
            page,
            campaign_type,
            from,
            to,
            search,
        } => {
            let filters = QueryFilters {
                page,
                campaign_type,
                date_range: DateRange::from_bounds(from, to)?,
                search,
            };
            let controller = QueryController::with_filters(api, &config.query, filters);
            controller.refresh();
            let snapshot = controller.settled().await;

            if snapshot.phase == LoadPhase::Errored {
                bail!(snapshot.error.unwrap_or_else(|| "campaign fetch failed".into()));
            }
            let output = serde_json::json!({
                "page": snapshot.filters.page,
                "page_size": snapshot.page_size,
                "total": snapshot.total,
                "total_pages": snapshot.total_pages(),
                "stats": snapshot.stats(),
                "campaigns": snapshot.campaigns,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Show { campaign } => {
            let detail = api.campaign_detail(&campaign).await?;
            println!("{}", serde_json::to_string_pretty(&detail)?);
        }
        Command::Insights { campaign } => {
            let loader = SummaryLoader::new(api);
            match loader.load(&campaign).await? {
                Some(insights) => println!("{}", serde_json::to_string_pretty(&insights)?),
                None => bail!("insights load for {campaign} was superseded"),
            }
        }
    }

    Ok(())
}
