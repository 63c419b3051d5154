use thiserror::Error;

pub type CampaignResult<T> = Result<T, CampaignError>;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Response decoding error: {0}")]
    Decode(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl CampaignError {
    /// Transport-class failures are the only ones surfaced to a view.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CampaignError::Transport(_) | CampaignError::Status { .. } | CampaignError::Decode(_)
        )
    }
}

impl From<config::ConfigError> for CampaignError {
    fn from(err: config::ConfigError) -> Self {
        CampaignError::Config(err.to_string())
    }
}
