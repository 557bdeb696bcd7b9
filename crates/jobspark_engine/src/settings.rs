use std::time::Duration;

pub const DEFAULT_JOBS_ENDPOINT: &str = "http://localhost:5000/api/jobs";
pub const DEFAULT_SCORING_ENDPOINT: &str = "http://localhost:5000/api/get-ats-score";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "http://localhost:5000/api/health";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub jobs_endpoint: String,
    pub scoring_endpoint: String,
    pub health_endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Scoring runs text extraction and a model on the server; it gets longer.
    pub scoring_timeout: Duration,
    /// Period of the simulated scoring progress.
    pub progress_interval: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            jobs_endpoint: DEFAULT_JOBS_ENDPOINT.to_string(),
            scoring_endpoint: DEFAULT_SCORING_ENDPOINT.to_string(),
            health_endpoint: DEFAULT_HEALTH_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            scoring_timeout: Duration::from_secs(120),
            progress_interval: Duration::from_millis(500),
        }
    }
}

impl ServiceSettings {
    /// Points every endpoint at `base`, e.g. a mock server.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            jobs_endpoint: format!("{base}/api/jobs"),
            scoring_endpoint: format!("{base}/api/get-ats-score"),
            health_endpoint: format!("{base}/api/health"),
            ..Self::default()
        }
    }
}
