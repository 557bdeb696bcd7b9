use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};
use jobspark_engine::ServiceSettings;
use jobspark_logging::{LevelFilter, LogDestination, LogSettings};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "jobspark.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

/// Optional `jobspark.ron`; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub jobs_endpoint: String,
    pub scoring_endpoint: String,
    pub health_endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub scoring_timeout_secs: u64,
    pub progress_interval_ms: u64,
    pub log_level: String,
    pub log_target: LogTarget,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let services = ServiceSettings::default();
        let logging = LogSettings::default();
        Self {
            jobs_endpoint: services.jobs_endpoint,
            scoring_endpoint: services.scoring_endpoint,
            health_endpoint: services.health_endpoint,
            connect_timeout_secs: services.connect_timeout.as_secs(),
            request_timeout_secs: services.request_timeout.as_secs(),
            scoring_timeout_secs: services.scoring_timeout.as_secs(),
            progress_interval_ms: services.progress_interval.as_millis() as u64,
            log_level: logging.level.to_string().to_lowercase(),
            log_target: LogTarget::File,
            log_file: logging.file_path,
        }
    }
}

impl AppConfig {
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read config {}", path.display()))
            }
        };
        ron::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            jobs_endpoint: self.jobs_endpoint.clone(),
            scoring_endpoint: self.scoring_endpoint.clone(),
            health_endpoint: self.health_endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            scoring_timeout: Duration::from_secs(self.scoring_timeout_secs),
            progress_interval: Duration::from_millis(self.progress_interval_ms),
        }
    }

    pub fn log_settings(&self) -> anyhow::Result<LogSettings> {
        let level = LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("unknown log level {:?}", self.log_level))?;
        let destination = match self.log_target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        };
        Ok(LogSettings {
            level,
            destination,
            file_path: self.log_file.clone(),
        })
    }
}
