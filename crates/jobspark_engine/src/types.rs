use std::fmt;

use jobspark_core::{Msg, RequestId, ScoringResult, SearchResultPage};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    JobsFetched {
        request_id: RequestId,
        result: Result<SearchResultPage, ServiceError>,
    },
    ScoringTick {
        request_id: RequestId,
    },
    ScoringSettled {
        request_id: RequestId,
        result: Result<ScoringResult, ServiceError>,
    },
    ScoreRevealDue {
        request_id: RequestId,
    },
    HealthChecked(Result<HealthStatus, ServiceError>),
}

impl EngineEvent {
    /// Converts the event into the core message it settles, if any.
    pub fn into_msg(self) -> Option<Msg> {
        match self {
            EngineEvent::JobsFetched { request_id, result } => Some(Msg::JobsFetched {
                request_id,
                result: result.map_err(|err| err.message),
            }),
            EngineEvent::ScoringTick { request_id } => Some(Msg::ScoringTick { request_id }),
            EngineEvent::ScoringSettled { request_id, result } => Some(Msg::ScoringSettled {
                request_id,
                result: result.map_err(|err| err.message),
            }),
            EngineEvent::ScoreRevealDue { request_id } => Some(Msg::ScoreRevealDue { request_id }),
            EngineEvent::HealthChecked(_) => None,
        }
    }
}

/// Snapshot reported by the listing service's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub cache_size: Option<u64>,
    #[serde(default)]
    pub available_sites: Vec<String>,
}

/// A failed service call, shaped for display: `message` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn http_status(code: u16) -> Self {
        Self::new(
            FailureKind::HttpStatus(code),
            format!("HTTP error! status: {code}"),
        )
    }

    /// The service answered but put an `error` field in the body.
    pub(crate) fn reported(message: String, retry_after: Option<u64>) -> Self {
        Self::new(FailureKind::Service { retry_after }, message)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidResponse,
    Service { retry_after: Option<u64> },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Service {
                retry_after: Some(secs),
            } => write!(f, "service error (retry after {secs}s)"),
            FailureKind::Service { retry_after: None } => write!(f, "service error"),
        }
    }
}
