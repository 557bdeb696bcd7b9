//! JobSpark engine: service clients, progress simulation and effect execution.
mod document;
mod engine;
mod http;
mod listing;
mod progress;
mod scoring;
mod settings;
mod types;
mod wire;

pub use document::{load_document, sniff_content_type, DocumentError};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use listing::{JobListingService, ReqwestListingClient};
pub use progress::ProgressTicker;
pub use scoring::{encode_pdf_data_uri, ReqwestScoringClient, ScoringService};
pub use settings::{
    ServiceSettings, DEFAULT_HEALTH_ENDPOINT, DEFAULT_JOBS_ENDPOINT, DEFAULT_SCORING_ENDPOINT,
};
pub use types::{EngineEvent, FailureKind, HealthStatus, ServiceError};
