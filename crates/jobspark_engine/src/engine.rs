use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobspark_core::{RequestId, ScoringRequest, SearchQuery};
use jobspark_logging::{spark_debug, spark_info, spark_warn};
use thiserror::Error;

use crate::listing::{JobListingService, ReqwestListingClient};
use crate::progress::ProgressTicker;
use crate::scoring::{ReqwestScoringClient, ScoringService};
use crate::{EngineEvent, ServiceSettings};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}

enum EngineCommand {
    FetchJobs {
        request_id: RequestId,
        query: SearchQuery,
    },
    SubmitScoring {
        request_id: RequestId,
        request: ScoringRequest,
    },
    RevealAfter {
        request_id: RequestId,
        delay: Duration,
    },
    CheckHealth,
}

#[derive(Clone)]
struct Services {
    listing: Arc<dyn JobListingService>,
    scoring: Arc<dyn ScoringService>,
    progress_interval: Duration,
}

/// Sends work to the engine thread. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side for everything the engine reports back.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ServiceSettings) -> Result<(Self, EngineEvents), EngineError> {
        let listing = Arc::new(ReqwestListingClient::new(settings)?);
        let scoring = Arc::new(ReqwestScoringClient::new(settings)?);
        Self::with_services(listing, scoring, settings.progress_interval)
    }

    /// Starts the engine thread over caller-supplied services.
    pub fn with_services(
        listing: Arc<dyn JobListingService>,
        scoring: Arc<dyn ScoringService>,
        progress_interval: Duration,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let services = Services {
            listing,
            scoring,
            progress_interval,
        };
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("jobspark-io")
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("jobspark-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let services = services.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(&services, command, event_tx).await;
                    });
                }
                spark_debug!("engine command channel closed; shutting down runtime");
            })
            .map_err(EngineError::Thread)?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn fetch_jobs(&self, request_id: RequestId, query: SearchQuery) {
        self.send(EngineCommand::FetchJobs { request_id, query });
    }

    pub fn submit_scoring(&self, request_id: RequestId, request: ScoringRequest) {
        self.send(EngineCommand::SubmitScoring {
            request_id,
            request,
        });
    }

    pub fn reveal_after(&self, request_id: RequestId, delay: Duration) {
        self.send(EngineCommand::RevealAfter { request_id, delay });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            spark_warn!("engine thread is gone; command dropped");
        }
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    services: &Services,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchJobs { request_id, query } => {
            let result = services.listing.fetch_page(&query).await;
            if let Err(err) = &result {
                spark_warn!("search request {} failed ({}): {}", request_id, err.kind, err);
            }
            EngineEvent::JobsFetched { request_id, result }
        }
        EngineCommand::SubmitScoring {
            request_id,
            request,
        } => {
            let result = run_scoring(services, request_id, &request, &event_tx).await;
            EngineEvent::ScoringSettled { request_id, result }
        }
        EngineCommand::RevealAfter { request_id, delay } => {
            tokio::time::sleep(delay).await;
            EngineEvent::ScoreRevealDue { request_id }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked(services.listing.health().await),
    };
    let _ = event_tx.send(event);
}

/// Runs one scoring request with a progress ticker alongside it. The ticker
/// is stopped before the caller reports settlement, and cancelled by its
/// drop guard if this future unwinds or is dropped.
async fn run_scoring(
    services: &Services,
    request_id: RequestId,
    request: &ScoringRequest,
    event_tx: &mpsc::Sender<EngineEvent>,
) -> Result<jobspark_core::ScoringResult, crate::ServiceError> {
    let tick_tx = event_tx.clone();
    let ticker = ProgressTicker::start(services.progress_interval, move || {
        let _ = tick_tx.send(EngineEvent::ScoringTick { request_id });
    });

    let result = services.scoring.score(request).await;
    ticker.stop().await;

    match &result {
        Ok(scored) => spark_info!("scoring request {} settled: {:.1}", request_id, scored.score),
        Err(err) => spark_warn!("scoring request {} failed ({}): {}", request_id, err.kind, err),
    }
    result
}
