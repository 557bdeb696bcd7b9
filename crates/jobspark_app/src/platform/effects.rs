use std::sync::mpsc;
use std::thread;

use jobspark_core::Effect;
use jobspark_engine::{EngineError, EngineEvent, EngineEvents, EngineHandle, ServiceSettings};
use jobspark_logging::{spark_debug, spark_info, spark_warn};

use super::app::AppInput;

/// Executes core effects against the engine and feeds engine events back
/// into the app loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: &ServiceSettings,
        input_tx: mpsc::Sender<AppInput>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, input_tx);
        Ok(Self { engine })
    }

    /// Runs engine-bound effects and hands back alert texts for the UI.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut alerts = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchJobs { request_id, query } => {
                    spark_info!(
                        "FetchJobs request_id={} term={:?} location={:?} page={}",
                        request_id,
                        query.term,
                        query.location,
                        query.page
                    );
                    self.engine.fetch_jobs(request_id, query);
                }
                Effect::SubmitScoring {
                    request_id,
                    request,
                } => {
                    spark_info!(
                        "SubmitScoring request_id={} bytes={} with_description={}",
                        request_id,
                        request.document.len(),
                        request.job_description.is_some()
                    );
                    self.engine.submit_scoring(request_id, request);
                }
                Effect::RevealScoreAfter { request_id, delay } => {
                    self.engine.reveal_after(request_id, delay);
                }
                Effect::Alert { message } => alerts.push(message),
            }
        }
        alerts
    }

    pub fn check_health(&self) {
        self.engine.check_health();
    }
}

fn spawn_event_loop(events: EngineEvents, input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let input = match event {
                EngineEvent::HealthChecked(Ok(status)) => {
                    spark_info!(
                        "listing service {} (cache {:?}, sites {:?})",
                        status.status,
                        status.cache_size,
                        status.available_sites
                    );
                    AppInput::Status(format!("Listing service: {}", status.status))
                }
                EngineEvent::HealthChecked(Err(err)) => {
                    spark_warn!("health check failed ({}): {}", err.kind, err);
                    AppInput::Status(format!("Listing service unreachable: {err}"))
                }
                other => match other.into_msg() {
                    Some(msg) => AppInput::Engine(msg),
                    None => continue,
                },
            };
            if input_tx.send(input).is_err() {
                break;
            }
        }
        spark_debug!("engine event loop finished");
    });
}
