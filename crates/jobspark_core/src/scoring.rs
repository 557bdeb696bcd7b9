use std::time::Duration;

use crate::{DocumentFile, RequestId, ScoringRequest, ScoringResult, SelectedDocument};

pub const MISSING_DOCUMENT_ALERT: &str = "Please upload a PDF resume first";
pub const SCORING_FAILED_PREFIX: &str = "Failed to get ATS score";

/// Simulated progress added per tick.
pub const PROGRESS_STEP: u8 = 10;
/// Simulated progress never goes past this before the service answers.
pub const PROGRESS_CAP: u8 = 90;
/// How long 100% stays on screen before the score is published.
pub const SCORE_REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScoringPhase {
    #[default]
    Idle,
    /// Request outstanding; ticks advance the simulated progress.
    Submitting { request_id: RequestId },
    /// Service answered; the result is held back for the display delay.
    Revealing {
        request_id: RequestId,
        result: ScoringResult,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Settlement {
    Stale,
    Completed,
    Failed { message: String },
}

/// Scoring orchestrator state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoringState {
    document: Option<SelectedDocument>,
    job_description: String,
    progress_percent: u8,
    phase: ScoringPhase,
    result: Option<ScoringResult>,
}

impl ScoringState {
    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn phase(&self) -> &ScoringPhase {
        &self.phase
    }

    pub fn submitting(&self) -> bool {
        !matches!(self.phase, ScoringPhase::Idle)
    }

    pub fn result(&self) -> Option<&ScoringResult> {
        self.result.as_ref()
    }

    /// Keeps the file only when it is a PDF. The previous result stays on
    /// screen until the next submission publishes a new one.
    pub(crate) fn select_document(&mut self, file: DocumentFile) -> bool {
        if !file.is_pdf() {
            return false;
        }
        self.document = Some(SelectedDocument {
            name: file.name,
            bytes: file.bytes,
        });
        true
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    /// Starts a submission, superseding any outstanding one.
    pub(crate) fn begin_submission(&mut self, request_id: RequestId) -> Option<ScoringRequest> {
        let document = self.document.as_ref()?;
        let request = ScoringRequest {
            document: document.bytes.clone(),
            job_description: (!self.job_description.trim().is_empty())
                .then(|| self.job_description.clone()),
        };
        self.progress_percent = 0;
        self.phase = ScoringPhase::Submitting { request_id };
        Some(request)
    }

    pub(crate) fn apply_tick(&mut self, request_id: RequestId) -> bool {
        if !self.is_submitting(request_id) || self.progress_percent >= PROGRESS_CAP {
            return false;
        }
        self.progress_percent = (self.progress_percent + PROGRESS_STEP).min(PROGRESS_CAP);
        true
    }

    pub(crate) fn apply_settled(
        &mut self,
        request_id: RequestId,
        result: Result<ScoringResult, String>,
    ) -> Settlement {
        if !self.is_submitting(request_id) {
            return Settlement::Stale;
        }
        match result {
            Ok(result) => {
                self.progress_percent = 100;
                self.phase = ScoringPhase::Revealing { request_id, result };
                Settlement::Completed
            }
            Err(reason) => {
                self.phase = ScoringPhase::Idle;
                Settlement::Failed {
                    message: format!("{SCORING_FAILED_PREFIX}: {reason}"),
                }
            }
        }
    }

    pub(crate) fn apply_reveal(&mut self, request_id: RequestId) -> bool {
        match std::mem::take(&mut self.phase) {
            ScoringPhase::Revealing {
                request_id: revealing,
                result,
            } if revealing == request_id => {
                self.result = Some(result);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    fn is_submitting(&self, request_id: RequestId) -> bool {
        matches!(self.phase, ScoringPhase::Submitting { request_id: current } if current == request_id)
    }
}
