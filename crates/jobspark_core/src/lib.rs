//! JobSpark core: pure search and scoring state machines and view-model helpers.
mod document;
mod effect;
mod listing;
mod msg;
mod scoring;
mod search;
mod state;
mod update;
mod view_model;

pub use document::{DocumentFile, ScoringRequest, ScoringResult, SelectedDocument, PDF_CONTENT_TYPE};
pub use effect::Effect;
pub use listing::{
    optional_field, parse_apply_url, JobListing, SearchQuery, SearchResultPage, DEFAULT_LOCATION,
    DEFAULT_TERM,
};
pub use msg::Msg;
pub use scoring::{
    ScoringPhase, ScoringState, MISSING_DOCUMENT_ALERT, PROGRESS_CAP, PROGRESS_STEP,
    SCORE_REVEAL_DELAY, SCORING_FAILED_PREFIX,
};
pub use search::{SearchState, EMPTY_TERM_ERROR};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{results_count_label, AppViewModel, JobRowView, ScoringView, SearchView};
