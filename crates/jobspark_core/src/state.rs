use crate::view_model::AppViewModel;
use crate::{ScoringState, SearchState};

/// Tags every request issued by either orchestrator.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) search: SearchState,
    pub(crate) scoring: ScoringState,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search: SearchState::default(),
            scoring: ScoringState::default(),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn scoring(&self) -> &ScoringState {
        &self.scoring
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self, self.dirty)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn issue_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}
