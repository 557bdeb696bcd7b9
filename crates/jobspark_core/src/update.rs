use crate::scoring::{Settlement, SCORE_REVEAL_DELAY};
use crate::{AppState, Effect, Msg, MISSING_DOCUMENT_ALERT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged { term, location } => {
            state.search.set_query(term, location);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchClicked => {
            let request_id = state.issue_request_id();
            let query = state.search.begin_search(request_id);
            // A rejected term still changes state: the validation error shows.
            state.mark_dirty();
            match query {
                Some(query) => vec![Effect::FetchJobs { request_id, query }],
                None => Vec::new(),
            }
        }
        Msg::LoadMoreClicked => {
            let request_id = state.issue_request_id();
            match state.search.begin_load_more(request_id) {
                Some(query) => {
                    state.mark_dirty();
                    vec![Effect::FetchJobs { request_id, query }]
                }
                None => Vec::new(),
            }
        }
        Msg::JobsFetched { request_id, result } => {
            if state.search.apply_fetched(request_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DocumentSelected(file) => {
            if state.scoring.select_document(file) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.scoring.set_job_description(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ScoreClicked => {
            let request_id = state.issue_request_id();
            match state.scoring.begin_submission(request_id) {
                Some(request) => {
                    state.mark_dirty();
                    vec![Effect::SubmitScoring {
                        request_id,
                        request,
                    }]
                }
                None => vec![Effect::Alert {
                    message: MISSING_DOCUMENT_ALERT.to_string(),
                }],
            }
        }
        Msg::ScoringTick { request_id } => {
            if state.scoring.apply_tick(request_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ScoringSettled { request_id, result } => {
            match state.scoring.apply_settled(request_id, result) {
                Settlement::Stale => Vec::new(),
                Settlement::Completed => {
                    state.mark_dirty();
                    vec![Effect::RevealScoreAfter {
                        request_id,
                        delay: SCORE_REVEAL_DELAY,
                    }]
                }
                Settlement::Failed { message } => {
                    state.mark_dirty();
                    vec![Effect::Alert { message }]
                }
            }
        }
        Msg::ScoreRevealDue { request_id } => {
            if state.scoring.apply_reveal(request_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}
