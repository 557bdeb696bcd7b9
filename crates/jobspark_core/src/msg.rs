use crate::{DocumentFile, RequestId, ScoringResult, SearchResultPage};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search or location box.
    QueryChanged { term: String, location: String },
    /// User asked for a fresh search.
    SearchClicked,
    /// User asked for the next page of the current search.
    LoadMoreClicked,
    /// Listing service settled a search or load-more request.
    JobsFetched {
        request_id: RequestId,
        result: Result<SearchResultPage, String>,
    },
    /// User picked a file to score.
    DocumentSelected(DocumentFile),
    /// User edited the optional job description.
    JobDescriptionChanged(String),
    /// User asked for a score of the selected document.
    ScoreClicked,
    /// Progress simulation tick for an outstanding scoring request.
    ScoringTick { request_id: RequestId },
    /// Scoring service settled.
    ScoringSettled {
        request_id: RequestId,
        result: Result<ScoringResult, String>,
    },
    /// The display delay after a successful score has elapsed.
    ScoreRevealDue { request_id: RequestId },
}
