use std::time::Duration;

use crate::{RequestId, ScoringRequest, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchJobs {
        request_id: RequestId,
        query: SearchQuery,
    },
    SubmitScoring {
        request_id: RequestId,
        request: ScoringRequest,
    },
    RevealScoreAfter {
        request_id: RequestId,
        delay: Duration,
    },
    /// Blocking, user-facing alert.
    Alert { message: String },
}
