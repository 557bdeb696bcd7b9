use crate::{JobListing, RequestId, SearchQuery, SearchResultPage};

pub const EMPTY_TERM_ERROR: &str = "Please enter a job title or keywords";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Fresh search: the page replaces the list.
    Replace,
    /// Load more: the page is appended to the list.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlightSearch {
    request_id: RequestId,
    query: SearchQuery,
    mode: FetchMode,
}

/// Search orchestrator state.
///
/// At most one request is in flight; only its settlement is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    location: String,
    jobs: Vec<JobListing>,
    page: u32,
    has_more: bool,
    error: Option<String>,
    in_flight: Option<InFlightSearch>,
    /// Query of the last successful fresh search; load-more pages through it.
    committed: Option<SearchQuery>,
    total: Option<u64>,
    notice: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            term: String::new(),
            location: String::new(),
            jobs: Vec::new(),
            page: 1,
            has_more: false,
            error: None,
            in_flight: None,
            committed: None,
            total: None,
            notice: None,
        }
    }
}

impl SearchState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request_id)
    }

    pub(crate) fn set_query(&mut self, term: String, location: String) {
        self.term = term;
        self.location = location;
    }

    /// Starts a fresh search, superseding any outstanding request.
    ///
    /// Returns `None` (and records the validation error) when the term is
    /// blank; nothing else changes in that case.
    pub(crate) fn begin_search(&mut self, request_id: RequestId) -> Option<SearchQuery> {
        if self.term.trim().is_empty() {
            self.error = Some(EMPTY_TERM_ERROR.to_string());
            return None;
        }

        let query = SearchQuery::from_input(&self.term, &self.location);
        self.page = 1;
        self.jobs.clear();
        self.has_more = false;
        self.error = None;
        self.committed = None;
        self.total = None;
        self.notice = None;
        self.in_flight = Some(InFlightSearch {
            request_id,
            query: query.clone(),
            mode: FetchMode::Replace,
        });
        Some(query)
    }

    /// Requests the page after the current one of the committed search.
    ///
    /// No-op while a request is outstanding, when the service reported no
    /// further pages, or before any search succeeded.
    pub(crate) fn begin_load_more(&mut self, request_id: RequestId) -> Option<SearchQuery> {
        if self.loading() || !self.has_more {
            return None;
        }
        let query = self.committed.as_ref()?.with_page(self.page + 1);
        self.error = None;
        self.in_flight = Some(InFlightSearch {
            request_id,
            query: query.clone(),
            mode: FetchMode::Append,
        });
        Some(query)
    }

    /// Reconciles a settled request. Returns `false` for stale settlements,
    /// which leave the state untouched.
    pub(crate) fn apply_fetched(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResultPage, String>,
    ) -> bool {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.request_id == request_id => in_flight,
            other => {
                self.in_flight = other;
                return false;
            }
        };

        match result {
            Ok(page) => {
                match in_flight.mode {
                    FetchMode::Replace => {
                        self.jobs = page.jobs;
                        self.committed = Some(in_flight.query.clone());
                    }
                    FetchMode::Append => self.jobs.extend(page.jobs),
                }
                self.page = in_flight.query.page;
                self.error = None;
                self.has_more = page.has_more;
                self.total = page.total;
                self.notice = page.notice;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }
}
