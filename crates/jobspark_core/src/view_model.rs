use crate::{AppState, ScoringResult, ScoringState, SearchState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub search: SearchView,
    pub scoring: ScoringView,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState, dirty: bool) -> Self {
        Self {
            search: SearchView::from_state(state.search()),
            scoring: ScoringView::from_state(state.scoring()),
            dirty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub term: String,
    pub location: String,
    pub jobs: Vec<JobRowView>,
    pub page: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Present once results are on screen and nothing is loading.
    pub results_count: Option<String>,
    pub show_load_more: bool,
    pub show_no_results: bool,
    pub total: Option<u64>,
    pub notice: Option<String>,
}

impl SearchView {
    fn from_state(search: &SearchState) -> Self {
        let jobs: Vec<JobRowView> = search
            .jobs()
            .iter()
            .enumerate()
            .map(|(index, job)| JobRowView {
                key: job.render_key(index),
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                salary: job.salary.clone(),
                description: job.description.clone(),
                date_posted: job.date_posted.clone(),
                apply_url: job.apply_url.as_ref().map(ToString::to_string),
                site: job.site.clone(),
            })
            .collect();

        let loading = search.loading();
        let results_count = (!jobs.is_empty() && !loading)
            .then(|| results_count_label(jobs.len(), search.term(), search.location()));
        let show_no_results = jobs.is_empty()
            && !loading
            && !search.term().is_empty()
            && search.error().is_none();

        Self {
            term: search.term().to_string(),
            location: search.location().to_string(),
            show_load_more: search.has_more() && !jobs.is_empty(),
            jobs,
            page: search.page(),
            loading,
            error: search.error().map(ToOwned::to_owned),
            results_count,
            show_no_results,
            total: search.total(),
            notice: search.notice().map(ToOwned::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub key: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub date_posted: Option<String>,
    pub apply_url: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoringView {
    pub document_name: Option<String>,
    pub document_size: Option<usize>,
    pub job_description: String,
    pub progress_percent: u8,
    pub submitting: bool,
    pub result: Option<ScoringResult>,
}

impl ScoringView {
    fn from_state(scoring: &ScoringState) -> Self {
        Self {
            document_name: scoring.document().map(|doc| doc.name.clone()),
            document_size: scoring.document().map(|doc| doc.size()),
            job_description: scoring.job_description().to_string(),
            progress_percent: scoring.progress_percent(),
            submitting: scoring.submitting(),
            result: scoring.result().cloned(),
        }
    }
}

/// `Found N job(s) for "term" in location`, omitting empty parts.
pub fn results_count_label(count: usize, term: &str, location: &str) -> String {
    let mut label = format!("Found {} job{}", count, if count == 1 { "" } else { "s" });
    if !term.is_empty() {
        label.push_str(&format!(" for \"{term}\""));
    }
    if !location.is_empty() {
        label.push_str(&format!(" in {location}"));
    }
    label
}
