use url::Url;

/// Term sent when the search box is empty after trimming.
pub const DEFAULT_TERM: &str = "software engineer";
/// Location sent when the location box is empty after trimming.
pub const DEFAULT_LOCATION: &str = "India";

/// Placeholder the listing service uses for unknown values.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub location: String,
    pub page: u32,
}

impl SearchQuery {
    /// Builds the first-page query from raw form input, trimming both fields
    /// and falling back to the defaults for empty ones.
    pub fn from_input(term: &str, location: &str) -> Self {
        Self {
            term: non_empty_or(term, DEFAULT_TERM),
            location: non_empty_or(location, DEFAULT_LOCATION),
            page: 1,
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

fn non_empty_or(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// One job posting as returned by the listing service.
///
/// Optional fields are already normalised: the service's `"N/A"` placeholder
/// and empty strings become `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub date_posted: Option<String>,
    pub apply_url: Option<Url>,
    pub site: Option<String>,
    pub job_type: Option<String>,
}

impl JobListing {
    /// Render key for the listing at `index` in the accumulated list.
    ///
    /// The service has no stable id, so position disambiguates repeats.
    pub fn render_key(&self, index: usize) -> String {
        format!("{}-{}-{}", self.company, self.title, index)
    }
}

/// Maps the service's absent-value conventions to `None`.
pub fn optional_field(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != NOT_AVAILABLE)
}

/// Parses an apply link; empty or malformed links count as absent.
pub fn parse_apply_url(raw: Option<&str>) -> Option<Url> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResultPage {
    pub jobs: Vec<JobListing>,
    pub has_more: bool,
    /// Total listings the service holds for the query, when reported.
    pub total: Option<u64>,
    /// Informational message from the service, e.g. when every source failed.
    pub notice: Option<String>,
    pub sources: Vec<String>,
}
