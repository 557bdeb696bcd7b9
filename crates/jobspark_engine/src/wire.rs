//! JSON bodies exchanged with the listing and scoring services.

use jobspark_core::{
    optional_field, parse_apply_url, JobListing, ScoringResult, SearchQuery, SearchResultPage,
};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct JobSearchRequest<'a> {
    pub search_term: &'a str,
    pub location: &'a str,
    pub page: u32,
}

impl<'a> From<&'a SearchQuery> for JobSearchRequest<'a> {
    fn from(query: &'a SearchQuery) -> Self {
        Self {
            search_term: &query.term,
            location: &query.location,
            page: query.page,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JobSearchResponse {
    pub jobs: Vec<JobRecord>,
    pub has_more: bool,
    pub total: Option<u64>,
    pub message: Option<String>,
    pub sources: Vec<String>,
    pub error: Option<String>,
    pub retry_after: Option<u64>,
}

impl JobSearchResponse {
    pub fn into_page(self) -> Result<SearchResultPage, ServiceError> {
        if let Some(error) = self.error {
            return Err(ServiceError::reported(error, self.retry_after));
        }
        Ok(SearchResultPage {
            jobs: self.jobs.into_iter().map(JobListing::from).collect(),
            has_more: self.has_more,
            total: self.total,
            notice: optional_field(self.message),
            sources: self.sources,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JobRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub date_posted: Option<String>,
    pub job_url: Option<String>,
    pub site: Option<String>,
    pub job_type: Option<String>,
}

impl From<JobRecord> for JobListing {
    fn from(record: JobRecord) -> Self {
        JobListing {
            title: record.title.unwrap_or_default(),
            company: record.company.unwrap_or_default(),
            location: record.location.unwrap_or_default(),
            salary: optional_field(record.salary),
            description: record
                .description
                .filter(|description| !description.trim().is_empty()),
            date_posted: optional_field(record.date_posted),
            apply_url: parse_apply_url(record.job_url.as_deref()),
            site: optional_field(record.site),
            job_type: optional_field(record.job_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoringRequestBody {
    pub pdf_data: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ScoringResponse {
    pub score: Option<f64>,
    pub explanation: Option<String>,
    pub error: Option<String>,
}

impl ScoringResponse {
    pub fn into_result(self) -> Result<ScoringResult, ServiceError> {
        if let Some(error) = self.error {
            return Err(ServiceError::reported(error, None));
        }
        let score = self.score.ok_or_else(|| {
            ServiceError::new(
                crate::FailureKind::InvalidResponse,
                "scoring response has no score",
            )
        })?;
        Ok(ScoringResult {
            score,
            explanation: self
                .explanation
                .filter(|explanation| !explanation.trim().is_empty()),
        })
    }
}

/// Error body both services use alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub retry_after: Option<u64>,
}
