use jobspark_core::{SearchQuery, SearchResultPage};
use jobspark_logging::{spark_debug, spark_info};
use reqwest::Url;

use crate::http::{build_client, ensure_success, map_reqwest_error, parse_endpoint};
use crate::wire::{JobSearchRequest, JobSearchResponse};
use crate::{EngineError, HealthStatus, ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait JobListingService: Send + Sync {
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchResultPage, ServiceError>;

    async fn health(&self) -> Result<HealthStatus, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestListingClient {
    client: reqwest::Client,
    jobs_endpoint: Url,
    health_endpoint: Url,
}

impl ReqwestListingClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, EngineError> {
        Ok(Self {
            client: build_client(settings.connect_timeout, settings.request_timeout)?,
            jobs_endpoint: parse_endpoint(&settings.jobs_endpoint)?,
            health_endpoint: parse_endpoint(&settings.health_endpoint)?,
        })
    }
}

#[async_trait::async_trait]
impl JobListingService for ReqwestListingClient {
    async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchResultPage, ServiceError> {
        spark_debug!(
            "POST {} term={:?} location={:?} page={}",
            self.jobs_endpoint,
            query.term,
            query.location,
            query.page
        );
        let response = self
            .client
            .post(self.jobs_endpoint.clone())
            .json(&JobSearchRequest::from(query))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response).await?;
        let body: JobSearchResponse = response.json().await.map_err(map_reqwest_error)?;
        let page = body.into_page()?;
        spark_info!(
            "page {} for {:?}: {} jobs, has_more={}",
            query.page,
            query.term,
            page.jobs.len(),
            page.has_more
        );
        Ok(page)
    }

    async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let response = self
            .client
            .get(self.health_endpoint.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response).await?;
        response.json().await.map_err(map_reqwest_error)
    }
}
