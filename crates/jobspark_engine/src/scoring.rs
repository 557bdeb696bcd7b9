use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use jobspark_core::{ScoringRequest, ScoringResult, PDF_CONTENT_TYPE};
use jobspark_logging::{spark_debug, spark_info};
use reqwest::Url;

use crate::http::{build_client, ensure_success, map_reqwest_error, parse_endpoint};
use crate::wire::{ScoringRequestBody, ScoringResponse};
use crate::{EngineError, ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait ScoringService: Send + Sync {
    async fn score(&self, request: &ScoringRequest) -> Result<ScoringResult, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScoringClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestScoringClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, EngineError> {
        Ok(Self {
            client: build_client(settings.connect_timeout, settings.scoring_timeout)?,
            endpoint: parse_endpoint(&settings.scoring_endpoint)?,
        })
    }
}

#[async_trait::async_trait]
impl ScoringService for ReqwestScoringClient {
    async fn score(&self, request: &ScoringRequest) -> Result<ScoringResult, ServiceError> {
        let body = ScoringRequestBody {
            pdf_data: encode_pdf_data_uri(&request.document),
            job_description: request.job_description.clone().unwrap_or_default(),
        };
        spark_debug!(
            "POST {} document_bytes={} payload_len={} has_description={}",
            self.endpoint,
            request.document.len(),
            body.pdf_data.len(),
            request.job_description.is_some()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response).await?;
        let payload: ScoringResponse = response.json().await.map_err(map_reqwest_error)?;
        let result = payload.into_result()?;
        spark_info!("scored document: {:.1}", result.score);
        Ok(result)
    }
}

/// Self-contained `data:` URI carrying the PDF, as the scoring service expects.
pub fn encode_pdf_data_uri(bytes: &[u8]) -> String {
    format!("data:{PDF_CONTENT_TYPE};base64,{}", STANDARD.encode(bytes))
}
