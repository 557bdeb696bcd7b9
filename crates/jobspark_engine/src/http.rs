use std::time::Duration;

use jobspark_logging::spark_warn;
use reqwest::{Response, Url};

use crate::wire::ErrorBody;
use crate::{EngineError, FailureKind, ServiceError};

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, EngineError> {
    Url::parse(endpoint).map_err(|source| EngineError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })
}

pub(crate) fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client, EngineError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(EngineError::Client)
}

/// Passes successful responses through; anything else becomes
/// `HTTP error! status: N`, with the body's error detail only logged.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    spark_warn!(
        "{} answered {}: {}",
        url,
        status,
        detail.as_deref().unwrap_or("<no error detail>")
    );
    Err(ServiceError::http_status(status.as_u16()))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, "request timed out");
    }
    if err.is_decode() {
        return ServiceError::new(
            FailureKind::InvalidResponse,
            format!("invalid response: {err}"),
        );
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
