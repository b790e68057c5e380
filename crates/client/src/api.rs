use std::time::Duration;

use async_trait::async_trait;
use common::types::ErrorBody;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use service::catalog::{NewService, Service};
use tracing::debug;

use crate::errors::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedService {
    pub message: String,
    pub service: Service,
}

/// The three catalog operations as seen from the client.
#[async_trait]
pub trait ServicesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Service>, ClientError>;
    async fn create(&self, input: &NewService) -> Result<Service, ClientError>;
    async fn delete(&self, id: u64) -> Result<DeletedService, ClientError>;
}

/// `ServicesApi` over HTTP with `reqwest`.
#[derive(Clone)]
pub struct HttpServicesApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpServicesApi {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn services_url(&self) -> String {
        format!("{}/api/services", self.base_url)
    }

    /// Pass 2xx through; turn anything else into `ClientError::Api`,
    /// keeping the server's error text when the body is an `ErrorBody`.
    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.json::<ErrorBody>().await.ok().map(|b| b.error);
        debug!(status = status.as_u16(), ?message, "api call failed");
        Err(ClientError::Api { status: status.as_u16(), message })
    }
}

#[async_trait]
impl ServicesApi for HttpServicesApi {
    async fn list(&self) -> Result<Vec<Service>, ClientError> {
        let resp = self.http.get(self.services_url()).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<Vec<Service>>().await?)
    }

    async fn create(&self, input: &NewService) -> Result<Service, ClientError> {
        let resp = self.http.post(self.services_url()).json(input).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<Service>().await?)
    }

    async fn delete(&self, id: u64) -> Result<DeletedService, ClientError> {
        let url = format!("{}/{}", self.services_url(), id);
        let resp = self.http.delete(url).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<DeletedService>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed_from_base_url() {
        let api = HttpServicesApi::with_client(reqwest::Client::new(), "http://localhost:5000/");
        assert_eq!(api.services_url(), "http://localhost:5000/api/services");
    }
}
