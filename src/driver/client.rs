use super::api::{SnapCreateRequest, SnapCreateResponse, Volume, OPT_VOLUME_ID, SNAPSHOT_PATH, VOLUME_PATH};
use super::VolumeDriver;
use crate::{config::DriverConfig, PwxError, Result};
use async_trait::async_trait;
use reqwest::{header, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// HTTP client for the openstorage volume REST API
#[derive(Debug, Clone)]
pub struct OsdClient {
    http: reqwest::Client,
    base_url: String,
    driver_name: String,
    auth_token: Option<String>,
}

impl OsdClient {
    /// Build a client for the driver reachable at `endpoint`. No request is
    /// made until an operation is invoked.
    pub fn new(config: &DriverConfig, endpoint: &str) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(PwxError::InvalidEndpoint("empty endpoint".to_string()));
        }
        if config.driver_name.is_empty() {
            return Err(PwxError::InvalidArgument(
                "volume driver name cannot be empty".to_string(),
            ));
        }

        let base_url = config.base_url(endpoint);
        reqwest::Url::parse(&base_url)
            .map_err(|e| PwxError::InvalidEndpoint(format!("{}: {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url,
            driver_name: config.driver_name.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn builder(&self, method: Method, resource: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(resource))
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, query: &[(&str, &str)]) -> Result<T> {
        self.send(self.builder(Method::GET, resource).query(query)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, resource: &str, body: &B) -> Result<T> {
        self.send(self.builder(Method::POST, resource).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("Volume driver responded with HTTP {}", status);

        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// The driver reports failures as a plain-text body
fn error_from_response(status: StatusCode, body: &str) -> PwxError {
    let message = body.trim();
    if message.is_empty() {
        PwxError::Driver(format!("HTTP {}", status))
    } else {
        PwxError::Driver(message.to_string())
    }
}

#[async_trait]
impl VolumeDriver for OsdClient {
    async fn inspect(&self, ids: &[String]) -> Result<Vec<Volume>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let query: Vec<(&str, &str)> = ids.iter().map(|id| (OPT_VOLUME_ID, id.as_str())).collect();
        let volumes: Option<Vec<Volume>> = self.get(VOLUME_PATH, &query).await?;

        Ok(volumes.unwrap_or_default())
    }

    async fn snapshot(&self, request: &SnapCreateRequest) -> Result<String> {
        let response: SnapCreateResponse = self.post(SNAPSHOT_PATH, request).await?;
        response.into_id()
    }
}
