// ABOUTME: HTTP client for the alert-configuration backend
// Lists tenants and posts shaped alert configurations to /api/AddAlert

use crate::api::types::{AddAlertResponse, Tenant};
use crate::config::ApiConfig;
use reqwest::Client;
use serde_json::{Map, Value};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

const LIST_TENANTS_PATH: &str = "api/ListTenants";
const ADD_ALERT_PATH: &str = "api/AddAlert";

/// Errors raised while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Transport used by the wizard to reach the backend
pub trait AlertApi {
    /// Fetch the tenants the console manages
    fn list_tenants(&self) -> impl Future<Output = Result<Vec<Tenant>, ApiError>> + Send;

    /// Post a shaped alert configuration, returning the backend's result messages
    fn add_alert(
        &self,
        payload: &Map<String, Value>,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpAlertApi {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpAlertApi {
    /// Build a client from the `[api]` section of the configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl AlertApi for HttpAlertApi {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ApiError> {
        let mut url = self.endpoint(LIST_TENANTS_PATH)?;
        url.query_pairs_mut().append_pair("AllTenantSelector", "true");

        debug!("Listing tenants from {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;
        let body = Self::read_body(response).await?;

        let tenants: Vec<Tenant> = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        info!("Loaded {} tenants", tenants.len());
        Ok(tenants)
    }

    async fn add_alert(&self, payload: &Map<String, Value>) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(ADD_ALERT_PATH)?;

        debug!("Posting alert configuration with {} fields to {}", payload.len(), url);
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let ack: AddAlertResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        Ok(ack.results)
    }
}

/// Ensure the base URL ends with `/` so relative endpoints join under it
fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{trimmed}/"))?)
    }
}
