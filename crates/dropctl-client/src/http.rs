//! HTTP client for the DigitalOcean API

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use dropctl_api::responses::{DropletResponse, DropletsResponse, ErrorResponse, KeysResponse};
use dropctl_api::{Droplet, DropletCreateRequest, SshKey};

use crate::api::DropletApi;
use crate::auth::TokenSource;
use crate::error::{ClientError, Result};

/// Public DigitalOcean API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com/";

/// Default timeout for API requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("dropctl/", env!("CARGO_PKG_VERSION"));

/// HTTP client that authorizes every request with a bearer token
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    token_source: Arc<dyn TokenSource>,
}

impl HttpClient {
    /// Create a client for the public API endpoint
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Example
    /// ```no_run
    /// use dropctl_client::{HttpClient, StaticTokenSource};
    ///
    /// let client = HttpClient::new(StaticTokenSource::new("dop_v1_..."))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(token_source: impl TokenSource + 'static) -> Result<Self> {
        Self::builder(token_source).build()
    }

    /// Start configuring a client
    pub fn builder(token_source: impl TokenSource + 'static) -> HttpClientBuilder {
        HttpClientBuilder::new(Arc::new(token_source))
    }

    /// Build a full URL from a path relative to the base URL
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    /// Start an authorized request
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(%method, %url, "API request");

        let token = self.token_source.token();
        Ok(self
            .client
            .request(method, url)
            .header(AUTHORIZATION, token.authorization()))
    }

    /// Turn non-2xx responses into `ClientError::Api`
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.message,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
            Err(_) => body,
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Deserialize a successful response body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = Self::check(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        Self::decode(response).await
    }

    /// Perform a POST request with JSON body
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        Self::decode(response).await
    }

    /// Perform a DELETE request
    async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DropletApi for HttpClient {
    async fn list_droplets(&self) -> Result<Vec<Droplet>> {
        let response: DropletsResponse = self.get("v2/droplets").await?;
        Ok(response.droplets)
    }

    async fn list_keys(&self) -> Result<Vec<SshKey>> {
        let response: KeysResponse = self.get("v2/account/keys").await?;
        Ok(response.ssh_keys)
    }

    async fn create_droplet(&self, request: &DropletCreateRequest) -> Result<Droplet> {
        let response: DropletResponse = self.post("v2/droplets", request).await?;
        Ok(response.droplet)
    }

    async fn delete_droplet(&self, id: u64) -> Result<()> {
        self.delete(&format!("v2/droplets/{id}")).await
    }
}

/// Builder for [`HttpClient`]
pub struct HttpClientBuilder {
    token_source: Arc<dyn TokenSource>,
    base_url: String,
    timeout: Duration,
}

impl HttpClientBuilder {
    fn new(token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            token_source,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API endpoint (default: `https://api.digitalocean.com/`)
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout (default: 30s)
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<HttpClient> {
        let mut base_url = Url::parse(&self.base_url)?;
        // Relative joins replace the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        Ok(HttpClient {
            client,
            base_url,
            token_source: self.token_source,
        })
    }
}
