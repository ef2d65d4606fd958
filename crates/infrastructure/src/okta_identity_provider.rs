//! Identity provider client for the Okta management API.

mod client;


use std::time::Duration;

use idbridge_application::{IdpError, IdpResult};
use idbridge_core::{AppError, AppResult};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const API_PREFIX: [&str; 2] = ["api", "v1"];
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for [`OktaIdentityProvider`].
#[derive(Clone)]
pub struct OktaClientConfig {
    base_url: Url,
    api_token: String,
    request_timeout: Duration,
    pool_idle_timeout: Duration,
}

impl OktaClientConfig {
    /// Builds settings from an organization domain and an API token.
    ///
    /// A domain without scheme is reached over `https`.
    pub fn new(domain: &str, api_token: impl Into<String>) -> AppResult<Self> {
        let domain = domain.trim().trim_end_matches('/');
        if domain.is_empty() {
            return Err(AppError::Validation(
                "identity provider domain is required".to_owned(),
            ));
        }

        let candidate = if domain.contains("://") {
            domain.to_owned()
        } else {
            format!("https://{domain}")
        };
        let base_url = Url::parse(&candidate).map_err(|error| {
            AppError::Validation(format!(
                "identity provider domain '{domain}' is not a valid URL: {error}"
            ))
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Validation(format!(
                "identity provider domain '{domain}' must be an http or https URL"
            )));
        }

        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(AppError::Validation(
                "identity provider API token is required".to_owned(),
            ));
        }

        Ok(Self {
            base_url,
            api_token,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
        })
    }

    /// Sets the deadline applied to every upstream request.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Sets how long idle pooled connections are kept.
    #[must_use]
    pub fn with_pool_idle_timeout(mut self, pool_idle_timeout: Duration) -> Self {
        self.pool_idle_timeout = pool_idle_timeout;
        self
    }

    /// Returns the organization base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for OktaClientConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OktaClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .finish()
    }
}

/// Okta-backed implementation of [`idbridge_application::IdentityProviderClient`].
#[derive(Clone)]
pub struct OktaIdentityProvider {
    http_client: reqwest::Client,
    base_url: Url,
    authorization: String,
}

impl OktaIdentityProvider {
    /// Creates a client with its own connection pool.
    pub fn new(config: OktaClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .user_agent(concat!("idbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to build identity provider HTTP client: {error}"
                ))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            authorization: format!("SSWS {}", config.api_token),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> IdpResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                IdpError::Transport("identity provider base URL cannot carry a path".to_owned())
            })?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization.as_str())
            .header(ACCEPT, "application/json")
    }

    async fn send(
        &self,
        operation: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> IdpResult<reqwest::Response> {
        debug!(operation, "calling identity provider");
        let response = builder
            .send()
            .await
            .map_err(|error| transport_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let summary = error_summary(&body);
        warn!(
            operation,
            status = status.as_u16(),
            error_summary = %summary,
            "identity provider rejected request"
        );
        Err(IdpError::status(status.as_u16(), summary))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> IdpResult<T> {
        let response = self.send(operation, builder).await?;
        let body = response
            .bytes()
            .await
            .map_err(|error| transport_error(operation, &error))?;

        serde_json::from_slice(&body).map_err(|error| {
            warn!(operation, error = %error, "identity provider response could not be decoded");
            IdpError::Decode(error.to_string())
        })
    }

    async fn send_empty(
        &self,
        operation: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> IdpResult<()> {
        self.send(operation, builder).await.map(|_| ())
    }
}

fn transport_error(operation: &'static str, error: &reqwest::Error) -> IdpError {
    if error.is_timeout() {
        warn!(operation, "identity provider request timed out");
        return IdpError::TimedOut;
    }

    warn!(operation, error = %error, "identity provider transport failure");
    IdpError::Transport(error.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OktaErrorBody {
    error_code: Option<String>,
    error_summary: Option<String>,
}

fn error_summary(body: &str) -> String {
    match serde_json::from_str::<OktaErrorBody>(body) {
        Ok(OktaErrorBody {
            error_code: Some(code),
            error_summary: Some(summary),
        }) => format!("{code}: {summary}"),
        Ok(OktaErrorBody {
            error_summary: Some(summary),
            ..
        }) => summary,
        _ if body.trim().is_empty() => "no error body".to_owned(),
        _ => body.chars().take(200).collect(),
    }
}
