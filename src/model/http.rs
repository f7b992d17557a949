/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{REQUEST_ID_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::{RateLimitStatus, header_value};
use crate::session::state::AccessToken;
use crate::utils::id::request_id;
use reqwest::header::{ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// JSON transport to the authentication API
///
/// Joins paths onto the configured base URL, throttles through the shared
/// rate limiter, attaches the bearer header when a token is given and maps
/// every non-success status to an [`AppError`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
    last_rate_limit: Arc<RwLock<Option<RateLimitStatus>>>,
}

impl HttpClient {
    /// Creates a new transport
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL, timeout and rate limits
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config,
            rate_limiter,
            last_rate_limit: Arc::new(RwLock::new(None)),
        })
    }

    /// Configuration this transport was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of `path`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.config.base_url(), path.trim_start_matches('/'))
    }

    /// Rate limit headers of the most recent response
    pub async fn last_rate_limit(&self) -> Option<RateLimitStatus> {
        *self.last_rate_limit.read().await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, token: Option<&AccessToken>) -> Result<Value, AppError> {
        self.request(Method::GET, path, None::<&()>, token).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&AccessToken>,
    ) -> Result<Value, AppError> {
        self.request(Method::POST, path, body, token).await
    }

    /// Makes a request and decodes its JSON body
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded body of a 2xx response (`null` when empty)
    /// * `Err(AppError)` - Transport failure or non-success status
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&AccessToken>,
    ) -> Result<Value, AppError> {
        let url = self.url(path);
        let bearer = token.map(AccessToken::bearer);
        let request_id = request_id();

        let mut headers = vec![
            (ACCEPT.as_str(), "application/json"),
            (REQUEST_ID_HEADER, request_id.as_str()),
        ];
        if let Some(bearer) = &bearer {
            headers.push((AUTHORIZATION.as_str(), bearer.as_str()));
        }

        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method,
            &url,
            headers,
            body,
        )
        .await?;

        if let Some(status) = RateLimitStatus::from_headers(response.headers()) {
            *self.last_rate_limit.write().await = Some(status);
        }

        decode_response(response).await
    }
}

/// Sends an HTTP request after waiting on the rate limiter
///
/// The response is returned whatever its status; see [`decode_response`] for
/// status handling.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body, serialized as JSON
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        AppError::Network(e)
    })?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Maps a response to its decoded body or to an error
pub async fn decode_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let retry_after: Option<u64> = header_value(response.headers(), RETRY_AFTER.as_str());
    let text = response.text().await?;
    let body = parse_body(&text);

    if status.is_success() {
        return Ok(body);
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded, retry after {:?}s: {}", retry_after, body);
            Err(AppError::RateLimitExceeded { retry_after, body })
        }
        StatusCode::UNAUTHORIZED => {
            warn!("Unauthorized: {}", body);
            Err(AppError::Api { status, body })
        }
        _ => {
            error!("Request failed with status {}: {}", status, body);
            Err(AppError::Api { status, body })
        }
    }
}

/// Decodes a response body leniently
///
/// Empty bodies become `null` and text that is not JSON is kept as a JSON
/// string, so error bodies can always be shown.
#[must_use]
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
