//! Generic request/response state holder.
//!
//! [`Fetch`] is the reusable low-level primitive underneath the sync layer:
//! it tracks one request slot's `idle → loading → (success | error)`
//! lifecycle, independent of the todo domain. Unlike the sync operations,
//! failures are captured locally into the state for presentation rather
//! than propagated.

use crate::error::SyncError;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

/// Outcome-tracking state for a request slot
#[derive(Debug)]
pub struct FetchState<T> {
    /// Parsed payload of the last successful request
    pub response: Option<T>,
    /// Whether a request is currently in flight
    pub is_loading: bool,
    /// Error from the last failed request, cleared on success
    pub error: Option<SyncError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            response: None,
            is_loading: false,
            error: None,
        }
    }
}

/// How to (re)issue the request: method plus optional JSON body
#[derive(Clone, Debug)]
pub struct RequestConfig {
    /// HTTP method to use
    pub method: Method,
    /// JSON body, if any
    pub body: Option<serde_json::Value>,
}

impl RequestConfig {
    /// A plain GET with no body
    #[must_use]
    pub const fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }

    /// A request with the given method and no body
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    /// Attach a JSON body
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::get()
    }
}

/// A configurable request trigger bound to one target path.
///
/// Holds the [`FetchState`] for its slot and re-issues the request on every
/// [`trigger`](Fetch::trigger) call. The optional bearer credential is
/// injected at construction; when absent, no `Authorization` header is
/// sent.
#[derive(Debug)]
pub struct Fetch<T> {
    http: Client,
    base_url: String,
    path: String,
    token: Option<String>,
    state: FetchState<T>,
}

impl<T: DeserializeOwned> Fetch<T> {
    /// Create an idle fetch slot for `base_url` + `path`
    #[must_use]
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            path: path.into(),
            token: None,
            state: FetchState::default(),
        }
    }

    /// Attach a bearer token sent with every triggered request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The current request state
    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Issue (or re-issue) the request described by `config`.
    ///
    /// Marks the slot loading for the duration of the call, then lands in
    /// exactly one terminal outcome: a success replaces the response and
    /// clears any previous error, a failure replaces the error and clears
    /// any previous response. `is_loading` resets in both cases.
    pub async fn trigger(&mut self, config: RequestConfig) {
        self.state.is_loading = true;

        match self.execute(config).await {
            Ok(response) => {
                self.state = FetchState {
                    response: Some(response),
                    is_loading: false,
                    error: None,
                };
            }
            Err(error) => {
                tracing::warn!(%error, path = %self.path, "request failed");
                self.state = FetchState {
                    response: None,
                    is_loading: false,
                    error: Some(error),
                };
            }
        }
    }

    async fn execute(&self, config: RequestConfig) -> Result<T, SyncError> {
        let url = format!("{}{}", self.base_url, self.path);
        let mut request = self.http.request(config.method, url);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = config.body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::ParseFailed(e.to_string()))
    }
}
