//! REST client for the remote todo collection resource.

use crate::error::SyncError;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use todoflow_core::{TodoDraft, TodoId, TodoItem, TodoPatch};

/// Client for the remote todo resource.
///
/// Wraps a `reqwest::Client` with the resource's base URL and an optional
/// bearer credential. The credential is injected explicitly at construction
/// time rather than read from ambient storage; when absent, the
/// `Authorization` header is omitted entirely (not sent empty).
#[derive(Clone, Debug)]
pub struct TodosClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl TodosClient {
    /// Create a client for the resource at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token sent with every request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the entire remote collection
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure, non-2xx status, or an
    /// unparseable payload.
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>, SyncError> {
        let request = self.authorized(self.http.get(self.url("/todos")));
        Self::execute(request).await
    }

    /// Create an item; the server assigns its identifier
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure, non-2xx status, or an
    /// unparseable payload.
    pub async fn create_todo(&self, draft: &TodoDraft) -> Result<TodoItem, SyncError> {
        let request = self.authorized(self.http.post(self.url("/todos")).json(draft));
        Self::execute(request).await
    }

    /// Update item `id`, returning the server's representation
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure, non-2xx status, or an
    /// unparseable payload.
    pub async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<TodoItem, SyncError> {
        let request = self.authorized(self.http.put(self.url(&format!("/todos/{id}"))).json(patch));
        Self::execute(request).await
    }

    /// Delete item `id`
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure or non-2xx status.
    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), SyncError> {
        let request = self.authorized(self.http.delete(self.url(&format!("/todos/{id}"))));
        let response = request
            .send()
            .await
            .map_err(|e| SyncError::RequestFailed(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SyncError> {
        let response = request
            .send()
            .await
            .map_err(|e| SyncError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::ParseFailed(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response, SyncError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(SyncError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = TodosClient::new("http://localhost:3004/");
        assert_eq!(client.url("/todos"), "http://localhost:3004/todos");
    }

    #[test]
    fn with_token_stores_the_credential() {
        let client = TodosClient::new("http://localhost:3004").with_token("secret");
        assert_eq!(client.token.as_deref(), Some("secret"));
    }
}
