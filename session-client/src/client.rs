use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::ClientError;
use crate::errors::StoreError;
use crate::store::TokenStore;

/// Client-side holder of the current session token.
///
/// Wraps a `reqwest` client with the token lifecycle: the current token is
/// read from the injected [`TokenStore`] on every request and attached as a
/// bearer credential when present. Whether an endpoint actually requires
/// auth is the server's decision, not this client's.
pub struct SessionClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
}

/// Structured error body the service emits on non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl SessionClient {
    /// Create a session client.
    ///
    /// # Arguments
    /// * `base_url` - Target for all requests; a trailing slash is trimmed
    /// * `store` - Token storage capability (file-backed for durability,
    ///   in-memory for tests)
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "Session client initialized");

        Self {
            base_url,
            http: reqwest::Client::new(),
            store,
        }
    }

    /// Store a new token, or clear the current one with `None`.
    ///
    /// Subsequent requests on this client observe the update immediately.
    pub fn set_token(&self, token: Option<&str>) -> Result<(), StoreError> {
        match token {
            Some(token) => self.store.set(token),
            None => self.store.clear(),
        }
    }

    /// Read the current token; `None` means logged out.
    pub fn current_token(&self) -> Option<String> {
        self.store.get()
    }

    /// Attach the current token as a bearer credential, if one is present.
    pub fn attach_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.current_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET request");

        let request = self.attach_auth(self.http.get(url));
        Self::handle_response(request.send().await?).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST request");

        let request = self.attach_auth(self.http.post(url).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, "PUT request");

        let request = self.attach_auth(self.http.put(url).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// DELETE a resource and decode the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "DELETE request");

        let request = self.attach_auth(self.http.delete(url));
        Self::handle_response(request.send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response.
    ///
    /// Non-success: attempt the structured `{error, message}` decode and
    /// surface a single human-readable message, preferring `message` over
    /// `error`, falling back to a status-derived one. Success: an empty body
    /// decodes as the empty JSON object, for endpoints that return nothing.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.message.or(body.error))
                .unwrap_or_else(|| format!("HTTP error: status {}", status.as_u16()));

            tracing::debug!(status = status.as_u16(), message = %message, "Request failed");

            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() {
            return serde_json::from_slice(b"{}")
                .map_err(|e| ClientError::InvalidBody(e.to_string()));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidBody(e.to_string()))
    }
}
