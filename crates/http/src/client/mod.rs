//! Portal API client
//!
//! Exposes the generic `request`/`execute` surface of the underlying HTTP
//! client with two interceptors composed in a fixed pipeline:
//!
//! - request: [`ApiClient::attach_bearer`] adds `Authorization: Bearer` to
//!   requests whose path starts with the admin prefix, when a credential is
//!   stored. Requests outside the prefix are never modified.
//! - response: [`ApiClient::handle_unauthorized`] forces a hard browser
//!   redirect to the login page when a 401 arrives while the current
//!   location is itself under the admin prefix, then re-raises the error.

pub mod admin;
pub mod auth;
pub mod error;
pub mod screening;


use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::sync::Arc;
use std::time::Duration;
use triage_core::{ApiConfig, AuthConfig, CurrentLocation, HardRedirect, TokenStore};

/// Portal API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    location: Arc<dyn CurrentLocation>,
    redirect: Arc<dyn HardRedirect>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, with the bearer credential attached for
    /// admin-prefixed paths
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);
        self.attach_bearer(request, path)
    }

    /// Request interceptor: attach `Authorization: Bearer <token>` when the
    /// request targets an administrative endpoint and a credential is stored.
    ///
    /// The token is read from the store on every request so a login or
    /// logout between calls takes effect immediately.
    fn attach_bearer(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> reqwest::RequestBuilder {
        if !path.starts_with(AuthConfig::ADMIN_PREFIX) {
            return request;
        }
        match self.store.get(AuthConfig::TOKEN_KEY) {
            Some(token) if !token.is_empty() => {
                tracing::trace!(path, "attaching bearer credential");
                request.header(header::AUTHORIZATION, format!("Bearer {token}"))
            }
            _ => request,
        }
    }

    /// Execute a request, decode a JSON body on success and run the response
    /// interceptor on failure
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            let error = ClientError::from_status(status, message);
            self.handle_unauthorized(&error);
            Err(error)
        }
    }

    /// Response interceptor: on a 401 received while the browser location is
    /// under the admin prefix, force a full-page navigation to the login
    /// route. The error still propagates to the caller.
    ///
    /// The redirect is deliberately a hard browser navigation rather than an
    /// in-app transition, so in-memory routing state is dropped and the
    /// login view remounts.
    fn handle_unauthorized(&self, error: &ClientError) {
        if !error.is_unauthorized() {
            return;
        }
        let current = self.location.path();
        if current.starts_with(AuthConfig::ADMIN_PREFIX) {
            tracing::warn!(current = %current, "401 inside admin area, redirecting to login");
            self.redirect.redirect(AuthConfig::LOGIN_PATH);
        }
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    location: Option<Arc<dyn CurrentLocation>>,
    redirect: Option<Arc<dyn HardRedirect>>,
}

impl ApiClientBuilder {
    /// Override the base URL (defaults to the development backend origin)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Inject the credential store read by the request interceptor
    #[must_use]
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Inject the current-location reader used by the 401 handler
    #[must_use]
    pub fn location(mut self, location: Arc<dyn CurrentLocation>) -> Self {
        self.location = Some(location);
        self
    }

    /// Inject the hard-redirect capability invoked on 401 in the admin area
    #[must_use]
    pub fn hard_redirect(mut self, redirect: Arc<dyn HardRedirect>) -> Self {
        self.redirect = Some(redirect);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| ApiConfig::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("token_store is required".into()))?;
        let location = self
            .location
            .ok_or_else(|| ClientError::Configuration("location is required".into()))?;
        let redirect = self
            .redirect
            .ok_or_else(|| ClientError::Configuration("hard_redirect is required".into()))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| "triage-client/0.1.0".to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(user_agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(user_agent).build()?
        };

        Ok(ApiClient {
            client,
            base_url,
            store,
            location,
            redirect,
        })
    }
}
