//! Auth session service
//!
//! Owns the token lifecycle: a successful login writes the bearer token into
//! the injected store under the fixed key, logout removes it, and presence of
//! a non-empty token is what the router guard and client interceptor consult.

use std::sync::Arc;
use thiserror::Error;
use triage_core::{AuthConfig, StorageError, TokenStore};
use triage_http::ApiClient;
use triage_http::ClientError;
use triage_http::types::Token;

/// Errors from the auth session
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Login/logout service over the shared token store
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
    client: ApiClient,
}

impl AuthSession {
    /// Create a session service over `store`, issuing requests through
    /// `client`
    pub fn new(store: Arc<dyn TokenStore>, client: ApiClient) -> Self {
        Self { store, client }
    }

    /// Exchange credentials for a token and persist it
    pub async fn login(&self, username: String, password: String) -> Result<Token, AuthError> {
        let token = self.client.login(username, password).await?;
        self.store.set(AuthConfig::TOKEN_KEY, &token.access_token)?;
        tracing::info!("login succeeded, credential stored");
        Ok(token)
    }

    /// Drop the stored credential
    pub fn logout(&self) {
        self.store.remove(AuthConfig::TOKEN_KEY);
        tracing::info!("credential removed");
    }

    /// Whether a non-empty credential is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored credential, if any
    pub fn token(&self) -> Option<String> {
        self.store
            .get(AuthConfig::TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{MemoryTokenStore, RecordingRedirect, StaticLocation};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session(base_url: &str, store: Arc<MemoryTokenStore>) -> AuthSession {
        let client = ApiClient::builder()
            .base_url(base_url)
            .token_store(Arc::clone(&store) as Arc<dyn TokenStore>)
            .location(Arc::new(StaticLocation::new("/admin/login")))
            .hard_redirect(Arc::new(RecordingRedirect::new()))
            .build()
            .unwrap();
        AuthSession::new(store, client)
    }

    #[tokio::test]
    async fn login_stores_the_issued_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "issued-token",
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryTokenStore::new());
        let session = session(&server.uri(), Arc::clone(&store));
        assert!(!session.is_authenticated());

        session
            .login("admin".to_string(), "pw".to_string())
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), Some("issued-token".into()));
    }

    #[tokio::test]
    async fn failed_login_leaves_the_store_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryTokenStore::new());
        let session = session(&server.uri(), Arc::clone(&store));

        let result = session.login("admin".to_string(), "bad".to_string()).await;
        assert!(matches!(
            result,
            Err(AuthError::Client(ClientError::AuthenticationFailed(_)))
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_removes_the_credential() {
        let store = Arc::new(MemoryTokenStore::with_entry(AuthConfig::TOKEN_KEY, "tok"));
        let session = session("http://localhost:8000", Arc::clone(&store));

        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(AuthConfig::TOKEN_KEY), None);
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let store = Arc::new(MemoryTokenStore::with_entry(AuthConfig::TOKEN_KEY, ""));
        let session = session("http://localhost:8000", store);
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
