//! Global client instance
//!
//! Views share one configured [`ApiClient`]; it is installed once at startup
//! and handed out by clone afterwards.

use once_cell::sync::Lazy;
use std::sync::Mutex;
use triage_http::ApiClient;

static API_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Install `client` as the process-wide instance, returning it for immediate
/// use
pub fn init_api_client(client: ApiClient) -> ApiClient {
    let mut lock = API_CLIENT.lock().expect("Failed to acquire client lock");
    *lock = Some(client.clone());
    client
}

/// Get the installed client instance (None before initialization)
pub fn api_client() -> Option<ApiClient> {
    API_CLIENT
        .lock()
        .expect("Failed to acquire client lock")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use triage_core::{MemoryTokenStore, RecordingRedirect, StaticLocation};

    #[test]
    fn installed_client_is_shared() {
        let client = ApiClient::builder()
            .token_store(Arc::new(MemoryTokenStore::new()))
            .location(Arc::new(StaticLocation::new("/")))
            .hard_redirect(Arc::new(RecordingRedirect::new()))
            .build()
            .unwrap();

        let installed = init_api_client(client);
        let shared = api_client().expect("client should be installed");
        assert_eq!(shared.base_url(), installed.base_url());
    }
}
