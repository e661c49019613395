//! Browser implementations of the injected capabilities
//!
//! Token storage is raw localStorage under the fixed key (the value is the
//! bare token string, no serialization, for compatibility with the deployed
//! storage format). Location reads and the hard redirect go through
//! `window.location`.

use crate::client::init_api_client;
use std::sync::Arc;
use triage_core::{CurrentLocation, HardRedirect, StorageError, StorageResult, TokenStore};
use triage_http::{ApiClient, ClientError};
use triage_router::Router;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// localStorage-backed token store
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage =
            local_storage().ok_or_else(|| StorageError::unavailable("localStorage"))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::write_failed(key, "localStorage rejected the write"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// `window.location` path reader
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl CurrentLocation for BrowserLocation {
    fn path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
}

/// Hard redirect through `location.href`, dropping all in-memory routing
/// state
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRedirect;

impl HardRedirect for BrowserRedirect {
    fn redirect(&self, target: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
}

/// Build the portal client over the browser capabilities and install it as
/// the global instance.
///
/// Uses the development backend origin unless `base_url` overrides it.
pub fn init_browser_client(base_url: Option<String>) -> Result<ApiClient, ClientError> {
    let mut builder = ApiClient::builder()
        .token_store(Arc::new(BrowserTokenStore))
        .location(Arc::new(BrowserLocation))
        .hard_redirect(Arc::new(BrowserRedirect));
    if let Some(base_url) = base_url {
        builder = builder.base_url(base_url);
    }
    Ok(init_api_client(builder.build()?))
}

/// Router over the portal route table, reading the credential from
/// localStorage
pub fn browser_router() -> Router {
    Router::new(Arc::new(BrowserTokenStore))
}

/// Route tracing to the browser console
pub fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();
}
