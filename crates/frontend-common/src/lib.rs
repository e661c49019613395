//! Common wiring for the triage portal frontend
//!
//! Holds the process-wide API client instance, the auth session service that
//! owns the token lifecycle, and the browser implementations of the storage
//! and navigation capabilities (wasm builds only).

pub mod client;
pub mod services;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use client::{api_client, init_api_client};
pub use services::auth::{AuthError, AuthSession};
pub use triage_router::{Navigation, Router, View};

#[cfg(target_arch = "wasm32")]
pub use browser::{
    BrowserLocation, BrowserRedirect, BrowserTokenStore, browser_router, init_browser_client,
    init_tracing,
};
