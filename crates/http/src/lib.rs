//! Triage portal HTTP access layer
//!
//! A thin wrapper over a configured HTTP client with a fixed base origin and
//! two interceptors: outgoing requests under the admin prefix get the stored
//! bearer credential attached, and a 401 response received while the browser
//! is inside the admin area forces a hard redirect to the login page. Every
//! other response or transport error passes through to the caller untouched.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{ApiClient, ApiClientBuilder};
