//! Triage core capabilities and shared configuration
//!
//! The portal shell treats browser-global state (local storage, the window
//! location) as injected capabilities so that the router guard and the HTTP
//! client can be driven by in-process implementations in tests and on native
//! hosts.

pub mod config;
pub mod error;
pub mod navigation;
pub mod storage;

pub use config::{ApiConfig, AuthConfig};
pub use error::{StorageError, StorageResult};
pub use navigation::{CurrentLocation, HardRedirect, RecordingRedirect, StaticLocation};
pub use storage::{MemoryTokenStore, TokenStore};
