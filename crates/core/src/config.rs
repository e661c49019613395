//! Shared portal configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key holding the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Path prefix for the administrative area
    pub const ADMIN_PREFIX: &'static str = "/admin";

    /// Login route the shell falls back to on missing or rejected credentials
    pub const LOGIN_PATH: &'static str = "/admin/login";
}

/// API client configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Development backend origin; deployments override it through the
    /// client builder.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
}
