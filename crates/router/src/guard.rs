//! Pre-navigation authentication guard
//!
//! Runs synchronously before any view mounts. The guard only checks that a
//! credential string is present; validity (expiry, signature) is the
//! backend's problem and surfaces as a 401 handled by the HTTP client.

use crate::matcher::{Resolution, resolve};
use crate::route::{RouteEntry, View, portal_routes, sibling_paths_unique};
use std::sync::Arc;
use triage_core::{AuthConfig, TokenStore};

/// Guard verdict for a resolved navigation, a pure function of the matched
/// chain and credential presence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds unmodified
    Allow,
    /// Navigation is aborted in favour of the login route
    Redirect(&'static str),
}

/// Decide whether a matched chain may be navigated to.
///
/// Any entry in the chain carrying the `requires_auth` flag protects the
/// whole navigation; an ancestor's flag covers every descendant.
pub fn check(chain: &[&RouteEntry], token_present: bool) -> GuardDecision {
    let protected = chain.iter().any(|entry| entry.meta.requires_auth);
    if protected && !token_present {
        GuardDecision::Redirect(AuthConfig::LOGIN_PATH)
    } else {
        GuardDecision::Allow
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Mount the named view
    MountView(View),
    /// Navigate again, to this path
    Redirect(String),
    /// No route matched; host not-found handling applies
    NotFound,
}

/// Route table plus guard, evaluated once per navigation attempt
pub struct Router {
    routes: Vec<RouteEntry>,
    store: Arc<dyn TokenStore>,
}

impl Router {
    /// Create a router over the portal route table
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_routes(portal_routes(), store)
    }

    /// Create a router over a custom table
    ///
    /// # Panics
    ///
    /// Panics if two sibling entries share a path; the table is static and a
    /// duplicate is a programming error.
    pub fn with_routes(routes: Vec<RouteEntry>, store: Arc<dyn TokenStore>) -> Self {
        assert!(
            sibling_paths_unique(&routes),
            "route table contains duplicate sibling paths"
        );
        Self { routes, store }
    }

    /// The route table backing this router
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Resolve `path` and run the guard.
    ///
    /// A route-level redirect (the bare `/admin` entry) is returned before
    /// the guard runs; the follow-up navigation to its target is what gets
    /// guarded.
    pub fn navigate(&self, path: &str) -> Navigation {
        match resolve(&self.routes, path) {
            Resolution::Redirect(target) => {
                tracing::debug!(from = path, to = target, "route redirect");
                Navigation::Redirect(target.to_string())
            }
            Resolution::Matched { chain } => match check(&chain, self.token_present()) {
                GuardDecision::Allow => {
                    let view = chain.last().map_or(View::Screening, |entry| entry.view);
                    Navigation::MountView(view)
                }
                GuardDecision::Redirect(target) => {
                    tracing::debug!(path, to = target, "unauthenticated navigation redirected");
                    Navigation::Redirect(target.to_string())
                }
            },
            Resolution::NotFound => Navigation::NotFound,
        }
    }

    fn token_present(&self) -> bool {
        self.store
            .get(AuthConfig::TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }
}
