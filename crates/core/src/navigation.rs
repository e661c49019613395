//! Browser location capabilities
//!
//! The 401 handler needs to know where the user currently is and needs a way
//! to force a full-page navigation. Both are modelled as injected traits so
//! tests can assert that a redirect was requested instead of performing one.

use std::sync::Mutex;

/// Read access to the current browser location path
pub trait CurrentLocation: Send + Sync {
    /// The current path, e.g. `/admin/users`
    fn path(&self) -> String;
}

/// Imperative full-page navigation, distinct from in-app route transitions.
///
/// Implementations replace the document location outright so any in-memory
/// routing state is discarded and the target view remounts from scratch.
pub trait HardRedirect: Send + Sync {
    /// Navigate the browser to `target`
    fn redirect(&self, target: &str);
}

/// Fixed location for tests and native hosts
#[derive(Debug)]
pub struct StaticLocation {
    path: Mutex<String>,
}

impl StaticLocation {
    /// Create a location pinned to `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(path.into()),
        }
    }

    /// Move the simulated location to `path`
    pub fn set_path(&self, path: impl Into<String>) {
        if let Ok(mut current) = self.path.lock() {
            *current = path.into();
        }
    }
}

impl CurrentLocation for StaticLocation {
    fn path(&self) -> String {
        self.path
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

/// Redirect sink that records requested targets instead of navigating
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    targets: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All redirect targets requested so far, oldest first
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// The most recent redirect target, if any
    pub fn last(&self) -> Option<String> {
        self.targets
            .lock()
            .ok()
            .and_then(|t| t.last().cloned())
    }
}

impl HardRedirect for RecordingRedirect {
    fn redirect(&self, target: &str) {
        if let Ok(mut targets) = self.targets.lock() {
            targets.push(target.to_string());
        }
    }
}
