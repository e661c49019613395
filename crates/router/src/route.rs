//! Static route table for the portal
//!
//! Paths are absolute and fixed for the process lifetime. Admin pages nest
//! under the `/admin` entry, which both redirects its bare path to the
//! dashboard and marks the whole subtree as requiring authentication.

/// Identifier of the view a route mounts.
///
/// Rendering is owned by the host application; the router only names the
/// component to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Screening,
    Recognition,
    Monitor,
    BatchAssessment,
    AdminLogin,
    AdminLayout,
    AdminDashboard,
    AdminUsers,
    AdminPatients,
    AdminResources,
    AdminSchedules,
}

/// Per-route flags consulted by the navigation guard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Navigation to this route (or any of its children) requires a stored
    /// credential
    pub requires_auth: bool,
}

/// A path-to-view binding, possibly with nested children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Absolute path, unique among siblings
    pub path: &'static str,
    /// Stable route name
    pub name: &'static str,
    /// View mounted when this entry is the match target
    pub view: View,
    /// Unconditional redirect taken when this exact path is requested
    pub redirect: Option<&'static str>,
    /// Flags inherited by the whole matched chain
    pub meta: RouteMeta,
    /// Nested routes, matched under this entry's path
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Create a plain route
    pub fn new(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            redirect: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    /// Mark the route (and thereby its children) as requiring authentication
    #[must_use]
    pub fn protected(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// Redirect requests for this exact path to `target`
    #[must_use]
    pub fn with_redirect(mut self, target: &'static str) -> Self {
        self.redirect = Some(target);
        self
    }

    /// Attach nested child routes
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }
}

/// The portal's route table.
///
/// Paths are part of the deployed URL surface and must not change.
pub fn portal_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", "Home", View::Screening),
        RouteEntry::new("/recognition", "Recognition", View::Recognition),
        RouteEntry::new("/monitor", "Monitor", View::Monitor),
        RouteEntry::new("/batch-assessment", "BatchAssessment", View::BatchAssessment),
        RouteEntry::new("/admin/login", "AdminLogin", View::AdminLogin),
        RouteEntry::new("/admin", "Admin", View::AdminLayout)
            .protected()
            .with_redirect("/admin/dashboard")
            .with_children(vec![
                RouteEntry::new("/admin/dashboard", "AdminDashboard", View::AdminDashboard),
                RouteEntry::new("/admin/users", "AdminUsers", View::AdminUsers),
                RouteEntry::new("/admin/patients", "AdminPatients", View::AdminPatients),
                RouteEntry::new("/admin/resources", "AdminResources", View::AdminResources),
                RouteEntry::new("/admin/schedules", "AdminSchedules", View::AdminSchedules),
            ]),
    ]
}

/// Check that no two siblings share a path, at any nesting level
pub fn sibling_paths_unique(routes: &[RouteEntry]) -> bool {
    let mut seen = std::collections::HashSet::new();
    for route in routes {
        if !seen.insert(route.path) {
            return false;
        }
        if !sibling_paths_unique(&route.children) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_table_has_unique_sibling_paths() {
        assert!(sibling_paths_unique(&portal_routes()));
    }

    #[test]
    fn admin_subtree_is_protected_and_login_is_not() {
        let routes = portal_routes();
        let admin = routes.iter().find(|r| r.path == "/admin").unwrap();
        assert!(admin.meta.requires_auth);
        assert_eq!(admin.redirect, Some("/admin/dashboard"));
        assert_eq!(admin.children.len(), 5);

        let login = routes.iter().find(|r| r.path == "/admin/login").unwrap();
        assert!(!login.meta.requires_auth);
    }

    #[test]
    fn duplicate_sibling_paths_are_detected() {
        let routes = vec![
            RouteEntry::new("/a", "A", View::Screening),
            RouteEntry::new("/a", "AlsoA", View::Monitor),
        ];
        assert!(!sibling_paths_unique(&routes));
    }
}
