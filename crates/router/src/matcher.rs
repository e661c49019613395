//! Exact path resolution against the static route tree

use crate::route::RouteEntry;

/// Outcome of resolving a requested path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path matched; the chain holds the route and all of its ancestors,
    /// leaf last
    Matched { chain: Vec<&'a RouteEntry> },
    /// The matched entry carries an unconditional redirect
    Redirect(&'static str),
    /// No entry matched; the host's not-found handling applies
    NotFound,
}

/// Resolve `path` against `routes`.
///
/// Matching is exact after normalization (query string and fragment are
/// ignored, a trailing slash is insignificant except for the root). A
/// redirect on the matched entry wins over everything else, including the
/// authentication guard: the follow-up navigation to the redirect target is
/// what gets guarded.
pub fn resolve<'a>(routes: &'a [RouteEntry], path: &str) -> Resolution<'a> {
    let path = normalize(path);
    let mut chain = Vec::new();
    if match_into(routes, &path, &mut chain) {
        if let Some(target) = chain.last().and_then(|entry| entry.redirect) {
            return Resolution::Redirect(target);
        }
        return Resolution::Matched { chain };
    }
    Resolution::NotFound
}

fn match_into<'a>(
    routes: &'a [RouteEntry],
    path: &str,
    chain: &mut Vec<&'a RouteEntry>,
) -> bool {
    for route in routes {
        if route.path == path {
            chain.push(route);
            return true;
        }
        // Only descend where the requested path can live under this entry.
        if is_under(path, route.path) {
            chain.push(route);
            if match_into(&route.children, path, chain) {
                return true;
            }
            chain.pop();
        }
    }
    false
}

fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn normalize(path: &str) -> String {
    let path = path
        .split_once('?')
        .map_or(path, |(before, _)| before);
    let path = path
        .split_once('#')
        .map_or(path, |(before, _)| before);
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{View, portal_routes};

    fn leaf_view(resolution: &Resolution<'_>) -> Option<View> {
        match resolution {
            Resolution::Matched { chain } => chain.last().map(|entry| entry.view),
            _ => None,
        }
    }

    #[test]
    fn top_level_paths_resolve_exactly() {
        let routes = portal_routes();
        assert_eq!(leaf_view(&resolve(&routes, "/")), Some(View::Screening));
        assert_eq!(
            leaf_view(&resolve(&routes, "/recognition")),
            Some(View::Recognition)
        );
        assert_eq!(
            leaf_view(&resolve(&routes, "/batch-assessment")),
            Some(View::BatchAssessment)
        );
    }

    #[test]
    fn nested_admin_paths_resolve_with_full_chain() {
        let routes = portal_routes();
        let Resolution::Matched { chain } = resolve(&routes, "/admin/users") else {
            panic!("expected a match");
        };
        let paths: Vec<_> = chain.iter().map(|entry| entry.path).collect();
        assert_eq!(paths, vec!["/admin", "/admin/users"]);
    }

    #[test]
    fn admin_root_redirects_to_dashboard() {
        let routes = portal_routes();
        assert_eq!(
            resolve(&routes, "/admin"),
            Resolution::Redirect("/admin/dashboard")
        );
        // Trailing slash is insignificant
        assert_eq!(
            resolve(&routes, "/admin/"),
            Resolution::Redirect("/admin/dashboard")
        );
    }

    #[test]
    fn login_matches_outside_the_protected_subtree() {
        let routes = portal_routes();
        let Resolution::Matched { chain } = resolve(&routes, "/admin/login") else {
            panic!("expected a match");
        };
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].view, View::AdminLogin);
    }

    #[test]
    fn unmatched_paths_fall_through() {
        let routes = portal_routes();
        assert_eq!(resolve(&routes, "/nope"), Resolution::NotFound);
        assert_eq!(resolve(&routes, "/admin/unknown"), Resolution::NotFound);
        assert_eq!(resolve(&routes, "admin"), Resolution::NotFound);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let routes = portal_routes();
        assert_eq!(
            leaf_view(&resolve(&routes, "/monitor?window=24h#top")),
            Some(View::Monitor)
        );
    }
}
