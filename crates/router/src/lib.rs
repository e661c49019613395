//! Triage portal routing
//!
//! Declarative route table with nested admin children, exact path resolution
//! (including the unconditional `/admin` → `/admin/dashboard` redirect) and a
//! synchronous pre-navigation guard that sends unauthenticated visitors of
//! protected routes to the login page.

pub mod guard;
pub mod matcher;
pub mod route;


pub use guard::{GuardDecision, Navigation, Router};
pub use matcher::{Resolution, resolve};
pub use route::{RouteEntry, RouteMeta, View, portal_routes};
