//! Per-method route storage and first-match lookup.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;

use crate::router::handler::Handler;
use crate::router::params::Params;
use crate::router::pattern::Pattern;

/// A registered `(method, pattern, handler)` triple. The method is the
/// [`RouteTable`] key.
pub(crate) struct Route {
    pub(crate) pattern: Pattern,
    pub(crate) handler: Arc<dyn Handler>,
}

/// Routes grouped by method, each group in registration order.
#[derive(Default)]
pub(crate) struct RouteTable {
    routes: HashMap<Method, Vec<Route>>,
}

impl RouteTable {
    pub(crate) fn insert(&mut self, method: Method, pattern: Pattern, handler: Arc<dyn Handler>) {
        self.routes
            .entry(method)
            .or_default()
            .push(Route { pattern, handler });
    }

    /// First route for `method` whose pattern matches `segments`, together
    /// with the parameters it bound.
    pub(crate) fn lookup(&self, method: &Method, segments: &[&str]) -> Option<(&Route, Params)> {
        self.routes.get(method)?.iter().find_map(|route| {
            route
                .pattern
                .matches(segments)
                .map(|params| (route, params))
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }
}
