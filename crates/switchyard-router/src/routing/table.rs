//! Route table
//!
//! Per-method, insertion-ordered route storage. First-match-wins is a
//! design invariant of the table: routes are tried strictly in the order
//! they were inserted, so two overlapping patterns resolve
//! deterministically to whichever was registered first. Entries are never
//! mutated in place; remove-then-insert is the only update path.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::pattern::RoutePattern;
use super::HttpMethod;
use crate::context::RequestContext;
use crate::middleware::Middleware;

/// A route handler: produces the response body for a matched dispatch.
pub type Handler = Arc<dyn Fn(&RequestContext) -> String + Send + Sync>;

/// A registered (method-bucketed) route entry. Immutable once inserted.
pub struct Route {
    pattern_source: String,
    pattern: RoutePattern,
    handler: Handler,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Route {
    pub fn new(
        pattern_source: String,
        pattern: RoutePattern,
        handler: Handler,
        middleware: Vec<Arc<dyn Middleware>>,
    ) -> Self {
        Self {
            pattern_source,
            pattern,
            handler,
            middleware,
        }
    }

    /// Normalized registration string; the uniqueness key within a bucket.
    pub fn pattern_source(&self) -> &str {
        &self.pattern_source
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn middleware(&self) -> &[Arc<dyn Middleware>] {
        &self.middleware
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern_source", &self.pattern_source)
            .field("pattern", &self.pattern)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// Method-bucketed, insertion-ordered route storage.
#[derive(Debug)]
pub struct RouteTable {
    buckets: HashMap<HttpMethod, Vec<Route>>,
}

impl RouteTable {
    /// Create a table with an empty bucket per supported method.
    pub fn new() -> Self {
        let buckets = HttpMethod::ALL
            .iter()
            .map(|method| (*method, Vec::new()))
            .collect();
        Self { buckets }
    }

    /// Append a route to its method bucket.
    ///
    /// Returns `false` (table unchanged) when the bucket already holds an
    /// entry with the same normalized pattern string.
    pub fn insert(&mut self, method: HttpMethod, route: Route) -> bool {
        let bucket = self.buckets.entry(method).or_default();
        if bucket
            .iter()
            .any(|existing| existing.pattern_source() == route.pattern_source())
        {
            debug!(%method, pattern = route.pattern_source(), "duplicate route rejected");
            return false;
        }
        bucket.push(route);
        true
    }

    /// Remove a route by its normalized pattern string.
    ///
    /// Returns `true` only when a post-removal lookup confirms absence.
    pub fn remove(&mut self, method: HttpMethod, pattern_source: &str) -> bool {
        let Some(bucket) = self.buckets.get_mut(&method) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|route| route.pattern_source() != pattern_source);
        let removed = before > bucket.len();
        removed && self.lookup(method, pattern_source).is_none()
    }

    /// Find a stored route by its normalized pattern string.
    pub fn lookup(&self, method: HttpMethod, pattern_source: &str) -> Option<&Route> {
        self.buckets
            .get(&method)?
            .iter()
            .find(|route| route.pattern_source() == pattern_source)
    }

    /// The method's routes in insertion order.
    pub fn routes(&self, method: HttpMethod) -> &[Route] {
        self.buckets
            .get(&method)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered routes across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
