//! Descriptor-driven controller registration
//!
//! Controllers expose their route bindings as plain data
//! ([`RouteDescriptor`]) instead of being reflected over: a controller
//! enumerates {verb, path, handler name, middleware list} per handler, the
//! registrar composes each path with the controller's prepend path and
//! feeds the result into the route table. Descriptors derive serde so a
//! build step can emit them as JSON.

use serde::{Deserialize, Serialize};

use super::HttpMethod;
use crate::context::RequestContext;

/// One declared route binding on a controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub handler_name: String,
    #[serde(default)]
    pub middleware: Vec<String>,
}

impl RouteDescriptor {
    pub fn new<P: Into<String>, H: Into<String>>(
        method: HttpMethod,
        path: P,
        handler_name: H,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            handler_name: handler_name.into(),
            middleware: Vec::new(),
        }
    }

    /// Attach middleware identifiers, order preserved, duplicates allowed.
    pub fn with_middleware<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware.extend(names.into_iter().map(Into::into));
        self
    }
}

/// A controller-like object: a named bundle of handlers plus their
/// declared route bindings.
pub trait Controller: Send + Sync {
    /// Controller name, used in logs.
    fn name(&self) -> &str;

    /// Fixed string prefixed to every route declared on this controller.
    fn base_path(&self) -> &str {
        ""
    }

    /// Declared route bindings.
    fn routes(&self) -> Vec<RouteDescriptor>;

    /// Invoke the named handler for the current dispatch.
    fn call(&self, handler_name: &str, ctx: &RequestContext) -> String;
}

/// Compose a controller's prepend path with a declared route path.
pub(crate) fn combine_paths(base: &str, route: &str) -> String {
    let base = base.trim_end_matches('/');
    let route = route.trim_start_matches('/');

    let path = if route.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        format!("/{}", route)
    } else {
        format!("{}/{}", base, route)
    };

    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// Keep only the first descriptor declared for each handler name.
///
/// A handler carries exactly one honored route declaration; any later
/// declarations for the same handler are ignored.
pub(crate) fn first_declaration_wins(descriptors: Vec<RouteDescriptor>) -> Vec<RouteDescriptor> {
    let mut seen = std::collections::HashSet::new();
    descriptors
        .into_iter()
        .filter(|descriptor| seen.insert(descriptor.handler_name.clone()))
        .collect()
}
