//! Middleware trait and capability registry
//!
//! Middleware run before the handler, in the order a route declared them,
//! and each contributes a body fragment. They cannot abort the chain.
//! Identifiers resolve through the [`MiddlewareRegistry`] when a route is
//! registered, so an unknown name fails fast instead of being skipped at
//! request time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::errors::{RouterError, RouterResult};

/// A pre-handler capability bound to routes by name.
pub trait Middleware: Send + Sync {
    /// Produce this middleware's body fragment for the current dispatch.
    fn handle(&self, ctx: &RequestContext) -> String;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        "middleware"
    }
}

impl std::fmt::Debug for dyn Middleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Middleware").field("name", &self.name()).finish()
    }
}

/// Blanket impl so plain closures can register as middleware.
impl<F> Middleware for F
where
    F: Fn(&RequestContext) -> String + Send + Sync,
{
    fn handle(&self, ctx: &RequestContext) -> String {
        self(ctx)
    }
}

/// Name -> middleware instance registry.
///
/// Populated during the registration phase, read-only afterwards.
#[derive(Default)]
pub struct MiddlewareRegistry {
    entries: HashMap<String, Arc<dyn Middleware>>,
}

impl MiddlewareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a middleware under an identifier. A later registration
    /// under the same name replaces the earlier one.
    pub fn register<M: Middleware + 'static>(&mut self, name: &str, middleware: M) {
        self.register_arc(name, Arc::new(middleware));
    }

    /// Register an already-shared middleware instance.
    pub fn register_arc(&mut self, name: &str, middleware: Arc<dyn Middleware>) {
        self.entries.insert(name.to_string(), middleware);
    }

    /// Look up a single identifier.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Middleware>> {
        self.entries.get(name).cloned()
    }

    /// Resolve an ordered identifier list into an executable chain.
    ///
    /// Order is preserved and duplicates are allowed. Any unknown name
    /// fails the whole chain.
    pub fn resolve_chain<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> RouterResult<Vec<Arc<dyn Middleware>>> {
        names
            .iter()
            .map(|name| {
                self.resolve(name.as_ref())
                    .ok_or_else(|| RouterError::unknown_middleware(name.as_ref()))
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for MiddlewareRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareRegistry")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
