//! Core router: registration surface and the dispatch state machine
//!
//! The router is written to during a registration phase (direct calls
//! and/or controller descriptors) and is read-only afterwards. Dispatch
//! takes `&self` and builds a fresh [`RequestContext`] per request, so a
//! fully-registered router can be shared across concurrent dispatches.

use std::sync::Arc;

use http::StatusCode;
use tracing::{debug, trace, warn};

use super::registrar::{combine_paths, first_declaration_wins, Controller};
use super::table::{Handler, Route, RouteTable};
use super::pattern::RoutePattern;
use super::HttpMethod;
use crate::context::RequestContext;
use crate::errors::RouterResult;
use crate::middleware::{Middleware, MiddlewareRegistry};
use crate::normalize::{normalize_route, parse_query, split_target};
use crate::transport::Transport;

/// Terminal outcome of one dispatch.
///
/// Every request ends in exactly one of these; no error crosses the
/// dispatch boundary into the transport layer.
#[derive(Debug)]
pub enum Dispatch {
    /// A route matched; middleware and handler output, status 200.
    Dispatched(String),
    /// Method bucket exists but no pattern matched; status 404 with the
    /// not-found handler's output if one is registered.
    NotFound(Option<String>),
    /// No bucket for the request verb (or an empty path); status 501,
    /// no body.
    UnsupportedMethod,
}

impl Dispatch {
    pub fn status(&self) -> StatusCode {
        match self {
            Dispatch::Dispatched(_) => StatusCode::OK,
            Dispatch::NotFound(_) => StatusCode::NOT_FOUND,
            Dispatch::UnsupportedMethod => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Dispatch::Dispatched(body) => body,
            Dispatch::NotFound(body) => body.as_deref().unwrap_or(""),
            Dispatch::UnsupportedMethod => "",
        }
    }
}

/// The request-path router.
pub struct Router {
    table: RouteTable,
    middleware: MiddlewareRegistry,
    not_found: Option<Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
            middleware: MiddlewareRegistry::new(),
            not_found: None,
        }
    }

    /// Register a middleware instance under an identifier, making it
    /// available to route middleware lists.
    pub fn register_middleware<M: Middleware + 'static>(&mut self, name: &str, middleware: M) {
        self.middleware.register(name, middleware);
    }

    /// The middleware capability registry.
    pub fn middleware_registry(&self) -> &MiddlewareRegistry {
        &self.middleware
    }

    /// Register a route.
    ///
    /// Returns `Ok(false)` and leaves the table unchanged when an entry
    /// with the same (method, normalized pattern) key already exists.
    /// Fails with an error for an uncompilable pattern or an unknown
    /// middleware identifier.
    pub fn register<F>(
        &mut self,
        method: HttpMethod,
        route: &str,
        handler: F,
        middleware: &[&str],
    ) -> RouterResult<bool>
    where
        F: Fn(&RequestContext) -> String + Send + Sync + 'static,
    {
        self.register_handler(method, route, Arc::new(handler), middleware)
    }

    fn register_handler(
        &mut self,
        method: HttpMethod,
        route: &str,
        handler: Handler,
        middleware: &[&str],
    ) -> RouterResult<bool> {
        let normalized = normalize_route(route);
        let pattern = RoutePattern::compile(&normalized)?;
        let chain = self.middleware.resolve_chain(middleware)?;

        let inserted = self
            .table
            .insert(method, Route::new(normalized.clone(), pattern, handler, chain));
        if inserted {
            debug!(%method, pattern = %normalized, "route registered");
        }
        Ok(inserted)
    }

    /// Remove a route. `true` only when the entry existed and a
    /// subsequent existence check confirms absence.
    pub fn unregister(&mut self, method: HttpMethod, route: &str) -> bool {
        let normalized = normalize_route(route);
        let removed = self.table.remove(method, &normalized);
        if removed {
            debug!(%method, pattern = %normalized, "route unregistered");
        }
        removed
    }

    /// Look up a registered route's handler by its (method, pattern) key.
    pub fn exists(&self, method: HttpMethod, route: &str) -> Option<Handler> {
        let normalized = normalize_route(route);
        self.table
            .lookup(method, &normalized)
            .map(|entry| Arc::clone(entry.handler()))
    }

    /// Register the fallback invoked when no route matches a supported
    /// method. A later call replaces the callback.
    pub fn register_not_found<F>(&mut self, handler: F)
    where
        F: Fn(&RequestContext) -> String + Send + Sync + 'static,
    {
        self.not_found = Some(Arc::new(handler));
    }

    /// Register every route a controller declares.
    ///
    /// Composes each declared path with the controller's prepend path,
    /// honors only the first declaration per handler name, and resolves
    /// middleware identifiers up front. A duplicate (method, pattern) key
    /// is logged and skipped; the controller's remaining routes still
    /// register.
    pub fn register_controller(&mut self, controller: Arc<dyn Controller>) -> RouterResult<()> {
        let base_path = controller.base_path().to_string();

        for descriptor in first_declaration_wins(controller.routes()) {
            let full_path = combine_paths(&base_path, &descriptor.path);
            let handler_name = descriptor.handler_name.clone();
            let bound = Arc::clone(&controller);
            let handler: Handler =
                Arc::new(move |ctx| bound.call(&handler_name, ctx));

            let middleware: Vec<&str> =
                descriptor.middleware.iter().map(String::as_str).collect();
            let inserted =
                self.register_handler(descriptor.method, &full_path, handler, &middleware)?;
            if !inserted {
                warn!(
                    controller = controller.name(),
                    method = %descriptor.method,
                    pattern = %full_path,
                    "controller route collides with an existing registration, skipped"
                );
            }
        }
        Ok(())
    }

    /// Register routes from several controllers in order.
    pub fn register_controllers<I>(&mut self, controllers: I) -> RouterResult<()>
    where
        I: IntoIterator<Item = Arc<dyn Controller>>,
    {
        for controller in controllers {
            self.register_controller(controller)?;
        }
        Ok(())
    }

    /// Run one request through the matching state machine.
    pub fn dispatch(&self, method: &str, target: &str) -> Dispatch {
        let (raw_path, raw_query) = split_target(target);
        let path = normalize_route(raw_path);
        let query = parse_query(raw_query);

        // Unsupported verb (or nothing to match against) terminates
        // before pattern matching.
        let Some(verb) = HttpMethod::parse(method) else {
            debug!(method, target, "no bucket for request method");
            return Dispatch::UnsupportedMethod;
        };
        if path.is_empty() {
            return Dispatch::UnsupportedMethod;
        }

        let mut ctx = RequestContext::new(path, query);

        for route in self.table.routes(verb) {
            let Some(vars) = route.pattern().attempt_match(ctx.path(), ctx.query()) else {
                continue;
            };
            trace!(%verb, pattern = route.pattern_source(), path = ctx.path(), "route matched");
            ctx.set_attributes(vars);

            let mut body = String::new();
            for middleware in route.middleware() {
                trace!(middleware = middleware.name(), "running middleware");
                body.push_str(&middleware.handle(&ctx));
            }
            body.push_str(&(route.handler())(&ctx));
            return Dispatch::Dispatched(body);
        }

        debug!(%verb, path = ctx.path(), "no route matched");
        Dispatch::NotFound(self.not_found.as_ref().map(|handler| handler(&ctx)))
    }

    /// Serve one request from the transport collaborator: read the
    /// method and target, dispatch, emit exactly one status + body.
    pub fn run(&self, transport: &mut dyn Transport) {
        let method = transport.method().to_string();
        let target = transport.target().to_string();
        let outcome = self.dispatch(&method, &target);
        transport.send(outcome.status(), outcome.body());
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .field("middleware", &self.middleware)
            .field("not_found", &self.not_found.is_some())
            .finish()
    }
}
