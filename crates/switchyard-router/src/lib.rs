//! # switchyard-router
//!
//! Request-path routing core: a table of (HTTP method, path pattern) →
//! handler bindings, matched against incoming requests with path/template
//! variable extraction, an ordered middleware chain, and a three-outcome
//! dispatch (200 / 404 / 501).
//!
//! Two pattern syntaxes are supported, decided once at registration:
//! regex-style fragments (`/test/[0-9]+/foo`) and URI templates
//! (`/users/{userId}/orders/{orderId}`, `/search/{term}/{?q,limit}`).
//!
//! ```
//! use switchyard_router::{HttpMethod, Router};
//!
//! let mut router = Router::new();
//! router
//!     .register(HttpMethod::GET, "/users/{userId}", |ctx| {
//!         format!("User: {}", ctx.attribute("userId", "unknown"))
//!     }, &[])
//!     .unwrap();
//!
//! let outcome = router.dispatch("GET", "/users/23");
//! assert_eq!(outcome.body(), "User: 23");
//! ```
//!
//! The HTTP layer itself is a collaborator: implement [`Transport`] and
//! hand it to [`Router::run`].

pub mod context;
pub mod errors;
pub mod middleware;
pub mod normalize;
pub mod routing;
pub mod testing;
pub mod transport;

pub use context::RequestContext;
pub use errors::{RouterError, RouterResult};
pub use middleware::{Middleware, MiddlewareRegistry};
pub use routing::{
    Controller, Dispatch, Handler, HttpMethod, Route, RouteDescriptor, RoutePattern, RouteTable,
    Router, UriTemplate,
};
pub use transport::Transport;

// The status vocabulary the transport contract speaks.
pub use http::StatusCode;
