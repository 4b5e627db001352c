//! Transport collaborator contract
//!
//! The router does not own a socket. An external HTTP layer supplies the
//! request's method and raw target (path plus optional query string) and
//! accepts back exactly one status code and body per dispatch.

use http::StatusCode;

/// The external HTTP layer the router reads from and writes to.
pub trait Transport {
    /// The request's HTTP verb, as received on the wire.
    fn method(&self) -> &str;

    /// The raw request target: path, optionally followed by `?query`.
    fn target(&self) -> &str;

    /// Emit the dispatch outcome. Called exactly once per request.
    fn send(&mut self, status: StatusCode, body: &str);
}
