//! Test doubles
//!
//! [`MockTransport`] stands in for the HTTP layer so `Router::run` can be
//! exercised end to end without a server.

use http::StatusCode;

use crate::transport::Transport;

/// In-memory transport capturing the single status + body emission.
#[derive(Debug)]
pub struct MockTransport {
    method: String,
    target: String,
    sent: Option<(StatusCode, String)>,
}

impl MockTransport {
    pub fn request<M: Into<String>, T: Into<String>>(method: M, target: T) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            sent: None,
        }
    }

    pub fn get<T: Into<String>>(target: T) -> Self {
        Self::request("GET", target)
    }

    /// Status of the emitted response. Panics if nothing was sent yet.
    pub fn status(&self) -> StatusCode {
        self.sent.as_ref().expect("no response sent").0
    }

    /// Body of the emitted response. Panics if nothing was sent yet.
    pub fn body(&self) -> &str {
        &self.sent.as_ref().expect("no response sent").1
    }

    pub fn responded(&self) -> bool {
        self.sent.is_some()
    }
}

impl Transport for MockTransport {
    fn method(&self) -> &str {
        &self.method
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn send(&mut self, status: StatusCode, body: &str) {
        assert!(self.sent.is_none(), "transport received a second response");
        self.sent = Some((status, body.to_string()));
    }
}
