//! Request-path routing
//!
//! This module provides the matching-and-dispatch engine:
//! - Compile-once route patterns with two syntaxes (regex fragments and
//!   URI templates)
//! - Method-bucketed, insertion-ordered route table (first match wins)
//! - Descriptor-driven controller registration
//! - The dispatch state machine and its three terminal outcomes

pub mod pattern;
pub mod registrar;
pub mod router;
pub mod table;
pub mod template;

pub use pattern::RoutePattern;
pub use registrar::{Controller, RouteDescriptor};
pub use router::{Dispatch, Router};
pub use table::{Handler, Route, RouteTable};
pub use template::UriTemplate;

use serde::{Deserialize, Serialize};

/// HTTP methods the route table keeps buckets for.
///
/// Requests carrying any other verb terminate in the unsupported-method
/// outcome before pattern matching is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    PUT,
    POST,
    DELETE,
}

impl HttpMethod {
    /// Every supported method, in bucket order.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::GET,
        HttpMethod::PUT,
        HttpMethod::POST,
        HttpMethod::DELETE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::PUT => "PUT",
            HttpMethod::POST => "POST",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Parse a verb, case-insensitively. `None` means the router has no
    /// bucket for it.
    pub fn parse(verb: &str) -> Option<Self> {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "PUT" => Some(HttpMethod::PUT),
            "POST" => Some(HttpMethod::POST),
            "DELETE" => Some(HttpMethod::DELETE),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("Delete"), Some(HttpMethod::DELETE));
        assert_eq!(HttpMethod::parse("PUT"), Some(HttpMethod::PUT));
    }

    #[test]
    fn unsupported_verbs_have_no_bucket() {
        assert_eq!(HttpMethod::parse("HEAD"), None);
        assert_eq!(HttpMethod::parse("PATCH"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(HttpMethod::POST.to_string(), "POST");
    }
}
