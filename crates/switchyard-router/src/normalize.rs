//! Path and query canonicalization
//!
//! Every route string and every request path go through the same
//! trailing-slash rule before they are compared, so `/get` and `/get/`
//! name the same route. Query values are percent-decoded and then
//! entity-encoded before anything else sees them.

use std::collections::HashMap;

/// Canonicalize a route or request path.
///
/// Appends a single trailing `/` when the path is longer than one
/// character, does not already end with `/`, and contains no literal `?`.
/// Query-bearing strings (regex quantifiers, `{?...}` template tokens)
/// bypass slash appending.
pub fn normalize_route(route: &str) -> String {
    if route.len() > 1 && !route.ends_with('/') && !route.contains('?') {
        let mut normalized = String::with_capacity(route.len() + 1);
        normalized.push_str(route);
        normalized.push('/');
        normalized
    } else {
        route.to_string()
    }
}

/// Split a request target into its path and query portions.
///
/// The query portion excludes the `?` itself and is empty when absent.
pub fn split_target(target: &str) -> (&str, &str) {
    match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    }
}

/// HTML-entity encode a scalar value.
///
/// Encodes `&`, `<`, `>`, `"` and `'`. The decimal `&#039;` form for
/// single quotes is load-bearing, handlers echo these values verbatim.
pub fn sanitize(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#039;"),
            _ => encoded.push(c),
        }
    }
    encoded
}

/// Parse a raw query string into a name -> sanitized scalar map.
///
/// Non-scalar inputs (array-style `name[]` keys, or a name that repeats)
/// normalize to the empty string rather than an error.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    let mut params: HashMap<String, String> = HashMap::new();

    for (name, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match name.strip_suffix("[]") {
            Some(stripped) => {
                params.insert(stripped.to_string(), String::new());
            }
            None => {
                let name = name.into_owned();
                if params.contains_key(&name) {
                    params.insert(name, String::new());
                } else {
                    params.insert(name, sanitize(&value));
                }
            }
        }
    }

    params
}
