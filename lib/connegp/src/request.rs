use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// The header carrying the requested media types.
pub const ACCEPT: &str = "Accept";
/// The header carrying the requested profiles.
pub const ACCEPT_PROFILE: &str = "Accept-Profile";
/// The query argument carrying the requested profiles.
pub const PROFILE_QUERY_ARG: &str = "_profile";
/// The query argument carrying the requested media types.
pub const MEDIATYPE_QUERY_ARG: &str = "_mediatype";

/// Gives access to the headers of a request.
pub trait HeaderSource {
    /// Returns the value of the header `name`. The lookup must ignore the case of `name`.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Gives access to the (already decoded) query arguments of a request.
pub trait QueryParamSource {
    /// Returns the value of the query argument `name`.
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// A request that can be negotiated.
///
/// Web frameworks integrate by implementing this trait once for their request type. Returning
/// [`None`] from any of the accessors makes the negotiation fail with
/// [`NegotiationError::UnsupportedRequestShape`](crate::NegotiationError::UnsupportedRequestShape).
pub trait NegotiationSource {
    fn header_source(&self) -> Option<&dyn HeaderSource>;

    fn query_source(&self) -> Option<&dyn QueryParamSource>;
}

impl<S: BuildHasher> QueryParamSource for HashMap<String, String, S> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// An owned, framework-independent copy of the parts of a request that take part in the
/// negotiation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    /// Keyed by the lower-cased header name.
    headers: FxHashMap<String, String>,
    query: FxHashMap<String, String>,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header `name`, replacing any value set before under any casing of `name`.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

impl HeaderSource for RequestSnapshot {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl QueryParamSource for RequestSnapshot {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

impl NegotiationSource for RequestSnapshot {
    fn header_source(&self) -> Option<&dyn HeaderSource> {
        Some(self)
    }

    fn query_source(&self) -> Option<&dyn QueryParamSource> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let request = RequestSnapshot::new().with_header("accept-profile", "<http://example.com/a>");
        assert_eq!(
            request.header(ACCEPT_PROFILE),
            Some("<http://example.com/a>")
        );
        assert_eq!(
            request.header("ACCEPT-PROFILE"),
            Some("<http://example.com/a>")
        );
        assert_eq!(request.header(ACCEPT), None);
    }

    #[test]
    fn header_is_replaced_regardless_of_case() {
        let request = RequestSnapshot::new()
            .with_header("Accept", "text/html")
            .with_header("ACCEPT", "text/turtle");
        assert_eq!(request.header("accept"), Some("text/turtle"));
    }

    #[test]
    fn query_lookup_is_exact() {
        let request = RequestSnapshot::new().with_query_param(PROFILE_QUERY_ARG, "dcat");
        assert_eq!(request.query_param("_profile"), Some("dcat"));
        assert_eq!(request.query_param("_PROFILE"), None);
    }

    #[test]
    fn hash_map_is_a_query_source() {
        let mut query = HashMap::new();
        query.insert(MEDIATYPE_QUERY_ARG.to_owned(), "text/turtle".to_owned());
        assert_eq!(query.query_param(MEDIATYPE_QUERY_ARG), Some("text/turtle"));
    }
}
