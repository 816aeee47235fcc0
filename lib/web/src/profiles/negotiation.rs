use crate::error::ConnegpServerError;
use crate::AppState;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use connegp::{
    negotiate, HeaderSource, Negotiation, NegotiationSource, QueryParamSource,
};
use std::collections::HashMap;

/// Exposes the headers and the decoded query arguments of an axum request to the negotiation.
pub struct AxumNegotiationRequest<'parts> {
    headers: &'parts HeaderMap,
    query: HashMap<String, String>,
}

impl<'parts> AxumNegotiationRequest<'parts> {
    pub fn try_from_parts(parts: &'parts Parts) -> Result<Self, ConnegpServerError> {
        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| ConnegpServerError::BadRequest(e.body_text()))?;
        Ok(Self {
            headers: &parts.headers,
            query,
        })
    }
}

impl HeaderSource for AxumNegotiationRequest<'_> {
    /// Header values that are not visible ASCII are treated as absent.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl QueryParamSource for AxumNegotiationRequest<'_> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.query_param(name)
    }
}

impl NegotiationSource for AxumNegotiationRequest<'_> {
    fn header_source(&self) -> Option<&dyn HeaderSource> {
        Some(self)
    }

    fn query_source(&self) -> Option<&dyn QueryParamSource> {
        Some(self)
    }
}

/// The profile and media type negotiated for a request.
#[derive(Clone, Debug)]
pub struct Negotiated(pub Negotiation);

/// Handles the content negotiation by profile against the profiles of the server.
impl FromRequestParts<AppState> for Negotiated {
    type Rejection = ConnegpServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request = AxumNegotiationRequest::try_from_parts(parts)?;
        let negotiation = negotiate(&request, state.registry(), state.default_profile())?;
        tracing::debug!(
            profile = negotiation.profile.as_str(),
            mediatype = negotiation.mediatype.as_str(),
            "Negotiated representation"
        );
        Ok(Self(negotiation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn query_arguments_are_decoded() {
        let parts = parts(
            "/profiles?_profile=%3Chttps%3A%2F%2Fwww.w3.org%2FTR%2Fvocab-dcat%2F%3E&_mediatype=application/ld+json",
            &[],
        );
        let request = AxumNegotiationRequest::try_from_parts(&parts).unwrap();
        assert_eq!(
            request.query_param("_profile"),
            Some("<https://www.w3.org/TR/vocab-dcat/>")
        );
        assert_eq!(
            request.query_param("_mediatype"),
            Some("application/ld json")
        );
    }

    #[test]
    fn headers_are_case_insensitive() {
        let parts = parts("/profiles", &[("Accept-Profile", "<http://example.com/p>")]);
        let request = AxumNegotiationRequest::try_from_parts(&parts).unwrap();
        assert_eq!(
            request.header("accept-profile"),
            Some("<http://example.com/p>")
        );
        assert_eq!(request.header("ACCEPT"), None);
    }
}
