use crate::error::ConnegpServerError;
use anyhow::anyhow;
use axum::http::header::{CONTENT_TYPE, LINK};
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};
use connegp::Negotiation;
use connegp_model::ProfileRegistry;
use headers::{AccessControlAllowOrigin, HeaderMapExt};

/// The header that names the profile a response conforms to.
pub const CONTENT_PROFILE: HeaderName = HeaderName::from_static("content-profile");

/// The class of profiles in the W3C Profiles Vocabulary.
const PROF_PROFILE: &str = "http://www.w3.org/ns/dx/prof/Profile";

/// The response headers of a negotiated representation.
///
/// Besides the `Content-Type` and `Content-Profile`, the `Link` header lists the selected
/// profile, all profiles with their tokens, and one link per profile and media type the resource
/// is available in. The link of the selected representation has `rel="self"`, all others
/// `rel="alternate"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileHeaders {
    content_type: String,
    content_profile: String,
    link: String,
}

impl ProfileHeaders {
    /// Creates the headers for the representation of the resource `resource_iri` that was
    /// selected by `negotiation`.
    pub fn new(negotiation: &Negotiation, registry: &ProfileRegistry, resource_iri: &str) -> Self {
        let profile_uri = registry
            .get(&negotiation.profile)
            .map(|profile| profile.uri())
            .unwrap_or_default();

        let mut links = vec![format!("<{profile_uri}>; rel=\"profile\"")];
        for profile in registry {
            links.push(format!(
                "<{PROF_PROFILE}>; rel=\"type\"; token=\"{}\"; anchor=<{}>",
                profile.token(),
                profile.uri()
            ));
        }
        for profile in registry {
            for mediatype in profile.mediatypes() {
                let rel = if profile.token() == negotiation.profile
                    && *mediatype == negotiation.mediatype
                {
                    "self"
                } else {
                    "alternate"
                };
                links.push(format!(
                    "<{resource_iri}?_profile={}&_mediatype={mediatype}>; rel=\"{rel}\"; type=\"{mediatype}\"; profile=\"{}\"",
                    profile.token(),
                    profile.uri()
                ));
            }
        }

        Self {
            content_type: negotiation.mediatype.clone(),
            content_profile: format!("<{profile_uri}>"),
            link: links.join(", "),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content_profile(&self) -> &str {
        &self.content_profile
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

impl IntoResponseParts for ProfileHeaders {
    type Error = ConnegpServerError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let headers = res.headers_mut();
        headers.insert(CONTENT_TYPE, header_value(self.content_type)?);
        headers.insert(CONTENT_PROFILE, header_value(self.content_profile)?);
        headers.insert(LINK, header_value(self.link)?);
        headers.typed_insert(AccessControlAllowOrigin::ANY);
        Ok(res)
    }
}

fn header_value(value: String) -> Result<HeaderValue, ConnegpServerError> {
    HeaderValue::try_from(value)
        .map_err(|e| ConnegpServerError::Internal(anyhow!("Invalid response header: {e}")))
}
