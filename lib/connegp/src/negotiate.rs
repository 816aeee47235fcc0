use crate::parser::{parse_accept, parse_accept_profile, parse_mediatype_query, parse_profile_query};
use crate::request::{
    HeaderSource, NegotiationSource, QueryParamSource, ACCEPT, ACCEPT_PROFILE, MEDIATYPE_QUERY_ARG,
    PROFILE_QUERY_ARG,
};
use crate::NegotiationError;
use connegp_model::{Profile, ProfileRegistry};
use tracing::debug;

/// The outcome of a negotiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Negotiation {
    /// The token of the selected profile. Always part of the registry.
    pub profile: String,
    /// The selected media type. Always one of the media types of the selected profile.
    pub mediatype: String,
    /// The profile candidates of all channels that were consulted, in the order they were tried.
    pub requested_profiles: Vec<String>,
    /// The media type candidates of all channels that were consulted, in the order they were tried.
    pub requested_mediatypes: Vec<String>,
}

/// Selects a profile from `registry` and one of its media types for the request.
///
/// The profile is taken from the first of the following channels that names an available
/// profile:
/// 1. the `_profile` query argument,
/// 2. the `Accept-Profile` header,
/// 3. `default_profile`.
///
/// The media type is then chosen among the media types of the selected profile from:
/// 1. the `_mediatype` query argument,
/// 2. the `Accept` header,
/// 3. the default media type of the selected profile.
///
/// A channel is only parsed if all channels before it did not decide the outcome. Hence, a
/// malformed header is only reported if it is actually consulted.
pub fn negotiate<S: NegotiationSource + ?Sized>(
    request: &S,
    registry: &ProfileRegistry,
    default_profile: &str,
) -> Result<Negotiation, NegotiationError> {
    let headers = request
        .header_source()
        .ok_or(NegotiationError::UnsupportedRequestShape("headers"))?;
    let query = request
        .query_source()
        .ok_or(NegotiationError::UnsupportedRequestShape("query arguments"))?;
    let default_profile = registry
        .get(default_profile)
        .ok_or_else(|| NegotiationError::UnknownDefaultProfile(default_profile.to_owned()))?;

    let mut requested_profiles = Vec::new();
    let profile = resolve_profile(headers, query, registry, &mut requested_profiles)?
        .unwrap_or_else(|| {
            debug!(
                profile = default_profile.token(),
                "No available profile requested, using default profile"
            );
            default_profile
        });

    let mut requested_mediatypes = Vec::new();
    let mediatype = resolve_mediatype(headers, query, profile, &mut requested_mediatypes)?
        .unwrap_or_else(|| {
            debug!(
                mediatype = profile.default_mediatype(),
                "No available media type requested, using default media type"
            );
            profile.default_mediatype()
        });

    Ok(Negotiation {
        profile: profile.token().to_owned(),
        mediatype: mediatype.to_owned(),
        requested_profiles,
        requested_mediatypes,
    })
}

fn resolve_profile<'registry>(
    headers: &dyn HeaderSource,
    query: &dyn QueryParamSource,
    registry: &'registry ProfileRegistry,
    requested: &mut Vec<String>,
) -> Result<Option<&'registry Profile>, NegotiationError> {
    let candidates = parse_profile_query(query.query_param(PROFILE_QUERY_ARG), registry)?;
    if let Some(profile) = first_available(candidates, requested, |c| registry.get(c)) {
        debug!(profile = profile.token(), "Profile selected by query argument");
        return Ok(Some(profile));
    }

    let candidates = parse_accept_profile(headers.header(ACCEPT_PROFILE), registry)?;
    if let Some(profile) = first_available(candidates, requested, |c| registry.get(c)) {
        debug!(profile = profile.token(), "Profile selected by Accept-Profile header");
        return Ok(Some(profile));
    }

    Ok(None)
}

fn resolve_mediatype<'profile>(
    headers: &dyn HeaderSource,
    query: &dyn QueryParamSource,
    profile: &'profile Profile,
    requested: &mut Vec<String>,
) -> Result<Option<&'profile str>, NegotiationError> {
    let available = move |candidate: &str| {
        profile
            .mediatypes()
            .iter()
            .find(|mediatype| *mediatype == candidate)
            .map(String::as_str)
    };

    let candidates = parse_mediatype_query(query.query_param(MEDIATYPE_QUERY_ARG));
    if let Some(mediatype) = first_available(candidates, requested, &available) {
        debug!(mediatype, "Media type selected by query argument");
        return Ok(Some(mediatype));
    }

    let candidates = parse_accept(headers.header(ACCEPT))?;
    if let Some(mediatype) = first_available(candidates, requested, &available) {
        debug!(mediatype, "Media type selected by Accept header");
        return Ok(Some(mediatype));
    }

    Ok(None)
}

/// Returns the first candidate, in order of preference, for which `lookup` finds a match.
///
/// All candidates are appended to `requested`.
fn first_available<'available, T: ?Sized + 'available>(
    candidates: Option<Vec<String>>,
    requested: &mut Vec<String>,
    lookup: impl Fn(&str) -> Option<&'available T>,
) -> Option<&'available T> {
    let candidates = candidates?;
    let found = candidates.iter().find_map(|candidate| lookup(candidate));
    requested.extend(candidates);
    found
}
