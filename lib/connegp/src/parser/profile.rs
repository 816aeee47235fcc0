use crate::parser::weight::{parse_profile_weight, DEFAULT_WEIGHT};
use crate::parser::{sort_by_weight, split_outside_angle_brackets, split_parameters, Weighted};
use crate::NegotiationError;
use connegp_model::ProfileRegistry;
use tracing::{debug, warn};

/// Characters removed around the URI of an entry.
const URI_DELIMITERS: [char; 4] = ['<', '>', ' ', '"'];

/// Parses the value of the `_profile` query argument into profile tokens.
///
/// The value is a comma-separated list of tokens (`dcat`) or bracketed URIs
/// (`<https://www.w3.org/TR/vocab-dcat/>`), each optionally followed by a weight (`;q=0.5`).
/// Commas within angle brackets do not separate entries. Bracketed URIs are resolved to the token
/// of the registered profile with that URI and dropped if there is none. Tokens are passed on
/// without checking them against the registry.
///
/// An entry that names a URI without enclosing it in angle brackets invalidates the whole value,
/// in which case [`None`] is returned. A malformed weight is an error.
pub fn parse_profile_query(
    value: Option<&str>,
    registry: &ProfileRegistry,
) -> Result<Option<Vec<String>>, NegotiationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut candidates = Vec::new();
    for entry in split_outside_angle_brackets(value) {
        let (candidate, parameters) = split_parameters(entry.trim());
        if names_uri(candidate) && !is_bracketed(candidate) {
            debug!(
                entry,
                "Ignoring the _profile query argument as it contains an unbracketed URI"
            );
            return Ok(None);
        }

        let weight = match parameters {
            None => DEFAULT_WEIGHT,
            Some(parameters) => parse_profile_weight(parameters).map_err(|error| {
                warn!(value, "Malformed weight in _profile query argument");
                NegotiationError::MalformedProfileArgument(error.to_string())
            })?,
        };
        candidates.push(Weighted {
            value: candidate.trim(),
            weight,
        });
    }
    sort_by_weight(&mut candidates);

    let tokens = candidates
        .into_iter()
        .filter_map(|candidate| {
            if candidate.value.starts_with('<') {
                let uri = candidate.value.trim_matches(URI_DELIMITERS);
                registry.token_for_uri(uri).map(str::to_owned)
            } else {
                let token = candidate.value.trim_matches('"');
                (!token.is_empty()).then(|| token.to_owned())
            }
        })
        .collect::<Vec<_>>();
    Ok((!tokens.is_empty()).then_some(tokens))
}

/// Parses the value of the `Accept-Profile` header into profile tokens.
///
/// The header is a list of bracketed URIs with optional weights, e.g.,
/// `<https://www.w3.org/TR/skos-reference/>;q=1.0,<https://www.w3.org/TR/vocab-dcat/>;q=0.8`.
/// Entries are only separated at commas that are followed (after optional spaces) by `<`, so a
/// comma within a URI does not split it. URIs that do not belong to a registered profile are
/// dropped.
pub fn parse_accept_profile(
    value: Option<&str>,
    registry: &ProfileRegistry,
) -> Result<Option<Vec<String>>, NegotiationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut candidates = Vec::new();
    for entry in split_before_bracketed_entries(value) {
        let (uri, parameters) = split_parameters(entry);
        let weight = match parameters {
            None => DEFAULT_WEIGHT,
            Some(parameters) => parse_profile_weight(parameters).map_err(|error| {
                warn!(value, "Malformed Accept-Profile header");
                NegotiationError::MalformedAcceptProfile(error.to_string())
            })?,
        };
        candidates.push(Weighted {
            value: uri.trim_matches(URI_DELIMITERS),
            weight,
        });
    }
    sort_by_weight(&mut candidates);

    let tokens = candidates
        .into_iter()
        .filter_map(|candidate| registry.token_for_uri(candidate.value))
        .map(str::to_owned)
        .collect::<Vec<_>>();
    Ok((!tokens.is_empty()).then_some(tokens))
}

/// Checks whether an entry refers to a profile by an HTTP(S) URI or a URN.
fn names_uri(entry: &str) -> bool {
    ["http:", "https:", "urn:"]
        .iter()
        .any(|scheme| entry.contains(scheme))
}

fn is_bracketed(entry: &str) -> bool {
    entry.starts_with('<') && entry.contains('>')
}

/// Splits `input` at every comma that is followed by optional spaces and a `<`.
///
/// The separator, including the `<`, is not part of the returned entries.
fn split_before_bracketed_entries(input: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut search_from = 0;
    while let Some(offset) = input[search_from..].find(',') {
        let comma = search_from + offset;
        let after_spaces = input[comma + 1..].trim_start_matches(' ');
        let next = input.len() - after_spaces.len();
        if after_spaces.starts_with('<') {
            entries.push(&input[start..comma]);
            start = next + 1;
            search_from = start;
        } else {
            search_from = comma + 1;
        }
    }
    entries.push(&input[start..]);
    entries
}
