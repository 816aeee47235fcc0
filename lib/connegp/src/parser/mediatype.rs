use crate::parser::compare_weights;
use crate::parser::weight::{parse_accept_weight, DEFAULT_WEIGHT};
use crate::NegotiationError;
use std::borrow::Cow;
use tracing::warn;

/// Parses the value of the `_mediatype` query argument into media types.
///
/// The value is a comma-separated list in order of preference. Spaces are turned back into `+`
/// as query decoding turns the `+` of subtypes like `ld+json` into a space.
pub fn parse_mediatype_query(value: Option<&str>) -> Option<Vec<String>> {
    let value = value?;
    Some(
        value
            .replace(' ', "+")
            .split(',')
            .map(str::to_owned)
            .collect(),
    )
}

/// Parses the value of the `Accept` header into media types, most preferred first.
///
/// Entries are ordered by descending weight and, for equal weights, by descending media type.
/// Media-type parameters other than the weight are discarded.
pub fn parse_accept(value: Option<&str>) -> Result<Option<Vec<String>>, NegotiationError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut candidates = Vec::new();
    for entry in strip_version_hint(value).split(',') {
        let entry = entry.trim();
        let weight = if entry.contains(";q=") {
            parse_accept_weight(entry).map_err(|error| {
                warn!(value, "Malformed Accept header");
                NegotiationError::MalformedAccept(error.to_string())
            })?
        } else {
            DEFAULT_WEIGHT
        };
        let mediatype = entry.split(';').next().unwrap_or_default().trim_end();
        candidates.push((weight, mediatype.to_owned()));
    }
    candidates.sort_by(|(lhs_weight, lhs_type), (rhs_weight, rhs_type)| {
        compare_weights(*rhs_weight, *lhs_weight).then_with(|| rhs_type.cmp(lhs_type))
    });

    Ok(Some(
        candidates
            .into_iter()
            .map(|(_, mediatype)| mediatype)
            .collect(),
    ))
}

/// Removes the `v=...;` segment some browsers inject into their `Accept` header
/// (e.g., `application/signed-exchange;v=b3;q=0.9`).
///
/// The segment reaches from the first `v=` to the last `;` after it.
fn strip_version_hint(value: &str) -> Cow<'_, str> {
    let Some(start) = value.find("v=") else {
        return Cow::Borrowed(value);
    };
    match value[start..].rfind(';') {
        Some(end) => {
            let end = start + end + 1;
            Cow::Owned(format!("{}{}", &value[..start], &value[end..]))
        }
        None => Cow::Borrowed(value),
    }
}
