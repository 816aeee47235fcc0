use thiserror::Error;

/// The weight of a candidate that was requested without a `q` parameter.
pub(super) const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid weight in '{0}'")]
pub(super) struct WeightError(String);

/// Parses the weight from the parameter section of a profile entry (e.g., `q=0.8`).
///
/// The weight is the text between the first and the second `=`. The parameter name is not
/// checked.
pub(super) fn parse_profile_weight(parameters: &str) -> Result<f64, WeightError> {
    let value = parameters
        .split('=')
        .nth(1)
        .ok_or_else(|| WeightError(parameters.to_owned()))?;
    parse_float(value).ok_or_else(|| WeightError(parameters.to_owned()))
}

/// Parses the weight from an `Accept` entry that is known to contain `;q=`.
///
/// The weight is the first parameter of the entry with every `q=` removed. Hence, a weight that
/// is not the first parameter (e.g., `text/html;level=1;q=0.5`) is rejected.
pub(super) fn parse_accept_weight(entry: &str) -> Result<f64, WeightError> {
    let first_parameter = entry.split(';').nth(1).unwrap_or_default();
    parse_float(&first_parameter.replace("q=", "")).ok_or_else(|| WeightError(entry.to_owned()))
}

fn parse_float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| !weight.is_nan())
}
