//! Parsers for the four channels a client can express its preferences through.
//!
//! Each parser turns the raw value of its channel into candidates ordered from most to least
//! preferred. [`None`] means that the channel expressed no usable preference.

mod mediatype;
mod profile;
mod weight;

pub use mediatype::{parse_accept, parse_mediatype_query};
pub use profile::{parse_accept_profile, parse_profile_query};

use std::cmp::Ordering;

/// A candidate value together with the weight (`q`) it was requested with.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Weighted<'input> {
    value: &'input str,
    weight: f64,
}

/// Sorts `candidates` by descending weight. Candidates with equal weights keep their order.
fn sort_by_weight(candidates: &mut [Weighted<'_>]) {
    candidates.sort_by(|lhs, rhs| compare_weights(rhs.weight, lhs.weight));
}

/// Compares weights by value, so `-0` and `0` are equal. Weights are never NaN.
fn compare_weights(lhs: f64, rhs: f64) -> Ordering {
    lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
}

/// Splits `input` at every comma that is not enclosed in angle brackets.
///
/// The scan tracks a single "inside brackets" flag: `<` sets it and `>` clears it, nesting is not
/// tracked.
fn split_outside_angle_brackets(input: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut within_brackets = false;
    let mut start = 0;
    for (index, c) in input.char_indices() {
        match c {
            '<' => within_brackets = true,
            '>' => within_brackets = false,
            ',' if !within_brackets => {
                entries.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&input[start..]);
    entries
}

/// Splits an entry into its value and its parameters at the first `;` outside angle brackets.
fn split_parameters(entry: &str) -> (&str, Option<&str>) {
    let mut within_brackets = false;
    for (index, c) in entry.char_indices() {
        match c {
            '<' => within_brackets = true,
            '>' => within_brackets = false,
            ';' if !within_brackets => return (&entry[..index], Some(&entry[index + 1..])),
            _ => {}
        }
    }
    (entry, None)
}
