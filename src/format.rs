// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Display formatting for elapsed-day counts.
//!
//! Numbers follow the en-US "standard" notation: integer digits grouped in
//! thousands with `,`, at most three fraction digits, trailing fraction zeros
//! dropped. Rounding applies to the exact decimal value of the `f64`, half
//! away from zero.

/// Fraction digits kept by [`format_grouped`].
const FRACTION_DIGITS: usize = 3;

/// Below this magnitude a sixteenth-aligned value scaled by 1000 is exact.
const EXACT_TIE_LIMIT: f64 = 1e12;

/// Format `value` with thousands separators.
///
/// ```
/// use planetime::format_grouped;
///
/// assert_eq!(format_grouped(1_234_567.891_2), "1,234,567.891");
/// assert_eq!(format_grouped(-20_000.5), "-20,000.5");
/// assert_eq!(format_grouped(12.0), "12");
/// ```
///
/// Non-finite input renders as `NaN`, `∞` or `-∞`. A negative value that
/// rounds to zero renders as `-0`.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let fixed = fixed_point(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// `magnitude` with exactly [`FRACTION_DIGITS`] decimals.
///
/// `{:.3}` rounds the exact binary value but breaks exact ties (`x.0625`,
/// `x.1875`, ...) to even; those go through the scaled path, which is exact
/// for them and rounds half away from zero.
fn fixed_point(magnitude: f64) -> String {
    let sixteenths = magnitude * 16.0;
    let is_tie = magnitude < EXACT_TIE_LIMIT
        && sixteenths.fract() == 0.0
        && (sixteenths as u64) % 2 == 1;
    if is_tie {
        let scaled = (magnitude * 1000.0).round() as u64;
        format!("{}.{:03}", scaled / 1000, scaled % 1000)
    } else {
        format!("{magnitude:.prec$}", prec = FRACTION_DIGITS)
    }
}

/// Legend text for one body: `"{grouped days} {unit}"`.
///
/// The unit label is copied verbatim.
///
/// ```
/// use planetime::{format_elapsed, Body};
///
/// assert_eq!(format_elapsed(11_327.25, Body::Mars.unit_label()), "11,327.25 Sol");
/// ```
pub fn format_elapsed(days: f64, unit: &str) -> String {
    format!("{} {unit}", format_grouped(days))
}

/// Insert `,` every three digits from the right of an ASCII digit string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
