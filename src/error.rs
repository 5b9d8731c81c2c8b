// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every computation in the crate.

use crate::body::Body;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Failures surfaced synchronously by the clock computations.
///
/// Nothing is recovered internally: falling back to a default appearance
/// (e.g. [`ShadowDescriptor::NIGHT`](crate::ShadowDescriptor::NIGHT) when a
/// zone cannot be resolved) is left to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// A rotation period override is zero or not finite.
    #[error("rotation period for {body} must be finite and non-zero, got {seconds} s")]
    InvalidPeriod { body: Body, seconds: f64 },

    /// The IANA identifier is not in the time-zone database.
    #[error("unknown time zone `{0}`")]
    UnknownTimeZone(String),

    /// A shadow option lies outside its accepted range.
    #[error("shadow option `{field}` is out of range: {value}")]
    InvalidOptions { field: &'static str, value: f64 },

    /// A named override key is not one of the nine known bodies.
    #[error("unknown celestial body `{0}`")]
    UnknownBody(String),

    /// The instant cannot be placed on the civil calendar.
    #[error("timestamp is outside the representable calendar range")]
    TimestampOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ClockError::InvalidPeriod {
            body: Body::Venus,
            seconds: 0.0,
        };
        assert!(err.to_string().contains("Venus"));

        let err = ClockError::UnknownTimeZone("Mars/Olympus_Mons".into());
        assert_eq!(err.to_string(), "unknown time zone `Mars/Olympus_Mons`");

        let err = ClockError::InvalidOptions {
            field: "alpha",
            value: 1.5,
        };
        assert!(err.to_string().contains("alpha"));
    }
}
