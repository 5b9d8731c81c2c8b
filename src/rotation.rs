// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-call replacement of tabulated rotation periods.

use crate::body::Body;
use crate::error::{ClockError, Result};
use qtty::Seconds;
use std::collections::BTreeMap;

/// A partial mapping from [`Body`] to a rotation period that replaces the
/// compiled-in default for a single computation.
///
/// Overrides are plain values passed by the caller; the default table is
/// never mutated. A negative period is accepted and models retrograde
/// rotation:
///
/// ```
/// use planetime::{Body, RotationOverrides};
///
/// let retrograde = RotationOverrides::new().with(Body::Venus, -Body::Venus.rotation_period().value());
/// assert!(retrograde.period(Body::Venus).value() < 0.0);
/// assert_eq!(retrograde.period(Body::Earth), Body::Earth.rotation_period());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "BTreeMap<String, f64>")
)]
pub struct RotationOverrides {
    periods: BTreeMap<Body, Seconds>,
}

impl RotationOverrides {
    /// No overrides: every body uses its default period.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RotationOverrides::set`].
    pub fn with(mut self, body: Body, seconds: f64) -> Self {
        self.set(body, Seconds::new(seconds));
        self
    }

    /// Replace the period of `body`, returning the previous override if any.
    pub fn set(&mut self, body: Body, period: Seconds) -> Option<Seconds> {
        self.periods.insert(body, period)
    }

    /// Drop the override for `body`, restoring its default.
    pub fn remove(&mut self, body: Body) -> Option<Seconds> {
        self.periods.remove(&body)
    }

    /// Build from string-keyed pairs, e.g. parsed configuration.
    ///
    /// Keys must be canonical body names; anything else fails with
    /// [`ClockError::UnknownBody`]. Later duplicates win.
    pub fn from_named<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut overrides = Self::new();
        for (name, seconds) in entries {
            overrides.set(name.parse()?, Seconds::new(seconds));
        }
        Ok(overrides)
    }

    /// The override for `body`, if one was supplied.
    #[inline]
    pub fn get(&self, body: Body) -> Option<Seconds> {
        self.periods.get(&body).copied()
    }

    /// The period in effect for `body`: the override, else the default.
    #[inline]
    pub fn period(&self, body: Body) -> Seconds {
        self.get(body).unwrap_or_else(|| body.rotation_period())
    }

    /// The period in effect for `body`, rejecting zero and non-finite values.
    pub fn checked_period(&self, body: Body) -> Result<Seconds> {
        let period = self.period(body);
        let seconds = period.value();
        if seconds == 0.0 || !seconds.is_finite() {
            return Err(ClockError::InvalidPeriod { body, seconds });
        }
        Ok(period)
    }

    /// `true` when every body uses its default period.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Number of overridden bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Overridden bodies and their periods, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, Seconds)> + '_ {
        self.periods.iter().map(|(body, period)| (*body, *period))
    }
}

impl TryFrom<BTreeMap<String, f64>> for RotationOverrides {
    type Error = ClockError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        Self::from_named(map.iter().map(|(name, seconds)| (name.as_str(), *seconds)))
    }
}

impl FromIterator<(Body, Seconds)> for RotationOverrides {
    fn from_iter<I: IntoIterator<Item = (Body, Seconds)>>(iter: I) -> Self {
        Self {
            periods: iter.into_iter().collect(),
        }
    }
}
