// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planetary solar days elapsed since the Unix epoch.
//!
//! For every [`Body`], the elapsed count is
//!
//! ```text
//! elapsed = seconds since 1970-01-01T00:00:00Z / rotation period (s)
//! ```
//!
//! with no rounding or clamping. Rotation is independent of the observer's
//! time zone, so only the UTC instant matters. A negative period (retrograde
//! rotation) yields a negative count.

use crate::body::Body;
use crate::error::{ClockError, Result};
use crate::format::format_elapsed;
use crate::instant::{Timestamp, UnixTime};
use crate::rotation::RotationOverrides;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Elapsed solar days for all nine bodies, in canonical order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElapsedDays {
    days: [f64; Body::COUNT],
}

impl ElapsedDays {
    /// Elapsed days for `body`.
    #[inline]
    pub fn get(&self, body: Body) -> f64 {
        self.days[body.index()]
    }

    /// `(body, days)` pairs from Mercury to Pluto.
    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        Body::ALL.into_iter().zip(self.days.iter().copied())
    }

    /// Legend text for every body, e.g. `(Mars, "11,327.25 Sol")`.
    pub fn labels(&self) -> impl Iterator<Item = (Body, String)> + '_ {
        self.iter()
            .map(|(body, days)| (body, format_elapsed(days, body.unit_label())))
    }

    /// Legend text for a single body.
    pub fn label(&self, body: Body) -> String {
        format_elapsed(self.get(body), body.unit_label())
    }
}

impl Index<Body> for ElapsedDays {
    type Output = f64;

    #[inline]
    fn index(&self, body: Body) -> &f64 {
        &self.days[body.index()]
    }
}

#[cfg(feature = "serde")]
impl Serialize for ElapsedDays {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Body::COUNT))?;
        for (body, days) in self.iter() {
            map.serialize_entry(body.name(), &days)?;
        }
        map.end()
    }
}

/// Solar days of each body elapsed between the Unix epoch and `at`.
///
/// Periods come from [`Body::rotation_period`] unless `overrides` replaces
/// them for this call.
///
/// # Errors
///
/// [`ClockError::InvalidPeriod`](crate::ClockError::InvalidPeriod) if an
/// override is zero or not finite,
/// [`ClockError::TimestampOutOfRange`](crate::ClockError::TimestampOutOfRange)
/// if `at` is not a finite number of seconds.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use planetime::{elapsed_days, Body, RotationOverrides};
///
/// let t = DateTime::from_timestamp(978_566_400, 0).unwrap(); // 2001-01-04T00:00:00Z
/// let days = elapsed_days(&t, &RotationOverrides::new()).unwrap();
/// assert_eq!(days[Body::Earth], 11_326.0);
/// ```
pub fn elapsed_days<T>(at: &T, overrides: &RotationOverrides) -> Result<ElapsedDays>
where
    T: Timestamp + ?Sized,
{
    let seconds = at.unix_seconds().value();
    if !seconds.is_finite() {
        return Err(ClockError::TimestampOutOfRange);
    }
    if !overrides.is_empty() {
        tracing::debug!(
            overridden = overrides.len(),
            "replacing default rotation periods for this call"
        );
    }

    let mut days = [0.0; Body::COUNT];
    for body in Body::ALL {
        let period = overrides.checked_period(body)?;
        days[body.index()] = seconds / period.value();
    }
    Ok(ElapsedDays { days })
}

/// [`elapsed_days`] at the host clock's current instant.
pub fn elapsed_days_now(overrides: &RotationOverrides) -> Result<ElapsedDays> {
    elapsed_days(&UnixTime::now(), overrides)
}
