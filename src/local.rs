// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time of day in an IANA time zone.
//!
//! Zone resolution is delegated to the `chrono-tz` database; the rest of the
//! crate only consumes the resulting hour, minute and second.

use crate::error::{ClockError, Result};
use crate::instant::Timestamp;
use chrono::Timelike;
use chrono_tz::Tz;
use std::f64::consts::TAU;

/// Hour (0–23), minute and second of a local wall clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    /// Hour on the 24-hour clock, `0..24`.
    pub hour: u32,
    /// Minute, `0..60`.
    pub minute: u32,
    /// Second, `0..60`.
    pub second: u32,
}

impl LocalTime {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// Local noon, `12:00:00`.
    pub const NOON: Self = Self::new(12, 0, 0);

    /// Create from raw components. Values are not range-checked.
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Wall-clock time of `at` in the zone named `time_zone`.
    ///
    /// ```
    /// use chrono::DateTime;
    /// use planetime::LocalTime;
    ///
    /// let t = DateTime::from_timestamp(0, 0).unwrap();
    /// let local = LocalTime::resolve(&t, "Asia/Kolkata").unwrap();
    /// assert_eq!(local, LocalTime::new(5, 30, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ClockError::UnknownTimeZone`] if the identifier is not in the
    /// database, [`ClockError::TimestampOutOfRange`] if the instant has no
    /// calendar representation.
    pub fn resolve<T>(at: &T, time_zone: &str) -> Result<Self>
    where
        T: Timestamp + ?Sized,
    {
        let tz = parse_time_zone(time_zone)?;
        let utc = at.to_utc().ok_or(ClockError::TimestampOutOfRange)?;
        let local = utc.with_timezone(&tz);
        let resolved = Self::new(local.hour(), local.minute(), local.second());
        tracing::trace!(time_zone, ?resolved, "resolved local time");
        Ok(resolved)
    }

    /// Fraction of the local day elapsed: `(H + M/60 + S/3600) / 24`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0) / 24.0
    }

    /// `true` from 06:00:00 inclusive to 18:00:00 exclusive.
    #[inline]
    pub const fn is_daytime(&self) -> bool {
        self.hour >= 6 && self.hour < 18
    }
}

/// Look up an IANA identifier such as `"Asia/Kolkata"`.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimeZone(name.to_owned()))
}

/// Direction of the light source for the dial overlay, in degrees `[0, 360)`.
///
/// `degrees(day_fraction · 2π + π/2) mod 360`: midnight is 90°, 06:00 is
/// 180°, local noon is 270°.
pub fn light_angle(local: LocalTime) -> f64 {
    let radians = local.day_fraction() * TAU + TAU / 4.0;
    radians.to_degrees().rem_euclid(360.0)
}

/// [`light_angle`] for an instant in a named zone.
pub fn light_angle_for<T>(at: &T, time_zone: &str) -> Result<f64>
where
    T: Timestamp + ?Sized,
{
    Ok(light_angle(LocalTime::resolve(at, time_zone)?))
}

/// Rotation of the three dial parts, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandAngles {
    /// `H · 30 − 15`, with `H` on the 24-hour clock.
    pub hour: f64,
    /// `M / 60 · 360`.
    pub minute: f64,
    /// `S / 60 · 360`.
    pub second: f64,
}

impl HandAngles {
    /// Angles for the dial showing `local`.
    pub fn from_local(local: LocalTime) -> Self {
        Self {
            hour: local.hour as f64 * 30.0 - 15.0,
            minute: local.minute as f64 / 60.0 * 360.0,
            second: local.second as f64 / 60.0 * 360.0,
        }
    }
}
