// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants accepted by the clock computations.
//!
//! Every computation in this crate is a pure function of an instant. The
//! [`Timestamp`] trait is the seam: anything that can report its distance
//! from the Unix epoch (UTC, no zone adjustment) and, when representable, a
//! `chrono::DateTime<Utc>` can be fed in.
//!
//! Implementations are provided for:
//!
//! - `chrono::DateTime<Tz>` for any [`TimeZone`],
//! - [`std::time::SystemTime`],
//! - [`UnixTime`], a plain count of seconds since 1970-01-01T00:00:00Z.

use chrono::{DateTime, TimeZone, Utc};
use qtty::Seconds;
use std::time::{SystemTime, UNIX_EPOCH};

// ═══════════════════════════════════════════════════════════════════════════
// Timestamp trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
pub trait Timestamp {
    /// Signed seconds elapsed since the Unix epoch, sub-second precision kept.
    fn unix_seconds(&self) -> Seconds;

    /// Convert this instant to a UTC calendar date-time.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    fn to_utc(&self) -> Option<DateTime<Utc>>;
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    #[inline]
    fn unix_seconds(&self) -> Seconds {
        Seconds::new(self.timestamp() as f64 + self.timestamp_subsec_nanos() as f64 / 1e9)
    }

    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(self.with_timezone(&Utc))
    }
}

impl Timestamp for SystemTime {
    fn unix_seconds(&self) -> Seconds {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => Seconds::new(after.as_secs_f64()),
            Err(before) => Seconds::new(-before.duration().as_secs_f64()),
        }
    }

    fn to_utc(&self) -> Option<DateTime<Utc>> {
        UnixTime::from(*self).to_utc()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UnixTime
// ═══════════════════════════════════════════════════════════════════════════

/// Seconds since 1970-01-01T00:00:00Z.
///
/// ```
/// use planetime::{Timestamp, UnixTime};
///
/// let t = UnixTime::new(86_400.0);
/// assert_eq!(t.to_utc().unwrap().to_rfc3339(), "1970-01-02T00:00:00+00:00");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime(Seconds);

impl UnixTime {
    /// The Unix epoch itself.
    pub const EPOCH: Self = Self::new(0.0);

    /// Create from a raw count of seconds.
    #[inline]
    pub const fn new(seconds: f64) -> Self {
        Self(Seconds::new(seconds))
    }

    /// Create from a [`Seconds`] quantity.
    #[inline]
    pub const fn from_seconds(seconds: Seconds) -> Self {
        Self(seconds)
    }

    /// The current instant according to the host clock.
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// The underlying quantity in seconds.
    #[inline]
    pub const fn quantity(&self) -> Seconds {
        self.0
    }

    /// The underlying scalar value in seconds.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

impl Timestamp for UnixTime {
    #[inline]
    fn unix_seconds(&self) -> Seconds {
        self.0
    }

    fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = self.value();
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor();
        // Saturating casts land outside chrono's range and yield `None`.
        let nanos = ((seconds - secs) * 1e9).min(999_999_999.0) as u32;
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }
}

impl From<SystemTime> for UnixTime {
    fn from(time: SystemTime) -> Self {
        Self(time.unix_seconds())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for UnixTime {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.unix_seconds())
    }
}

impl From<Seconds> for UnixTime {
    #[inline]
    fn from(seconds: Seconds) -> Self {
        Self(seconds)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::time::Duration;

    #[test]
    fn epoch_is_zero_seconds() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(epoch.unix_seconds(), Seconds::new(0.0));
        assert_eq!(UnixTime::EPOCH.unix_seconds(), Seconds::new(0.0));
        assert_eq!(UNIX_EPOCH.unix_seconds(), Seconds::new(0.0));
    }

    #[test]
    fn datetime_keeps_subsecond_precision() {
        let dt = DateTime::from_timestamp(946_684_800, 250_000_000).unwrap();
        assert_eq!(dt.unix_seconds(), Seconds::new(946_684_800.25));
    }

    #[test]
    fn zone_offset_does_not_change_the_instant() {
        let utc = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let kolkata = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = utc.with_timezone(&kolkata);
        assert_eq!(local.unix_seconds(), utc.unix_seconds());
        assert_eq!(Timestamp::to_utc(&local), Some(utc));
    }

    #[test]
    fn system_time_before_epoch_is_negative() {
        let before = UNIX_EPOCH - Duration::from_secs(90);
        assert_eq!(before.unix_seconds(), Seconds::new(-90.0));
    }

    #[test]
    fn unix_time_utc_roundtrip() {
        let t = UnixTime::new(1_000_000_000.5);
        let utc = t.to_utc().expect("to_utc");
        assert_eq!(utc.timestamp(), 1_000_000_000);
        assert_eq!(utc.timestamp_subsec_nanos(), 500_000_000);
        assert_eq!(UnixTime::from(utc), t);
    }

    #[test]
    fn unix_time_before_epoch_floors() {
        let utc = UnixTime::new(-1.5).to_utc().expect("to_utc");
        assert_eq!(utc.timestamp(), -2);
        assert_eq!(utc.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn unrepresentable_unix_time_has_no_utc() {
        assert_eq!(UnixTime::new(f64::NAN).to_utc(), None);
        assert_eq!(UnixTime::new(1e300).to_utc(), None);
    }

    #[test]
    fn unix_time_ordering() {
        assert!(UnixTime::new(1.0) < UnixTime::new(2.0));
        assert_eq!(UnixTime::from(Seconds::new(3.0)).value(), 3.0);
    }
}
