// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day directional shadow.
//!
//! The dial casts a two-layer shadow (a hard inner layer and a soft outer
//! layer) whose direction, length, blur and opacity follow a synthetic sun.
//!
//! # Daytime (06:00 ≤ local time < 18:00)
//!
//! With `f` the [day fraction](LocalTime::day_fraction):
//!
//! ```text
//! light    = f·2π + π/2          (noon: light from the top)
//! shadow   = light + π           (dx, dy) = (cos shadow, sin shadow)
//! daylight = max(0, sin(π·f))    1 at noon
//! len      = minLen  + (maxLen  − minLen)  · (1 − daylight)
//! blur     = minBlur + (maxBlur − minBlur) · (1 − 0.6·daylight)
//! alpha    = alpha   · (0.25 + 0.75·(1 − daylight))
//! ```
//!
//! Offsets are `(dx·len, dy·len)` in image coordinates (+x right, +y down),
//! rounded to two decimals; `alpha` is rounded to three. The hard layer uses
//! `round(blur / 2)`, the soft layer `round(blur)` and `0.7 · alpha`.
//!
//! # Night
//!
//! Outside that window the fixed [`ShadowDescriptor::NIGHT`] is returned
//! regardless of the options.

use crate::error::{ClockError, Result};
use crate::instant::{Timestamp, UnixTime};
use crate::local::LocalTime;
use std::f64::consts::PI;
use std::fmt;

/// Extremes the daylight model interpolates between.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ShadowOptions {
    /// Shadow length when the sun is lowest.
    pub max_len: f64,
    /// Shadow length at noon.
    pub min_len: f64,
    /// Blur radius when the sun is lowest.
    pub max_blur: f64,
    /// Lower bound of the blur range.
    pub min_blur: f64,
    /// Opacity scale, in `[0, 1]`.
    pub alpha: f64,
}

impl ShadowOptions {
    /// `maxLen 36, minLen 10, maxBlur 48, minBlur 16, alpha 0.6`.
    pub const DEFAULT: Self = Self {
        max_len: 36.0,
        min_len: 10.0,
        max_blur: 48.0,
        min_blur: 16.0,
        alpha: 0.6,
    };

    /// Reject non-finite values, negative lengths or blurs, inverted ranges
    /// and an opacity outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("maxLen", self.max_len),
            ("minLen", self.min_len),
            ("maxBlur", self.max_blur),
            ("minBlur", self.min_blur),
            ("alpha", self.alpha),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ClockError::InvalidOptions { field, value });
            }
        }

        let invalid = |field, value| Err(ClockError::InvalidOptions { field, value });
        if self.min_len < 0.0 {
            return invalid("minLen", self.min_len);
        }
        if self.max_len < self.min_len {
            return invalid("maxLen", self.max_len);
        }
        if self.min_blur < 0.0 {
            return invalid("minBlur", self.min_blur);
        }
        if self.max_blur < self.min_blur {
            return invalid("maxBlur", self.max_blur);
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return invalid("alpha", self.alpha);
        }
        Ok(())
    }
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One shadow layer: offset, blur radius and opacity of a black shadow.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadowLayer {
    /// Horizontal offset, positive to the right.
    pub offset_x: f64,
    /// Vertical offset, positive downwards.
    pub offset_y: f64,
    /// Blur radius.
    pub blur: f64,
    /// Opacity of the black shadow colour, in `[0, 1]`.
    pub opacity: f64,
}

impl ShadowLayer {
    /// Create a layer from its four components.
    #[inline]
    pub const fn new(offset_x: f64, offset_y: f64, blur: f64, opacity: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
        }
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px rgba(0,0,0,{})",
            self.offset_x, self.offset_y, self.blur, self.opacity
        )
    }
}

/// The two layers drawn under the dial.
///
/// `Display` renders a layered box-shadow value:
///
/// ```
/// use planetime::ShadowDescriptor;
///
/// assert_eq!(
///     ShadowDescriptor::NIGHT.to_string(),
///     "5px 5px 10px rgba(0,0,0,0.55), -5px -5px 10px rgba(0,0,0,0.45)"
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadowDescriptor {
    /// Inner layer with the tighter blur.
    pub hard: ShadowLayer,
    /// Outer layer, wider blur and lighter.
    pub soft: ShadowLayer,
}

impl ShadowDescriptor {
    /// Fixed appearance between 18:00 and 06:00.
    pub const NIGHT: Self = Self {
        hard: ShadowLayer::new(5.0, 5.0, 10.0, 0.55),
        soft: ShadowLayer::new(-5.0, -5.0, 10.0, 0.45),
    };
}

impl fmt::Display for ShadowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.hard, self.soft)
    }
}

/// Sun elevation proxy in `[0, 1]`: `max(0, sin(π·f))`.
#[inline]
pub fn daylight(day_fraction: f64) -> f64 {
    (PI * day_fraction).sin().max(0.0)
}

/// Shadow for a wall-clock time, without any zone lookup.
///
/// # Errors
///
/// [`ClockError::InvalidOptions`] if `options` fails
/// [`ShadowOptions::validate`]. Options are only read during the day, so at
/// night [`ShadowDescriptor::NIGHT`] is returned whatever they hold.
pub fn shadow_at(local: LocalTime, options: &ShadowOptions) -> Result<ShadowDescriptor> {
    if !local.is_daytime() {
        tracing::trace!(?local, "night shadow");
        return Ok(ShadowDescriptor::NIGHT);
    }
    options.validate()?;

    let day_frac = local.day_fraction();
    let light_angle = day_frac * 2.0 * PI + PI / 2.0;
    let shadow_angle = light_angle + PI;
    let (dy, dx) = shadow_angle.sin_cos();

    let daylight = daylight(day_frac);
    let len = options.min_len + (options.max_len - options.min_len) * (1.0 - daylight);
    let blur = options.min_blur + (options.max_blur - options.min_blur) * (1.0 - 0.6 * daylight);
    let x = round_to(dx * len, 2);
    let y = round_to(dy * len, 2);
    let alpha = round_to(options.alpha * (0.25 + 0.75 * (1.0 - daylight)), 3);

    tracing::trace!(?local, daylight, len, blur, "day shadow");
    Ok(ShadowDescriptor {
        hard: ShadowLayer::new(x, y, (blur / 2.0).round(), alpha),
        soft: ShadowLayer::new(x, y, blur.round(), round_to(alpha * 0.7, 3)),
    })
}

/// Shadow for the wall-clock time of `at` in the zone named `time_zone`.
///
/// # Errors
///
/// [`ClockError::InvalidOptions`], [`ClockError::UnknownTimeZone`] or
/// [`ClockError::TimestampOutOfRange`]. Callers wanting a fallback
/// appearance substitute one themselves:
///
/// ```
/// use planetime::{shadow_for, ShadowDescriptor, ShadowOptions, UnixTime};
///
/// let shadow = shadow_for(&UnixTime::now(), "Not/AZone", &ShadowOptions::default())
///     .unwrap_or(ShadowDescriptor::NIGHT);
/// assert_eq!(shadow, ShadowDescriptor::NIGHT);
/// ```
pub fn shadow_for<T>(at: &T, time_zone: &str, options: &ShadowOptions) -> Result<ShadowDescriptor>
where
    T: Timestamp + ?Sized,
{
    shadow_at(LocalTime::resolve(at, time_zone)?, options)
}

/// [`shadow_for`] at the host clock's current instant.
pub fn shadow_now(time_zone: &str, options: &ShadowOptions) -> Result<ShadowDescriptor> {
    shadow_for(&UnixTime::now(), time_zone, options)
}

/// Round half away from zero to `digits` decimals, normalising `-0.0`.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale + 0.0
}
