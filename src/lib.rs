// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock-face computations.
//!
//! This crate holds the numeric core behind an analog clock face: how many
//! solar days each planet has turned through since the Unix epoch, and a
//! directional drop-shadow that follows the time of day. Every function is
//! pure; the caller supplies the instant, typically once per second from its
//! own timer, and applies the results to whatever it draws.
//!
//! # Core types
//!
//! - [`Body`] — the nine bodies, with their rotation periods and unit labels.
//! - [`RotationOverrides`] — per-call replacement of rotation periods.
//! - [`ElapsedDays`] — result of [`elapsed_days`].
//! - [`ShadowOptions`] / [`ShadowDescriptor`] — input and result of [`shadow_for`].
//! - [`Timestamp`] — trait for instants ([`UnixTime`], `chrono::DateTime`, `SystemTime`).
//! - [`LocalTime`] — wall-clock time of day in an IANA zone.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use planetime::{elapsed_days, shadow_for, Body, RotationOverrides, ShadowOptions};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 20, 6, 30, 0).unwrap();
//!
//! let retrograde = RotationOverrides::new().with(Body::Venus, -Body::Venus.rotation_period().value());
//! let days = elapsed_days(&now, &retrograde).unwrap();
//! assert!(days[Body::Venus] < 0.0);
//! println!("{}", days.label(Body::Mars));
//!
//! // 12:00 in Kolkata: the shortest shadow of the day.
//! let shadow = shadow_for(&now, "Asia/Kolkata", &ShadowOptions::default()).unwrap();
//! assert_eq!(shadow.hard.offset_y, 10.0);
//! ```

mod body;
mod elapsed;
mod error;
mod format;
pub(crate) mod instant;
mod local;
mod rotation;
mod shadow;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::Body;
pub use elapsed::{elapsed_days, elapsed_days_now, ElapsedDays};
pub use error::{ClockError, Result};
pub use format::{format_elapsed, format_grouped};
pub use instant::{Timestamp, UnixTime};
pub use local::{light_angle, light_angle_for, parse_time_zone, HandAngles, LocalTime};
pub use rotation::RotationOverrides;
pub use shadow::{daylight, shadow_at, shadow_for, shadow_now, ShadowDescriptor, ShadowLayer, ShadowOptions};
