// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The nine solar-system bodies shown on the dial.
//!
//! Each [`Body`] carries two compiled-in constants:
//!
//! | Body | Rotation period | Unit label |
//! |------|-----------------|------------|
//! | Mercury | 58.646 d | `M-day` |
//! | Venus | 243.025 d | `V-day` |
//! | Earth | 86 400 s | `Day` |
//! | Mars | 24 h 39 m 35 s | `Sol` |
//! | Jupiter | 9 h 55 m 29.71 s | `J-day` |
//! | Saturn | 10 h 33 m 38 s | `S-day` |
//! | Uranus | 17 h 14 m 24 s | `U-day` |
//! | Neptune | 16 h 6 m 36 s | `N-day` |
//! | Pluto | 6.387 d | `P-day` |
//!
//! Venus is listed with a positive period. Retrograde rotation is expressed by
//! overriding it with a negative one, see
//! [`RotationOverrides`](crate::RotationOverrides).

use crate::error::ClockError;
use qtty::Seconds;
use std::fmt;
use std::str::FromStr;

const DAY: f64 = 86_400.0;
const HOUR: f64 = 3_600.0;
const MINUTE: f64 = 60.0;

/// A celestial body with a tabulated rotation period.
///
/// The declaration order is the canonical display order, Mercury to Pluto.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Number of bodies in the table.
    pub const COUNT: usize = 9;

    /// Every body, in canonical order.
    pub const ALL: [Body; Body::COUNT] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Position in [`Body::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical identifier, e.g. `"Mars"`.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Default length of one solar day of this body, in Earth seconds.
    pub fn rotation_period(self) -> Seconds {
        Seconds::new(match self {
            Body::Mercury => 58.646 * DAY,
            Body::Venus => 243.025 * DAY,
            Body::Earth => DAY,
            Body::Mars => 24.0 * HOUR + 39.0 * MINUTE + 35.0,
            Body::Jupiter => 9.0 * HOUR + 55.0 * MINUTE + 29.71,
            Body::Saturn => 10.0 * HOUR + 33.0 * MINUTE + 38.0,
            Body::Uranus => 17.0 * HOUR + 14.0 * MINUTE + 24.0,
            Body::Neptune => 16.0 * HOUR + 6.0 * MINUTE + 36.0,
            Body::Pluto => 6.387 * DAY,
        })
    }

    /// Short display unit for one day of this body, e.g. `"Sol"` for Mars.
    pub const fn unit_label(self) -> &'static str {
        match self {
            Body::Mercury => "M-day",
            Body::Venus => "V-day",
            Body::Earth => "Day",
            Body::Mars => "Sol",
            Body::Jupiter => "J-day",
            Body::Saturn => "S-day",
            Body::Uranus => "U-day",
            Body::Neptune => "N-day",
            Body::Pluto => "P-day",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ClockError;

    /// Parses a canonical, case-sensitive identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .into_iter()
            .find(|body| body.name() == s)
            .ok_or_else(|| ClockError::UnknownBody(s.to_owned()))
    }
}
