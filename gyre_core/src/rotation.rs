// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen rotation as quarter turns.
//!
//! [`Rotation`] is the platform's enumerated screen orientation. The
//! quarter-turn index matches the `ROTATION_0` … `ROTATION_270` constants
//! used by mobile display APIs, so backends can pass platform values
//! through without a lookup table.

use core::fmt;

/// Screen rotation, counterclockwise from the display's natural orientation.
///
/// Only right-angle rotations exist; platforms report arbitrary angles
/// (device tilt) through other channels. `Default` is [`Deg0`](Self::Deg0).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Rotation {
    /// Natural orientation.
    #[default]
    Deg0,
    /// Rotated a quarter turn.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated three quarter turns.
    Deg270,
}

impl Rotation {
    /// Creates a rotation from a quarter-turn index.
    ///
    /// The index wraps modulo 4, so `from_index(5)` is [`Deg90`](Self::Deg90).
    #[inline]
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Creates a rotation from a degree value.
    ///
    /// Degrees are normalized modulo 360 first. Returns `None` for values
    /// that are not multiples of 90; callers decide whether to fall back or
    /// reject.
    #[inline]
    #[must_use]
    pub const fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Returns the quarter-turn index (0..=3).
    ///
    /// Matches the `ROTATION_*` constant ordering of mobile display APIs.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Returns the rotation in degrees (0, 90, 180, or 270).
    #[inline]
    #[must_use]
    pub const fn degrees(self) -> u32 {
        self.index() * 90
    }

    /// Returns the rotation in radians.
    #[inline]
    #[must_use]
    pub fn radians(self) -> f64 {
        f64::from(self.index()) * core::f64::consts::FRAC_PI_2
    }

    /// Returns `true` if this rotation swaps the display's width and height.
    #[inline]
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Returns the rotation that undoes this one.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg0,
            Self::Deg90 => Self::Deg270,
            Self::Deg180 => Self::Deg180,
            Self::Deg270 => Self::Deg90,
        }
    }
}

impl fmt::Debug for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation({}°)", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_natural_orientation() {
        assert_eq!(Rotation::default(), Rotation::Deg0);
    }

    #[test]
    fn index_round_trip() {
        for index in 0..4 {
            assert_eq!(Rotation::from_index(index).index(), index);
        }
    }

    #[test]
    fn index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::Deg0);
        assert_eq!(Rotation::from_index(7), Rotation::Deg270);
    }

    #[test]
    fn degrees_round_trip() {
        for rotation in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
    }

    #[test]
    fn degrees_normalize_before_matching() {
        assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(720), Some(Rotation::Deg0));
    }

    #[test]
    fn non_right_angles_rejected() {
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(359), None);
    }

    #[test]
    fn quarter_turns_swap_dimensions() {
        assert!(!Rotation::Deg0.swaps_dimensions());
        assert!(Rotation::Deg90.swaps_dimensions());
        assert!(!Rotation::Deg180.swaps_dimensions());
        assert!(Rotation::Deg270.swaps_dimensions());
    }

    #[test]
    fn inverse_composes_to_identity() {
        for rotation in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            let total = rotation.degrees() + rotation.inverse().degrees();
            assert_eq!(total % 360, 0, "inverse must undo the rotation");
        }
    }

    #[test]
    fn radians_match_degrees() {
        let eps = 1e-12;
        assert!((Rotation::Deg90.radians() - core::f64::consts::FRAC_PI_2).abs() < eps);
        assert!((Rotation::Deg180.radians() - core::f64::consts::PI).abs() < eps);
    }
}
