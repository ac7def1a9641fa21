//! Simulation time model.
//!
//! # Design
//!
//! The simulator runs on a logical clock measured in simulated seconds.  Time
//! is continuous (`f64`) because elevator travel is interpolated between
//! floors and request timestamps come from external feeds.  There is no
//! mapping to wall-clock time and nothing ever waits on a real timer.
//!
//! Along a single run the clock is monotonically non-decreasing.  `SimTime`
//! deliberately does not implement `Eq`/`Ord`; use [`SimTime::total_cmp`]
//! when sorting.

use std::cmp::Ordering;
use std::fmt;

/// An absolute simulated timestamp, in seconds since the start of the run.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// The later of the two timestamps.
    #[inline]
    pub fn max(self, other: SimTime) -> SimTime {
        if other.0 > self.0 { other } else { self }
    }

    /// `true` for finite, non-negative timestamps.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total ordering (IEEE 754 `totalOrder`), for sorting.
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl From<f64> for SimTime {
    #[inline]
    fn from(secs: f64) -> Self {
        SimTime(secs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
