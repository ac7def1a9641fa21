//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both types are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Unique identifier of one rider (one ride request).
    pub struct RiderId(u32);
}

typed_id! {
    /// A building floor.  Floors are non-negative; the ground floor is
    /// usually `Floor(0)` or `Floor(1)` depending on the scenario.
    pub struct Floor(u32);
}

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// The floor as a continuous shaft position.
    #[inline(always)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// The floor an exact integer `location` corresponds to.
    ///
    /// Returns `None` when `location` is fractional, negative or not finite.
    pub fn from_location(location: f64) -> Option<Floor> {
        if location.is_finite() && location >= 0.0 && location.fract() == 0.0 && location <= u32::MAX as f64 {
            Some(Floor(location as u32))
        } else {
            None
        }
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor::GROUND
    }
}
