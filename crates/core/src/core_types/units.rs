//! Semantic unit types for ATIS quantities
//!
//! Every value an ATIS broadcast reads out is a whole number in a fixed unit:
//! knots for wind, meters for visibility and RVR, feet for cloud bases and
//! elevations, hectopascals for QNH and whole degrees Celsius for temperature.
//! These newtypes keep those units from being mixed up while still serializing
//! as bare numbers (`#[serde(transparent)]`), so a stored record stays flat.
//!
//! # Usage
//! ```
//! use atis_core::core_types::units::{Knots, Meters};
//!
//! let speed = Knots::new(15);
//! assert_eq!(*speed, 15);
//! assert_eq!(speed.to_string(), "15 kt");
//! assert!(Meters::TEN_KM_OR_MORE.is_ten_km_or_more());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! integer_unit {
    ($(#[$meta:meta])* $name:ident($inner:ty), $suffix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw value
            #[inline]
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                $name(value)
            }

            /// Raw value
            #[inline]
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl Deref for $name {
            type Target = $inner;
            #[inline]
            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

integer_unit!(
    /// Wind speed in knots
    Knots(u16),
    " kt"
);

integer_unit!(
    /// Horizontal distance in meters (visibility, RVR, runway length)
    Meters(u32),
    " m"
);

integer_unit!(
    /// Height or elevation in feet
    Feet(u32),
    " ft"
);

integer_unit!(
    /// Pressure in hectopascals
    Hectopascals(u16),
    " hPa"
);

integer_unit!(
    /// Whole-degree temperature in °C
    Celsius(i32),
    "°C"
);

impl Meters {
    /// METAR sentinel for "10 kilometers or more"
    pub const TEN_KM_OR_MORE: Meters = Meters(9999);

    /// True when the value reads as "10 kilometers or more"
    #[inline]
    #[must_use]
    pub const fn is_ten_km_or_more(self) -> bool {
        self.0 >= Self::TEN_KM_OR_MORE.0
    }
}

impl Celsius {
    /// True below zero; phraseology prefixes these with "minus"
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}
