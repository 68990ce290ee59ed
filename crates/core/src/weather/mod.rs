//! Atmospheric generators
//!
//! Each generator draws one part of the observed weather from a
//! [`DifficultyProfile`](crate::simulation::difficulty::DifficultyProfile) and
//! an explicit random source, so a seeded RNG reproduces the same weather.
//! Generators are independent; only RVR and clouds read the visibility drawn
//! before them.
//!
//! - [`wind`] - direction, speed, gusts, variable arc
//! - [`visibility`] - prevailing visibility and RVR
//! - [`phenomena`] - present-weather codes
//! - [`clouds`] - cloud layers and CAVOK
//! - [`thermo`] - temperature, dewpoint and QNH

pub mod clouds;
pub mod phenomena;
pub mod thermo;
pub mod visibility;
pub mod wind;

pub use clouds::generate_clouds;
pub use phenomena::generate_weather;
pub use thermo::{generate_qnh, generate_temperature};
pub use visibility::{generate_rvr, generate_visibility};
pub use wind::generate_wind;

/// Round to the nearest multiple of `step`, halves away from zero
///
/// `step` must be positive.
pub fn round_to_nearest(value: i32, step: i32) -> i32 {
    debug_assert!(step > 0, "round_to_nearest: step must be positive");
    let half = step / 2;
    let offset = if value >= 0 { half } else { -half };
    // Even steps: an exact half lands on the far multiple, matching f64::round.
    ((value + offset) / step) * step
}

#[cfg(test)]
mod tests {
    use super::round_to_nearest;
    use test_case::test_case;

    #[test_case(3, 5, 5; "up to five")]
    #[test_case(2, 5, 0; "down to zero")]
    #[test_case(12, 5, 10; "down to ten")]
    #[test_case(-3, 5, -5; "negative away from zero")]
    #[test_case(-7, 5, -5; "negative toward zero")]
    #[test_case(-8, 5, -10; "negative down")]
    #[test_case(345, 10, 350; "half rounds away")]
    #[test_case(-15, 10, -20; "negative half rounds away")]
    #[test_case(1500, 1000, 2000; "thousand half")]
    #[test_case(1500, 500, 1500; "already aligned")]
    fn test_round_to_nearest(value: i32, step: i32, expected: i32) {
        assert_eq!(round_to_nearest(value, step), expected);
    }
}
