//! Temperature, dewpoint and QNH

use crate::core_types::units::{Celsius, Hectopascals};
use crate::simulation::difficulty::{DifficultyProfile, DifficultyTier};
use crate::weather::round_to_nearest;
use rand::Rng;

/// QNH values used when a tier asks for round numbers
pub const ROUND_QNH_VALUES: [u16; 5] = [1010, 1013, 1015, 1020, 1025];

/// Draw `(temperature, dewpoint)`
///
/// The spread is 3-8 °C for the two easy tiers and 1-15 °C otherwise, so the
/// dewpoint never exceeds the temperature. With round numbers both values
/// snap to 5 °C independently.
pub fn generate_temperature<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DifficultyProfile,
) -> (Celsius, Celsius) {
    let mut temperature =
        rng.random_range(profile.temp_range.min.get()..=profile.temp_range.max.get());
    if profile.use_round_numbers {
        temperature = round_to_nearest(temperature, 5);
    }

    let spread = match profile.tier {
        DifficultyTier::SuperEasy | DifficultyTier::Easy => rng.random_range(3..=8),
        DifficultyTier::Medium | DifficultyTier::Hard => rng.random_range(1..=15),
    };
    let mut dewpoint = temperature - spread;
    if profile.use_round_numbers {
        dewpoint = round_to_nearest(dewpoint, 5);
    }

    debug_assert!(dewpoint <= temperature, "dewpoint {dewpoint} above {temperature}");
    (Celsius::new(temperature), Celsius::new(dewpoint))
}

/// Draw QNH within the tier range, snapped to a familiar value under rounding
pub fn generate_qnh<R: Rng + ?Sized>(rng: &mut R, profile: &DifficultyProfile) -> Hectopascals {
    let qnh = rng.random_range(profile.qnh_range.min.get()..=profile.qnh_range.max.get());
    if !profile.use_round_numbers {
        return Hectopascals::new(qnh);
    }
    let snapped = ROUND_QNH_VALUES
        .iter()
        .copied()
        .min_by_key(|value| value.abs_diff(qnh))
        .unwrap_or(qnh);
    Hectopascals::new(snapped)
}
