//! Operational remarks

use crate::simulation::difficulty::{DifficultyProfile, DifficultyTier, PerTier};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Appended on the hard tier with the profile's windshear probability
pub const WINDSHEAR_ALERT: &str = "LOW LEVEL WIND SHEAR ALERT";

/// Draw remarks from the pools of this tier and every easier one
///
/// Between one and `max_remarks` distinct remarks are joined with `". "`.
pub fn select_remarks<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DifficultyProfile,
    pools: &PerTier<Vec<String>>,
) -> Option<String> {
    if !rng.random_bool(profile.remarks_probability) || profile.max_remarks == 0 {
        return None;
    }

    let pool: Vec<&str> = pools
        .iter()
        .filter(|(tier, _)| *tier <= profile.tier)
        .flat_map(|(_, remarks)| remarks.iter().map(String::as_str))
        .collect();
    if pool.is_empty() {
        return None;
    }

    let count = rng.random_range(1..=usize::from(profile.max_remarks));
    let mut selected: Vec<&str> = pool.choose_multiple(rng, count).copied().collect();

    if profile.tier == DifficultyTier::Hard && rng.random_bool(profile.windshear_probability) {
        selected.push(WINDSHEAR_ALERT);
    }

    Some(selected.join(". "))
}
