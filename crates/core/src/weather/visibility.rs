//! Prevailing visibility and runway visual range

use crate::core_types::airport::Runway;
use crate::core_types::units::Meters;
use crate::core_types::weather::{RvrEntry, RvrTrend};
use crate::simulation::difficulty::{DifficultyProfile, DifficultyTier};
use crate::weather::round_to_nearest;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

/// RVR is only reported at or below this visibility
pub const RVR_MAX_VISIBILITY: Meters = Meters::new(1500);

/// Draw prevailing visibility from the ladder within the tier bounds
///
/// Super easy is always "10 km or more". With round numbers, values from
/// 5000 m snap to whole kilometers and lower values to 500 m.
pub fn generate_visibility<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DifficultyProfile,
    ladder: &[Meters],
) -> Meters {
    if profile.tier == DifficultyTier::SuperEasy {
        return Meters::TEN_KM_OR_MORE;
    }

    let candidates: Vec<Meters> = ladder
        .iter()
        .copied()
        .filter(|&v| profile.visibility.contains(v))
        .collect();
    let Some(&visibility) = candidates.choose(rng) else {
        warn!(tier = %profile.tier, "No ladder visibility within tier bounds, using maximum");
        return profile.visibility.max;
    };

    if profile.use_round_numbers && !visibility.is_ten_km_or_more() {
        let step = if visibility.get() >= 5000 { 1000 } else { 500 };
        return Meters::new(round_to_nearest(visibility.get() as i32, step) as u32);
    }
    visibility
}

/// Draw RVR for up to `max_rvr_runways` runways in low visibility
///
/// Nothing is reported above 1500 m, without runways, or when the tier's RVR
/// chance fails. Each value lies within `[visibility - 200, visibility + 300]`.
pub fn generate_rvr<R: Rng + ?Sized>(
    rng: &mut R,
    visibility: Meters,
    runways: &[Runway],
    profile: &DifficultyProfile,
    ladder: &[Meters],
) -> Option<Vec<RvrEntry>> {
    if visibility > RVR_MAX_VISIBILITY || runways.is_empty() {
        return None;
    }
    if !rng.random_bool(profile.rvr_probability) {
        return None;
    }

    let cap = usize::from(profile.max_rvr_runways.max(1));
    let count = rng.random_range(1..=cap).min(runways.len());
    let selected: Vec<&Runway> = runways.choose_multiple(rng, count).collect();

    let low = visibility.get().saturating_sub(200);
    let high = visibility.get() + 300;
    let window: Vec<Meters> = ladder
        .iter()
        .copied()
        .filter(|v| (low..=high).contains(&v.get()))
        .collect();

    let mut entries = Vec::with_capacity(selected.len());
    for runway in selected {
        let Some(&value) = window.choose(rng) else {
            break;
        };
        let trend = RvrTrend::ALL.choose(rng).copied().unwrap_or(RvrTrend::Unreported);
        entries.push(RvrEntry {
            runway: runway.designator.clone(),
            value,
            trend,
        });
    }

    (!entries.is_empty()).then_some(entries)
}
