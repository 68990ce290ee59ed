//! Cloud layer and CAVOK generation

use crate::core_types::units::{Feet, Meters};
use crate::core_types::weather::{CloudCover, CloudLayer};
use crate::simulation::difficulty::{DifficultyProfile, DifficultyTier};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Heights for the single FEW layer of a super easy sky
pub const SUPER_EASY_HEIGHTS: [u32; 3] = [8000, 10000, 12000];

/// Lowest layer mix for medium
pub const MEDIUM_BASE_MIX: [CloudCover; 4] = [
    CloudCover::Scattered,
    CloudCover::Broken,
    CloudCover::Overcast,
    CloudCover::Few,
];

/// Lowest layer mix for hard with a low ceiling floor
pub const LOW_CEILING_MIX: [CloudCover; 2] = [CloudCover::Broken, CloudCover::Overcast];

/// Ceiling floors below this bias the hard tier's lowest layer to BKN/OVC
pub const LOW_CEILING_FLOOR: Feet = Feet::new(500);

/// Draw cloud layers, or CAVOK
///
/// Returns `(layers, cavok)`. CAVOK needs 10 km visibility and yields no
/// layers. Otherwise 1 to `max_cloud_layers` layers are drawn from the height
/// ladder at or above the tier's ceiling floor, each strictly above the one
/// before; the draw stops early when the ladder runs out. Only the hard tier
/// produces CB.
pub fn generate_clouds<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DifficultyProfile,
    visibility: Meters,
    heights: &[Feet],
) -> (Vec<CloudLayer>, bool) {
    if visibility.is_ten_km_or_more() && rng.random_bool(profile.cavok_probability) {
        return (Vec::new(), true);
    }

    if profile.tier == DifficultyTier::SuperEasy {
        let height = SUPER_EASY_HEIGHTS.choose(rng).copied().unwrap_or(10000);
        return (vec![CloudLayer::new(CloudCover::Few, height)], false);
    }

    let count = rng.random_range(1..=profile.max_cloud_layers.max(1));
    let mut layers: Vec<CloudLayer> = Vec::with_capacity(usize::from(count));

    for index in 0..count {
        let below = layers.last().map(|layer| layer.height_ft);
        let valid: Vec<Feet> = heights
            .iter()
            .copied()
            .filter(|&h| h >= profile.min_ceiling && Some(h) > below)
            .collect();
        let Some(&height_ft) = valid.choose(rng) else {
            break;
        };

        let cover = if index == 0
            && profile.tier == DifficultyTier::Hard
            && profile.min_ceiling < LOW_CEILING_FLOOR
        {
            LOW_CEILING_MIX.choose(rng)
        } else if index == 0 && profile.tier == DifficultyTier::Medium {
            MEDIUM_BASE_MIX.choose(rng)
        } else {
            CloudCover::ALL.choose(rng)
        }
        .copied()
        .unwrap_or(CloudCover::Few);

        let cb = profile.tier == DifficultyTier::Hard && rng.random_bool(profile.cb_probability);

        layers.push(CloudLayer {
            cover,
            height_ft,
            cb,
        });
    }

    layers.sort_by_key(|layer| layer.height_ft);
    (layers, false)
}
