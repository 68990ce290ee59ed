//! Expected approach selection

use crate::core_types::airport::Runway;
use crate::core_types::record::ApproachType;
use crate::core_types::units::{Feet, Meters};
use crate::core_types::weather::CloudLayer;
use crate::simulation::difficulty::DifficultyProfile;
use rand::seq::IndexedRandom;
use rand::Rng;

/// CAT III minima
pub const CAT_III_VISIBILITY: Meters = Meters::new(300);
/// CAT II minima
pub const CAT_II_VISIBILITY: Meters = Meters::new(550);
/// Below this visibility only a precision approach is offered
pub const PRECISION_VISIBILITY: Meters = Meters::new(800);
/// Below this ceiling only a precision approach is offered
pub const PRECISION_CEILING: Feet = Feet::new(300);
/// Visual approaches need at least this visibility
pub const VISUAL_VISIBILITY: Meters = Meters::new(5000);
/// Visual approaches need any ceiling to be above this
pub const VISUAL_CEILING: Feet = Feet::new(1500);
/// Chance of a visual approach when conditions allow it
pub const VISUAL_PROBABILITY: f64 = 0.2;

/// Lowest broken or overcast layer
pub fn ceiling(clouds: &[CloudLayer]) -> Option<Feet> {
    clouds
        .iter()
        .filter(|layer| layer.cover.forms_ceiling())
        .map(|layer| layer.height_ft)
        .min()
}

/// Choose the expected approach for the arrival runway
///
/// `runway` is the first arrival runway; when it is unknown an ILS is assumed.
/// `allowed` is the tier's approach list. Low visibility or ceiling forces a
/// precision approach, good conditions occasionally give a visual one, and
/// everything else prefers a plain ILS.
pub fn select_approach<R: Rng + ?Sized>(
    rng: &mut R,
    runway: Option<&Runway>,
    visibility: Meters,
    clouds: &[CloudLayer],
    profile: &DifficultyProfile,
    allowed: &[ApproachType],
) -> ApproachType {
    let has_ils = runway.is_none_or(|r| r.ils);

    if profile.simple_approach_only {
        let options = if has_ils {
            [ApproachType::Ils, ApproachType::Visual]
        } else {
            [ApproachType::Visual, ApproachType::Rnav]
        };
        return options.choose(rng).copied().unwrap_or(ApproachType::Visual);
    }

    let ceiling = ceiling(clouds);

    if visibility < CAT_III_VISIBILITY && has_ils && allowed.contains(&ApproachType::IlsCatIII) {
        return ApproachType::IlsCatIII;
    }
    if visibility < CAT_II_VISIBILITY && has_ils && allowed.contains(&ApproachType::IlsCatII) {
        return ApproachType::IlsCatII;
    }

    if visibility < PRECISION_VISIBILITY || ceiling.is_some_and(|c| c < PRECISION_CEILING) {
        if has_ils {
            return ApproachType::Ils;
        }
        if allowed.contains(&ApproachType::Rnav) {
            return ApproachType::Rnav;
        }
    } else if visibility >= VISUAL_VISIBILITY
        && ceiling.is_none_or(|c| c > VISUAL_CEILING)
        && rng.random_bool(VISUAL_PROBABILITY)
        && allowed.contains(&ApproachType::Visual)
    {
        return ApproachType::Visual;
    }

    if has_ils {
        let ils: Vec<ApproachType> = allowed.iter().copied().filter(|a| a.is_plain_ils()).collect();
        if let Some(&approach) = ils.choose(rng) {
            return approach;
        }
    }

    let non_visual: Vec<ApproachType> = allowed
        .iter()
        .copied()
        .filter(|&a| a != ApproachType::Visual)
        .collect();
    non_visual.choose(rng).copied().unwrap_or(ApproachType::Ils)
}
