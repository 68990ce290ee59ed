//! Surface wind generation

use crate::core_types::units::Knots;
use crate::core_types::weather::{DirectionalWind, VariableArc, WindState};
use crate::simulation::difficulty::DifficultyProfile;
use crate::weather::round_to_nearest;
use rand::Rng;

/// Gusts are only reported from this mean speed upward
pub const GUST_MIN_SPEED: Knots = Knots::new(10);

/// Variable arcs are only reported up to this mean speed
pub const VARIABLE_MAX_SPEED: Knots = Knots::new(6);

/// Generate surface wind for a tier
///
/// Directions are 10° aligned in `[10, 360]`. Gusts are at least 8 kt above
/// the mean speed, and the variable arc is centered on the mean direction
/// with a half-width of 30-60°.
pub fn generate_wind<R: Rng + ?Sized>(rng: &mut R, profile: &DifficultyProfile) -> WindState {
    if rng.random_bool(profile.calm_wind_probability) {
        return WindState::Calm;
    }

    let direction = rng.random_range(1..=36u16) * 10;

    let min_speed = profile.wind_speed.min.get();
    let max_speed = profile.wind_speed.max.get();
    let mut speed = rng.random_range(min_speed..=max_speed);
    if profile.use_round_numbers {
        speed = (round_to_nearest(i32::from(speed), 5) as u16).max(min_speed);
    }

    let mut gust = None;
    if speed >= GUST_MIN_SPEED.get() && rng.random_bool(profile.gust_probability) {
        let mut gust_speed = speed + rng.random_range(8..=20u16);
        if profile.use_round_numbers {
            gust_speed = round_to_nearest(i32::from(gust_speed), 5) as u16;
        }
        gust = Some(Knots::new(gust_speed));
    }

    let mut variable = None;
    if speed <= VARIABLE_MAX_SPEED.get() && rng.random_bool(profile.variable_wind_probability) {
        let half_width = rng.random_range(30..=60i32);
        let center = i32::from(direction);
        variable = Some(VariableArc {
            from: snap_bearing(center - half_width),
            to: snap_bearing(center + half_width),
        });
    }

    WindState::Directional(DirectionalWind {
        direction,
        speed: Knots::new(speed),
        gust,
        variable,
    })
}

/// Wrap a bearing into `[0, 360)`, snap to 10° and report north as 360
fn snap_bearing(raw: i32) -> u16 {
    let snapped = round_to_nearest(raw.rem_euclid(360), 10);
    if snapped == 0 {
        360
    } else {
        snapped as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::difficulty::DifficultyTier;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_always_calm() {
        let mut profile = DifficultyProfile::medium();
        profile.calm_wind_probability = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(generate_wind(&mut rng, &profile), WindState::Calm);
        }
    }

    #[test]
    fn test_snap_bearing_never_zero() {
        assert_eq!(snap_bearing(3), 360);
        assert_eq!(snap_bearing(-4), 360);
        assert_eq!(snap_bearing(-30), 330);
        assert_eq!(snap_bearing(395), 40);
        assert_eq!(snap_bearing(356), 360);
        assert_eq!(snap_bearing(15), 20);
    }

    #[test]
    fn test_invariants_across_tiers() {
        for tier in DifficultyTier::ALL {
            let profile = DifficultyProfile::for_tier(tier);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            for _ in 0..2000 {
                match generate_wind(&mut rng, &profile) {
                    WindState::Calm => {}
                    WindState::Directional(wind) => {
                        assert!((10..=360).contains(&wind.direction));
                        assert_eq!(wind.direction % 10, 0);
                        assert!(profile.wind_speed.contains(wind.speed) || profile.use_round_numbers);
                        if let Some(gust) = wind.gust {
                            assert!(gust > wind.speed, "{tier}: gust {gust} <= {}", wind.speed);
                            assert!(wind.speed >= GUST_MIN_SPEED);
                        }
                        if let Some(arc) = wind.variable {
                            assert!(wind.speed <= VARIABLE_MAX_SPEED);
                            assert!((10..=360).contains(&arc.from));
                            assert!((10..=360).contains(&arc.to));
                            assert_eq!(arc.from % 10, 0);
                            assert_eq!(arc.to % 10, 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_numbers_snap_speed() {
        let profile = DifficultyProfile::easy();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let wind = generate_wind(&mut rng, &profile);
            if !wind.is_calm() {
                assert_eq!(wind.speed().get() % 5, 0);
                assert!(wind.speed() >= profile.wind_speed.min);
            }
        }
    }

    #[test]
    fn test_hard_never_calm() {
        let profile = DifficultyProfile::hard();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            assert!(!generate_wind(&mut rng, &profile).is_calm());
        }
    }
}
