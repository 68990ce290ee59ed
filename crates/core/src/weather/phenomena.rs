//! Present-weather code generation

use crate::reference::WeatherCodeTables;
use crate::simulation::difficulty::{DifficultyProfile, DifficultyTier};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Chance a freely built precipitation code carries a descriptor (SH/TS/FZ)
pub const DESCRIPTOR_PROBABILITY: f64 = 0.3;

/// Draw present-weather codes
///
/// Tiers with an `allowed_weather` list pick one code from it. Unrestricted
/// tiers build codes from the tables, either precipitation
/// (`intensity + [descriptor] + type`, e.g. `+TSRA`) or an obscuration; the
/// hard tier may report two.
pub fn generate_weather<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DifficultyProfile,
    codes: &WeatherCodeTables,
) -> Option<Vec<String>> {
    if !rng.random_bool(profile.weather_probability) {
        return None;
    }

    let phenomena: Vec<String> = match &profile.allowed_weather {
        Some(allowed) => allowed.choose(rng).cloned().into_iter().collect(),
        None => {
            let count = if profile.tier == DifficultyTier::Hard {
                rng.random_range(1..=2)
            } else {
                1
            };
            (0..count).filter_map(|_| free_code(rng, codes)).collect()
        }
    };

    (!phenomena.is_empty()).then_some(phenomena)
}

fn free_code<R: Rng + ?Sized>(rng: &mut R, codes: &WeatherCodeTables) -> Option<String> {
    if rng.random_bool(0.5) {
        let intensity = codes.intensity.choose(rng).map_or("", String::as_str);
        let descriptor = if rng.random_bool(DESCRIPTOR_PROBABILITY) {
            codes.precipitation_descriptor.choose(rng).map_or("", String::as_str)
        } else {
            ""
        };
        let precipitation = codes.precipitation.choose(rng)?;
        Some(format!("{intensity}{descriptor}{precipitation}"))
    } else {
        codes.obscuration.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_probability_yields_nothing() {
        let profile = DifficultyProfile::super_easy();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            assert!(generate_weather(&mut rng, &profile, &WeatherCodeTables::default()).is_none());
        }
    }

    #[test]
    fn test_restricted_tiers_use_allowed_codes() {
        let codes = WeatherCodeTables::default();
        for mut profile in [DifficultyProfile::easy(), DifficultyProfile::medium()] {
            profile.weather_probability = 1.0;
            let allowed = profile.allowed_weather.clone().unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(12);
            for _ in 0..200 {
                let weather = generate_weather(&mut rng, &profile, &codes).unwrap();
                assert_eq!(weather.len(), 1);
                assert!(allowed.contains(&weather[0]));
            }
        }
    }

    #[test]
    fn test_hard_builds_codes_from_tables() {
        let codes = WeatherCodeTables::default();
        let mut profile = DifficultyProfile::hard();
        profile.weather_probability = 1.0;
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut saw_two = false;
        for _ in 0..500 {
            let weather = generate_weather(&mut rng, &profile, &codes).unwrap();
            assert!((1..=2).contains(&weather.len()));
            saw_two |= weather.len() == 2;
            for code in &weather {
                if codes.obscuration.contains(code) {
                    continue;
                }
                let rest = code.trim_start_matches(['-', '+']);
                let kind = &rest[rest.len() - 2..];
                assert!(codes.precipitation.iter().any(|p| p == kind), "bad code {code}");
                let descriptor = &rest[..rest.len() - 2];
                assert!(
                    descriptor.is_empty() || codes.precipitation_descriptor.iter().any(|d| d == descriptor),
                    "bad descriptor in {code}"
                );
            }
        }
        assert!(saw_two);
    }
}
