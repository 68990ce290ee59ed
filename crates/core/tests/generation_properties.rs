//! Property checks over many seeded records
//!
//! Every tier is generated across a range of seeds and each record is checked
//! against the invariants a trainee relies on: consistent wind, visibility
//! and clouds that agree with each other, a sane thermodynamic state and a
//! transition level that matches the QNH.
//!
//! Run tests with: cargo test --test `generation_properties`

use atis_core::{
    operational::transition_level, AtisGenerator, AtisRecord, DifficultyTier, WindState,
};
use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEEDS: u64 = 400;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 20, 14, 7, 33).unwrap()
}

fn records(tier: DifficultyTier) -> Vec<AtisRecord> {
    let generator = AtisGenerator::builtin();
    (0..SEEDS)
        .map(|seed| {
            generator.generate_for_tier(&mut ChaCha8Rng::seed_from_u64(seed), None, tier, now())
        })
        .collect()
}

fn check_wind(record: &AtisRecord) {
    match record.wind {
        WindState::Calm => {
            assert_eq!(record.wind.direction(), 0);
            assert_eq!(record.wind.speed().get(), 0);
            assert!(record.wind.gust().is_none());
            assert!(record.wind.variable().is_none());
        }
        WindState::Directional(wind) => {
            assert!((10..=360).contains(&wind.direction));
            assert_eq!(wind.direction % 10, 0);
            if let Some(gust) = wind.gust {
                assert!(gust > wind.speed);
            }
            if let Some(arc) = wind.variable {
                assert!(wind.speed.get() <= 6);
                assert!((10..=360).contains(&arc.from) && (10..=360).contains(&arc.to));
            }
        }
    }
}

#[test]
fn test_every_tier_holds_invariants() {
    for tier in DifficultyTier::ALL {
        let generator = AtisGenerator::builtin();
        let profile = generator.reference().profiles.get(tier).clone();
        for record in records(tier) {
            assert_eq!(record.difficulty, tier);
            check_wind(&record);

            assert!(profile.visibility.contains(record.visibility) || profile.use_round_numbers);

            if let Some(rvr) = &record.rvr {
                assert!(record.visibility.get() <= 1500);
                assert!(!rvr.is_empty());
                for entry in rvr {
                    assert!(record.airport.runway(&entry.runway).is_some());
                }
            }

            if record.cavok {
                assert!(record.clouds.is_empty());
                assert!(record.visibility.is_ten_km_or_more());
            }
            assert!(record
                .clouds
                .windows(2)
                .all(|pair| pair[0].height_ft < pair[1].height_ft));
            if tier != DifficultyTier::Hard {
                assert!(record.clouds.iter().all(|layer| !layer.cb));
            }

            assert!(record.dewpoint <= record.temperature, "{tier}: {record:?}");
            assert!(profile.qnh_range.contains(record.qnh) || profile.use_round_numbers);
            if profile.use_round_numbers {
                assert!([1010, 1013, 1015, 1020, 1025].contains(&record.qnh.get()));
            }
            assert_eq!(record.transition_level, transition_level(record.qnh));

            assert!(record.active_runways.is_shared());
            assert!(!record.active_runways.arrival.is_empty());
            if profile.single_runway_only {
                assert_eq!(record.active_runways.arrival.len(), 1);
            }

            assert!(generator
                .reference()
                .phonetic_alphabet
                .contains(&record.information_letter));
            assert!(record.observation_time <= now());
        }
    }
}

#[test]
fn test_super_easy_is_always_fair_weather() {
    for record in records(DifficultyTier::SuperEasy) {
        assert!(record.visibility.is_ten_km_or_more());
        assert!(record.weather.is_none());
        assert!(record.rvr.is_none());
        assert!(record.remarks.is_none());
        assert!(record.cavok || record.clouds.len() == 1);
        assert_eq!(record.temperature.get() % 5, 0);
    }
}

#[test]
fn test_easy_weather_is_restricted() {
    for record in records(DifficultyTier::Easy) {
        for code in record.weather.iter().flatten() {
            assert!(["-RA", "-DZ", "BR"].contains(&code.as_str()), "{code}");
        }
        assert!(record.clouds.len() <= 2);
    }
}

#[test]
fn test_hard_reaches_low_visibility_and_rvr() {
    let hard = records(DifficultyTier::Hard);
    assert!(hard.iter().any(|r| r.rvr.is_some()));
    assert!(hard.iter().any(|r| r.clouds.iter().any(|c| c.cb)));
    assert!(hard.iter().all(|r| !r.cavok));
    assert!(hard.iter().all(|r| !r.wind.is_calm()));
}

#[test]
fn test_rendered_text_reflects_record() {
    for tier in DifficultyTier::ALL {
        for record in records(tier).iter().take(50) {
            let text = &record.full_text;
            assert!(text.starts_with(&record.airport.name));
            assert!(text.contains(&format!("QNH {} hectopascals.", record.qnh.get())));
            assert!(text.contains(&format!("Transition level {}.", record.transition_level)));
            assert!(text.contains(&format!("Expect {} approach.", record.approach_type)));
            assert_eq!(text.contains("CAVOK."), record.cavok);
            assert_eq!(text.contains("Present weather:"), record.weather.is_some());
        }
    }
}
