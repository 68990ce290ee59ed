//! End-to-end scenarios through the public API
//!
//! Run tests with: cargo test --test `end_to_end`

use atis_core::core_types::{Celsius, Hectopascals, Meters};
use atis_core::{
    generate_batch, phraseology, reference::ReferenceData, to_storage_format, ActiveRunways,
    ApproachType, AtisGenerator, AtisRecord, BatchRequest, CloudCover, CloudLayer,
    DifficultyTier, WindState,
};
use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
}

fn fixed_record() -> AtisRecord {
    let generator = AtisGenerator::builtin();
    let airport = generator.reference().find_airport("EDDM").unwrap().clone();
    let mut record = AtisRecord {
        airport,
        information_letter: "Kilo".into(),
        observation_time: Utc.with_ymd_and_hms(2025, 6, 1, 12, 20, 0).unwrap(),
        wind: WindState::Calm,
        visibility: Meters::TEN_KM_OR_MORE,
        rvr: None,
        weather: None,
        clouds: Vec::new(),
        cavok: true,
        temperature: Celsius::new(-3),
        dewpoint: Celsius::new(-8),
        qnh: Hectopascals::new(1020),
        transition_level: 70,
        active_runways: ActiveRunways::shared(vec!["26R".into()]),
        approach_type: ApproachType::Ils,
        remarks: None,
        difficulty: DifficultyTier::SuperEasy,
        full_text: String::new(),
    };
    record.full_text = phraseology::render(&record);
    record
}

#[test]
fn test_cavok_calm_broadcast() {
    let record = fixed_record();
    assert_eq!(
        record.full_text,
        format!(
            "{} information Kilo. Recorded at 1220 Zulu. Runway in use 26R. \
             Expect ILS approach. Transition level 70. Wind calm. \
             Visibility 10 kilometers or more. CAVOK. \
             Temperature minus 3, dewpoint minus 8. QNH 1020 hectopascals. \
             Advise on initial contact you have information Kilo.",
            record.airport.name
        )
    );
}

#[test]
fn test_layers_and_remarks_rendered() {
    let mut record = fixed_record();
    record.cavok = false;
    record.visibility = Meters::new(4000);
    record.weather = Some(vec!["-SHRA".into()]);
    record.clouds = vec![
        CloudLayer::new(CloudCover::Scattered, 1500),
        CloudLayer::new(CloudCover::Broken, 4000),
    ];
    record.remarks = Some("RUNWAY SURFACE WET. EXPECT MINOR DELAYS".into());
    let text = phraseology::render(&record);
    assert!(text.contains(
        "Visibility 4000 meters. Present weather: light rain showers. \
         scattered at 1 thousand 5 hundred feet, broken at 4 thousand feet."
    ));
    assert!(text.contains("QNH 1020 hectopascals. RUNWAY SURFACE WET. EXPECT MINOR DELAYS. Advise"));
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let generator = AtisGenerator::builtin();
    for tier in ["super_easy", "easy", "medium", "hard"] {
        let a = generator.generate(&mut ChaCha8Rng::seed_from_u64(77), None, tier, now());
        let b = generator.generate(&mut ChaCha8Rng::seed_from_u64(77), None, tier, now());
        assert_eq!(a.full_text, b.full_text);
        assert_eq!(a, b);
    }
}

#[test]
fn test_unknown_tier_falls_back_to_medium() {
    let generator = AtisGenerator::builtin();
    let record = generator.generate(&mut ChaCha8Rng::seed_from_u64(0), None, "insane", now());
    assert_eq!(record.difficulty, DifficultyTier::Medium);
}

#[test]
fn test_batch_to_storage_rows() {
    let generator = AtisGenerator::builtin();
    let request = BatchRequest {
        count: 25,
        seed: 2025,
        ..BatchRequest::default()
    };
    let report = generate_batch(&generator, &request, now()).unwrap();
    let catalog = &generator.reference().airports;
    let rows: Vec<_> = report
        .records
        .iter()
        .map(|record| {
            let id = catalog
                .iter()
                .position(|a| a.icao == record.airport.icao)
                .unwrap() as u64
                + 1;
            to_storage_format(record, id)
        })
        .collect();
    assert_eq!(rows.len(), 25);
    for (row, record) in rows.iter().zip(&report.records) {
        assert_eq!(row.full_text, record.full_text);
        assert_eq!(row.visibility_meters, record.visibility);
        assert_eq!(row.difficulty, record.difficulty);
    }
}

#[test]
fn test_reference_override_from_file() {
    let mut reference = ReferenceData::builtin();
    reference.airports.retain(|a| a.country == "AT");
    let json = serde_json::to_string(&reference).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = ReferenceData::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, reference);

    let generator = AtisGenerator::new(loaded);
    let record = generator.generate(&mut ChaCha8Rng::seed_from_u64(3), None, "medium", now());
    assert_eq!(record.airport.country, "AT");
}
