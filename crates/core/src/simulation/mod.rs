//! ATIS report compilation
//!
//! `AtisGenerator` runs every generator and selector in a fixed order:
//! - wind, visibility, RVR, present weather, clouds
//! - temperature and dewpoint, QNH, transition level
//! - active runways, expected approach, remarks
//! - information letter and observation time
//!
//! and renders the result with [`crate::phraseology::render`]. No step
//! revisits the output of an earlier one, so a seeded RNG and a fixed `now`
//! reproduce a record exactly.

pub mod batch;
pub mod difficulty;
pub mod storage;

pub use batch::{generate_batch, BatchReport, BatchRequest, TierCounts};
pub use difficulty::{DifficultyProfile, DifficultyTier, PerTier, TierWeights};
pub use storage::{airport_storage_format, to_storage_format, write_json_lines, StorageRecord};

use crate::core_types::airport::Airport;
use crate::core_types::record::AtisRecord;
use crate::operational::{select_approach, select_remarks, select_runways, transition_level};
use crate::phraseology;
use crate::reference::ReferenceData;
use crate::weather::{
    generate_clouds, generate_qnh, generate_rvr, generate_temperature, generate_visibility,
    generate_weather, generate_wind,
};
use chrono::{DateTime, TimeDelta, Timelike, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Observation times lag the generation time by up to this many minutes
pub const MAX_OBSERVATION_AGE_MINUTES: i64 = 30;

/// Letter used when the reference alphabet is empty
const FALLBACK_LETTER: &str = "Alpha";

/// Compiles complete ATIS records from shared reference data
#[derive(Debug, Clone)]
pub struct AtisGenerator {
    reference: ReferenceData,
}

impl Default for AtisGenerator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AtisGenerator {
    /// Generator over a loaded (and validated) data set
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// Generator over the built-in DACH data set
    pub fn builtin() -> Self {
        Self::new(ReferenceData::builtin())
    }

    /// Reference data in use
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Generate one record for a tier given by name
    ///
    /// Unknown tier names fall back to medium. Without an airport one is
    /// drawn from the catalog.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        airport: Option<&Airport>,
        tier_name: &str,
        now: DateTime<Utc>,
    ) -> AtisRecord {
        self.generate_for_tier(rng, airport, DifficultyTier::normalize(tier_name), now)
    }

    /// Generate one record from a seed at the current time
    pub fn generate_seeded(&self, seed: u64, airport: Option<&Airport>, tier_name: &str) -> AtisRecord {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng, airport, tier_name, Utc::now())
    }

    /// Generate one record for a known tier
    pub fn generate_for_tier<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        airport: Option<&Airport>,
        tier: DifficultyTier,
        now: DateTime<Utc>,
    ) -> AtisRecord {
        let reference = &self.reference;
        let profile = reference.profiles.get(tier);

        let airport = match airport {
            Some(airport) => airport.clone(),
            None => reference
                .airports
                .choose(rng)
                .cloned()
                .unwrap_or_else(Airport::unlisted),
        };

        let wind = generate_wind(rng, profile);
        let visibility = generate_visibility(rng, profile, &reference.visibility_ladder);
        let rvr = generate_rvr(rng, visibility, &airport.runways, profile, &reference.rvr_ladder);
        let weather = generate_weather(rng, profile, &reference.weather_codes);
        let (clouds, cavok) = generate_clouds(rng, profile, visibility, &reference.cloud_heights);
        let (temperature, dewpoint) = generate_temperature(rng, profile);
        let qnh = generate_qnh(rng, profile);
        let transition_level = transition_level(qnh);
        let active_runways = select_runways(rng, &airport, &wind, profile);

        let arrival = active_runways
            .arrival
            .first()
            .and_then(|designator| airport.runway(designator));
        let approach_type = select_approach(
            rng,
            arrival,
            visibility,
            &clouds,
            profile,
            reference.approaches.get(tier),
        );
        let remarks = select_remarks(rng, profile, &reference.remarks);

        let information_letter = reference
            .phonetic_alphabet
            .choose(rng)
            .map_or_else(|| FALLBACK_LETTER.to_string(), Clone::clone);
        let observation_time = observation_time(rng, now);

        let mut record = AtisRecord {
            airport,
            information_letter,
            observation_time,
            wind,
            visibility,
            rvr,
            weather,
            clouds,
            cavok,
            temperature,
            dewpoint,
            qnh,
            transition_level,
            active_runways,
            approach_type,
            remarks,
            difficulty: tier,
            full_text: String::new(),
        };
        record.full_text = phraseology::render(&record);

        debug!(
            icao = %record.airport.icao,
            tier = %tier,
            letter = %record.information_letter,
            "Generated ATIS"
        );
        record
    }
}

/// `now` minus up to 30 minutes, truncated to the minute
fn observation_time<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let age = TimeDelta::minutes(rng.random_range(0..=MAX_OBSERVATION_AGE_MINUTES));
    let time = now - age;
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
