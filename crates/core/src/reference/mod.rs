//! Read-only reference data consumed by the generators
//!
//! Airports, the phonetic alphabet, value ladders, weather-code tables,
//! difficulty profiles, remarks pools and per-tier approach types are loaded
//! once and shared by every generation call. [`ReferenceData::builtin`] is the
//! DACH data set; a JSON file with the same shape can replace it.

pub mod airports;
pub mod tables;

use crate::core_types::airport::Airport;
use crate::core_types::record::ApproachType;
use crate::core_types::units::{Feet, Meters};
use crate::error::AtisError;
use crate::simulation::difficulty::{DifficultyProfile, PerTier};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub use tables::WeatherCodeTables;

/// Everything the engine treats as immutable configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Airport catalog, unique by ICAO code
    pub airports: Vec<Airport>,
    /// Information letters
    pub phonetic_alphabet: Vec<String>,
    /// Reportable visibility values, ascending
    pub visibility_ladder: Vec<Meters>,
    /// Reportable RVR values, ascending
    pub rvr_ladder: Vec<Meters>,
    /// Standard cloud base heights, ascending
    pub cloud_heights: Vec<Feet>,
    /// Present-weather code tables
    pub weather_codes: WeatherCodeTables,
    /// Generation profile per tier
    pub profiles: PerTier<DifficultyProfile>,
    /// Remarks pool per tier
    pub remarks: PerTier<Vec<String>>,
    /// Approach types each tier may announce
    pub approaches: PerTier<Vec<ApproachType>>,
}

impl ReferenceData {
    /// Built-in DACH data set
    pub fn builtin() -> Self {
        Self {
            airports: airports::dach_airports(),
            phonetic_alphabet: tables::PHONETIC_ALPHABET
                .iter()
                .map(ToString::to_string)
                .collect(),
            visibility_ladder: tables::visibility_ladder(),
            rvr_ladder: tables::rvr_ladder(),
            cloud_heights: tables::cloud_height_ladder(),
            weather_codes: WeatherCodeTables::default(),
            profiles: DifficultyProfile::builtin_table(),
            remarks: tables::remarks_pools(),
            approaches: tables::approach_types(),
        }
    }

    /// Parse a JSON data set, de-duplicate airports and validate
    ///
    /// # Errors
    /// Returns [`AtisError::Parse`] for malformed JSON and
    /// [`AtisError::InvalidReference`] when an invariant is broken.
    pub fn from_json_str(json: &str) -> Result<Self, AtisError> {
        let mut data: Self = serde_json::from_str(json).map_err(AtisError::Parse)?;
        data.dedupe_airports();
        data.validate()?;
        Ok(data)
    }

    /// Load a JSON data set from disk
    ///
    /// # Errors
    /// Returns [`AtisError::Io`] if the file cannot be read, otherwise the
    /// errors of [`ReferenceData::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AtisError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| AtisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            airports = data.airports.len(),
            "Loaded reference data"
        );
        Ok(data)
    }

    /// Drop repeated ICAO codes, keeping the first occurrence
    pub fn dedupe_airports(&mut self) {
        let mut seen = FxHashSet::default();
        let before = self.airports.len();
        self.airports.retain(|airport| seen.insert(airport.icao.clone()));
        if self.airports.len() != before {
            warn!(
                dropped = before - self.airports.len(),
                "Dropped duplicate airports from catalog"
            );
        }
    }

    /// Look up an airport by ICAO code, ignoring case
    pub fn find_airport(&self, icao: &str) -> Option<&Airport> {
        self.airports
            .iter()
            .find(|airport| airport.icao.eq_ignore_ascii_case(icao))
    }

    /// Check every data-model invariant
    ///
    /// # Errors
    /// Returns [`AtisError::InvalidReference`] naming the first violation.
    pub fn validate(&self) -> Result<(), AtisError> {
        if self.phonetic_alphabet.is_empty() {
            return Err(AtisError::invalid("phonetic_alphabet", "must not be empty"));
        }
        validate_ladder("visibility_ladder", &self.visibility_ladder)?;
        validate_ladder("rvr_ladder", &self.rvr_ladder)?;
        validate_ladder("cloud_heights", &self.cloud_heights)?;

        let mut icaos = FxHashSet::default();
        for airport in &self.airports {
            if !icaos.insert(airport.icao.as_str()) {
                return Err(AtisError::invalid(
                    format!("airports.{}", airport.icao),
                    "duplicate ICAO code",
                ));
            }
            let mut designators = FxHashSet::default();
            for runway in &airport.runways {
                let field = format!("airports.{}.runways.{}", airport.icao, runway.designator);
                if !designators.insert(runway.designator.as_str()) {
                    return Err(AtisError::invalid(field, "duplicate designator"));
                }
                if runway.heading >= 360 {
                    return Err(AtisError::invalid(
                        field,
                        format!("heading {} outside [0, 360)", runway.heading),
                    ));
                }
            }
        }

        for (tier, profile) in self.profiles.iter() {
            let field = |name: &str| format!("profiles.{tier}.{name}");
            if profile.tier != tier {
                return Err(AtisError::invalid(
                    field("tier"),
                    format!("profile is for {}", profile.tier),
                ));
            }
            for (name, p) in profile.probabilities() {
                if !(0.0..=1.0).contains(&p) {
                    return Err(AtisError::invalid(field(name), format!("{p} outside [0, 1]")));
                }
            }
            if !profile.visibility.is_ordered() {
                return Err(AtisError::invalid(field("visibility"), "min > max"));
            }
            if !profile.wind_speed.is_ordered() {
                return Err(AtisError::invalid(field("wind_speed"), "min > max"));
            }
            if !profile.qnh_range.is_ordered() {
                return Err(AtisError::invalid(field("qnh_range"), "min > max"));
            }
            if !profile.temp_range.is_ordered() {
                return Err(AtisError::invalid(field("temp_range"), "min > max"));
            }
            if profile.max_cloud_layers == 0 {
                return Err(AtisError::invalid(field("max_cloud_layers"), "must be at least 1"));
            }
        }
        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_ladder<T: PartialOrd>(field: &str, ladder: &[T]) -> Result<(), AtisError> {
    if ladder.is_empty() {
        return Err(AtisError::invalid(field, "must not be empty"));
    }
    if !ladder.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(AtisError::invalid(field, "must be strictly ascending"));
    }
    Ok(())
}
