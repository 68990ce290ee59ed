//! The compiled ATIS record

use crate::core_types::airport::Airport;
use crate::core_types::units::{Celsius, Hectopascals, Meters};
use crate::core_types::weather::{CloudLayer, RvrEntry, WindState};
use crate::simulation::difficulty::DifficultyTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument or visual approach procedure announced on the ATIS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApproachType {
    /// ILS (CAT I)
    #[serde(rename = "ILS")]
    Ils,
    /// ILS CAT II
    #[serde(rename = "ILS CAT II")]
    IlsCatII,
    /// ILS CAT III
    #[serde(rename = "ILS CAT III")]
    IlsCatIII,
    /// VOR
    #[serde(rename = "VOR")]
    Vor,
    /// RNAV
    #[serde(rename = "RNAV")]
    Rnav,
    /// RNAV (GPS)
    #[serde(rename = "RNAV (GPS)")]
    RnavGps,
    /// NDB
    #[serde(rename = "NDB")]
    Ndb,
    /// Localizer only
    #[serde(rename = "LOC only")]
    LocOnly,
    /// Circling
    #[serde(rename = "Circling")]
    Circling,
    /// Visual
    #[serde(rename = "Visual")]
    Visual,
}

impl ApproachType {
    /// Label as read out and stored
    pub fn as_str(self) -> &'static str {
        match self {
            ApproachType::Ils => "ILS",
            ApproachType::IlsCatII => "ILS CAT II",
            ApproachType::IlsCatIII => "ILS CAT III",
            ApproachType::Vor => "VOR",
            ApproachType::Rnav => "RNAV",
            ApproachType::RnavGps => "RNAV (GPS)",
            ApproachType::Ndb => "NDB",
            ApproachType::LocOnly => "LOC only",
            ApproachType::Circling => "Circling",
            ApproachType::Visual => "Visual",
        }
    }

    /// ILS without a CAT II/III qualifier
    pub fn is_plain_ils(self) -> bool {
        matches!(self, ApproachType::Ils)
    }
}

impl fmt::Display for ApproachType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runways in use for arrivals and departures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRunways {
    /// Arrival runway designators, best wind alignment first
    pub arrival: Vec<String>,
    /// Departure runway designators
    pub departure: Vec<String>,
}

impl ActiveRunways {
    /// Same runway set for arrivals and departures
    pub fn shared(designators: Vec<String>) -> Self {
        Self {
            arrival: designators.clone(),
            departure: designators,
        }
    }

    /// True when arrivals and departures use the same set
    pub fn is_shared(&self) -> bool {
        self.arrival == self.departure
    }
}

/// Fully compiled ATIS snapshot
///
/// Built once per generation call by [`crate::simulation::AtisGenerator`] and
/// never modified afterwards. `full_text` is the rendered broadcast of every
/// other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtisRecord {
    /// Airport the broadcast is for
    pub airport: Airport,
    /// Phonetic information letter (e.g. "Kilo")
    pub information_letter: String,
    /// Observation time
    pub observation_time: DateTime<Utc>,
    /// Surface wind
    pub wind: WindState,
    /// Prevailing visibility; 9999 reads as 10 km or more
    pub visibility: Meters,
    /// Runway visual range, only in low visibility
    pub rvr: Option<Vec<RvrEntry>>,
    /// Present weather codes (ICAO, e.g. "-SHRA")
    pub weather: Option<Vec<String>>,
    /// Cloud layers, strictly ascending; empty under CAVOK
    pub clouds: Vec<CloudLayer>,
    /// Ceiling and visibility OK
    pub cavok: bool,
    /// Air temperature
    pub temperature: Celsius,
    /// Dewpoint, never above `temperature`
    pub dewpoint: Celsius,
    /// Altimeter setting
    pub qnh: Hectopascals,
    /// Transition level (flight level)
    pub transition_level: u16,
    /// Runways in use
    pub active_runways: ActiveRunways,
    /// Expected approach
    pub approach_type: ApproachType,
    /// Free-text remarks
    pub remarks: Option<String>,
    /// Tier the record was generated at
    pub difficulty: DifficultyTier,
    /// Rendered broadcast text
    pub full_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_labels_match_serde() {
        for approach in [
            ApproachType::Ils,
            ApproachType::IlsCatII,
            ApproachType::IlsCatIII,
            ApproachType::RnavGps,
            ApproachType::LocOnly,
            ApproachType::Visual,
        ] {
            let json = serde_json::to_string(&approach).unwrap();
            assert_eq!(json, format!("\"{}\"", approach.as_str()));
        }
    }

    #[test]
    fn test_only_cat_one_is_plain_ils() {
        assert!(ApproachType::Ils.is_plain_ils());
        assert!(!ApproachType::IlsCatII.is_plain_ils());
        assert!(!ApproachType::IlsCatIII.is_plain_ils());
        assert!(!ApproachType::LocOnly.is_plain_ils());
    }

    #[test]
    fn test_shared_runways() {
        let runways = ActiveRunways::shared(vec!["25".to_string()]);
        assert!(runways.is_shared());
        let split = ActiveRunways {
            arrival: vec!["25R".to_string()],
            departure: vec!["18".to_string()],
        };
        assert!(!split.is_shared());
    }
}
