//! Fixed ladders and code tables used by the generators

use crate::core_types::record::ApproachType;
use crate::core_types::units::{Feet, Meters};
use crate::simulation::difficulty::PerTier;
use serde::{Deserialize, Serialize};

/// NATO phonetic alphabet, used for information letters
pub const PHONETIC_ALPHABET: [&str; 26] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliet",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// Reportable visibility values in meters; 9999 is "10 km or more"
pub const VISIBILITY_LADDER: [u32; 26] = [
    100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1200, 1500, 1800, 2000, 2500, 3000,
    3500, 4000, 4500, 5000, 6000, 7000, 8000, 9000, 9999,
];

/// Reportable RVR values in meters
pub const RVR_LADDER: [u32; 23] = [
    50, 75, 100, 125, 150, 175, 200, 250, 300, 350, 400, 450, 500, 550, 600, 700, 800, 900, 1000,
    1200, 1500, 1800, 2000,
];

/// Standard cloud base heights in feet
pub const CLOUD_HEIGHT_LADDER: [u32; 21] = [
    500, 700, 800, 1000, 1200, 1500, 1800, 2000, 2500, 3000, 3500, 4000, 4500, 5000, 6000, 7000,
    8000, 10000, 12000, 15000, 20000,
];

/// Expanded visibility ladder
pub fn visibility_ladder() -> Vec<Meters> {
    VISIBILITY_LADDER.iter().copied().map(Meters::new).collect()
}

/// Expanded RVR ladder
pub fn rvr_ladder() -> Vec<Meters> {
    RVR_LADDER.iter().copied().map(Meters::new).collect()
}

/// Expanded cloud height ladder
pub fn cloud_height_ladder() -> Vec<Feet> {
    CLOUD_HEIGHT_LADDER.iter().copied().map(Feet::new).collect()
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// ICAO present-weather code components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCodeTables {
    /// Intensity prefixes: light, moderate (empty), heavy
    pub intensity: Vec<String>,
    /// All descriptors
    pub descriptor: Vec<String>,
    /// Descriptors combined with precipitation when building free codes
    pub precipitation_descriptor: Vec<String>,
    /// Precipitation types
    pub precipitation: Vec<String>,
    /// Obscurations
    pub obscuration: Vec<String>,
    /// Other phenomena
    pub other: Vec<String>,
}

impl Default for WeatherCodeTables {
    fn default() -> Self {
        Self {
            intensity: owned(&["-", "", "+"]),
            descriptor: owned(&["MI", "BC", "PR", "DR", "BL", "SH", "TS", "FZ"]),
            precipitation_descriptor: owned(&["SH", "TS", "FZ"]),
            precipitation: owned(&["DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS"]),
            obscuration: owned(&["BR", "FG", "FU", "VA", "DU", "SA", "HZ"]),
            other: owned(&["PO", "SQ", "FC", "SS", "DS"]),
        }
    }
}

/// Remarks pools; each tier draws from its own pool plus every easier tier's
pub fn remarks_pools() -> PerTier<Vec<String>> {
    PerTier {
        super_easy: Vec::new(),
        easy: owned(&[
            "RUNWAY SURFACE DRY",
            "BRAKING ACTION GOOD",
            "NOISE ABATEMENT IN EFFECT",
        ]),
        medium: owned(&[
            "BIRD ACTIVITY REPORTED",
            "RUNWAY SURFACE WET",
            "BRAKING ACTION MEDIUM",
            "TAXIWAY ALPHA CLOSED",
            "GLIDER ACTIVITY IN THE VICINITY",
            "CONSTRUCTION WORK SOUTH OF RUNWAY",
            "EXPECT MINOR DELAYS",
        ]),
        hard: owned(&[
            "LOW LEVEL WIND SHEAR REPORTED ON FINAL",
            "BRAKING ACTION POOR",
            "PRECISION APPROACH PATH INDICATOR UNSERVICEABLE",
            "ILS GLIDEPATH UNSERVICEABLE USE LOC ONLY APPROACH",
            "RUNWAY EDGE LIGHTS UNSERVICEABLE",
            "EXPECT HOLDING DUE TRAFFIC",
            "SNOW REMOVAL IN PROGRESS RUNWAY 25",
            "REDUCED RUNWAY LENGTH AVAILABLE 2500 METERS",
            "WAKE TURBULENCE CAUTION HEAVY DEPARTURE PRECEDING",
            "TEMPORARY OBSTACLE CRANE 85 METERS AGL SOUTH OF FIELD",
            "GPS RAIM NOT AVAILABLE",
            "MULTIPLE BIRD STRIKES REPORTED",
            "RUNWAY CONTAMINATION 25 PERCENT COVERAGE WET SNOW",
            "MILITARY EXERCISE ACTIVE NORTH OF FIELD",
        ]),
    }
}

/// Approach types each tier may announce
pub fn approach_types() -> PerTier<Vec<ApproachType>> {
    use ApproachType::{
        Circling, Ils, IlsCatII, IlsCatIII, LocOnly, Ndb, Rnav, RnavGps, Visual, Vor,
    };
    PerTier {
        super_easy: vec![Ils, Visual],
        easy: vec![Ils, Visual, Rnav],
        medium: vec![Ils, IlsCatII, Rnav, RnavGps, Vor, Visual],
        hard: vec![Ils, IlsCatII, IlsCatIII, Rnav, RnavGps, Vor, Ndb, LocOnly, Circling],
    }
}
