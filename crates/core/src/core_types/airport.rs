//! Airport and runway identity records

use crate::core_types::units::{Feet, Meters};
use serde::{Deserialize, Serialize};

/// Transition altitude used across the modeled (DACH) region
pub const TRANSITION_ALTITUDE: Feet = Feet::new(5000);

/// A single runway direction at an airport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    /// Runway designator as painted on the threshold (e.g. "25R")
    pub designator: String,
    /// Magnetic heading in degrees, `[0, 360)`
    pub heading: u16,
    /// Usable length
    pub length_m: Meters,
    /// Whether an ILS serves this runway direction
    pub ils: bool,
}

impl Runway {
    /// Create a runway record
    pub fn new(designator: &str, heading: u16, length_m: u32, ils: bool) -> Self {
        Self {
            designator: designator.to_string(),
            heading,
            length_m: Meters::new(length_m),
            ils,
        }
    }
}

/// Airport identity plus its runway list
///
/// The ICAO code is the unique key. Runway order is preserved as given and
/// only matters as the tie-break when two runways align equally with the wind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO location indicator (e.g. "EDDF")
    pub icao: String,
    /// Display name, used as the broadcast header
    pub name: String,
    /// City served
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Field elevation
    pub elevation_ft: Feet,
    /// Transition altitude (fixed for the modeled region)
    pub transition_altitude: Feet,
    /// Default ATIS frequency, as printed on charts
    pub default_freq: String,
    /// Runway directions
    pub runways: Vec<Runway>,
}

impl Airport {
    /// Create an airport in the modeled region
    pub fn new(
        icao: &str,
        name: &str,
        city: &str,
        country: &str,
        elevation_ft: u32,
        default_freq: &str,
        runways: Vec<Runway>,
    ) -> Self {
        Self {
            icao: icao.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            elevation_ft: Feet::new(elevation_ft),
            transition_altitude: TRANSITION_ALTITUDE,
            default_freq: default_freq.to_string(),
            runways,
        }
    }

    /// Stand-in used when the catalog is empty and no airport was supplied
    pub fn unlisted() -> Self {
        Self::new("ZZZZ", "Unlisted", "", "", 0, "", Vec::new())
    }

    /// Look up a runway by designator
    pub fn runway(&self, designator: &str) -> Option<&Runway> {
        self.runways.iter().find(|r| r.designator == designator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_lookup() {
        let airport = Airport::new(
            "EDDS",
            "Stuttgart",
            "Stuttgart",
            "DE",
            1276,
            "126.125",
            vec![Runway::new("07", 70, 3345, true), Runway::new("25", 250, 3345, true)],
        );
        assert_eq!(airport.runway("25").map(|r| r.heading), Some(250));
        assert!(airport.runway("09").is_none());
        assert_eq!(airport.transition_altitude, TRANSITION_ALTITUDE);
    }
}
