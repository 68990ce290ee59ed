//! Observed weather state carried by an ATIS record
//!
//! These are the outputs of the atmospheric generators: surface wind, cloud
//! layers and runway visual range. Values are already snapped to the ladders
//! and increments an ATIS reads out, so the phraseology layer never rounds.

use crate::core_types::units::{Feet, Knots, Meters};
use serde::{Deserialize, Serialize};

/// Variable-direction arc for light winds, both ends in `[10, 360]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableArc {
    /// Counter-clockwise end of the arc
    pub from: u16,
    /// Clockwise end of the arc
    pub to: u16,
}

/// Wind with a definite direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalWind {
    /// Direction in degrees, 10-aligned in `[10, 360]`
    pub direction: u16,
    /// Mean speed
    pub speed: Knots,
    /// Gust speed, strictly above `speed` when present
    pub gust: Option<Knots>,
    /// Variable arc, only for speeds of 6 kt or less
    pub variable: Option<VariableArc>,
}

/// Surface wind
///
/// Calm is its own variant so a calm wind can never carry a gust or a
/// variable arc. The accessors report the flat METAR view (direction 0 and
/// speed 0 for calm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindState {
    /// Calm
    Calm,
    /// Directional wind
    Directional(DirectionalWind),
}

impl WindState {
    /// True for calm wind
    pub fn is_calm(&self) -> bool {
        matches!(self, WindState::Calm)
    }

    /// Direction in degrees, 0 when calm
    pub fn direction(&self) -> u16 {
        match self {
            WindState::Calm => 0,
            WindState::Directional(wind) => wind.direction,
        }
    }

    /// Mean speed, 0 when calm
    pub fn speed(&self) -> Knots {
        match self {
            WindState::Calm => Knots::new(0),
            WindState::Directional(wind) => wind.speed,
        }
    }

    /// Gust speed if reported
    pub fn gust(&self) -> Option<Knots> {
        match self {
            WindState::Calm => None,
            WindState::Directional(wind) => wind.gust,
        }
    }

    /// Variable arc if reported
    pub fn variable(&self) -> Option<VariableArc> {
        match self {
            WindState::Calm => None,
            WindState::Directional(wind) => wind.variable,
        }
    }
}

/// Cloud amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudCover {
    /// 1-2 oktas
    #[serde(rename = "FEW")]
    Few,
    /// 3-4 oktas
    #[serde(rename = "SCT")]
    Scattered,
    /// 5-7 oktas
    #[serde(rename = "BKN")]
    Broken,
    /// 8 oktas
    #[serde(rename = "OVC")]
    Overcast,
}

impl CloudCover {
    /// All cloud amounts, thinnest first
    pub const ALL: [CloudCover; 4] = [
        CloudCover::Few,
        CloudCover::Scattered,
        CloudCover::Broken,
        CloudCover::Overcast,
    ];

    /// METAR abbreviation
    pub fn code(self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
        }
    }

    /// Spoken form
    pub fn phrase(self) -> &'static str {
        match self {
            CloudCover::Few => "few",
            CloudCover::Scattered => "scattered",
            CloudCover::Broken => "broken",
            CloudCover::Overcast => "overcast",
        }
    }

    /// Broken and overcast layers form a ceiling
    pub fn forms_ceiling(self) -> bool {
        matches!(self, CloudCover::Broken | CloudCover::Overcast)
    }
}

/// One cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Amount
    #[serde(rename = "type")]
    pub cover: CloudCover,
    /// Base height above aerodrome level
    pub height_ft: Feet,
    /// Cumulonimbus
    pub cb: bool,
}

impl CloudLayer {
    /// Layer without cumulonimbus
    pub fn new(cover: CloudCover, height_ft: u32) -> Self {
        Self {
            cover,
            height_ft: Feet::new(height_ft),
            cb: false,
        }
    }
}

/// RVR tendency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RvrTrend {
    /// "U"
    #[serde(rename = "U")]
    Improving,
    /// "D"
    #[serde(rename = "D")]
    Decreasing,
    /// "N"
    #[serde(rename = "N")]
    NoChange,
    /// Not reported, stored as an empty code
    #[serde(rename = "")]
    Unreported,
}

impl RvrTrend {
    /// All tendencies, including "not reported"
    pub const ALL: [RvrTrend; 4] = [
        RvrTrend::Improving,
        RvrTrend::Decreasing,
        RvrTrend::NoChange,
        RvrTrend::Unreported,
    ];

    /// METAR tendency letter, empty when unreported
    pub fn code(self) -> &'static str {
        match self {
            RvrTrend::Improving => "U",
            RvrTrend::Decreasing => "D",
            RvrTrend::NoChange => "N",
            RvrTrend::Unreported => "",
        }
    }

    /// Spoken form, `None` when unreported
    pub fn phrase(self) -> Option<&'static str> {
        match self {
            RvrTrend::Improving => Some("improving"),
            RvrTrend::Decreasing => Some("decreasing"),
            RvrTrend::NoChange => Some("no change"),
            RvrTrend::Unreported => None,
        }
    }
}

/// Runway visual range for one runway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RvrEntry {
    /// Runway designator
    pub runway: String,
    /// RVR value from the RVR ladder
    pub value: Meters,
    /// Tendency
    pub trend: RvrTrend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calm_accessors() {
        let calm = WindState::Calm;
        assert!(calm.is_calm());
        assert_eq!(calm.direction(), 0);
        assert_eq!(calm.speed(), Knots::new(0));
        assert!(calm.gust().is_none());
        assert!(calm.variable().is_none());
    }

    #[test]
    fn test_ceiling_covers() {
        assert!(!CloudCover::Few.forms_ceiling());
        assert!(!CloudCover::Scattered.forms_ceiling());
        assert!(CloudCover::Broken.forms_ceiling());
        assert!(CloudCover::Overcast.forms_ceiling());
    }

    #[test]
    fn test_storage_shapes() {
        let layer = CloudLayer::new(CloudCover::Broken, 1200);
        let json = serde_json::to_value(layer).unwrap();
        assert_eq!(json["type"], "BKN");
        assert_eq!(json["height_ft"], 1200);
        assert_eq!(json["cb"], false);

        let entry = RvrEntry {
            runway: "25R".to_string(),
            value: Meters::new(550),
            trend: RvrTrend::Unreported,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["trend"], "");
        assert_eq!(json["value"], 550);
    }
}
