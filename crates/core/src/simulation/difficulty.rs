//! Difficulty tiers and their generation profiles
//!
//! Each tier bundles the bounds and probabilities every generator reads, so a
//! trainee starts with CAVOK and calm wind and works up to fog, gusts, CB and
//! windshear alerts. All profile fields are mandatory; the built-in table is
//! [`DifficultyProfile::for_tier`].

use crate::core_types::units::{Celsius, Feet, Hectopascals, Knots, Meters};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Difficulty tier for practice broadcasts
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    /// Perfect weather, simple format
    /// - visibility always 10 km or more
    /// - CAVOK or a single high FEW layer
    /// - round numbers throughout
    SuperEasy,

    /// Good weather with minor variations
    /// - light precipitation or mist only
    /// - at most two cloud layers
    Easy,

    /// Realistic operational conditions
    /// - gusts, RVR, multiple active runways
    #[default]
    Medium,

    /// Challenging conditions
    /// - low visibility, CB, windshear
    /// - unrestricted present weather
    Hard,
}

impl DifficultyTier {
    /// All tiers, easiest first
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::SuperEasy,
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];

    /// Stored name (`super_easy`, `easy`, `medium`, `hard`)
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::SuperEasy => "super_easy",
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
        }
    }

    /// One-line description for listings
    pub fn description(self) -> &'static str {
        match self {
            DifficultyTier::SuperEasy => {
                "Perfect weather, simple format - for learning ATIS structure"
            }
            DifficultyTier::Easy => "Good weather with minor variations - building confidence",
            DifficultyTier::Medium => "Realistic conditions - developing proficiency",
            DifficultyTier::Hard => "Challenging weather - professional readiness",
        }
    }

    /// Resolve a tier name, falling back to [`DifficultyTier::Medium`]
    ///
    /// Unknown names are not an error: they are logged and generation
    /// continues at the default tier.
    pub fn normalize(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(requested = name, "Unknown difficulty tier, using medium");
            DifficultyTier::default()
        })
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unrecognized tier name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty tier '{}'", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for DifficultyTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "super_easy" | "supereasy" => Ok(DifficultyTier::SuperEasy),
            "easy" => Ok(DifficultyTier::Easy),
            "medium" => Ok(DifficultyTier::Medium),
            "hard" => Ok(DifficultyTier::Hard),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

/// One value per tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerTier<T> {
    /// Super easy
    pub super_easy: T,
    /// Easy
    pub easy: T,
    /// Medium
    pub medium: T,
    /// Hard
    pub hard: T,
}

impl<T> PerTier<T> {
    /// Value for a tier
    pub fn get(&self, tier: DifficultyTier) -> &T {
        match tier {
            DifficultyTier::SuperEasy => &self.super_easy,
            DifficultyTier::Easy => &self.easy,
            DifficultyTier::Medium => &self.medium,
            DifficultyTier::Hard => &self.hard,
        }
    }

    /// Mutable value for a tier
    pub fn get_mut(&mut self, tier: DifficultyTier) -> &mut T {
        match tier {
            DifficultyTier::SuperEasy => &mut self.super_easy,
            DifficultyTier::Easy => &mut self.easy,
            DifficultyTier::Medium => &mut self.medium,
            DifficultyTier::Hard => &mut self.hard,
        }
    }

    /// Iterate `(tier, value)` easiest first
    pub fn iter(&self) -> impl Iterator<Item = (DifficultyTier, &T)> {
        DifficultyTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// Inclusive `min..=max` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// Lower bound, inclusive
    pub min: T,
    /// Upper bound, inclusive
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Create a bound pair
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// True when `min <= max`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Inclusive containment
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Generation bounds and probabilities for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Tier this profile belongs to
    pub tier: DifficultyTier,

    /// Visibility range drawn from the visibility ladder
    pub visibility: Bounds<Meters>,
    /// Mean wind speed range
    pub wind_speed: Bounds<Knots>,
    /// QNH range
    pub qnh_range: Bounds<Hectopascals>,
    /// Temperature range
    pub temp_range: Bounds<Celsius>,

    /// Maximum number of cloud layers
    pub max_cloud_layers: u8,
    /// Lowest permitted cloud base
    pub min_ceiling: Feet,

    /// Chance of a gust (only applied at 10 kt or more)
    pub gust_probability: f64,
    /// Chance of present weather
    pub weather_probability: f64,
    /// Chance of a variable arc (only applied at 6 kt or less)
    pub variable_wind_probability: f64,
    /// Chance of CAVOK when visibility is 10 km or more
    pub cavok_probability: f64,
    /// Chance of calm wind
    pub calm_wind_probability: f64,
    /// Chance of RVR when visibility is 1500 m or less
    pub rvr_probability: f64,
    /// Chance of remarks
    pub remarks_probability: f64,
    /// Chance each hard-tier cloud layer is CB
    pub cb_probability: f64,
    /// Chance of the windshear alert (hard tier)
    pub windshear_probability: f64,

    /// Snap wind, visibility, temperature and QNH to round values
    pub use_round_numbers: bool,
    /// Always one active runway
    pub single_runway_only: bool,
    /// ILS/Visual (or Visual/RNAV) only
    pub simple_approach_only: bool,

    /// Maximum number of remarks
    pub max_remarks: u8,
    /// Maximum number of runways with RVR
    pub max_rvr_runways: u8,
    /// Restricts present weather to these codes; `None` builds codes freely
    pub allowed_weather: Option<Vec<String>>,
}

fn codes(list: &[&str]) -> Option<Vec<String>> {
    Some(list.iter().map(ToString::to_string).collect())
}

impl DifficultyProfile {
    /// Built-in profile for a tier
    pub fn for_tier(tier: DifficultyTier) -> Self {
        match tier {
            DifficultyTier::SuperEasy => Self::super_easy(),
            DifficultyTier::Easy => Self::easy(),
            DifficultyTier::Medium => Self::medium(),
            DifficultyTier::Hard => Self::hard(),
        }
    }

    /// Built-in table for all tiers
    pub fn builtin_table() -> PerTier<DifficultyProfile> {
        PerTier {
            super_easy: Self::super_easy(),
            easy: Self::easy(),
            medium: Self::medium(),
            hard: Self::hard(),
        }
    }

    /// Perfect conditions for learning the broadcast structure
    pub fn super_easy() -> Self {
        Self {
            tier: DifficultyTier::SuperEasy,
            visibility: Bounds::new(Meters::new(9999), Meters::new(9999)),
            wind_speed: Bounds::new(Knots::new(0), Knots::new(8)),
            qnh_range: Bounds::new(Hectopascals::new(1010), Hectopascals::new(1025)),
            temp_range: Bounds::new(Celsius::new(10), Celsius::new(25)),
            max_cloud_layers: 1,
            min_ceiling: Feet::new(5000),
            gust_probability: 0.0,
            weather_probability: 0.0,
            variable_wind_probability: 0.0,
            cavok_probability: 0.7,
            calm_wind_probability: 0.3,
            rvr_probability: 0.0,
            remarks_probability: 0.0,
            cb_probability: 0.0,
            windshear_probability: 0.0,
            use_round_numbers: true,
            single_runway_only: true,
            simple_approach_only: true,
            max_remarks: 0,
            max_rvr_runways: 3,
            allowed_weather: None,
        }
    }

    /// Good conditions with minor variations
    pub fn easy() -> Self {
        Self {
            tier: DifficultyTier::Easy,
            visibility: Bounds::new(Meters::new(5000), Meters::new(9999)),
            wind_speed: Bounds::new(Knots::new(3), Knots::new(15)),
            qnh_range: Bounds::new(Hectopascals::new(1005), Hectopascals::new(1030)),
            temp_range: Bounds::new(Celsius::new(5), Celsius::new(28)),
            max_cloud_layers: 2,
            min_ceiling: Feet::new(3000),
            gust_probability: 0.05,
            weather_probability: 0.15,
            variable_wind_probability: 0.1,
            cavok_probability: 0.3,
            calm_wind_probability: 0.1,
            rvr_probability: 0.0,
            remarks_probability: 0.15,
            cb_probability: 0.0,
            windshear_probability: 0.0,
            use_round_numbers: true,
            single_runway_only: true,
            simple_approach_only: true,
            max_remarks: 1,
            max_rvr_runways: 3,
            allowed_weather: codes(&["-RA", "-DZ", "BR"]),
        }
    }

    /// Realistic operational conditions
    pub fn medium() -> Self {
        Self {
            tier: DifficultyTier::Medium,
            visibility: Bounds::new(Meters::new(1500), Meters::new(9999)),
            wind_speed: Bounds::new(Knots::new(5), Knots::new(28)),
            qnh_range: Bounds::new(Hectopascals::new(995), Hectopascals::new(1035)),
            temp_range: Bounds::new(Celsius::new(-5), Celsius::new(32)),
            max_cloud_layers: 3,
            min_ceiling: Feet::new(800),
            gust_probability: 0.25,
            weather_probability: 0.4,
            variable_wind_probability: 0.25,
            cavok_probability: 0.15,
            calm_wind_probability: 0.05,
            rvr_probability: 0.2,
            remarks_probability: 0.35,
            cb_probability: 0.0,
            windshear_probability: 0.0,
            use_round_numbers: false,
            single_runway_only: false,
            simple_approach_only: false,
            max_remarks: 2,
            max_rvr_runways: 2,
            allowed_weather: codes(&[
                "-RA", "RA", "-SN", "SN", "-DZ", "DZ", "BR", "HZ", "-SHRA", "SHRA",
            ]),
        }
    }

    /// Challenging conditions for professional readiness
    pub fn hard() -> Self {
        Self {
            tier: DifficultyTier::Hard,
            visibility: Bounds::new(Meters::new(100), Meters::new(5000)),
            wind_speed: Bounds::new(Knots::new(8), Knots::new(45)),
            qnh_range: Bounds::new(Hectopascals::new(975), Hectopascals::new(1045)),
            temp_range: Bounds::new(Celsius::new(-15), Celsius::new(38)),
            max_cloud_layers: 4,
            min_ceiling: Feet::new(100),
            gust_probability: 0.5,
            weather_probability: 0.75,
            variable_wind_probability: 0.35,
            cavok_probability: 0.0,
            calm_wind_probability: 0.0,
            rvr_probability: 0.6,
            remarks_probability: 0.7,
            cb_probability: 0.15,
            windshear_probability: 0.2,
            use_round_numbers: false,
            single_runway_only: false,
            simple_approach_only: false,
            max_remarks: 3,
            max_rvr_runways: 3,
            allowed_weather: None,
        }
    }

    /// Probabilities by field name, for validation and listings
    pub fn probabilities(&self) -> [(&'static str, f64); 9] {
        [
            ("gust_probability", self.gust_probability),
            ("weather_probability", self.weather_probability),
            ("variable_wind_probability", self.variable_wind_probability),
            ("cavok_probability", self.cavok_probability),
            ("calm_wind_probability", self.calm_wind_probability),
            ("rvr_probability", self.rvr_probability),
            ("remarks_probability", self.remarks_probability),
            ("cb_probability", self.cb_probability),
            ("windshear_probability", self.windshear_probability),
        ]
    }
}

/// Relative weight of each tier when a batch picks tiers at random
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    /// Super easy share
    pub super_easy: f64,
    /// Easy share
    pub easy: f64,
    /// Medium share
    pub medium: f64,
    /// Hard share
    pub hard: f64,
}

impl TierWeights {
    /// Weights in [`DifficultyTier::ALL`] order
    pub fn as_array(&self) -> [f64; 4] {
        [self.super_easy, self.easy, self.medium, self.hard]
    }
}

impl Default for TierWeights {
    /// 20% super easy, 30% easy, 35% medium, 15% hard
    fn default() -> Self {
        Self {
            super_easy: 0.20,
            easy: 0.30,
            medium: 0.35,
            hard: 0.15,
        }
    }
}
