//! Flat storage rows for records and airports
//!
//! Records are flattened into one row per broadcast referencing the airport by
//! a store-assigned id. Wind is split into scalar columns; RVR, weather,
//! clouds and runways stay structured sub-documents.

use crate::core_types::airport::{Airport, Runway};
use crate::core_types::record::{ActiveRunways, ApproachType, AtisRecord};
use crate::core_types::units::{Celsius, Feet, Hectopascals, Knots, Meters};
use crate::core_types::weather::{CloudLayer, RvrEntry};
use crate::error::AtisError;
use crate::simulation::difficulty::DifficultyTier;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One stored ATIS broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRecord {
    /// Airport foreign key
    pub airport: u64,
    pub information_letter: String,
    /// RFC 3339, UTC
    pub observation_time: String,
    /// 0 when calm
    pub wind_direction: u16,
    pub wind_speed: Knots,
    pub wind_gust: Option<Knots>,
    pub wind_variable_from: Option<u16>,
    pub wind_variable_to: Option<u16>,
    pub visibility_meters: Meters,
    pub rvr: Option<Vec<RvrEntry>>,
    pub weather_phenomena: Option<Vec<String>>,
    pub clouds: Vec<CloudLayer>,
    pub cavok: bool,
    pub temperature: Celsius,
    pub dewpoint: Celsius,
    pub qnh: Hectopascals,
    pub active_runways: ActiveRunways,
    pub approach_type: ApproachType,
    pub transition_level: u16,
    pub remarks: Option<String>,
    pub full_text: String,
    pub difficulty: DifficultyTier,
}

/// One stored airport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRow {
    pub icao: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub elevation_ft: Feet,
    pub transition_altitude: Feet,
    pub default_freq: String,
    pub runways: Vec<Runway>,
}

/// Flatten a record for insertion under `airport_id`
pub fn to_storage_format(record: &AtisRecord, airport_id: u64) -> StorageRecord {
    let variable = record.wind.variable();
    StorageRecord {
        airport: airport_id,
        information_letter: record.information_letter.clone(),
        observation_time: record
            .observation_time
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        wind_direction: record.wind.direction(),
        wind_speed: record.wind.speed(),
        wind_gust: record.wind.gust(),
        wind_variable_from: variable.map(|arc| arc.from),
        wind_variable_to: variable.map(|arc| arc.to),
        visibility_meters: record.visibility,
        rvr: record.rvr.clone(),
        weather_phenomena: record.weather.clone(),
        clouds: record.clouds.clone(),
        cavok: record.cavok,
        temperature: record.temperature,
        dewpoint: record.dewpoint,
        qnh: record.qnh,
        active_runways: record.active_runways.clone(),
        approach_type: record.approach_type,
        transition_level: record.transition_level,
        remarks: record.remarks.clone(),
        full_text: record.full_text.clone(),
        difficulty: record.difficulty,
    }
}

/// Flatten an airport for insertion
pub fn airport_storage_format(airport: &Airport) -> AirportRow {
    AirportRow {
        icao: airport.icao.clone(),
        name: airport.name.clone(),
        city: airport.city.clone(),
        country: airport.country.clone(),
        elevation_ft: airport.elevation_ft,
        transition_altitude: airport.transition_altitude,
        default_freq: airport.default_freq.clone(),
        runways: airport.runways.clone(),
    }
}

/// Write each row as one line of JSON
///
/// # Errors
/// Returns [`AtisError::Serialize`] if a row cannot be serialized or the
/// writer fails.
pub fn write_json_lines<W, T>(mut writer: W, rows: &[T]) -> Result<(), AtisError>
where
    W: Write,
    T: Serialize,
{
    for row in rows {
        serde_json::to_writer(&mut writer, row).map_err(AtisError::Serialize)?;
        writer
            .write_all(b"\n")
            .map_err(|e| AtisError::Serialize(serde_json::Error::io(e)))?;
    }
    writer
        .flush()
        .map_err(|e| AtisError::Serialize(serde_json::Error::io(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::weather::{CloudCover, DirectionalWind, RvrTrend, VariableArc, WindState};
    use crate::simulation::AtisGenerator;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::{json, Value};

    fn record() -> AtisRecord {
        let generator = AtisGenerator::builtin();
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 9, 41, 27).unwrap();
        let mut record = generator.generate(&mut ChaCha8Rng::seed_from_u64(5), None, "hard", now);
        record.wind = WindState::Directional(DirectionalWind {
            direction: 350,
            speed: Knots::new(5),
            gust: None,
            variable: Some(VariableArc { from: 310, to: 30 }),
        });
        record.rvr = Some(vec![RvrEntry {
            runway: "25R".into(),
            value: Meters::new(600),
            trend: RvrTrend::Unreported,
        }]);
        record.clouds = vec![CloudLayer {
            cover: CloudCover::Overcast,
            height_ft: Feet::new(200),
            cb: true,
        }];
        record.cavok = false;
        record
    }

    #[test]
    fn test_storage_row_shape() {
        let row = to_storage_format(&record(), 17);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["airport"], json!(17));
        assert_eq!(value["wind_direction"], json!(350));
        assert_eq!(value["wind_speed"], json!(5));
        assert_eq!(value["wind_gust"], Value::Null);
        assert_eq!(value["wind_variable_from"], json!(310));
        assert_eq!(value["wind_variable_to"], json!(30));
        assert_eq!(value["rvr"], json!([{"runway": "25R", "value": 600, "trend": ""}]));
        assert_eq!(value["clouds"], json!([{"type": "OVC", "height_ft": 200, "cb": true}]));
        assert_eq!(value["difficulty"], json!("hard"));
        assert!(value["observation_time"].as_str().unwrap().ends_with(":00Z"));
    }

    #[test]
    fn test_calm_wind_row() {
        let mut record = record();
        record.wind = WindState::Calm;
        let row = to_storage_format(&record, 1);
        assert_eq!(row.wind_direction, 0);
        assert_eq!(row.wind_speed, Knots::new(0));
        assert_eq!(row.wind_gust, None);
        assert_eq!(row.wind_variable_from, None);
    }

    #[test]
    fn test_json_lines() {
        let rows = vec![to_storage_format(&record(), 1), to_storage_format(&record(), 2)];
        let mut out = Vec::new();
        write_json_lines(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let back: StorageRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back, rows[1]);
    }

    #[test]
    fn test_airport_row() {
        let generator = AtisGenerator::builtin();
        let airport = generator.reference().find_airport("EDDF").unwrap();
        let value = serde_json::to_value(airport_storage_format(airport)).unwrap();
        assert_eq!(value["icao"], json!("EDDF"));
        assert_eq!(value["transition_altitude"], json!(5000));
        assert!(value["runways"].as_array().is_some_and(|r| !r.is_empty()));
    }
}
