//! ATIS phraseology
//!
//! Renders a compiled [`AtisRecord`] into the sentence sequence a controller
//! would read out. Rendering is pure: the same record always produces the
//! same text, and every clause ends with a period so the broadcast can be
//! split into sentences for speech synthesis.

use crate::core_types::record::{ActiveRunways, AtisRecord};
use crate::core_types::units::{Celsius, Feet, Meters};
use crate::core_types::weather::{CloudLayer, RvrEntry, WindState};

/// Spoken form of a METAR present-weather code, if it has a fixed phrase
pub fn weather_phrase(code: &str) -> Option<&'static str> {
    let phrase = match code {
        "-RA" => "light rain",
        "RA" => "rain",
        "+RA" => "heavy rain",
        "-SN" => "light snow",
        "SN" => "snow",
        "+SN" => "heavy snow",
        "-SHRA" => "light rain showers",
        "SHRA" => "rain showers",
        "+SHRA" => "heavy rain showers",
        "-SHSN" => "light snow showers",
        "SHSN" => "snow showers",
        "+SHSN" => "heavy snow showers",
        "TSRA" => "thunderstorm with rain",
        "+TSRA" => "heavy thunderstorm with rain",
        "-DZ" => "light drizzle",
        "DZ" => "drizzle",
        "+DZ" => "heavy drizzle",
        "FG" => "fog",
        "BR" => "mist",
        "HZ" => "haze",
        "FU" => "smoke",
        "FZRA" => "freezing rain",
        "FZDZ" => "freezing drizzle",
        "-FZRA" => "light freezing rain",
        "+FZRA" => "heavy freezing rain",
        "GR" => "hail",
        "GS" => "small hail",
        "SQ" => "squalls",
        _ => return None,
    };
    Some(phrase)
}

/// "Wind calm" or "Wind 240 degrees, 15 knots[, gusting ..][, variable between ..]"
pub fn wind_clause(wind: &WindState) -> String {
    let WindState::Directional(wind) = wind else {
        return "Wind calm".to_string();
    };
    let mut text = format!("Wind {:03} degrees, {} knots", wind.direction, wind.speed.get());
    if let Some(gust) = wind.gust {
        text.push_str(&format!(", gusting {} knots", gust.get()));
    }
    if let Some(arc) = wind.variable {
        text.push_str(&format!(
            ", variable between {:03} and {:03} degrees",
            arc.from, arc.to
        ));
    }
    text
}

/// Prevailing visibility followed by any RVR reports
pub fn visibility_clause(visibility: Meters, rvr: Option<&[RvrEntry]>) -> String {
    let mut text = if visibility.is_ten_km_or_more() {
        "Visibility 10 kilometers or more".to_string()
    } else if visibility.get() >= 5000 {
        format!("Visibility {} kilometers", visibility.get() / 1000)
    } else {
        format!("Visibility {} meters", visibility.get())
    };

    if let Some(entries) = rvr.filter(|entries| !entries.is_empty()) {
        let reports: Vec<String> = entries.iter().map(rvr_report).collect();
        text.push_str(". ");
        text.push_str(&reports.join(", "));
    }
    text
}

fn rvr_report(entry: &RvrEntry) -> String {
    let mut text = format!("RVR runway {} {} meters", entry.runway, entry.value.get());
    if let Some(trend) = entry.trend.phrase() {
        text.push(' ');
        text.push_str(trend);
    }
    text
}

/// Present weather phrases, or `None` when nothing is reported
pub fn weather_clause(weather: Option<&[String]>) -> Option<String> {
    let codes = weather.filter(|codes| !codes.is_empty())?;
    let phrases: Vec<String> = codes
        .iter()
        .map(|code| weather_phrase(code).map_or_else(|| code.to_lowercase(), str::to_string))
        .collect();
    Some(phrases.join(", "))
}

/// Cloud base as read out, e.g. "2 thousand 5 hundred"
pub fn height_phrase(height: Feet) -> String {
    let feet = height.get();
    if feet < 1000 {
        return feet.to_string();
    }
    let thousands = feet / 1000;
    let hundreds = (feet % 1000) / 100;
    if hundreds > 0 {
        format!("{thousands} thousand {hundreds} hundred")
    } else {
        format!("{thousands} thousand")
    }
}

/// "CAVOK", "Sky clear" or the layers lowest first
pub fn cloud_clause(clouds: &[CloudLayer], cavok: bool) -> String {
    if cavok {
        return "CAVOK".to_string();
    }
    if clouds.is_empty() {
        return "Sky clear".to_string();
    }
    clouds
        .iter()
        .map(|layer| {
            let mut text = format!(
                "{} at {} feet",
                layer.cover.phrase(),
                height_phrase(layer.height_ft)
            );
            if layer.cb {
                text.push_str(" cumulonimbus");
            }
            text
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn signed(value: Celsius) -> String {
    if value.is_negative() {
        format!("minus {}", value.get().unsigned_abs())
    } else {
        value.get().to_string()
    }
}

/// "Temperature minus 3, dewpoint minus 8"
pub fn temperature_clause(temperature: Celsius, dewpoint: Celsius) -> String {
    format!("Temperature {}, dewpoint {}", signed(temperature), signed(dewpoint))
}

fn runway_clause(runways: &ActiveRunways) -> String {
    let arrival = runways.arrival.join(", ");
    let departure = runways.departure.join(", ");
    if arrival == departure {
        format!("Runway in use {arrival}")
    } else {
        format!("Arrival runway {arrival}, departure runway {departure}")
    }
}

/// Full broadcast text for a record
pub fn render(record: &AtisRecord) -> String {
    let letter = &record.information_letter;
    let mut sentences = vec![
        format!("{} information {letter}", record.airport.name),
        format!("Recorded at {} Zulu", record.observation_time.format("%H%M")),
        runway_clause(&record.active_runways),
        format!("Expect {} approach", record.approach_type),
        format!("Transition level {}", record.transition_level),
        wind_clause(&record.wind),
        visibility_clause(record.visibility, record.rvr.as_deref()),
    ];
    if let Some(weather) = weather_clause(record.weather.as_deref()) {
        sentences.push(format!("Present weather: {weather}"));
    }
    sentences.push(cloud_clause(&record.clouds, record.cavok));
    sentences.push(temperature_clause(record.temperature, record.dewpoint));
    sentences.push(format!("QNH {} hectopascals", record.qnh.get()));
    if let Some(remarks) = record.remarks.as_deref().filter(|r| !r.is_empty()) {
        sentences.push(remarks.to_string());
    }
    sentences.push(format!(
        "Advise on initial contact you have information {letter}"
    ));

    sentences
        .into_iter()
        .map(|sentence| sentence + ".")
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Knots;
    use crate::core_types::weather::{CloudCover, DirectionalWind, RvrTrend, VariableArc};
    use test_case::test_case;

    #[test_case(800, "800")]
    #[test_case(1000, "1 thousand")]
    #[test_case(1500, "1 thousand 5 hundred")]
    #[test_case(2500, "2 thousand 5 hundred")]
    #[test_case(10000, "10 thousand")]
    #[test_case(12000, "12 thousand")]
    fn test_height_phrase(feet: u32, expected: &str) {
        assert_eq!(height_phrase(Feet::new(feet)), expected);
    }

    #[test]
    fn test_wind_clause_forms() {
        assert_eq!(wind_clause(&WindState::Calm), "Wind calm");
        let gusty = WindState::Directional(DirectionalWind {
            direction: 90,
            speed: Knots::new(18),
            gust: Some(Knots::new(30)),
            variable: None,
        });
        assert_eq!(
            wind_clause(&gusty),
            "Wind 090 degrees, 18 knots, gusting 30 knots"
        );
        let variable = WindState::Directional(DirectionalWind {
            direction: 20,
            speed: Knots::new(4),
            gust: None,
            variable: Some(VariableArc { from: 330, to: 70 }),
        });
        assert_eq!(
            wind_clause(&variable),
            "Wind 020 degrees, 4 knots, variable between 330 and 070 degrees"
        );
    }

    #[test_case(9999, "Visibility 10 kilometers or more")]
    #[test_case(7000, "Visibility 7 kilometers")]
    #[test_case(5000, "Visibility 5 kilometers")]
    #[test_case(4000, "Visibility 4000 meters")]
    fn test_visibility_phrasing(meters: u32, expected: &str) {
        assert_eq!(visibility_clause(Meters::new(meters), None), expected);
    }

    #[test]
    fn test_visibility_with_rvr() {
        let rvr = [
            RvrEntry {
                runway: "25R".into(),
                value: Meters::new(550),
                trend: RvrTrend::Improving,
            },
            RvrEntry {
                runway: "25L".into(),
                value: Meters::new(600),
                trend: RvrTrend::Unreported,
            },
        ];
        assert_eq!(
            visibility_clause(Meters::new(400), Some(rvr.as_slice())),
            "Visibility 400 meters. RVR runway 25R 550 meters improving, RVR runway 25L 600 meters"
        );
    }

    #[test]
    fn test_weather_clause_maps_and_lowercases() {
        let codes = vec!["+TSRA".to_string(), "VCSH".to_string()];
        assert_eq!(
            weather_clause(Some(codes.as_slice())).as_deref(),
            Some("heavy thunderstorm with rain, vcsh")
        );
        assert_eq!(weather_clause(None), None);
        assert_eq!(weather_clause(Some(&[] as &[String])), None);
    }

    #[test]
    fn test_cloud_clause() {
        assert_eq!(cloud_clause(&[], true), "CAVOK");
        assert_eq!(cloud_clause(&[], false), "Sky clear");
        let layers = [
            CloudLayer::new(CloudCover::Few, 800),
            CloudLayer {
                cover: CloudCover::Broken,
                height_ft: Feet::new(2500),
                cb: true,
            },
        ];
        assert_eq!(
            cloud_clause(&layers, false),
            "few at 800 feet, broken at 2 thousand 5 hundred feet cumulonimbus"
        );
    }

    #[test]
    fn test_negative_temperatures() {
        assert_eq!(
            format!("{}.", temperature_clause(Celsius::new(-3), Celsius::new(-8))),
            "Temperature minus 3, dewpoint minus 8."
        );
        assert_eq!(
            temperature_clause(Celsius::new(0), Celsius::new(-1)),
            "Temperature 0, dewpoint minus 1"
        );
    }

    #[test]
    fn test_split_runways() {
        let runways = ActiveRunways {
            arrival: vec!["25R".into()],
            departure: vec!["18".into()],
        };
        assert_eq!(
            runway_clause(&runways),
            "Arrival runway 25R, departure runway 18"
        );
        assert_eq!(
            runway_clause(&ActiveRunways::shared(vec!["25R".into(), "25L".into()])),
            "Runway in use 25R, 25L"
        );
    }
}
