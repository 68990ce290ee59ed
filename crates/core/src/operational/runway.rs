//! Active runway selection

use crate::core_types::airport::{Airport, Runway};
use crate::core_types::record::ActiveRunways;
use crate::core_types::weather::WindState;
use crate::simulation::difficulty::DifficultyProfile;
use rand::Rng;
use tracing::warn;

/// Designator published when an airport has no runway data
pub const FALLBACK_RUNWAY: &str = "09";

/// Airports with fewer runway directions than this only ever use one
pub const MIN_RUNWAYS_FOR_PARALLEL_OPS: usize = 4;

/// Smallest angle between two bearings, `[0, 180]`
pub fn angular_difference(a: u16, b: u16) -> u16 {
    let diff = a.abs_diff(b) % 360;
    if diff > 180 {
        360 - diff
    } else {
        diff
    }
}

/// Pick the runways in use, best aligned with the wind first
///
/// Calm wind counts as a wind from 0°. Ties keep the airport's runway order.
/// Arrivals and departures share the selected set.
pub fn select_runways<R: Rng + ?Sized>(
    rng: &mut R,
    airport: &Airport,
    wind: &WindState,
    profile: &DifficultyProfile,
) -> ActiveRunways {
    if airport.runways.is_empty() {
        warn!(icao = %airport.icao, "Airport has no runway data, using fallback runway");
        return ActiveRunways::shared(vec![FALLBACK_RUNWAY.to_string()]);
    }

    let wind_direction = wind.direction();
    let mut ranked: Vec<&Runway> = airport.runways.iter().collect();
    ranked.sort_by_key(|runway| angular_difference(wind_direction, runway.heading));

    let count = if profile.single_runway_only || airport.runways.len() < MIN_RUNWAYS_FOR_PARALLEL_OPS
    {
        1
    } else {
        rng.random_range(1..=2)
    };

    ActiveRunways::shared(
        ranked
            .into_iter()
            .take(count)
            .map(|runway| runway.designator.clone())
            .collect(),
    )
}
