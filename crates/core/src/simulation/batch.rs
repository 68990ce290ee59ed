//! Parallel batch generation
//!
//! Each record gets its own `ChaCha8Rng` seeded with `seed + index`, so a
//! batch is reproducible no matter how rayon schedules the work.

use crate::core_types::airport::Airport;
use crate::core_types::record::AtisRecord;
use crate::error::AtisError;
use crate::simulation::difficulty::{DifficultyTier, PerTier, TierWeights};
use crate::simulation::AtisGenerator;
use chrono::{DateTime, Utc};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

/// Records generated per tier
pub type TierCounts = PerTier<usize>;

/// What to generate
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// Number of records
    pub count: usize,
    /// Base seed; record `i` uses `seed + i`
    pub seed: u64,
    /// Tier distribution, ignored when `fixed_tier` is set
    pub weights: TierWeights,
    /// Generate every record at this tier
    pub fixed_tier: Option<DifficultyTier>,
    /// Restrict to these ICAO codes; `None` uses the whole catalog
    pub airports: Option<Vec<String>>,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 0,
            weights: TierWeights::default(),
            fixed_tier: None,
            airports: None,
        }
    }
}

/// Generated records, in index order, with their tier distribution
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Records
    pub records: Vec<AtisRecord>,
    /// How many records landed in each tier
    pub tier_counts: TierCounts,
}

fn resolve_airports<'a>(
    generator: &'a AtisGenerator,
    request: &BatchRequest,
) -> Result<Vec<&'a Airport>, AtisError> {
    let reference = generator.reference();
    let airports = match &request.airports {
        Some(codes) => codes
            .iter()
            .map(|icao| {
                reference
                    .find_airport(icao)
                    .ok_or_else(|| AtisError::UnknownAirport(icao.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => reference.airports.iter().collect(),
    };
    if airports.is_empty() {
        return Err(AtisError::NoAirports);
    }
    Ok(airports)
}

/// Generate a batch of records in parallel
///
/// # Errors
/// [`AtisError::UnknownAirport`] for an ICAO code missing from the catalog,
/// [`AtisError::NoAirports`] when there is nothing to generate for and
/// [`AtisError::InvalidWeights`] when the tier weights are negative or all zero.
pub fn generate_batch(
    generator: &AtisGenerator,
    request: &BatchRequest,
    now: DateTime<Utc>,
) -> Result<BatchReport, AtisError> {
    let airports = resolve_airports(generator, request)?;
    let tiers = WeightedIndex::new(request.weights.as_array())
        .map_err(|e| AtisError::InvalidWeights(e.to_string()))?;

    info!(
        count = request.count,
        seed = request.seed,
        airports = airports.len(),
        "Generating ATIS batch"
    );

    let records: Vec<AtisRecord> = (0..request.count)
        .into_par_iter()
        .map(|index| {
            let mut rng = ChaCha8Rng::seed_from_u64(request.seed.wrapping_add(index as u64));
            let tier = request
                .fixed_tier
                .unwrap_or_else(|| DifficultyTier::ALL[tiers.sample(&mut rng)]);
            let airport = airports.choose(&mut rng).copied();
            generator.generate_for_tier(&mut rng, airport, tier, now)
        })
        .collect();

    let mut tier_counts = TierCounts::default();
    for record in &records {
        *tier_counts.get_mut(record.difficulty) += 1;
    }

    info!(
        super_easy = tier_counts.super_easy,
        easy = tier_counts.easy,
        medium = tier_counts.medium,
        hard = tier_counts.hard,
        "Batch complete"
    );

    Ok(BatchReport {
        records,
        tier_counts,
    })
}
