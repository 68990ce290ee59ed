//! Error type for the fallible edges of the engine
//!
//! Generating a record never fails: unknown tiers, empty runway lists and
//! exhausted cloud ladders all degrade to documented fallbacks. Errors only
//! come from loading or validating reference data, setting up a batch, and
//! writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by reference-data loading, batch setup and output
#[derive(Debug, Error)]
pub enum AtisError {
    /// Reference data file could not be read
    #[error("failed to read reference data from {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reference data JSON did not match the expected shape
    #[error("failed to parse reference data: {0}")]
    Parse(#[source] serde_json::Error),

    /// A record could not be serialized or written
    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reference data broke an invariant
    #[error("invalid reference data: {field}: {reason}")]
    InvalidReference {
        /// Offending field, dotted path
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// ICAO code not in the airport catalog
    #[error("unknown airport '{0}'")]
    UnknownAirport(String),

    /// Nothing to generate for
    #[error("no airports available for generation")]
    NoAirports,

    /// Tier weights cannot form a distribution
    #[error("invalid tier weights: {0}")]
    InvalidWeights(String),
}

impl AtisError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AtisError::InvalidReference {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
