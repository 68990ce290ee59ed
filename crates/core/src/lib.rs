//! ATIS Generation Core Library
//!
//! Procedurally generates ATIS (Automatic Terminal Information Service)
//! broadcasts for pilot training. Weather, runway and approach state is drawn
//! consistently for a real airport at one of four difficulty tiers and
//! rendered into standard ICAO phraseology.
//!
//! ## Generation
//!
//! - Atmospheric generators: wind, visibility and RVR, present weather,
//!   clouds, temperature and dewpoint, QNH
//! - Operational selectors: transition level, active runways, approach type,
//!   remarks
//! - Report compiler and phraseology renderer
//! - Parallel batch generation and a flat storage format
//!
//! ```
//! use atis_core::AtisGenerator;
//!
//! let generator = AtisGenerator::builtin();
//! let record = generator.generate_seeded(42, None, "easy");
//! assert!(record.full_text.contains("QNH"));
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Read-only tables and airport catalog
pub mod reference;

// Generation engine
pub mod operational;
pub mod phraseology;
pub mod simulation;
pub mod weather;

// Re-export core types
pub use core_types::{
    ActiveRunways, Airport, ApproachType, AtisRecord, CloudCover, CloudLayer, Runway, RvrEntry,
    RvrTrend, WindState,
};
pub use error::AtisError;
pub use reference::ReferenceData;

// Re-export generation entry points
pub use simulation::{
    generate_batch, to_storage_format, AtisGenerator, BatchReport, BatchRequest, DifficultyProfile,
    DifficultyTier, StorageRecord, TierWeights,
};
