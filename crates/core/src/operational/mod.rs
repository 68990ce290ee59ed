//! Operational selectors
//!
//! These turn the drawn weather into what a controller would publish: the
//! transition level for the current QNH, the runways in use for the wind,
//! the expected approach for the conditions and any remarks.

pub mod approach;
pub mod remarks;
pub mod runway;

pub use approach::select_approach;
pub use remarks::select_remarks;
pub use runway::select_runways;

use crate::core_types::units::Hectopascals;

/// Transition level (flight level) for a QNH at a 5000 ft transition altitude
///
/// Lower pressure pushes the level up so the transition layer never gets
/// thinner than the regional minimum.
pub fn transition_level(qnh: Hectopascals) -> u16 {
    match qnh.get() {
        1031.. => 60,
        1014..=1030 => 70,
        996..=1013 => 80,
        _ => 90,
    }
}
