//! Core types shared by the generators, the compiler and the renderer

pub mod airport;
pub mod record;
pub mod units;
pub mod weather;

pub use airport::*;
pub use record::*;
pub use units::*;
pub use weather::*;
