//! Core utilities shared by every layer of the engine
//!
//! - utils/  - logging macros (must be declared first for macro export!)
//! - rng     - seeded random source used by seeding and cascades

#[macro_use]
pub mod utils;
pub mod rng;
