//! Decision-policy configuration: scoring thresholds as explicit,
//! named, versioned objects passed into the engine at call time.

pub mod thresholds;

pub use thresholds::{PolicyConfig, ReviewBand};
