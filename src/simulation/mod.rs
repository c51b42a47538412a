//! Random application generation for stress testing and benches.
//!
//! Nothing here is reachable from the appraisal path — the engine stays
//! deterministic; randomness is for fixtures only.

pub mod scenario;

pub use scenario::{generate_complete_application, generate_random_application, ScenarioConfig};
