//! Scenario enumeration.

pub mod generator;

pub use generator::{generate_scenarios, SCENARIO_COUNT};
