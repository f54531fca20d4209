//! Regime analyzer: enumerates discrete indicator-state scenarios, scores
//! each with a fixed rule set and classifies it into a directional bias,
//! strength tier and trade recommendation.

pub mod catalog;
pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod scenarios;
pub mod signals;

pub use catalog::{AnalyzedScenario, ScenarioCatalog};
pub use models::{AnalysisResult, Scenario};
pub use scenarios::generate_scenarios;
pub use signals::{analyze, AnalysisError};
