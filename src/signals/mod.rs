//! Rule evaluation engine.

pub mod conflicts;
pub mod decision;
pub mod engine;
pub mod error;
pub mod rules;
pub mod weights;

pub use conflicts::*;
pub use decision::*;
pub use engine::{analyze, ScenarioAnalyzer};
pub use error::AnalysisError;
pub use rules::*;
pub use weights::*;
