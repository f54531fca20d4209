//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod axes;
pub mod scenario;

pub use analysis::{
    AnalysisResult, Bias, BiasStrength, EntryType, Finding, FindingCode, FindingKind,
    ParseLabelError, RuleId, Severity, TradeAction,
};
pub use axes::{BandPosition, Containment, PricePosition, TrendPosition, VolumeState};
pub use scenario::{Scenario, ScenarioInput};
