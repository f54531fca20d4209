//! Conflict detection. Conflicts never touch the scores; they only gate
//! the trade recommendation.

use crate::models::analysis::{Finding, FindingCode, RuleId, Severity};
use crate::models::axes::{BandPosition, TrendPosition};
use crate::models::scenario::Scenario;

pub fn detect_conflicts(scenario: &Scenario) -> Vec<Finding> {
    let mut conflicts = Vec::new();

    match (scenario.band1, scenario.trend) {
        (BandPosition::High, TrendPosition::Below) => conflicts.push(Finding::conflict(
            RuleId::BandTrendConflict,
            Severity::Major,
            FindingCode::BandBullishTrendBelow,
        )),
        (BandPosition::Low, TrendPosition::Above) => conflicts.push(Finding::conflict(
            RuleId::BandTrendConflict,
            Severity::Major,
            FindingCode::BandBearishTrendAbove,
        )),
        _ => {}
    }

    if scenario.band1.opposes(scenario.band2) {
        conflicts.push(Finding::conflict(
            RuleId::BandAlignment,
            Severity::Minor,
            FindingCode::BandDisagreement,
        ));
    }

    conflicts
}
