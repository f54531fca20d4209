//! Unit tests for conflict detection

use regime_analyzer::models::analysis::{FindingCode, FindingKind, Severity};
use regime_analyzer::models::axes::{BandPosition, Containment, PricePosition, TrendPosition};
use regime_analyzer::models::scenario::Scenario;
use regime_analyzer::signals::conflicts::detect_conflicts;

fn scenario(trend: TrendPosition, band1: BandPosition, band2: BandPosition) -> Scenario {
    Scenario::new(Containment::Overlap, trend, band1, band2, PricePosition::AboveBoth)
}

#[test]
fn band1_high_against_trend_below_is_major() {
    let conflicts = detect_conflicts(&scenario(
        TrendPosition::Below,
        BandPosition::High,
        BandPosition::Neutral,
    ));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, Severity::Major);
    assert_eq!(conflicts[0].kind, FindingKind::Conflict);
    assert_eq!(conflicts[0].code, FindingCode::BandBullishTrendBelow);
}

#[test]
fn band1_low_against_trend_above_is_major() {
    let conflicts = detect_conflicts(&scenario(
        TrendPosition::Above,
        BandPosition::Low,
        BandPosition::Low,
    ));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].code, FindingCode::BandBearishTrendAbove);
}

#[test]
fn opposing_bands_are_minor() {
    let conflicts = detect_conflicts(&scenario(
        TrendPosition::Within,
        BandPosition::Low,
        BandPosition::High,
    ));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, Severity::Minor);
    assert_eq!(conflicts[0].code, FindingCode::BandDisagreement);
}

#[test]
fn major_and_minor_can_stack() {
    let conflicts = detect_conflicts(&scenario(
        TrendPosition::Below,
        BandPosition::High,
        BandPosition::Low,
    ));
    let severities: Vec<_> = conflicts.iter().map(|c| c.severity).collect();
    assert_eq!(severities, vec![Severity::Major, Severity::Minor]);
}

#[test]
fn aligned_or_neutral_states_raise_nothing() {
    assert!(detect_conflicts(&scenario(
        TrendPosition::Above,
        BandPosition::High,
        BandPosition::High,
    ))
    .is_empty());
    assert!(detect_conflicts(&scenario(
        TrendPosition::Below,
        BandPosition::Neutral,
        BandPosition::High,
    ))
    .is_empty());
    assert!(detect_conflicts(&scenario(
        TrendPosition::Within,
        BandPosition::High,
        BandPosition::Neutral,
    ))
    .is_empty());
}
