//! Unit tests for the scenario analyzer

use regime_analyzer::models::analysis::{
    Bias, BiasStrength, EntryType, FindingCode, Severity, TradeAction,
};
use regime_analyzer::models::axes::{
    BandPosition, Containment, PricePosition, TrendPosition, VolumeState,
};
use regime_analyzer::models::scenario::{Scenario, ScenarioInput};
use regime_analyzer::scenarios::generate_scenarios;
use regime_analyzer::signals::conflicts::detect_conflicts;
use regime_analyzer::signals::engine::{analyze, ScenarioAnalyzer};
use regime_analyzer::signals::{AnalysisError, RuleWeights};

#[test]
fn fully_aligned_bullish_scenario() {
    let scenario = Scenario::new(
        Containment::Separated,
        TrendPosition::Above,
        BandPosition::High,
        BandPosition::High,
        PricePosition::AboveBoth,
    );
    let result = analyze(&scenario);

    assert_eq!(result.bullish_score, 11);
    assert_eq!(result.bearish_score, 1);
    assert_eq!(result.bias, Bias::Bullish);
    assert_eq!(result.bias_strength, BiasStrength::VeryStrong);
    assert!(result.conflicts.is_empty());
    assert_eq!(result.trade_action, TradeAction::LookForLong);
    assert_eq!(result.entry_type, EntryType::BreakoutContinuation);
    assert_eq!(result.signals.len(), 5);
    assert!(result.warnings.is_empty());
}

#[test]
fn band_against_trend_blocks_trading() {
    let scenario = Scenario::new(
        Containment::Overlap,
        TrendPosition::Below,
        BandPosition::High,
        BandPosition::Neutral,
        PricePosition::BelowBoth,
    );
    let result = analyze(&scenario);

    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].severity, Severity::Major);
    assert_eq!(result.trade_action, TradeAction::DoNotTrade);
    assert_eq!(result.entry_type, EntryType::ConflictingSignals);
    // 3 bullish from band 1; 3 trend + 2 price bearish
    assert_eq!((result.bullish_score, result.bearish_score), (3, 5));
    assert_eq!(result.bias, Bias::Bearish);
}

#[test]
fn all_neutral_compression_with_mixed_price_waits() {
    let scenario = Scenario::new(
        Containment::CloseInVwap,
        TrendPosition::Within,
        BandPosition::Neutral,
        BandPosition::Neutral,
        PricePosition::AboveTrendBelowReference,
    );
    let result = analyze(&scenario);

    assert_eq!((result.bullish_score, result.bearish_score), (1, 0));
    assert_eq!(result.bias_strength, BiasStrength::Weak);
    assert_eq!(result.trade_action, TradeAction::Wait);
    assert_eq!(result.entry_type, EntryType::InsufficientAlignment);
    assert!(result.signals.is_empty());
    let codes: Vec<_> = result.warnings.iter().map(|w| w.code).collect();
    assert_eq!(
        codes,
        vec![
            FindingCode::NeutralZone,
            FindingCode::NeutralConfirmation,
            FindingCode::RangingMomentum,
            FindingCode::Compression,
            FindingCode::MixedAboveTrend,
        ]
    );
}

#[test]
fn all_neutral_without_fresh_volume_turn_is_neutral() {
    let scenario = Scenario::new(
        Containment::CloseInVwap,
        TrendPosition::Within,
        BandPosition::Neutral,
        BandPosition::Neutral,
        PricePosition::AboveTrendBelowReference,
    )
    .with_volume(VolumeState {
        rising: true,
        just_turned: false,
    });
    let result = analyze(&scenario);

    assert_eq!((result.bullish_score, result.bearish_score), (0, 0));
    assert_eq!(result.bias, Bias::Neutral);
    assert_eq!(result.bias_strength, BiasStrength::Conflicted);
    assert_eq!(result.trade_action, TradeAction::Wait);
}

#[test]
fn scores_stay_within_bounds() {
    for scenario in generate_scenarios() {
        let result = analyze(&scenario);
        assert!(result.bullish_score <= RuleWeights::max_side_score());
        assert!(result.bearish_score <= RuleWeights::max_side_score());
    }
    assert_eq!(RuleWeights::max_side_score(), 11);
}

#[test]
fn tie_iff_neutral_iff_conflicted() {
    for scenario in generate_scenarios() {
        let result = analyze(&scenario);
        let tied = result.bullish_score == result.bearish_score;
        assert_eq!(tied, result.bias == Bias::Neutral, "scenario {}", scenario.id);
        assert_eq!(
            tied,
            result.bias_strength == BiasStrength::Conflicted,
            "scenario {}",
            scenario.id
        );
    }
}

#[test]
fn conflicts_gate_action_but_never_scores() {
    for scenario in generate_scenarios() {
        let result = analyze(&scenario);
        assert_eq!(result.conflicts, detect_conflicts(&scenario));
        if result.has_conflicts() {
            assert_eq!(result.trade_action, TradeAction::DoNotTrade);
        } else {
            assert_ne!(result.trade_action, TradeAction::DoNotTrade);
        }
    }

    // Same scores whether or not the band/trend pair conflicts
    let aligned = analyze(&Scenario::new(
        Containment::Overlap,
        TrendPosition::Above,
        BandPosition::High,
        BandPosition::Neutral,
        PricePosition::AboveBoth,
    ));
    let conflicted = analyze(&Scenario::new(
        Containment::Overlap,
        TrendPosition::Above,
        BandPosition::Low,
        BandPosition::Neutral,
        PricePosition::AboveBoth,
    ));
    assert_eq!(aligned.bullish_score - 3, conflicted.bullish_score);
    assert_eq!(conflicted.bearish_score, 3);
    assert!(conflicted.has_conflicts());
}

#[test]
fn analysis_is_deterministic() {
    for scenario in generate_scenarios() {
        let first = analyze(&scenario);
        let second = analyze(&scenario);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}

#[test]
fn analyze_input_validates_before_scoring() {
    let valid = ScenarioInput::from(&Scenario::new(
        Containment::VwapInClose,
        TrendPosition::Below,
        BandPosition::Low,
        BandPosition::Low,
        PricePosition::BelowBoth,
    ));
    let (scenario, result) = ScenarioAnalyzer::analyze_input(valid).expect("valid input");
    assert_eq!(scenario.id, 243);
    assert_eq!((result.bullish_score, result.bearish_score), (1, 11));
    assert_eq!(result.trade_action, TradeAction::LookForShort);

    let mut invalid = ScenarioInput::from(&scenario);
    invalid.band2_value = 3;
    assert!(matches!(
        ScenarioAnalyzer::analyze_input(invalid),
        Err(AnalysisError::InvalidScenario {
            field: "band2_value",
            ..
        })
    ));
}
