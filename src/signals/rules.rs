//! The five scoring rule blocks.
//!
//! Blocks run in a fixed order; the order only affects how findings are
//! listed, never the scores.

use crate::models::analysis::{Finding, FindingCode, RuleId};
use crate::models::axes::{BandPosition, Containment, PricePosition, TrendPosition};
use crate::models::scenario::Scenario;
use crate::signals::weights::RuleWeights;

/// Running scores and findings for one scenario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    pub bullish: u32,
    pub bearish: u32,
    pub signals: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Scorecard {
    fn award_bullish(&mut self, weight: u32, rule: RuleId, code: FindingCode) {
        self.bullish += weight;
        self.signals.push(Finding::signal(rule, code));
    }

    fn award_bearish(&mut self, weight: u32, rule: RuleId, code: FindingCode) {
        self.bearish += weight;
        self.signals.push(Finding::signal(rule, code));
    }

    fn warn(&mut self, rule: RuleId, code: FindingCode) {
        self.warnings.push(Finding::warning(rule, code));
    }
}

/// Run every rule block against a scenario
pub fn score_scenario(scenario: &Scenario) -> Scorecard {
    let mut card = Scorecard::default();
    apply_band1(&mut card, scenario.band1);
    apply_band2(&mut card, scenario.band2);
    apply_trend_reference(&mut card, scenario.trend);
    apply_containment(&mut card, scenario.containment);
    if scenario.volume.just_turned {
        apply_price_position(&mut card, scenario.price_position);
    }
    card
}

/// Primary bias
pub fn apply_band1(card: &mut Scorecard, band: BandPosition) {
    let rule = RuleId::Band1;
    match band {
        BandPosition::High => {
            card.award_bullish(RuleWeights::BAND1, rule, FindingCode::PrimaryBullishBias)
        }
        BandPosition::Low => {
            card.award_bearish(RuleWeights::BAND1, rule, FindingCode::PrimaryBearishBias)
        }
        BandPosition::Neutral => card.warn(rule, FindingCode::NeutralZone),
    }
}

/// Confirmation
pub fn apply_band2(card: &mut Scorecard, band: BandPosition) {
    let rule = RuleId::Band2;
    match band {
        BandPosition::High => {
            card.award_bullish(RuleWeights::BAND2, rule, FindingCode::BullishConfirmation)
        }
        BandPosition::Low => {
            card.award_bearish(RuleWeights::BAND2, rule, FindingCode::BearishConfirmation)
        }
        BandPosition::Neutral => card.warn(rule, FindingCode::NeutralConfirmation),
    }
}

/// Momentum
pub fn apply_trend_reference(card: &mut Scorecard, trend: TrendPosition) {
    let rule = RuleId::TrendReference;
    match trend {
        TrendPosition::Above => {
            card.award_bullish(RuleWeights::TREND_REFERENCE, rule, FindingCode::BullishMomentum)
        }
        TrendPosition::Below => {
            card.award_bearish(RuleWeights::TREND_REFERENCE, rule, FindingCode::BearishMomentum)
        }
        TrendPosition::Within => card.warn(rule, FindingCode::RangingMomentum),
    }
}

/// Structure. Expansion and separation expect a strong move without
/// picking a side, so both scores move together.
pub fn apply_containment(card: &mut Scorecard, containment: Containment) {
    let rule = RuleId::Containment;
    let code = match containment {
        Containment::CloseInVwap => return card.warn(rule, FindingCode::Compression),
        Containment::Overlap => return card.warn(rule, FindingCode::Transitional),
        Containment::VwapInClose => FindingCode::Expansion,
        Containment::Separated => FindingCode::Separation,
    };
    card.bullish += RuleWeights::CONTAINMENT;
    card.bearish += RuleWeights::CONTAINMENT;
    card.signals.push(Finding::signal(rule, code));
}

/// Close position on the bar where volume turned rising
pub fn apply_price_position(card: &mut Scorecard, position: PricePosition) {
    let rule = RuleId::PricePosition;
    match position {
        PricePosition::AboveBoth => {
            card.award_bullish(RuleWeights::PRICE_ALIGNED, rule, FindingCode::BullishPositioning)
        }
        PricePosition::BelowBoth => {
            card.award_bearish(RuleWeights::PRICE_ALIGNED, rule, FindingCode::BearishPositioning)
        }
        PricePosition::AboveTrendBelowReference => {
            card.bullish += RuleWeights::PRICE_PARTIAL;
            card.warn(rule, FindingCode::MixedAboveTrend);
        }
        PricePosition::BelowTrendAboveReference => {
            card.bearish += RuleWeights::PRICE_PARTIAL;
            card.warn(rule, FindingCode::MixedBelowTrend);
        }
        PricePosition::PullbackToTrendFloor => {
            card.award_bullish(RuleWeights::PRICE_PARTIAL, rule, FindingCode::PullbackToSupport)
        }
        PricePosition::RejectionFromTrendCeiling => {
            card.award_bearish(
                RuleWeights::PRICE_PARTIAL,
                rule,
                FindingCode::RejectionFromResistance,
            )
        }
    }
}
