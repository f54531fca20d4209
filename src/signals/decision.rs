//! Bias classification and trade recommendation

use crate::models::analysis::{Bias, BiasStrength, EntryType, TradeAction};
use crate::models::axes::{Containment, PricePosition};
use crate::models::scenario::Scenario;
use crate::signals::weights::StrengthThresholds;

/// Classify bias from the two side scores.
///
/// A tie is always NEUTRAL/CONFLICTED; otherwise the tier follows the
/// absolute score difference.
pub fn determine_bias(bullish: u32, bearish: u32) -> (Bias, BiasStrength) {
    let bias = if bullish > bearish {
        Bias::Bullish
    } else if bearish > bullish {
        Bias::Bearish
    } else {
        return (Bias::Neutral, BiasStrength::Conflicted);
    };

    (bias, strength_for(bullish.abs_diff(bearish)))
}

pub fn strength_for(score_diff: u32) -> BiasStrength {
    if score_diff >= StrengthThresholds::VERY_STRONG {
        BiasStrength::VeryStrong
    } else if score_diff >= StrengthThresholds::STRONG {
        BiasStrength::Strong
    } else if score_diff >= StrengthThresholds::MODERATE {
        BiasStrength::Moderate
    } else {
        BiasStrength::Weak
    }
}

/// First matching rule wins: conflicts, strong bias, moderate bias, wait.
pub fn recommend(
    scenario: &Scenario,
    bias: Bias,
    strength: BiasStrength,
    has_conflicts: bool,
) -> (TradeAction, EntryType) {
    if has_conflicts {
        return (TradeAction::DoNotTrade, EntryType::ConflictingSignals);
    }

    match (bias, strength) {
        (Bias::Bullish, s) if s.is_strong() => (TradeAction::LookForLong, long_entry(scenario)),
        (Bias::Bearish, s) if s.is_strong() => (TradeAction::LookForShort, short_entry(scenario)),
        (Bias::Bullish, BiasStrength::Moderate) => {
            (TradeAction::CautiousLong, EntryType::ConservativePosition)
        }
        (Bias::Bearish, BiasStrength::Moderate) => {
            (TradeAction::CautiousShort, EntryType::ConservativePosition)
        }
        _ => (TradeAction::Wait, EntryType::InsufficientAlignment),
    }
}

fn long_entry(scenario: &Scenario) -> EntryType {
    match scenario.price_position {
        PricePosition::PullbackToTrendFloor | PricePosition::AboveTrendBelowReference => {
            EntryType::PullbackToSupport
        }
        _ if scenario.containment == Containment::CloseInVwap => EntryType::BreakoutAboveVwapBand,
        _ => EntryType::BreakoutContinuation,
    }
}

fn short_entry(scenario: &Scenario) -> EntryType {
    match scenario.price_position {
        PricePosition::RejectionFromTrendCeiling | PricePosition::BelowTrendAboveReference => {
            EntryType::PullbackToResistance
        }
        _ if scenario.containment == Containment::CloseInVwap => EntryType::BreakoutBelowVwapBand,
        _ => EntryType::BreakoutContinuation,
    }
}
