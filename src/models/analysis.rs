//! Analysis records attached to a scenario

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiasStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    /// Scores tied, no directional edge
    Conflicted,
}

impl BiasStrength {
    pub fn is_strong(self) -> bool {
        matches!(self, BiasStrength::Strong | BiasStrength::VeryStrong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    LookForLong,
    LookForShort,
    CautiousLong,
    CautiousShort,
    Wait,
    DoNotTrade,
}

impl TradeAction {
    pub fn is_tradeable(self) -> bool {
        matches!(self, TradeAction::LookForLong | TradeAction::LookForShort)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    ConflictingSignals,
    PullbackToSupport,
    PullbackToResistance,
    BreakoutAboveVwapBand,
    BreakoutBelowVwapBand,
    BreakoutContinuation,
    ConservativePosition,
    InsufficientAlignment,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Bias::Bullish => "BULLISH",
            Bias::Bearish => "BEARISH",
            Bias::Neutral => "NEUTRAL",
        };
        f.write_str(text)
    }
}

impl fmt::Display for BiasStrength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            BiasStrength::VeryStrong => "VERY STRONG",
            BiasStrength::Strong => "STRONG",
            BiasStrength::Moderate => "MODERATE",
            BiasStrength::Weak => "WEAK",
            BiasStrength::Conflicted => "CONFLICTED",
        };
        f.write_str(text)
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            TradeAction::LookForLong => "LOOK FOR LONG",
            TradeAction::LookForShort => "LOOK FOR SHORT",
            TradeAction::CautiousLong => "CAUTIOUS LONG",
            TradeAction::CautiousShort => "CAUTIOUS SHORT",
            TradeAction::Wait => "WAIT",
            TradeAction::DoNotTrade => "DO NOT TRADE",
        };
        f.write_str(text)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            EntryType::ConflictingSignals => "Conflicting signals",
            EntryType::PullbackToSupport => "Pullback entry to trend support",
            EntryType::PullbackToResistance => "Pullback entry to trend resistance",
            EntryType::BreakoutAboveVwapBand => "Wait for breakout above VWAP band",
            EntryType::BreakoutBelowVwapBand => "Wait for breakout below VWAP band",
            EntryType::BreakoutContinuation => "Breakout entry on continuation",
            EntryType::ConservativePosition => "Conservative position, tight stops",
            EntryType::InsufficientAlignment => "Insufficient alignment for entry",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Uppercase and fold spaces/hyphens to underscores: "very strong" -> "VERY_STRONG"
fn normalize_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl FromStr for Bias {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "BULLISH" => Ok(Bias::Bullish),
            "BEARISH" => Ok(Bias::Bearish),
            "NEUTRAL" => Ok(Bias::Neutral),
            _ => Err(ParseLabelError {
                kind: "bias",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for BiasStrength {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "VERY_STRONG" => Ok(BiasStrength::VeryStrong),
            "STRONG" => Ok(BiasStrength::Strong),
            "MODERATE" => Ok(BiasStrength::Moderate),
            "WEAK" => Ok(BiasStrength::Weak),
            "CONFLICTED" => Ok(BiasStrength::Conflicted),
            _ => Err(ParseLabelError {
                kind: "strength",
                value: s.to_string(),
            }),
        }
    }
}

/// Rule block that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Band1,
    Band2,
    TrendReference,
    Containment,
    PricePosition,
    BandTrendConflict,
    BandAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Signal,
    Warning,
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Caution,
    Minor,
    Major,
}

/// Message template id; display text is resolved by the report layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCode {
    PrimaryBullishBias,
    PrimaryBearishBias,
    NeutralZone,
    BullishConfirmation,
    BearishConfirmation,
    NeutralConfirmation,
    BullishMomentum,
    BearishMomentum,
    RangingMomentum,
    Compression,
    Expansion,
    Separation,
    Transitional,
    BullishPositioning,
    BearishPositioning,
    MixedAboveTrend,
    MixedBelowTrend,
    PullbackToSupport,
    RejectionFromResistance,
    BandBullishTrendBelow,
    BandBearishTrendAbove,
    BandDisagreement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub kind: FindingKind,
    pub severity: Severity,
    pub code: FindingCode,
}

impl Finding {
    pub fn signal(rule: RuleId, code: FindingCode) -> Self {
        Self {
            rule,
            kind: FindingKind::Signal,
            severity: Severity::Info,
            code,
        }
    }

    pub fn warning(rule: RuleId, code: FindingCode) -> Self {
        Self {
            rule,
            kind: FindingKind::Warning,
            severity: Severity::Caution,
            code,
        }
    }

    pub fn conflict(rule: RuleId, severity: Severity, code: FindingCode) -> Self {
        Self {
            rule,
            kind: FindingKind::Conflict,
            severity,
            code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub bullish_score: u32,
    pub bearish_score: u32,
    pub bias: Bias,
    pub bias_strength: BiasStrength,
    pub signals: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub conflicts: Vec<Finding>,
    pub trade_action: TradeAction,
    pub entry_type: EntryType,
}

impl AnalysisResult {
    pub fn score_difference(&self) -> u32 {
        self.bullish_score.abs_diff(self.bearish_score)
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
