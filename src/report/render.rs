use serde::Serialize;

use crate::catalog::AnalyzedScenario;
use crate::models::analysis::{Finding, FindingCode, FindingKind, RuleId, Severity};

pub fn rule_tag(rule: RuleId) -> &'static str {
    match rule {
        RuleId::Band1 => "Band 1",
        RuleId::Band2 => "Band 2",
        RuleId::TrendReference => "Momentum",
        RuleId::Containment => "Structure",
        RuleId::PricePosition => "Price",
        RuleId::BandTrendConflict => "Band/Trend",
        RuleId::BandAlignment => "Band 1/2",
    }
}

pub fn message(code: FindingCode) -> &'static str {
    match code {
        FindingCode::PrimaryBullishBias => "Primary bullish bias (HIGH BAND 1)",
        FindingCode::PrimaryBearishBias => "Primary bearish bias (LOW BAND 1)",
        FindingCode::NeutralZone => "Neutral zone - no clear bias",
        FindingCode::BullishConfirmation => "Bullish confirmation (HIGH BAND 2)",
        FindingCode::BearishConfirmation => "Bearish confirmation (LOW BAND 2)",
        FindingCode::NeutralConfirmation => "Neutral confirmation",
        FindingCode::BullishMomentum => "Strong bullish momentum (ST ABOVE P3D)",
        FindingCode::BearishMomentum => "Strong bearish momentum (ST BELOW P3D)",
        FindingCode::RangingMomentum => "Ranging momentum (ST WITHIN P3D)",
        FindingCode::Compression => "Compression (CLOSE IN VWAP) - Breakout pending",
        FindingCode::Expansion => "Expansion phase (VWAP IN CLOSE) - Trending",
        FindingCode::Separation => "Clear separation - Strong trend expected",
        FindingCode::Transitional => "Partial overlap - Transitional",
        FindingCode::BullishPositioning => "Above ST & VWAP - Bullish positioning",
        FindingCode::BearishPositioning => "Below ST & VWAP - Bearish positioning",
        FindingCode::MixedAboveTrend => "Above ST but below VWAP - Mixed signal",
        FindingCode::MixedBelowTrend => "Below ST but above VWAP - Mixed signal",
        FindingCode::PullbackToSupport => "Pullback to ST support zone",
        FindingCode::RejectionFromResistance => "Rejection from ST resistance zone",
        FindingCode::BandBullishTrendBelow => "Band 1 bullish but ST below P3D VWAP",
        FindingCode::BandBearishTrendAbove => "Band 1 bearish but ST above P3D VWAP",
        FindingCode::BandDisagreement => "Band 1/2 conflict: Different bias levels",
    }
}

/// "Band 1: Primary bullish bias (HIGH BAND 1)", or "MAJOR: ..." for major conflicts
pub fn render_finding(finding: &Finding) -> String {
    match (finding.kind, finding.severity) {
        (FindingKind::Conflict, Severity::Major) => format!("MAJOR: {}", message(finding.code)),
        (FindingKind::Conflict, _) => message(finding.code).to_string(),
        _ => format!("{}: {}", rule_tag(finding.rule), message(finding.code)),
    }
}

pub fn render_findings(findings: &[Finding]) -> Vec<String> {
    findings.iter().map(render_finding).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisLabels {
    pub containment: String,
    pub trend: String,
    pub band1: String,
    pub band2: String,
    pub price_position: String,
    pub price_position_code: String,
}

/// Display-ready view of one analyzed scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub id: u32,
    pub labels: AxisLabels,
    pub band1_value: i32,
    pub band2_value: i32,
    pub vol_rising: bool,
    pub vol_just_turned: bool,
    pub bullish_score: u32,
    pub bearish_score: u32,
    pub score_difference: u32,
    pub bias: String,
    pub bias_strength: String,
    pub trade_action: String,
    pub entry_type: String,
    pub signals: Vec<String>,
    pub warnings: Vec<String>,
    pub conflicts: Vec<String>,
    pub rules_fired: Vec<RuleId>,
}

impl From<&AnalyzedScenario> for ScenarioReport {
    fn from(entry: &AnalyzedScenario) -> Self {
        let scenario = &entry.scenario;
        let analysis = &entry.analysis;

        let rules_fired: Vec<RuleId> = analysis
            .signals
            .iter()
            .chain(&analysis.warnings)
            .chain(&analysis.conflicts)
            .map(|finding| finding.rule)
            .collect();

        Self {
            id: scenario.id,
            labels: AxisLabels {
                containment: scenario.containment.label().to_string(),
                trend: scenario.trend.label().to_string(),
                band1: scenario.band1.label(1),
                band2: scenario.band2.label(2),
                price_position: scenario.price_position.label().to_string(),
                price_position_code: scenario.price_position.code().to_string(),
            },
            band1_value: scenario.band1.value(),
            band2_value: scenario.band2.value(),
            vol_rising: scenario.volume.rising,
            vol_just_turned: scenario.volume.just_turned,
            bullish_score: analysis.bullish_score,
            bearish_score: analysis.bearish_score,
            score_difference: analysis.score_difference(),
            bias: analysis.bias.to_string(),
            bias_strength: analysis.bias_strength.to_string(),
            trade_action: analysis.trade_action.to_string(),
            entry_type: analysis.entry_type.to_string(),
            signals: render_findings(&analysis.signals),
            warnings: render_findings(&analysis.warnings),
            conflicts: render_findings(&analysis.conflicts),
            rules_fired,
        }
    }
}
