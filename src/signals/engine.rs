//! Scenario analyzer: scenario in, classified analysis out.

use tracing::warn;

use crate::models::analysis::AnalysisResult;
use crate::models::scenario::{Scenario, ScenarioInput};
use crate::signals::conflicts::detect_conflicts;
use crate::signals::decision::{determine_bias, recommend};
use crate::signals::error::AnalysisError;
use crate::signals::rules::score_scenario;

pub struct ScenarioAnalyzer;

impl ScenarioAnalyzer {
    /// Score, classify and recommend for one scenario.
    /// Pure and total over well-formed scenarios.
    pub fn analyze(scenario: &Scenario) -> AnalysisResult {
        let card = score_scenario(scenario);
        let conflicts = detect_conflicts(scenario);
        let (bias, bias_strength) = determine_bias(card.bullish, card.bearish);
        let (trade_action, entry_type) =
            recommend(scenario, bias, bias_strength, !conflicts.is_empty());

        AnalysisResult {
            bullish_score: card.bullish,
            bearish_score: card.bearish,
            bias,
            bias_strength,
            signals: card.signals,
            warnings: card.warnings,
            conflicts,
            trade_action,
            entry_type,
        }
    }

    /// Validate a flag-encoded scenario from an external caller, then analyze it
    pub fn analyze_input(
        input: ScenarioInput,
    ) -> Result<(Scenario, AnalysisResult), AnalysisError> {
        let scenario = Scenario::try_from(input).map_err(|e| {
            warn!(error = %e, "rejected scenario input");
            e
        })?;
        let analysis = Self::analyze(&scenario);
        Ok((scenario, analysis))
    }
}

pub fn analyze(scenario: &Scenario) -> AnalysisResult {
    ScenarioAnalyzer::analyze(scenario)
}
