//! Read-only projections over the analyzed set

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

use crate::catalog::AnalyzedScenario;
use crate::models::analysis::{Bias, BiasStrength, ParseLabelError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Absolute bullish/bearish difference, largest first
    #[default]
    ScoreDifference,
    Bullish,
    Bearish,
    Id,
}

impl FromStr for SortKey {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" | "score_difference" | "difference" => Ok(SortKey::ScoreDifference),
            "bullish" => Ok(SortKey::Bullish),
            "bearish" => Ok(SortKey::Bearish),
            "id" => Ok(SortKey::Id),
            _ => Err(ParseLabelError {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioQuery {
    pub bias: Option<Bias>,
    pub strength: Option<BiasStrength>,
    pub sort: SortKey,
}

impl ScenarioQuery {
    pub fn with_bias(mut self, bias: Bias) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn with_strength(mut self, strength: BiasStrength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, entry: &AnalyzedScenario) -> bool {
        self.bias.map_or(true, |bias| entry.analysis.bias == bias)
            && self
                .strength
                .map_or(true, |strength| entry.analysis.bias_strength == strength)
    }

    /// Filter then stable-sort; ties keep generation order
    pub fn apply<'a>(&self, entries: &'a [AnalyzedScenario]) -> Vec<&'a AnalyzedScenario> {
        let mut selected: Vec<&AnalyzedScenario> =
            entries.iter().filter(|entry| self.matches(entry)).collect();

        match self.sort {
            SortKey::ScoreDifference => {
                selected.sort_by_key(|e| Reverse(e.analysis.score_difference()))
            }
            SortKey::Bullish => selected.sort_by_key(|e| Reverse(e.analysis.bullish_score)),
            SortKey::Bearish => selected.sort_by_key(|e| Reverse(e.analysis.bearish_score)),
            SortKey::Id => selected.sort_by_key(|e| e.scenario.id),
        }

        selected
    }
}

/// Aggregate counts over the analyzed set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub bullish: usize,
    pub bearish: usize,
    pub neutral: usize,
    /// LOOK FOR LONG or LOOK FOR SHORT
    pub tradeable: usize,
    /// At least one conflict raised
    pub conflicted: usize,
}

impl CatalogStats {
    pub fn collect(entries: &[AnalyzedScenario]) -> Self {
        entries.iter().fold(
            CatalogStats {
                total: entries.len(),
                ..Default::default()
            },
            |mut stats, entry| {
                match entry.analysis.bias {
                    Bias::Bullish => stats.bullish += 1,
                    Bias::Bearish => stats.bearish += 1,
                    Bias::Neutral => stats.neutral += 1,
                }
                if entry.analysis.trade_action.is_tradeable() {
                    stats.tradeable += 1;
                }
                if entry.analysis.has_conflicts() {
                    stats.conflicted += 1;
                }
                stats
            },
        )
    }
}
