//! Process-wide analyzed scenario table, built once and never mutated.

pub mod query;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::info;

use crate::models::analysis::AnalysisResult;
use crate::models::scenario::Scenario;
use crate::scenarios::generate_scenarios;
use crate::signals::engine::ScenarioAnalyzer;

pub use query::{CatalogStats, ScenarioQuery, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedScenario {
    pub scenario: Scenario,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    entries: Vec<AnalyzedScenario>,
}

static GLOBAL_CATALOG: Lazy<ScenarioCatalog> = Lazy::new(ScenarioCatalog::build);

/// Shared read-only catalog, built on first access
pub fn global() -> &'static ScenarioCatalog {
    &GLOBAL_CATALOG
}

impl ScenarioCatalog {
    /// Generate every scenario and analyze each one once
    pub fn build() -> Self {
        let entries: Vec<AnalyzedScenario> = generate_scenarios()
            .into_iter()
            .map(|scenario| AnalyzedScenario {
                analysis: ScenarioAnalyzer::analyze(&scenario),
                scenario,
            })
            .collect();

        info!(scenarios = entries.len(), "scenario catalog built");
        Self { entries }
    }

    pub fn all(&self) -> &[AnalyzedScenario] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids equal positions, so lookup is direct indexing
    pub fn get(&self, id: u32) -> Option<&AnalyzedScenario> {
        self.entries.get(id as usize)
    }

    pub fn query(&self, query: &ScenarioQuery) -> Vec<&AnalyzedScenario> {
        query.apply(&self.entries)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::collect(&self.entries)
    }
}
