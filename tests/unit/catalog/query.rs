//! Unit tests for catalog lookups, filters, sorting and stats

use regime_analyzer::catalog::{self, ScenarioCatalog, ScenarioQuery, SortKey};
use regime_analyzer::models::analysis::{Bias, BiasStrength};

#[test]
fn catalog_holds_every_scenario_in_id_order() {
    let catalog = ScenarioCatalog::build();
    assert_eq!(catalog.len(), 648);
    assert!(!catalog.is_empty());
    for (index, entry) in catalog.all().iter().enumerate() {
        assert_eq!(entry.scenario.id as usize, index);
    }
}

#[test]
fn lookup_by_id() {
    let catalog = ScenarioCatalog::build();
    assert_eq!(catalog.get(324).unwrap().scenario.id, 324);
    assert!(catalog.get(648).is_none());
}

#[test]
fn global_catalog_is_built_once() {
    let first = catalog::global();
    let second = catalog::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.all(), ScenarioCatalog::build().all());
}

#[test]
fn stats_match_reference_counts() {
    let stats = ScenarioCatalog::build().stats();
    assert_eq!(stats.total, 648);
    assert_eq!(stats.bullish, 296);
    assert_eq!(stats.bearish, 296);
    assert_eq!(stats.neutral, 56);
    assert_eq!(stats.tradeable, 232);
    assert_eq!(stats.conflicted, 240);
}

#[test]
fn default_query_sorts_by_score_difference_stably() {
    let catalog = ScenarioCatalog::build();
    let rows = catalog.query(&ScenarioQuery::default());
    assert_eq!(rows.len(), 648);
    assert!(rows
        .windows(2)
        .all(|w| w[0].analysis.score_difference() >= w[1].analysis.score_difference()));
    assert_eq!(rows[0].scenario.id, 0);
    assert_eq!(rows[0].analysis.score_difference(), 10);

    // Ties keep generation order
    assert!(rows.windows(2).all(|w| {
        w[0].analysis.score_difference() != w[1].analysis.score_difference()
            || w[0].scenario.id < w[1].scenario.id
    }));
}

#[test]
fn sort_by_raw_scores() {
    let catalog = ScenarioCatalog::build();

    let bullish = catalog.query(&ScenarioQuery::default().sorted_by(SortKey::Bullish));
    assert_eq!(bullish[0].scenario.id, 162);
    assert_eq!(bullish[0].analysis.bullish_score, 11);
    assert!(bullish
        .windows(2)
        .all(|w| w[0].analysis.bullish_score >= w[1].analysis.bullish_score));

    let bearish = catalog.query(&ScenarioQuery::default().sorted_by(SortKey::Bearish));
    assert_eq!(bearish[0].scenario.id, 243);
    assert_eq!(bearish[0].analysis.bearish_score, 11);

    let by_id = catalog.query(&ScenarioQuery::default().sorted_by(SortKey::Id));
    assert_eq!(by_id[0].scenario.id, 0);
    assert_eq!(by_id[647].scenario.id, 647);
}

#[test]
fn filters_combine() {
    let catalog = ScenarioCatalog::build();

    let bullish = catalog.query(&ScenarioQuery::default().with_bias(Bias::Bullish));
    assert_eq!(bullish.len(), 296);
    assert!(bullish.iter().all(|e| e.analysis.bias == Bias::Bullish));

    let strong_bullish = catalog.query(
        &ScenarioQuery::default()
            .with_bias(Bias::Bullish)
            .with_strength(BiasStrength::Strong),
    );
    assert_eq!(strong_bullish.len(), 72);

    let conflicted = catalog.query(&ScenarioQuery::default().with_strength(BiasStrength::Conflicted));
    assert_eq!(conflicted.len(), 56);
    assert!(conflicted.iter().all(|e| e.analysis.bias == Bias::Neutral));
}

#[test]
fn queries_do_not_mutate_the_catalog() {
    let catalog = ScenarioCatalog::build();
    let before = catalog.all().to_vec();
    let _ = catalog.query(&ScenarioQuery::default().sorted_by(SortKey::Bearish));
    let _ = catalog.query(&ScenarioQuery::default().with_bias(Bias::Neutral));
    assert_eq!(catalog.all(), before.as_slice());
}

#[test]
fn sort_keys_parse() {
    assert_eq!("score".parse::<SortKey>().unwrap(), SortKey::ScoreDifference);
    assert_eq!("Bullish".parse::<SortKey>().unwrap(), SortKey::Bullish);
    assert_eq!("bearish".parse::<SortKey>().unwrap(), SortKey::Bearish);
    assert_eq!("id".parse::<SortKey>().unwrap(), SortKey::Id);
    assert!("random".parse::<SortKey>().is_err());
}
