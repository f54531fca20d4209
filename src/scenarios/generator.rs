//! Cartesian product of the indicator axes

use strum::IntoEnumIterator;
use tracing::debug;

use crate::models::axes::{BandPosition, Containment, PricePosition, TrendPosition};
use crate::models::scenario::Scenario;

pub const SCENARIO_COUNT: usize = Containment::COUNT
    * TrendPosition::COUNT
    * BandPosition::COUNT
    * BandPosition::COUNT
    * PricePosition::COUNT;

/// Enumerate every scenario, ids assigned in iteration order.
///
/// Containment is the outermost loop and price position the innermost;
/// ids are referenced by consumers, so this order must not change.
pub fn generate_scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(SCENARIO_COUNT);
    let mut id = 0u32;

    for containment in Containment::iter() {
        for trend in TrendPosition::iter() {
            for band1 in BandPosition::iter() {
                for band2 in BandPosition::iter() {
                    for price_position in PricePosition::iter() {
                        let mut scenario =
                            Scenario::new(containment, trend, band1, band2, price_position);
                        scenario.id = id;
                        scenarios.push(scenario);
                        id += 1;
                    }
                }
            }
        }
    }

    debug!(count = scenarios.len(), "generated scenarios");
    scenarios
}
