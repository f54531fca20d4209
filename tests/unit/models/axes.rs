//! Unit tests for indicator axes

use regime_analyzer::models::axes::{BandPosition, Containment, PricePosition, TrendPosition};
use strum::IntoEnumIterator;

#[test]
fn axis_iteration_follows_declaration_order() {
    let containment: Vec<_> = Containment::iter().collect();
    assert_eq!(
        containment,
        vec![
            Containment::CloseInVwap,
            Containment::VwapInClose,
            Containment::Separated,
            Containment::Overlap,
        ]
    );

    for (index, state) in Containment::iter().enumerate() {
        assert_eq!(state.ordinal(), index);
    }
    for (index, state) in TrendPosition::iter().enumerate() {
        assert_eq!(state.ordinal(), index);
    }
    for (index, state) in BandPosition::iter().enumerate() {
        assert_eq!(state.ordinal(), index);
    }
    for (index, state) in PricePosition::iter().enumerate() {
        assert_eq!(state.ordinal(), index);
    }
}

#[test]
fn axis_counts_match_iteration() {
    assert_eq!(Containment::iter().count(), Containment::COUNT);
    assert_eq!(TrendPosition::iter().count(), TrendPosition::COUNT);
    assert_eq!(BandPosition::iter().count(), BandPosition::COUNT);
    assert_eq!(PricePosition::iter().count(), PricePosition::COUNT);
}

#[test]
fn band_values_round_trip() {
    assert_eq!(BandPosition::High.value(), 2);
    assert_eq!(BandPosition::Low.value(), -2);
    assert_eq!(BandPosition::Neutral.value(), 0);
    for band in BandPosition::iter() {
        assert_eq!(BandPosition::from_value(band.value()), Some(band));
    }
    assert_eq!(BandPosition::from_value(1), None);
    assert_eq!(BandPosition::from_value(-4), None);
}

#[test]
fn bands_oppose_only_across_high_and_low() {
    assert!(BandPosition::High.opposes(BandPosition::Low));
    assert!(BandPosition::Low.opposes(BandPosition::High));
    assert!(!BandPosition::High.opposes(BandPosition::High));
    assert!(!BandPosition::High.opposes(BandPosition::Neutral));
    assert!(!BandPosition::Neutral.opposes(BandPosition::Low));
}

#[test]
fn price_codes_are_unique_and_parse_back() {
    let codes: Vec<_> = PricePosition::iter().map(PricePosition::code).collect();
    let mut unique = codes.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), codes.len());

    for position in PricePosition::iter() {
        assert_eq!(PricePosition::from_code(position.code()), Some(position));
    }
    assert_eq!(PricePosition::from_code("above"), None);
}

#[test]
fn labels_name_the_band() {
    assert_eq!(BandPosition::High.label(1), "HIGH BAND 1");
    assert_eq!(BandPosition::Low.label(2), "LOW BAND 2");
    assert_eq!(BandPosition::Neutral.label(1), "NEUTRAL 1");
    assert_eq!(Containment::Overlap.to_string(), "OVERLAP");
    assert_eq!(TrendPosition::Within.to_string(), "WITHIN P3D VWAP");
}
