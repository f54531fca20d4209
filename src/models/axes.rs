//! Indicator axes: each a closed set of mutually exclusive states.
//!
//! Variant declaration order is the generation order, so reordering a
//! variant changes every scenario id downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship between the close band and the VWAP band
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Containment {
    CloseInVwap,
    VwapInClose,
    Separated,
    /// No containment flag set
    Overlap,
}

impl Containment {
    pub const COUNT: usize = 4;

    pub fn ordinal(self) -> usize {
        match self {
            Containment::CloseInVwap => 0,
            Containment::VwapInClose => 1,
            Containment::Separated => 2,
            Containment::Overlap => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Containment::CloseInVwap => "CLOSE IN VWAP",
            Containment::VwapInClose => "VWAP IN CLOSE",
            Containment::Separated => "SEPARATED",
            Containment::Overlap => "OVERLAP",
        }
    }
}

/// SuperTrend average relative to the prior 3-day VWAP
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendPosition {
    Above,
    Below,
    Within,
}

impl TrendPosition {
    pub const COUNT: usize = 3;

    pub fn ordinal(self) -> usize {
        match self {
            TrendPosition::Above => 0,
            TrendPosition::Below => 1,
            TrendPosition::Within => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrendPosition::Above => "ABOVE P3D VWAP",
            TrendPosition::Below => "BELOW P3D VWAP",
            TrendPosition::Within => "WITHIN P3D VWAP",
        }
    }
}

/// Prior-day close position against a deviation band.
/// Shared by band 1 (primary bias) and band 2 (confirmation).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BandPosition {
    High,
    Low,
    Neutral,
}

impl BandPosition {
    pub const COUNT: usize = 3;

    pub fn ordinal(self) -> usize {
        match self {
            BandPosition::High => 0,
            BandPosition::Low => 1,
            BandPosition::Neutral => 2,
        }
    }

    /// Encoded band value: +2 high, -2 low, 0 neutral
    pub fn value(self) -> i32 {
        match self {
            BandPosition::High => 2,
            BandPosition::Low => -2,
            BandPosition::Neutral => 0,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            2 => Some(BandPosition::High),
            -2 => Some(BandPosition::Low),
            0 => Some(BandPosition::Neutral),
            _ => None,
        }
    }

    /// True when one band reads high and the other low
    pub fn opposes(self, other: BandPosition) -> bool {
        matches!(
            (self, other),
            (BandPosition::High, BandPosition::Low) | (BandPosition::Low, BandPosition::High)
        )
    }

    pub fn label(self, band: u8) -> String {
        let level = match self {
            BandPosition::High => "HIGH BAND",
            BandPosition::Low => "LOW BAND",
            BandPosition::Neutral => "NEUTRAL",
        };
        format!("{} {}", level, band)
    }
}

/// Close price position at the bar where volume turned rising
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricePosition {
    AboveBoth,
    AboveTrendBelowReference,
    BelowTrendAboveReference,
    BelowBoth,
    /// Between SuperTrend minimum and average
    PullbackToTrendFloor,
    /// Between SuperTrend maximum and average
    RejectionFromTrendCeiling,
}

impl PricePosition {
    pub const COUNT: usize = 6;

    pub fn ordinal(self) -> usize {
        match self {
            PricePosition::AboveBoth => 0,
            PricePosition::AboveTrendBelowReference => 1,
            PricePosition::BelowTrendAboveReference => 2,
            PricePosition::BelowBoth => 3,
            PricePosition::PullbackToTrendFloor => 4,
            PricePosition::RejectionFromTrendCeiling => 5,
        }
    }

    /// Stable wire code
    pub fn code(self) -> &'static str {
        match self {
            PricePosition::AboveBoth => "above_both",
            PricePosition::AboveTrendBelowReference => "above_st_below_vwap",
            PricePosition::BelowTrendAboveReference => "below_st_above_vwap",
            PricePosition::BelowBoth => "below_both",
            PricePosition::PullbackToTrendFloor => "between_st",
            PricePosition::RejectionFromTrendCeiling => "between_st_down",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "above_both" => Some(PricePosition::AboveBoth),
            "above_st_below_vwap" => Some(PricePosition::AboveTrendBelowReference),
            "below_st_above_vwap" => Some(PricePosition::BelowTrendAboveReference),
            "below_both" => Some(PricePosition::BelowBoth),
            "between_st" => Some(PricePosition::PullbackToTrendFloor),
            "between_st_down" => Some(PricePosition::RejectionFromTrendCeiling),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PricePosition::AboveBoth => "Above ST Avg & VWAP",
            PricePosition::AboveTrendBelowReference => "Above ST Avg, Below VWAP",
            PricePosition::BelowTrendAboveReference => "Below ST Avg, Above VWAP",
            PricePosition::BelowBoth => "Below Both ST Avg & VWAP",
            PricePosition::PullbackToTrendFloor => "Between ST Min & Avg",
            PricePosition::RejectionFromTrendCeiling => "Between ST Max & Avg",
        }
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TrendPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PricePosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Volume regime. Generated scenarios only cover volume that just turned
/// rising; other states switch the price position rule off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeState {
    pub rising: bool,
    pub just_turned: bool,
}

impl VolumeState {
    pub const TURNED_RISING: VolumeState = VolumeState {
        rising: true,
        just_turned: true,
    };
}
