//! Rule weights and strength tiers

/// Points each rule block awards to its side
pub struct RuleWeights;

impl RuleWeights {
    pub const BAND1: u32 = 3;
    pub const BAND2: u32 = 2;
    pub const TREND_REFERENCE: u32 = 3;
    /// Awarded to both sides at once
    pub const CONTAINMENT: u32 = 1;
    pub const PRICE_ALIGNED: u32 = 2;
    pub const PRICE_PARTIAL: u32 = 1;

    /// Highest score one side can reach
    pub const fn max_side_score() -> u32 {
        Self::BAND1 + Self::BAND2 + Self::TREND_REFERENCE + Self::CONTAINMENT + Self::PRICE_ALIGNED
    }
}

/// Minimum score difference for each strength tier
pub struct StrengthThresholds;

impl StrengthThresholds {
    pub const VERY_STRONG: u32 = 6;
    pub const STRONG: u32 = 4;
    pub const MODERATE: u32 = 2;
}
