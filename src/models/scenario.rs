//! Scenario records and the flag-encoded external input form

use serde::{Deserialize, Serialize};

use crate::models::axes::{BandPosition, Containment, PricePosition, TrendPosition, VolumeState};
use crate::signals::error::AnalysisError;

/// One combination of indicator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub containment: Containment,
    pub trend: TrendPosition,
    pub band1: BandPosition,
    pub band2: BandPosition,
    pub price_position: PricePosition,
    pub volume: VolumeState,
}

impl Scenario {
    pub fn new(
        containment: Containment,
        trend: TrendPosition,
        band1: BandPosition,
        band2: BandPosition,
        price_position: PricePosition,
    ) -> Self {
        let mut scenario = Self {
            id: 0,
            containment,
            trend,
            band1,
            band2,
            price_position,
            volume: VolumeState::TURNED_RISING,
        };
        scenario.id = scenario.canonical_id();
        scenario
    }

    pub fn with_volume(mut self, volume: VolumeState) -> Self {
        self.volume = volume;
        self
    }

    /// Index of this combination in generation order
    pub fn canonical_id(&self) -> u32 {
        let mut index = self.containment.ordinal();
        index = index * TrendPosition::COUNT + self.trend.ordinal();
        index = index * BandPosition::COUNT + self.band1.ordinal();
        index = index * BandPosition::COUNT + self.band2.ordinal();
        index = index * PricePosition::COUNT + self.price_position.ordinal();
        index as u32
    }
}

fn default_flag_on() -> u8 {
    1
}

fn default_true() -> bool {
    true
}

/// Flag-encoded scenario as supplied by external callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    #[serde(default)]
    pub close_in_vwap: u8,
    #[serde(default)]
    pub vwap_in_close: u8,
    #[serde(default)]
    pub separated: u8,
    #[serde(default)]
    pub st_above: u8,
    #[serde(default)]
    pub st_below: u8,
    #[serde(default)]
    pub st_within: u8,
    pub band1_value: i32,
    pub band2_value: i32,
    pub price_position_code: String,
    #[serde(default = "default_flag_on")]
    pub vol_rising: u8,
    #[serde(default = "default_true")]
    pub vol_just_turned: bool,
}

impl From<&Scenario> for ScenarioInput {
    fn from(scenario: &Scenario) -> Self {
        let flag = |set: bool| u8::from(set);
        Self {
            close_in_vwap: flag(scenario.containment == Containment::CloseInVwap),
            vwap_in_close: flag(scenario.containment == Containment::VwapInClose),
            separated: flag(scenario.containment == Containment::Separated),
            st_above: flag(scenario.trend == TrendPosition::Above),
            st_below: flag(scenario.trend == TrendPosition::Below),
            st_within: flag(scenario.trend == TrendPosition::Within),
            band1_value: scenario.band1.value(),
            band2_value: scenario.band2.value(),
            price_position_code: scenario.price_position.code().to_string(),
            vol_rising: flag(scenario.volume.rising),
            vol_just_turned: scenario.volume.just_turned,
        }
    }
}

fn read_flag(field: &'static str, value: u8) -> Result<bool, AnalysisError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(AnalysisError::invalid(
            field,
            format!("flag must be 0 or 1, got {}", other),
        )),
    }
}

fn read_band(field: &'static str, value: i32) -> Result<BandPosition, AnalysisError> {
    BandPosition::from_value(value).ok_or_else(|| {
        AnalysisError::invalid(field, format!("band value must be 2, -2 or 0, got {}", value))
    })
}

impl TryFrom<ScenarioInput> for Scenario {
    type Error = AnalysisError;

    fn try_from(input: ScenarioInput) -> Result<Self, Self::Error> {
        let containment = match (
            read_flag("close_in_vwap", input.close_in_vwap)?,
            read_flag("vwap_in_close", input.vwap_in_close)?,
            read_flag("separated", input.separated)?,
        ) {
            (true, false, false) => Containment::CloseInVwap,
            (false, true, false) => Containment::VwapInClose,
            (false, false, true) => Containment::Separated,
            (false, false, false) => Containment::Overlap,
            _ => {
                return Err(AnalysisError::invalid(
                    "containment",
                    "at most one containment flag may be set",
                ))
            }
        };

        let trend = match (
            read_flag("st_above", input.st_above)?,
            read_flag("st_below", input.st_below)?,
            read_flag("st_within", input.st_within)?,
        ) {
            (true, false, false) => TrendPosition::Above,
            (false, true, false) => TrendPosition::Below,
            (false, false, true) => TrendPosition::Within,
            _ => {
                return Err(AnalysisError::invalid(
                    "trend",
                    "exactly one of st_above, st_below, st_within must be set",
                ))
            }
        };

        let band1 = read_band("band1_value", input.band1_value)?;
        let band2 = read_band("band2_value", input.band2_value)?;

        let price_position = PricePosition::from_code(&input.price_position_code).ok_or_else(|| {
            AnalysisError::invalid(
                "price_position_code",
                format!("unknown price position '{}'", input.price_position_code),
            )
        })?;

        let volume = VolumeState {
            rising: read_flag("vol_rising", input.vol_rising)?,
            just_turned: input.vol_just_turned,
        };

        Ok(Scenario::new(containment, trend, band1, band2, price_position).with_volume(volume))
    }
}
