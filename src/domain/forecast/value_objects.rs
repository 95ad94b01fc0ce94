use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Absolute percentage error at or under which a prediction counts as a hit.
pub const HIT_TOLERANCE_PCT: f64 = 2.0;

/// Value Object - Ticker of a tracked company
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self(ticker.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - Expected direction of tomorrow's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Trend {
    #[strum(serialize = "sube")]
    Up,
    #[strum(serialize = "baja")]
    Down,
    #[strum(serialize = "estable")]
    Stable,
}

impl Trend {
    /// Upper-cased producer tag, as shown on the prediction card.
    pub fn label(&self) -> String {
        self.as_ref().to_uppercase()
    }
}

impl TryFrom<String> for Trend {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|_| format!("unknown trend tag `{value}`"))
    }
}

impl From<Trend> for String {
    fn from(trend: Trend) -> Self {
        trend.as_ref().to_string()
    }
}

/// Value Object - Qualitative traded volume compared to its 20-day mean
///
/// Any tag the producer invents later lands in `Other` instead of failing the
/// whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VolumeState {
    #[strum(serialize = "Bajo")]
    Low,
    #[strum(serialize = "Normal")]
    Normal,
    #[strum(serialize = "Alto")]
    High,
    #[strum(disabled)]
    Other,
}

impl From<String> for VolumeState {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(VolumeState::Other)
    }
}

impl VolumeState {
    pub fn tag(&self) -> &'static str {
        match self {
            VolumeState::Low => "Bajo",
            VolumeState::Normal => "Normal",
            VolumeState::High => "Alto",
            VolumeState::Other => "Otro",
        }
    }
}

impl From<VolumeState> for String {
    fn from(state: VolumeState) -> Self {
        state.tag().to_string()
    }
}
