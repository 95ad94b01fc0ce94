use super::entities::{CurrentState, HistoryRow, Snapshot, Ticker};
use super::validation::partition;
use super::value_objects::VolumeState;
use derive_more::Display;
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

/// Accuracy of one company's past predictions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AccuracySummary {
    pub mean_error_pct: f64,
    pub hit_count: usize,
    pub total_evaluated: usize,
    pub hit_rate_pct: f64,
}

impl AccuracySummary {
    /// `false` means the zeros are placeholders, not measurements.
    pub fn has_data(&self) -> bool {
        self.total_evaluated > 0
    }
}

/// Row of the cross-company comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyAccuracy {
    pub ticker: Ticker,
    pub summary: AccuracySummary,
}

/// Domain service computing prediction accuracy
pub struct AccuracyService;

impl AccuracyService {
    /// Aggregate over rows already filtered by [`partition`].
    pub fn summarize(evaluable: &[&HistoryRow]) -> AccuracySummary {
        let total_evaluated = evaluable.len();
        if total_evaluated == 0 {
            return AccuracySummary::default();
        }

        let error_sum: f64 = evaluable.iter().filter_map(|row| row.abs_error_pct()).sum();
        let hit_count = evaluable.iter().filter(|row| row.hit()).count();

        AccuracySummary {
            mean_error_pct: error_sum / total_evaluated as f64,
            hit_count,
            total_evaluated,
            hit_rate_pct: 100.0 * hit_count as f64 / total_evaluated as f64,
        }
    }

    /// Partition and summarize a raw history.
    pub fn summarize_history(history: &[HistoryRow]) -> AccuracySummary {
        Self::summarize(&partition(history).evaluable)
    }

    /// One row per company, snapshot order, companies without data included.
    pub fn compare(snapshot: &Snapshot) -> Vec<CompanyAccuracy> {
        snapshot
            .companies
            .iter()
            .map(|company| CompanyAccuracy {
                ticker: company.ticker.clone(),
                summary: Self::summarize_history(&company.history),
            })
            .collect()
    }
}

/// Axes of the asset profile radar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum ProfileAxis {
    #[display(fmt = "Precisión")]
    Precision,
    #[display(fmt = "RSI")]
    RsiHealth,
    #[display(fmt = "Tendencia")]
    Trend,
    #[display(fmt = "Volatilidad")]
    Volatility,
    #[display(fmt = "Volumen")]
    Volume,
}

/// Five presentation scores, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProfileScore {
    pub precision: f64,
    pub rsi_health: f64,
    pub trend: f64,
    pub volatility: f64,
    pub volume: f64,
}

impl ProfileScore {
    pub fn get(&self, axis: ProfileAxis) -> f64 {
        match axis {
            ProfileAxis::Precision => self.precision,
            ProfileAxis::RsiHealth => self.rsi_health,
            ProfileAxis::Trend => self.trend,
            ProfileAxis::Volatility => self.volatility,
            ProfileAxis::Volume => self.volume,
        }
    }

    pub fn axes(&self) -> impl Iterator<Item = (ProfileAxis, f64)> + '_ {
        ProfileAxis::iter().map(move |axis| (axis, self.get(axis)))
    }
}

/// Domain service normalizing the technical state into radar scores.
///
/// Every missing input scores 0, volatility included.
pub struct ProfileService;

impl ProfileService {
    const VOLUME_HIGH: f64 = 90.0;
    const VOLUME_NORMAL: f64 = 70.0;
    const VOLUME_LOW: f64 = 40.0;

    pub fn profile(state: Option<&CurrentState>) -> ProfileScore {
        let Some(state) = state else {
            return ProfileScore {
                volume: Self::VOLUME_LOW,
                ..ProfileScore::default()
            };
        };

        ProfileScore {
            precision: Self::precision_score(state.precision_backtesting_pct),
            rsi_health: Self::rsi_score(state.rsi),
            trend: Self::trend_score(state.trend_5d_pct, state.trend_20d_pct),
            volatility: Self::volatility_score(state.volatility_pct),
            volume: Self::volume_score(state.volume_state),
        }
    }

    pub fn precision_score(precision_pct: Option<f64>) -> f64 {
        precision_pct.map_or(0.0, clamp_score)
    }

    /// 100 at neutral RSI 50, falling linearly to 0 at either extreme.
    pub fn rsi_score(rsi: Option<f64>) -> f64 {
        rsi.map_or(0.0, |rsi| clamp_score(100.0 - (rsi - 50.0).abs() * 2.0))
    }

    /// Mean of the two trends around a neutral midpoint of 50.
    pub fn trend_score(trend_5d_pct: Option<f64>, trend_20d_pct: Option<f64>) -> f64 {
        let mean = (trend_5d_pct.unwrap_or(0.0) + trend_20d_pct.unwrap_or(0.0)) / 2.0;
        clamp_score(mean + 50.0)
    }

    /// 10% volatility or more saturates to 0.
    pub fn volatility_score(volatility_pct: Option<f64>) -> f64 {
        volatility_pct.map_or(0.0, |vol| clamp_score(100.0 - vol * 10.0))
    }

    pub fn volume_score(volume: Option<VolumeState>) -> f64 {
        match volume {
            Some(VolumeState::High) => Self::VOLUME_HIGH,
            Some(VolumeState::Normal) => Self::VOLUME_NORMAL,
            _ => Self::VOLUME_LOW,
        }
    }
}

/// NaN collapses to 0 so a bad input never escapes the radar's range.
fn clamp_score(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}
