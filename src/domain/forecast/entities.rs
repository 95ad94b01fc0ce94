pub use super::value_objects::{Ticker, Trend, VolumeState};
use crate::domain::errors::{LoadError, LoadResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Domain entity - the whole `historial.json` document
///
/// Immutable once parsed; a fresh fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Producer timestamp, kept verbatim. See [`crate::time_utils`].
    #[serde(rename = "ultima_actualizacion", default)]
    pub last_updated: Option<String>,
    #[serde(rename = "empresas", default)]
    pub companies: Vec<Company>,
}

impl Snapshot {
    /// Parse a snapshot document.
    ///
    /// An empty or whitespace-only body is reported separately from a body
    /// that is not a valid document.
    pub fn from_json_str(body: &str) -> LoadResult<Self> {
        if body.trim().is_empty() {
            return Err(LoadError::EmptyBody);
        }
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn company(&self, ticker: &Ticker) -> Option<&Company> {
        self.companies.iter().find(|c| &c.ticker == ticker)
    }

    /// Company for `ticker`, or the first company when the ticker is unknown.
    pub fn resolve(&self, ticker: Option<&Ticker>) -> Option<&Company> {
        ticker
            .and_then(|t| self.company(t))
            .or_else(|| self.companies.first())
    }

    /// Ticker selected right after a successful load.
    pub fn default_ticker(&self) -> Option<&Ticker> {
        self.companies.first().map(|c| &c.ticker)
    }

    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.companies.iter().map(|c| &c.ticker)
    }
}

/// Domain entity - one tracked company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub ticker: Ticker,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "prediccion_manana", default)]
    pub tomorrow_prediction: Option<TomorrowPrediction>,
    #[serde(rename = "estado_actual", default)]
    pub current_state: Option<CurrentState>,
    #[serde(rename = "historico", default)]
    pub history: Vec<HistoryRow>,
}

impl Company {
    /// Yesterday's prediction against today's close.
    pub fn latest_evaluation(&self) -> Option<&HistoryRow> {
        self.history.last()
    }

    /// "Name (TICKER)" as used by the selector.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}

/// Prediction for the next business day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TomorrowPrediction {
    #[serde(rename = "fecha_prediccion", default)]
    pub target_date: Option<String>,
    #[serde(rename = "precio_predicho", default)]
    pub predicted_price: Option<f64>,
    #[serde(rename = "tendencia", default)]
    pub trend: Option<Trend>,
    #[serde(rename = "cambio_diario_pct", default)]
    pub daily_change_pct: Option<f64>,
    #[serde(rename = "cambio_acumulado_pct", default)]
    pub cumulative_change_pct: Option<f64>,
}

/// Technical state of the stock at the time of the last producer run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentState {
    #[serde(rename = "fecha", default)]
    pub date: Option<String>,
    #[serde(rename = "precio_actual", default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(rename = "rsi_estado", default)]
    pub rsi_state: Option<String>,
    #[serde(rename = "tendencia_5d_pct", default)]
    pub trend_5d_pct: Option<f64>,
    #[serde(rename = "tendencia_20d_pct", default)]
    pub trend_20d_pct: Option<f64>,
    #[serde(rename = "volatilidad_pct", default)]
    pub volatility_pct: Option<f64>,
    #[serde(rename = "volumen_estado", default)]
    pub volume_state: Option<VolumeState>,
    #[serde(default)]
    pub precision_backtesting_pct: Option<f64>,
    #[serde(rename = "error_abs_promedio", default)]
    pub mean_abs_error: Option<f64>,
    #[serde(rename = "senal", default)]
    pub signal: Option<String>,
    #[serde(rename = "senal_icono", default)]
    pub signal_icon: Option<String>,
    #[serde(rename = "fuerza", default)]
    pub signal_strength: Option<f64>,
    #[serde(rename = "razon", default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub risk_reward: Option<f64>,
    #[serde(rename = "tamano_posicion", default)]
    pub position_size: Option<String>,
    #[serde(rename = "riesgo_por_trade", default)]
    pub risk_per_trade: Option<String>,
    #[serde(rename = "macd_valor", default)]
    pub macd_value: Option<f64>,
    #[serde(rename = "macd_estado", default)]
    pub macd_state: Option<String>,
    #[serde(rename = "bollinger_posicion_pct", default)]
    pub bollinger_position_pct: Option<f64>,
    #[serde(rename = "bollinger_zona", default)]
    pub bollinger_zone: Option<String>,
}

/// Domain entity - one trading day of prediction vs. outcome
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryRow {
    #[serde(rename = "fecha", default)]
    pub date: String,
    #[serde(rename = "precio_real", default)]
    pub real_price: Option<f64>,
    #[serde(rename = "precio_predicho", default)]
    pub predicted_price: Option<f64>,
    #[serde(default)]
    pub error_pct: Option<f64>,
    #[serde(rename = "acierto", default, deserialize_with = "deserialize_hit_flag")]
    pub is_hit: Option<bool>,
}

/// `acierto` as the producer writes it: a JSON boolean, or `1.0`/`0.0` when
/// the flag went through its float cleanup.
#[derive(Deserialize)]
#[serde(untagged)]
enum HitFlag {
    Bool(bool),
    Number(f64),
}

fn deserialize_hit_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HitFlag>::deserialize(deserializer)?.map(|flag| match flag {
        HitFlag::Bool(hit) => hit,
        HitFlag::Number(value) => value != 0.0,
    }))
}

impl HistoryRow {
    /// Row that takes part in mean error and hit rate.
    pub fn is_evaluable(&self) -> bool {
        self.predicted_price.is_some() && self.error_pct.is_some_and(f64::is_finite)
    }

    /// Absolute error; sign conventions upstream are ignored.
    pub fn abs_error_pct(&self) -> Option<f64> {
        self.error_pct.map(f64::abs)
    }

    pub fn hit(&self) -> bool {
        self.is_hit == Some(true)
    }
}
