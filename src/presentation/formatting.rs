//! Text shown on cards and in the history table.

use crate::domain::forecast::{AccuracySummary, HistoryRow, TomorrowPrediction};

pub const NO_VALUE: &str = "—";

/// `123.45 USD`, or "Sin datos" when there is no positive price.
pub fn price_usd(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p != 0.0 => format!("{p:.2} USD"),
        _ => "Sin datos".to_string(),
    }
}

/// Two decimals, or a dash for a missing cell.
pub fn number_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{v:.2}"))
}

pub fn percent_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{v:.2}%"))
}

pub fn signed_percent(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{v:+.2}%"))
}

pub fn hit_mark(is_hit: Option<bool>) -> &'static str {
    match is_hit {
        Some(true) => "✅",
        Some(false) => "❌",
        None => NO_VALUE,
    }
}

pub fn hit_verdict(is_hit: Option<bool>) -> &'static str {
    match is_hit {
        Some(true) => "✅ Acierto",
        Some(false) => "❌ Fallo",
        None => "Sin evaluar",
    }
}

/// CSS class of the verdict; an unevaluated row stays neutral.
pub fn verdict_class(is_hit: Option<bool>) -> &'static str {
    match is_hit {
        Some(true) => "hit",
        Some(false) => "miss",
        None => "muted",
    }
}

pub fn prediction_date(prediction: Option<&TomorrowPrediction>) -> String {
    prediction
        .and_then(|p| p.target_date.clone())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn prediction_trend(prediction: Option<&TomorrowPrediction>) -> String {
    prediction
        .and_then(|p| p.trend)
        .map_or_else(|| "N/D".to_string(), |t| t.label())
}

/// "Error medio" and "Días con acierto" lines; `None` when nothing was
/// evaluated so the card can show the insufficient-data state instead.
pub fn accuracy_lines(summary: &AccuracySummary) -> Option<(String, String)> {
    if !summary.has_data() {
        return None;
    }
    Some((
        format!("{:.2}%", summary.mean_error_pct),
        format!("{}/{} ({:.1}%)", summary.hit_count, summary.total_evaluated, summary.hit_rate_pct),
    ))
}

/// One table row as display strings.
pub fn history_cells(row: &HistoryRow) -> [String; 5] {
    [
        row.date.clone(),
        number_cell(row.real_price),
        number_cell(row.predicted_price),
        percent_cell(row.error_pct),
        hit_mark(row.is_hit).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::Trend;

    #[test]
    fn missing_prediction_fields_use_placeholders() {
        assert_eq!(price_usd(None), "Sin datos");
        assert_eq!(prediction_date(None), "N/A");
        assert_eq!(prediction_trend(None), "N/D");
    }

    #[test]
    fn prediction_card_text() {
        let prediction = TomorrowPrediction {
            target_date: Some("2025-01-13".into()),
            predicted_price: Some(231.456),
            trend: Some(Trend::Up),
            ..Default::default()
        };
        assert_eq!(price_usd(prediction.predicted_price), "231.46 USD");
        assert_eq!(prediction_trend(Some(&prediction)), "SUBE");
    }

    #[test]
    fn unevaluated_row_is_neither_hit_nor_miss() {
        assert_eq!(hit_verdict(None), "Sin evaluar");
        assert_eq!(verdict_class(None), "muted");
        assert_eq!(verdict_class(Some(false)), "miss");
        assert_eq!(verdict_class(Some(true)), "hit");
    }

    #[test]
    fn empty_summary_has_no_accuracy_lines() {
        assert_eq!(accuracy_lines(&AccuracySummary::default()), None);
    }
}
