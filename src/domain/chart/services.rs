use super::value_objects::{
    ComparisonPoint, ErrorPoint, PricePoint, RadarPoint, SPARKLINE_WINDOW, SparkPoint,
};
use crate::domain::forecast::{CompanyAccuracy, HistoryRow, ProfileScore};

/// Domain service reshaping history and metrics into chart series
pub struct SeriesBuilder;

impl SeriesBuilder {
    /// History mapped 1:1; missing prices stay `None` so the line shows a gap.
    pub fn price_series(history: &[HistoryRow]) -> Vec<PricePoint> {
        history
            .iter()
            .map(|row| PricePoint {
                date: row.date.clone(),
                real: row.real_price,
                predicted: row.predicted_price,
            })
            .collect()
    }

    /// Last `SPARKLINE_WINDOW` rows.
    pub fn sparkline(history: &[HistoryRow]) -> Vec<SparkPoint> {
        Self::sparkline_window(history, SPARKLINE_WINDOW)
    }

    /// Last `window` rows (all when shorter), indexed from 0 within the window.
    pub fn sparkline_window(history: &[HistoryRow], window: usize) -> Vec<SparkPoint> {
        let start = history.len().saturating_sub(window);
        history[start..]
            .iter()
            .enumerate()
            .map(|(index, row)| SparkPoint { index, date: row.date.clone(), real: row.real_price })
            .collect()
    }

    /// Every row, evaluable or not. Rows without an error plot as zero.
    pub fn error_series(history: &[HistoryRow]) -> Vec<ErrorPoint> {
        history
            .iter()
            .map(|row| ErrorPoint {
                date: row.date.clone(),
                error: row.error_pct.unwrap_or(0.0),
                hit: u8::from(row.hit()),
            })
            .collect()
    }

    pub fn comparison_series(comparison: &[CompanyAccuracy]) -> Vec<ComparisonPoint> {
        comparison
            .iter()
            .map(|entry| ComparisonPoint {
                ticker: entry.ticker.clone(),
                hit_rate_pct: entry.summary.hit_rate_pct,
                mean_error_pct: entry.summary.mean_error_pct,
                has_data: entry.summary.has_data(),
            })
            .collect()
    }

    pub fn radar_series(score: &ProfileScore) -> Vec<RadarPoint> {
        score
            .axes()
            .map(|(axis, value)| RadarPoint { axis, label: axis.to_string(), value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<HistoryRow> {
        (0..n)
            .map(|i| HistoryRow {
                date: format!("2025-01-{:02}", i + 1),
                real_price: Some(100.0 + i as f64),
                ..HistoryRow::default()
            })
            .collect()
    }

    #[test]
    fn sparkline_keeps_last_twenty() {
        let spark = SeriesBuilder::sparkline(&rows(25));
        assert_eq!(spark.len(), 20);
        assert_eq!(spark[0].index, 0);
        assert_eq!(spark[0].date, "2025-01-06");
        assert_eq!(spark[19].real, Some(124.0));
    }

    #[test]
    fn sparkline_short_history_is_whole_history() {
        let spark = SeriesBuilder::sparkline(&rows(3));
        assert_eq!(spark.len(), 3);
        assert_eq!(spark[2].index, 2);
    }

    #[test]
    fn price_series_never_coerces_missing_to_zero() {
        let history = vec![HistoryRow { date: "d".into(), ..HistoryRow::default() }];
        let series = SeriesBuilder::price_series(&history);
        assert_eq!(series[0].real, None);
        assert_eq!(series[0].predicted, None);
    }
}
