use forecast_dashboard_wasm::domain::chart::geometry::{polyline_segments, value_range};
use forecast_dashboard_wasm::domain::chart::{SeriesBuilder, Viewport};
use forecast_dashboard_wasm::domain::forecast::{AccuracyService, HistoryRow, ProfileService, Snapshot};

fn fixture() -> Snapshot {
    Snapshot::from_json_str(include_str!("fixtures/historial.json")).unwrap()
}

fn history(n: usize) -> Vec<HistoryRow> {
    (0..n)
        .map(|i| HistoryRow {
            date: format!("2025-02-{:02}", i + 1),
            real_price: Some(50.0 + i as f64),
            ..HistoryRow::default()
        })
        .collect()
}

#[test]
fn price_series_keeps_gaps() {
    let snapshot = fixture();
    let series = SeriesBuilder::price_series(&snapshot.companies[2].history);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].real, None);
    assert_eq!(series[0].predicted, Some(140.0));
}

#[test]
fn gap_splits_the_drawn_line() {
    let values = [Some(1.0), Some(2.0), None, Some(3.0)];
    let range = value_range(values.iter().copied()).unwrap();
    let segments = polyline_segments(&values, range, &Viewport::default());

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].len(), 2);
    assert_eq!(segments[1].len(), 1);
}

#[test]
fn sparkline_shows_last_twenty_rows() {
    let rows = history(25);
    let spark = SeriesBuilder::sparkline(&rows);

    assert_eq!(spark.len(), 20);
    assert_eq!(spark[0].date, "2025-02-06");
    assert_eq!(spark[0].index, 0);
    assert_eq!(spark[19].real, Some(74.0));
}

#[test]
fn short_history_sparkline_is_whole_history() {
    assert_eq!(SeriesBuilder::sparkline(&history(3)).len(), 3);
    assert!(SeriesBuilder::sparkline(&[]).is_empty());
}

#[test]
fn error_series_includes_non_evaluable_rows_as_zero() {
    let snapshot = fixture();
    let errors = SeriesBuilder::error_series(&snapshot.companies[0].history);

    let values: Vec<(f64, u8)> = errors.iter().map(|p| (p.error, p.hit)).collect();
    assert_eq!(values, vec![(1.0, 1), (3.0, 0), (0.0, 0)]);
}

#[test]
fn comparison_series_follows_snapshot_order() {
    let snapshot = fixture();
    let series = SeriesBuilder::comparison_series(&AccuracyService::compare(&snapshot));

    assert_eq!(series.len(), snapshot.companies.len());
    assert!(series[0].has_data);
    assert!(!series[1].has_data);
    assert_eq!(series[1].hit_rate_pct, 0.0);
}

#[test]
fn radar_series_has_five_labelled_axes() {
    let snapshot = fixture();
    let profile = ProfileService::profile(snapshot.companies[0].current_state.as_ref());
    let radar = SeriesBuilder::radar_series(&profile);

    let labels: Vec<&str> = radar.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Precisión", "RSI", "Tendencia", "Volatilidad", "Volumen"]);
    assert_eq!(radar[4].value, 90.0);
}
