use forecast_dashboard_wasm::domain::forecast::{
    AccuracyService, CurrentState, HistoryRow, ProfileAxis, ProfileService, Snapshot, VolumeState,
    partition,
};

fn row(date: &str, predicted: Option<f64>, error: Option<f64>, hit: Option<bool>) -> HistoryRow {
    HistoryRow {
        date: date.to_string(),
        real_price: Some(100.0),
        predicted_price: predicted,
        error_pct: error,
        is_hit: hit,
    }
}

#[test]
fn end_to_end_accuracy_example() {
    let history = vec![
        row("2025-01-08", Some(10.0), Some(1.0), Some(true)),
        row("2025-01-09", Some(11.0), Some(3.0), Some(false)),
        row("2025-01-10", None, None, None),
    ];

    let parts = partition(&history);
    assert_eq!(parts.evaluated_count(), 2);
    assert_eq!(parts.all.len(), 3);

    let summary = AccuracyService::summarize(&parts.evaluable);
    assert!((summary.mean_error_pct - 2.0).abs() < f64::EPSILON);
    assert_eq!(summary.hit_count, 1);
    assert_eq!(summary.total_evaluated, 2);
    assert!((summary.hit_rate_pct - 50.0).abs() < f64::EPSILON);
}

#[test]
fn negative_errors_count_by_magnitude() {
    let history = vec![
        row("d1", Some(1.0), Some(-4.0), Some(false)),
        row("d2", Some(1.0), Some(2.0), Some(true)),
    ];
    let summary = AccuracyService::summarize_history(&history);
    assert!((summary.mean_error_pct - 3.0).abs() < 1e-9);
}

#[test]
fn evaluable_rows_keep_chronological_order() {
    let history = vec![
        row("d1", Some(1.0), Some(0.5), Some(true)),
        row("d2", None, Some(0.5), Some(true)),
        row("d3", Some(1.0), Some(f64::NAN), None),
        row("d4", Some(1.0), Some(1.5), Some(true)),
    ];
    let dates: Vec<&str> = partition(&history).evaluable.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["d1", "d4"]);
}

#[test]
fn no_evaluable_rows_means_zero_summary() {
    let history = vec![row("d1", None, None, None)];
    let summary = AccuracyService::summarize_history(&history);
    assert!(!summary.has_data());
    assert_eq!(summary.hit_rate_pct, 0.0);
    assert_eq!(summary.mean_error_pct, 0.0);
}

#[test]
fn comparison_has_one_row_per_company_in_order() {
    let snapshot = Snapshot::from_json_str(include_str!("fixtures/historial.json")).unwrap();
    let comparison = AccuracyService::compare(&snapshot);

    let tickers: Vec<&str> = comparison.iter().map(|c| c.ticker.value()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "NVDA"]);

    assert!(!comparison[1].summary.has_data());
    assert_eq!(comparison[2].summary.hit_count, 2);
    assert!((comparison[2].summary.mean_error_pct - 1.5).abs() < 1e-9);
    assert!((comparison[2].summary.hit_rate_pct - 100.0).abs() < 1e-9);
}

#[test]
fn rsi_health_curve() {
    assert_eq!(ProfileService::rsi_score(Some(50.0)), 100.0);
    assert_eq!(ProfileService::rsi_score(Some(0.0)), 0.0);
    assert_eq!(ProfileService::rsi_score(Some(100.0)), 0.0);
    assert_eq!(ProfileService::rsi_score(Some(75.0)), 50.0);
    assert_eq!(ProfileService::rsi_score(None), 0.0);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    assert_eq!(ProfileService::precision_score(Some(150.0)), 100.0);
    assert_eq!(ProfileService::volatility_score(Some(50.0)), 0.0);
    assert_eq!(ProfileService::trend_score(Some(80.0), Some(90.0)), 100.0);
    assert_eq!(ProfileService::trend_score(Some(-80.0), None), 10.0);
}

#[test]
fn absent_inputs_score_zero_except_volume() {
    let profile = ProfileService::profile(Some(&CurrentState::default()));
    assert_eq!(profile.precision, 0.0);
    assert_eq!(profile.rsi_health, 0.0);
    assert_eq!(profile.trend, 50.0);
    assert_eq!(profile.volatility, 0.0);
    assert_eq!(profile.volume, 40.0);
}

#[test]
fn profile_from_full_state() {
    let state = CurrentState {
        rsi: Some(75.0),
        trend_5d_pct: Some(2.0),
        trend_20d_pct: Some(4.0),
        volatility_pct: Some(2.5),
        volume_state: Some(VolumeState::Normal),
        precision_backtesting_pct: Some(64.0),
        ..Default::default()
    };
    let profile = ProfileService::profile(Some(&state));

    let axes: Vec<(ProfileAxis, f64)> = profile.axes().collect();
    assert_eq!(
        axes,
        vec![
            (ProfileAxis::Precision, 64.0),
            (ProfileAxis::RsiHealth, 50.0),
            (ProfileAxis::Trend, 53.0),
            (ProfileAxis::Volatility, 75.0),
            (ProfileAxis::Volume, 70.0),
        ]
    );
}
