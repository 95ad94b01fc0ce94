use forecast_dashboard_wasm::domain::chart::SeriesBuilder;
use forecast_dashboard_wasm::domain::forecast::{
    AccuracyService, Company, CurrentState, HistoryRow, ProfileService, Snapshot, Ticker, partition,
};
use quickcheck_macros::quickcheck;

fn history_from(cells: &[(Option<f64>, Option<bool>, bool)]) -> Vec<HistoryRow> {
    cells
        .iter()
        .enumerate()
        .map(|(i, (error, hit, predicted))| HistoryRow {
            date: format!("d{i}"),
            real_price: None,
            predicted_price: predicted.then_some(1.0),
            error_pct: *error,
            is_hit: *hit,
        })
        .collect()
}

#[quickcheck]
fn hit_rate_stays_in_percent_range(cells: Vec<(Option<f64>, Option<bool>, bool)>) -> bool {
    let summary = AccuracyService::summarize_history(&history_from(&cells));
    (0.0..=100.0).contains(&summary.hit_rate_pct) && summary.hit_count <= summary.total_evaluated
}

#[quickcheck]
fn summary_matches_its_definition(cells: Vec<(Option<f64>, Option<bool>, bool)>) -> bool {
    let history = history_from(&cells);
    let summary = AccuracyService::summarize_history(&history);

    let evaluable: Vec<&HistoryRow> = history
        .iter()
        .filter(|row| row.predicted_price.is_some() && row.error_pct.is_some_and(f64::is_finite))
        .collect();
    let hits = evaluable.iter().filter(|row| row.is_hit == Some(true)).count();
    let error_sum: f64 = evaluable.iter().filter_map(|row| row.error_pct).map(f64::abs).sum();

    if evaluable.is_empty() {
        return summary.total_evaluated == 0
            && summary.hit_count == 0
            && summary.hit_rate_pct == 0.0
            && summary.mean_error_pct == 0.0;
    }

    let expected_rate = 100.0 * hits as f64 / evaluable.len() as f64;
    let expected_mean = error_sum / evaluable.len() as f64;
    let mean_matches = if expected_mean.is_finite() {
        (summary.mean_error_pct - expected_mean).abs() <= 1e-9 * expected_mean.abs().max(1.0)
    } else {
        summary.mean_error_pct == expected_mean
    };

    summary.total_evaluated == evaluable.len()
        && summary.hit_count == hits
        && (summary.hit_rate_pct - expected_rate).abs() < 1e-9
        && mean_matches
}

#[quickcheck]
fn evaluable_is_an_ordered_subsequence(cells: Vec<(Option<f64>, Option<bool>, bool)>) -> bool {
    let history = history_from(&cells);
    let parts = partition(&history);
    let mut all = parts.all.iter();
    parts.all.len() == history.len()
        && parts
            .evaluable
            .iter()
            .all(|row| all.any(|candidate| std::ptr::eq(*candidate, *row)))
}

#[quickcheck]
fn comparison_length_matches_company_count(histories: Vec<Vec<(Option<f64>, Option<bool>, bool)>>) -> bool {
    let snapshot = Snapshot {
        last_updated: None,
        companies: histories
            .iter()
            .enumerate()
            .map(|(i, cells)| Company {
                ticker: Ticker::new(format!("T{i}")),
                name: format!("Company {i}"),
                tomorrow_prediction: None,
                current_state: None,
                history: history_from(cells),
            })
            .collect(),
    };
    let comparison = SeriesBuilder::comparison_series(&AccuracyService::compare(&snapshot));
    comparison.len() == snapshot.companies.len()
}

#[quickcheck]
fn profile_axes_are_clamped(
    rsi: Option<f64>,
    trend_5d: Option<f64>,
    trend_20d: Option<f64>,
    volatility: Option<f64>,
    precision: Option<f64>,
) -> bool {
    let state = CurrentState {
        rsi,
        trend_5d_pct: trend_5d,
        trend_20d_pct: trend_20d,
        volatility_pct: volatility,
        precision_backtesting_pct: precision,
        ..Default::default()
    };
    ProfileService::profile(Some(&state))
        .axes()
        .all(|(_, value)| (0.0..=100.0).contains(&value))
}
