use crate::domain::{
    chart::{ComparisonPoint, ErrorPoint, PricePoint, RadarPoint, SPARKLINE_WINDOW, SeriesBuilder, SparkPoint},
    errors::{DashboardError, DashboardResult},
    forecast::{
        AccuracyService, AccuracySummary, Company, CurrentState, HistoryRow, ProfileScore,
        ProfileService, Snapshot, Ticker, TomorrowPrediction, partition,
    },
    logging::LogComponent,
};
use serde::Serialize;
use std::sync::Arc;

/// The two pieces of state the page owns: a write-once snapshot and the
/// selected ticker. Everything else is derived from them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    snapshot: Arc<Snapshot>,
    selected: Option<Ticker>,
}

impl DashboardState {
    /// Selection starts on the first company, or nothing for an empty snapshot.
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        let selected = snapshot.default_ticker().cloned();
        Self { snapshot, selected }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn select(&mut self, ticker: Ticker) {
        self.selected = Some(ticker);
    }

    /// The company actually shown; unknown tickers fall back to the first one.
    pub fn selected_company(&self) -> Option<&Company> {
        self.snapshot.resolve(self.selected.as_ref())
    }

    pub fn selected_ticker(&self) -> Option<&Ticker> {
        self.selected_company().map(|c| &c.ticker)
    }

    pub fn company_dashboard(&self) -> DashboardResult<CompanyDashboard> {
        self.company_dashboard_with_window(SPARKLINE_WINDOW)
    }

    pub fn company_dashboard_with_window(&self, sparkline_window: usize) -> DashboardResult<CompanyDashboard> {
        let company = self.selected_company().ok_or(DashboardError::EmptyDataset)?;
        Ok(CompanyDashboard::build(company, sparkline_window))
    }

    pub fn overview(&self) -> DashboardResult<Overview> {
        if self.snapshot.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        Ok(Overview::build(&self.snapshot))
    }
}

/// Everything the page renders for one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDashboard {
    pub ticker: Ticker,
    pub name: String,
    pub tomorrow: Option<TomorrowPrediction>,
    pub current_state: Option<CurrentState>,
    pub latest: Option<HistoryRow>,
    pub history: Vec<HistoryRow>,
    pub accuracy: AccuracySummary,
    pub price_series: Vec<PricePoint>,
    pub sparkline: Vec<SparkPoint>,
    pub error_series: Vec<ErrorPoint>,
    pub profile: ProfileScore,
    pub radar: Vec<RadarPoint>,
}

impl CompanyDashboard {
    /// Validator, metrics and series for one company. Pure: the same company
    /// always gives the same dashboard.
    pub fn build(company: &Company, sparkline_window: usize) -> Self {
        let parts = partition(&company.history);
        let accuracy = AccuracyService::summarize(&parts.evaluable);
        let profile = ProfileService::profile(company.current_state.as_ref());

        crate::log_debug!(
            LogComponent::Application("Dashboard"),
            "📊 {}: {} rows, {} evaluable, {} display-only",
            company.ticker,
            parts.all.len(),
            parts.evaluated_count(),
            parts.display_only_count()
        );

        Self {
            ticker: company.ticker.clone(),
            name: company.name.clone(),
            tomorrow: company.tomorrow_prediction.clone(),
            current_state: company.current_state.clone(),
            latest: company.latest_evaluation().cloned(),
            history: company.history.clone(),
            accuracy,
            price_series: SeriesBuilder::price_series(&company.history),
            sparkline: SeriesBuilder::sparkline_window(&company.history, sparkline_window),
            error_series: SeriesBuilder::error_series(&company.history),
            profile,
            radar: SeriesBuilder::radar_series(&profile),
        }
    }

    /// Accuracy, or `InsufficientHistory` when nothing has been evaluated yet.
    pub fn accuracy(&self) -> DashboardResult<&AccuracySummary> {
        if self.accuracy.has_data() {
            Ok(&self.accuracy)
        } else {
            Err(DashboardError::InsufficientHistory { ticker: self.ticker.to_string() })
        }
    }
}

/// Cross-company view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub comparison: Vec<ComparisonPoint>,
}

impl Overview {
    pub fn build(snapshot: &Snapshot) -> Self {
        let comparison = AccuracyService::compare(snapshot);
        Self { comparison: SeriesBuilder::comparison_series(&comparison) }
    }

    /// Upper bound of the mean-error axis, at least 1%.
    pub fn max_mean_error(&self) -> f64 {
        self.comparison.iter().map(|p| p.mean_error_pct).fold(1.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(ticker: &str, history: Vec<HistoryRow>) -> Company {
        Company {
            ticker: Ticker::from(ticker),
            name: ticker.to_lowercase(),
            tomorrow_prediction: None,
            current_state: None,
            history,
        }
    }

    #[test]
    fn unknown_selection_falls_back_to_first_company() {
        let snapshot = Snapshot {
            last_updated: None,
            companies: vec![company("AAPL", vec![]), company("MSFT", vec![])],
        };
        let mut state = DashboardState::new(Arc::new(snapshot));
        assert_eq!(state.selected_ticker().map(Ticker::value), Some("AAPL"));
        state.select(Ticker::from("MSFT"));
        assert_eq!(state.selected_ticker().map(Ticker::value), Some("MSFT"));
        state.select(Ticker::from("ZZZZ"));
        assert_eq!(state.selected_ticker().map(Ticker::value), Some("AAPL"));
    }

    #[test]
    fn empty_snapshot_has_no_selection() {
        let state = DashboardState::new(Arc::new(Snapshot { last_updated: None, companies: vec![] }));
        assert_eq!(state.selected_ticker(), None);
        assert_eq!(state.company_dashboard(), Err(DashboardError::EmptyDataset));
        assert_eq!(state.overview(), Err(DashboardError::EmptyDataset));
    }

    #[test]
    fn company_without_evaluations_reports_insufficient_history() {
        let dash = CompanyDashboard::build(&company("INTC", vec![]), SPARKLINE_WINDOW);
        assert_eq!(
            dash.accuracy(),
            Err(DashboardError::InsufficientHistory { ticker: "INTC".into() })
        );
        assert!(dash.latest.is_none());
    }
}
