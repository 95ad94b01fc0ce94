use forecast_dashboard_wasm::application::LoadSnapshotUseCase;
use forecast_dashboard_wasm::domain::errors::LoadResult;
use forecast_dashboard_wasm::domain::forecast::Snapshot;
use forecast_dashboard_wasm::domain::forecast::repositories::SnapshotRepository;
use forecast_dashboard_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use futures::executor::block_on;
use std::sync::Mutex;

static LINES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct RecordingLogger;

impl Logger for RecordingLogger {
    fn log(&self, entry: LogEntry) {
        LINES.lock().unwrap().push((entry.level, entry.format_line()));
    }
}

struct InlineSnapshot(&'static str);

impl SnapshotRepository for InlineSnapshot {
    async fn fetch_snapshot(&self) -> LoadResult<Snapshot> {
        Snapshot::from_json_str(self.0)
    }
}

#[test]
fn data_issues_are_logged_with_ticker_and_date() {
    init_logger(Box::new(RecordingLogger));
    let body = r#"{"empresas": [
        {"ticker": "AMD", "nombre": "AMD", "historico": [
            {"fecha": "2025-01-09", "precio_predicho": 120.0, "error_pct": 5.0, "acierto": 1.0}
        ]},
        {"ticker": "AMD", "nombre": "AMD again"}
    ]}"#;

    block_on(LoadSnapshotUseCase::new(InlineSnapshot(body)).execute()).unwrap();

    let warnings: Vec<String> = LINES
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == LogLevel::Warn)
        .map(|(_, line)| line.clone())
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].ends_with("DOM:Validation: ⚠️ hit flag Some(true) disagrees with error 5.00% | AMD 2025-01-09"));
    assert!(warnings[1].ends_with("DOM:Validation: ⚠️ duplicate ticker | AMD"));
}
