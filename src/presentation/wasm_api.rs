use js_sys::Promise;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{
    app::App,
    application::{LoadSnapshotUseCase, Overview},
    config::DashboardConfig,
    domain::logging::{LogComponent, init_logger, get_logger},
    infrastructure::{ConsoleLogger, SnapshotHttpClient},
};

/// Mount the dashboard into `<body>`.
///
/// `config_json` is an optional JSON object overriding [`DashboardConfig`]
/// fields. The console logger is installed here so it honours the
/// configured level.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config_json: Option<String>) {
    let level = config_json
        .as_deref()
        .and_then(|json| DashboardConfig::from_json(json).ok())
        .map(|config| config.log_level)
        .unwrap_or(DashboardConfig::default().log_level);
    init_logger(Box::new(ConsoleLogger::new(level)));

    let config = DashboardConfig::from_override(config_json.as_deref());
    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("🖼️ Mounting dashboard for {}", config.snapshot_url),
    );

    mount_to_body(move || view! { <App config=config /> });
}

/// Load a snapshot and resolve to the cross-company comparison as a plain
/// JS object.
#[wasm_bindgen(js_name = loadAccuracyOverview)]
pub fn load_accuracy_overview(url: String) -> Promise {
    future_to_promise(async move {
        let snapshot = LoadSnapshotUseCase::new(SnapshotHttpClient::new(url))
            .execute()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let overview = Overview::build(&snapshot);
        let json = serde_json::to_string(&overview).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    })
}
