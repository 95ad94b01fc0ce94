use crate::domain::chart::SPARKLINE_WINDOW;
use crate::domain::logging::{LogComponent, LogLevel};
use chrono_tz::Tz;
use serde::Deserialize;

pub const DEFAULT_SNAPSHOT_URL: &str = "/historial.json";
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Mexico_City";

/// Runtime settings for the dashboard.
///
/// Every field is optional in the JSON override; missing ones keep their
/// default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub snapshot_url: String,
    pub display_timezone: String,
    pub sparkline_window: usize,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            snapshot_url: DEFAULT_SNAPSHOT_URL.to_string(),
            display_timezone: DEFAULT_DISPLAY_TIMEZONE.to_string(),
            sparkline_window: SPARKLINE_WINDOW,
            log_level: LogLevel::Info,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Config from an optional override; a broken override is logged and
    /// ignored.
    pub fn from_override(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                crate::log_warn!(LogComponent::Presentation("Config"), "⚠️ Ignoring invalid dashboard config: {e}");
                Self::default()
            }
        }
    }

    /// Display zone; an unknown zone name falls back to UTC.
    pub fn timezone(&self) -> Tz {
        self.display_timezone.parse().unwrap_or_else(|_| {
            crate::log_warn!(
                LogComponent::Presentation("Config"),
                "⚠️ Unknown timezone `{}`, using UTC",
                self.display_timezone
            );
            Tz::UTC
        })
    }

    /// Sparkline length, never zero.
    pub fn sparkline_window(&self) -> usize {
        self.sparkline_window.max(1)
    }
}
