use leptos::*;
use std::sync::Arc;

use crate::{
    application::{CompanyDashboard, DashboardState, LoadSnapshotUseCase, Overview},
    config::DashboardConfig,
    domain::{
        chart::{
            ComparisonPoint, ErrorPoint, PricePoint, RadarPoint, SparkPoint, Viewport,
            geometry::{
                bar_height, bar_slots, polyline_segments, radar_points, svg_points, value_range,
            },
        },
        errors::{DashboardError, LoadResult},
        forecast::{Snapshot, Ticker},
        logging::{LogComponent, get_logger},
    },
    infrastructure::SnapshotHttpClient,
    presentation::formatting,
    time_utils::format_last_updated,
};

const STYLE: &str = r#"
.forecast-app { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 72rem; margin: 0 auto; padding: 1.5rem 1rem; color: #0f172a; }
.forecast-app h1 { font-size: 1.5rem; margin: 0 0 0.25rem; }
.muted { color: #64748b; font-size: 0.8rem; }
.selector { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; margin: 1rem 0; }
.pill { padding: 0.25rem 0.75rem; border-radius: 999px; border: 1px solid #cbd5e1; background: white; cursor: pointer; font-size: 0.75rem; }
.pill.active { background: #2563eb; color: white; border-color: #2563eb; }
.grid { display: grid; grid-template-columns: minmax(0, 0.9fr) minmax(0, 1.4fr); gap: 1.5rem; }
.cards { display: flex; flex-direction: column; gap: 0.75rem; }
.card { border: 1px solid #e2e8f0; border-radius: 0.75rem; background: white; padding: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.card h2 { font-size: 0.875rem; margin: 0 0 0.5rem; }
.big { font-size: 1.5rem; font-weight: 700; }
.hit { color: #059669; font-weight: 600; }
.miss { color: #dc2626; font-weight: 600; }
table { width: 100%; border-collapse: collapse; font-size: 0.75rem; }
th, td { padding: 0.4rem; border-bottom: 1px solid #e2e8f0; text-align: right; }
th:first-child, td:first-child { text-align: left; }
tr:nth-child(even) { background: #f8fafc; }
.legend { font-size: 0.7rem; display: flex; gap: 1rem; }
"#;

/// Root component: loads the snapshot once and owns the selected ticker.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let url = config.snapshot_url.clone();
    let snapshot = create_local_resource(
        || (),
        move |_| {
            let url = url.clone();
            async move { LoadSnapshotUseCase::new(SnapshotHttpClient::new(url)).execute().await }
        },
    );
    let (selected, set_selected) = create_signal::<Option<Ticker>>(None);

    view! {
        <style>{STYLE}</style>
        <section class="forecast-app">
            {move || match snapshot.get() {
                None => view! { <p class="muted">"Cargando datos de predicción..."</p> }.into_view(),
                Some(result) => render_loaded(result, &config, selected, set_selected),
            }}
        </section>
    }
}

fn render_loaded(
    result: LoadResult<Arc<Snapshot>>,
    config: &DashboardConfig,
    selected: ReadSignal<Option<Ticker>>,
    set_selected: WriteSignal<Option<Ticker>>,
) -> View {
    match result {
        Err(e) => {
            let error = DashboardError::from(e);
            view! {
                <div class="card">
                    <h2>"No se pudieron cargar las predicciones"</h2>
                    <p class="muted">{error.to_string()}</p>
                </div>
            }
            .into_view()
        }
        Ok(snapshot) if snapshot.is_empty() => {
            get_logger().warn(LogComponent::Presentation("App"), &DashboardError::EmptyDataset.to_string());
            view! { <p class="muted">"No hay datos disponibles."</p> }.into_view()
        }
        Ok(snapshot) => view! {
            <DashboardPage snapshot=snapshot config={config.clone()} selected=selected set_selected=set_selected />
        }
        .into_view(),
    }
}

/// Page for a loaded, non-empty snapshot.
#[component]
fn DashboardPage(
    snapshot: Arc<Snapshot>,
    config: DashboardConfig,
    selected: ReadSignal<Option<Ticker>>,
    set_selected: WriteSignal<Option<Ticker>>,
) -> impl IntoView {
    let window = config.sparkline_window();
    let zone = config.timezone();
    let last_updated = format_last_updated(snapshot.last_updated.as_deref(), zone)
        .unwrap_or_else(|| formatting::NO_VALUE.to_string());
    let overview = Overview::build(&snapshot);

    let state = {
        let snapshot = Arc::clone(&snapshot);
        create_memo(move |_| {
            let mut state = DashboardState::new(Arc::clone(&snapshot));
            if let Some(ticker) = selected.get() {
                state.select(ticker);
            }
            state
        })
    };
    let current = create_memo(move |_| state.with(|s| s.selected_ticker().cloned()));
    let dashboard = create_memo(move |_| state.with(|s| s.company_dashboard_with_window(window)));

    let companies: Vec<(Ticker, String)> =
        snapshot.companies.iter().map(|c| (c.ticker.clone(), c.display_name())).collect();

    view! {
        <header>
            <h1>"Predicciones por empresa"</h1>
            <p class="muted">"Última actualización del modelo: " {last_updated}</p>
        </header>
        <CompanySelector companies=companies current=current set_selected=set_selected />
        {move || match dashboard.get() {
            Ok(dashboard) => view! { <CompanyView dashboard=dashboard /> }.into_view(),
            Err(e) => view! { <p class="muted">{e.to_string()}</p> }.into_view(),
        }}
        <ComparisonChart overview=overview />
    }
}

#[component]
fn CompanySelector(
    companies: Vec<(Ticker, String)>,
    current: Memo<Option<Ticker>>,
    set_selected: WriteSignal<Option<Ticker>>,
) -> impl IntoView {
    let options = companies
        .iter()
        .map(|(ticker, label)| view! { <option value={ticker.to_string()}>{label.clone()}</option> })
        .collect_view();
    let pills = companies
        .iter()
        .map(|(ticker, _)| {
            let ticker = ticker.clone();
            let is_active = {
                let ticker = ticker.clone();
                move || current.get().as_ref() == Some(&ticker)
            };
            let label = ticker.to_string();
            view! {
                <button
                    class=move || if is_active() { "pill active" } else { "pill" }
                    on:click=move |_| set_selected.set(Some(ticker.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="selector">
            <label class="muted">
                "Empresa "
                <select
                    prop:value=move || current.get().map(|t| t.to_string()).unwrap_or_default()
                    on:change=move |ev| set_selected.set(Some(Ticker::new(event_target_value(&ev))))
                >
                    {options}
                </select>
            </label>
            <div>{pills}</div>
        </div>
    }
}

/// Cards, charts and table for the selected company.
#[component]
fn CompanyView(dashboard: CompanyDashboard) -> impl IntoView {
    view! {
        <div class="grid">
            <div class="cards">
                <PredictionCard dashboard={dashboard.clone()} />
                <EvaluationCard dashboard={dashboard.clone()} />
                <PerformanceCard dashboard={dashboard.clone()} />
                <TechnicalCard dashboard={dashboard.clone()} />
            </div>
            <div class="cards">
                <div class="card">
                    <h2>"Precio real vs predicción"</h2>
                    <PriceChart points={dashboard.price_series.clone()} />
                </div>
                <div class="card">
                    <h2>"Últimas sesiones"</h2>
                    <Sparkline points={dashboard.sparkline.clone()} />
                </div>
                <div class="card">
                    <h2>"Error diario"</h2>
                    <ErrorChart points={dashboard.error_series.clone()} />
                </div>
                <div class="card">
                    <h2>"Perfil del activo"</h2>
                    <RadarChart points={dashboard.radar.clone()} />
                </div>
            </div>
        </div>
        <HistoryTable dashboard=dashboard />
    }
}

#[component]
fn PredictionCard(dashboard: CompanyDashboard) -> impl IntoView {
    let prediction = dashboard.tomorrow.as_ref();
    view! {
        <div class="card">
            <h2>"Predicción para mañana"</h2>
            <p class="muted">{formatting::prediction_date(prediction)}</p>
            <p class="big">{formatting::price_usd(prediction.and_then(|p| p.predicted_price))}</p>
            <p class="muted">"Tendencia esperada: " <strong>{formatting::prediction_trend(prediction)}</strong></p>
        </div>
    }
}

#[component]
fn EvaluationCard(dashboard: CompanyDashboard) -> impl IntoView {
    let body = match dashboard.latest {
        Some(row) => {
            let verdict_class = formatting::verdict_class(row.is_hit);
            view! {
                <p>"Fecha: " <strong>{row.date.clone()}</strong></p>
                <p>"Predicho: " <strong>{formatting::price_usd(row.predicted_price)}</strong></p>
                <p>"Real: " <strong>{formatting::price_usd(row.real_price)}</strong></p>
                <p>"Error: " <strong>{formatting::percent_cell(row.error_pct)}</strong></p>
                <p>"Resultado: " <span class=verdict_class>{formatting::hit_verdict(row.is_hit)}</span></p>
            }
            .into_view()
        }
        None => view! { <p class="muted">"Sin datos recientes."</p> }.into_view(),
    };
    view! {
        <div class="card">
            <h2>"Predicción de ayer vs valor real de hoy"</h2>
            {body}
        </div>
    }
}

#[component]
fn PerformanceCard(dashboard: CompanyDashboard) -> impl IntoView {
    let body = match dashboard.accuracy() {
        Ok(summary) => match formatting::accuracy_lines(summary) {
            Some((mean_error, hits)) => view! {
                <p>"Error medio: " <strong>{mean_error}</strong></p>
                <p>"Días con acierto: " <strong>{hits}</strong></p>
            }
            .into_view(),
            None => ().into_view(),
        },
        Err(e) => view! { <p class="muted">{e.to_string()}</p> }.into_view(),
    };
    view! {
        <div class="card">
            <h2>"Desempeño histórico del modelo"</h2>
            {body}
        </div>
    }
}

#[component]
fn TechnicalCard(dashboard: CompanyDashboard) -> impl IntoView {
    let Some(state) = dashboard.current_state else {
        return view! { <div class="card"><h2>"Estado técnico"</h2><p class="muted">"Sin datos."</p></div> }
            .into_view();
    };
    let rsi = match (state.rsi, state.rsi_state.as_deref()) {
        (Some(rsi), Some(label)) => format!("{rsi:.1} ({label})"),
        (Some(rsi), None) => format!("{rsi:.1}"),
        _ => formatting::NO_VALUE.to_string(),
    };
    let volume = state.volume_state.map(|v| v.tag().to_string()).unwrap_or_else(|| formatting::NO_VALUE.to_string());
    let signal = state.signal.clone().map(|signal| {
        let strength = state.signal_strength.map(|s| format!(" · fuerza {s:+.0}")).unwrap_or_default();
        view! { <p>"Señal: " <strong>{signal}</strong>{strength}</p> }
    });
    view! {
        <div class="card">
            <h2>"Estado técnico"</h2>
            <p>"Precio actual: " <strong>{formatting::price_usd(state.current_price)}</strong></p>
            <p>"RSI: " <strong>{rsi}</strong></p>
            <p>"Tendencia 5d / 20d: " <strong>{formatting::signed_percent(state.trend_5d_pct)}</strong>
               " / " <strong>{formatting::signed_percent(state.trend_20d_pct)}</strong></p>
            <p>"Volatilidad: " <strong>{formatting::percent_cell(state.volatility_pct)}</strong></p>
            <p>"Volumen: " <strong>{volume}</strong></p>
            {signal}
        </div>
    }
    .into_view()
}

#[component]
fn PriceChart(points: Vec<PricePoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <p class="muted">"No hay historial suficiente."</p> }.into_view();
    }
    let viewport = Viewport::default();
    let real: Vec<Option<f64>> = points.iter().map(|p| p.real).collect();
    let predicted: Vec<Option<f64>> = points.iter().map(|p| p.predicted).collect();
    let Some(range) = value_range(real.iter().chain(predicted.iter()).copied()) else {
        return view! { <p class="muted">"No hay historial suficiente."</p> }.into_view();
    };
    let lines = [("#2563eb", real), ("#16a34a", predicted)]
        .into_iter()
        .flat_map(|(color, values)| {
            polyline_segments(&values, range, &viewport)
                .into_iter()
                .map(move |segment| (color, svg_points(&segment)))
        })
        .map(|(color, points)| view! { <polyline points=points fill="none" stroke=color stroke-width="2" /> })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", viewport.width, viewport.height)} width="100%">
            {lines}
        </svg>
        <div class="legend">
            <span style="color:#2563eb">"● Real"</span>
            <span style="color:#16a34a">"● Predicción"</span>
            <span class="muted">{format!("{:.2} – {:.2} USD", range.0, range.1)}</span>
        </div>
    }
    .into_view()
}

#[component]
fn Sparkline(points: Vec<SparkPoint>) -> impl IntoView {
    let viewport = Viewport::new(240.0, 60.0, 4.0);
    let values: Vec<Option<f64>> = points.iter().map(|p| p.real).collect();
    let Some(range) = value_range(values.iter().copied()) else {
        return view! { <p class="muted">"Sin datos."</p> }.into_view();
    };
    let lines = polyline_segments(&values, range, &viewport)
        .into_iter()
        .map(|segment| view! { <polyline points={svg_points(&segment)} fill="none" stroke="#6366f1" stroke-width="1.5" /> })
        .collect_view();
    view! {
        <svg viewBox={format!("0 0 {} {}", viewport.width, viewport.height)} width="100%">{lines}</svg>
    }
    .into_view()
}

#[component]
fn ErrorChart(points: Vec<ErrorPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <p class="muted">"Sin datos."</p> }.into_view();
    }
    let viewport = Viewport::new(640.0, 160.0, 16.0);
    let max = points.iter().map(|p| p.error.abs()).fold(1.0, f64::max);
    let base = viewport.height - viewport.padding;
    let bars = bar_slots(points.len(), &viewport)
        .into_iter()
        .zip(points)
        .map(|((x, width), point)| {
            let height = bar_height(point.error.abs(), max, &viewport);
            let color = if point.hit == 1 { "#10b981" } else { "#f87171" };
            let label = format!("{}: {:.2}%", point.date, point.error);
            view! { <rect x=x y={base - height} width=width height=height fill=color aria-label=label /> }
        })
        .collect_view();
    view! {
        <svg viewBox={format!("0 0 {} {}", viewport.width, viewport.height)} width="100%">{bars}</svg>
    }
    .into_view()
}

#[component]
fn RadarChart(points: Vec<RadarPoint>) -> impl IntoView {
    let (size, radius) = (220.0, 80.0);
    let center = (size / 2.0, size / 2.0);
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let outline = svg_points(&radar_points(&vec![100.0; values.len()], center, radius));
    let shape = svg_points(&radar_points(&values, center, radius));
    let labels = radar_points(&vec![100.0; values.len()], center, radius + 18.0)
        .into_iter()
        .zip(points)
        .map(|((x, y), point)| {
            view! {
                <text x=x y=y font-size="9" text-anchor="middle">
                    {format!("{} {:.0}", point.label, point.value)}
                </text>
            }
        })
        .collect_view();
    view! {
        <svg viewBox={format!("0 0 {size} {size}")} width="100%">
            <polygon points=outline fill="none" stroke="#cbd5e1" />
            <polygon points=shape fill="rgba(37,99,235,0.25)" stroke="#2563eb" />
            {labels}
        </svg>
    }
}

#[component]
fn ComparisonChart(overview: Overview) -> impl IntoView {
    let viewport = Viewport::new(640.0, 200.0, 20.0);
    let max_error = overview.max_mean_error();
    let base = viewport.height - viewport.padding;
    let groups = bar_slots(overview.comparison.len(), &viewport)
        .into_iter()
        .zip(overview.comparison)
        .map(|((x, width), point): ((f64, f64), ComparisonPoint)| {
            let half = width / 2.0;
            let hit_h = bar_height(point.hit_rate_pct, 100.0, &viewport);
            let err_h = bar_height(point.mean_error_pct, max_error, &viewport);
            let caption = if point.has_data {
                format!("{}: {:.1}% aciertos, {:.2}% error", point.ticker, point.hit_rate_pct, point.mean_error_pct)
            } else {
                format!("{}: sin datos suficientes", point.ticker)
            };
            view! {
                <g aria-label=caption>
                    <rect x=x y={base - hit_h} width=half height=hit_h fill="#2563eb" />
                    <rect x={x + half} y={base - err_h} width=half height=err_h fill="#f59e0b" />
                    <text x={x + half} y={viewport.height - 4.0} font-size="9" text-anchor="middle">
                        {point.ticker.to_string()}
                    </text>
                </g>
            }
        })
        .collect_view();
    view! {
        <div class="card" style="margin-top:1.5rem">
            <h2>"Comparativa entre empresas"</h2>
            <svg viewBox={format!("0 0 {} {}", viewport.width, viewport.height)} width="100%">{groups}</svg>
            <div class="legend">
                <span style="color:#2563eb">"■ Tasa de acierto (%)"</span>
                <span style="color:#f59e0b">"■ Error medio (%)"</span>
            </div>
        </div>
    }
}

#[component]
fn HistoryTable(dashboard: CompanyDashboard) -> impl IntoView {
    if dashboard.history.is_empty() {
        return view! { <p class="muted">"Sin datos."</p> }.into_view();
    }
    let rows = dashboard
        .history
        .iter()
        .map(|row| {
            let [date, real, predicted, error, hit] = formatting::history_cells(row);
            view! {
                <tr><td>{date}</td><td>{real}</td><td>{predicted}</td><td>{error}</td><td>{hit}</td></tr>
            }
        })
        .collect_view();
    view! {
        <div class="card" style="margin-top:1.5rem">
            <h2>"Historial de esta empresa"</h2>
            <table>
                <thead>
                    <tr><th>"Fecha"</th><th>"Real (USD)"</th><th>"Predicho (USD)"</th><th>"Error %"</th><th>"Acierto"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}
