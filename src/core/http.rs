//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::catalog::{self, CatalogStats, ScenarioCatalog, ScenarioQuery, SortKey};
use crate::config::ServerConfig;
use crate::metrics::Metrics;
use crate::models::analysis::ParseLabelError;
use crate::models::scenario::ScenarioInput;
use crate::report::ScenarioReport;
use crate::signals::engine::ScenarioAnalyzer;

pub const SERVICE_NAME: &str = "regime-analyzer";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub catalog: &'static ScenarioCatalog,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            catalog: catalog::global(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl ToString) -> ApiError {
    (status, Json(json!({ "error": message.to_string() })))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Default, Deserialize)]
pub struct ScenarioListParams {
    pub bias: Option<String>,
    pub strength: Option<String>,
    pub sort: Option<String>,
}

/// Absent or "all" means no filter
fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, ParseLabelError>
where
    T: FromStr<Err = ParseLabelError>,
{
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

impl ScenarioListParams {
    pub fn to_query(&self) -> Result<ScenarioQuery, ParseLabelError> {
        Ok(ScenarioQuery {
            bias: parse_filter(self.bias.as_deref())?,
            strength: parse_filter(self.strength.as_deref())?,
            sort: self
                .sort
                .as_deref()
                .map(SortKey::from_str)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// List analyzed scenarios with optional bias/strength filter and sort key
async fn list_scenarios(
    State(state): State<AppState>,
    Query(params): Query<ScenarioListParams>,
) -> Result<Json<Value>, ApiError> {
    let query = params.to_query().map_err(|e| {
        warn!(error = %e, "Rejected scenario list query");
        api_error(StatusCode::BAD_REQUEST, e)
    })?;

    let reports: Vec<ScenarioReport> = state
        .catalog
        .query(&query)
        .into_iter()
        .map(ScenarioReport::from)
        .collect();

    Ok(Json(json!({
        "total": state.catalog.len(),
        "count": reports.len(),
        "scenarios": reports,
    })))
}

/// Get one analyzed scenario by id
async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ScenarioReport>, ApiError> {
    state
        .catalog
        .get(id)
        .map(|entry| Json(ScenarioReport::from(entry)))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("scenario {} not found", id)))
}

async fn get_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

/// Analyze a caller-supplied flag-encoded scenario
async fn analyze_scenario(
    State(state): State<AppState>,
    Json(input): Json<ScenarioInput>,
) -> Result<Json<ScenarioReport>, ApiError> {
    let (scenario, analysis) = ScenarioAnalyzer::analyze_input(input)
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;
    state.metrics.scenarios_analyzed_total.inc();

    let entry = catalog::AnalyzedScenario { scenario, analysis };
    Ok(Json(ScenarioReport::from(&entry)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/scenarios/{id}", get(get_scenario))
        .route("/api/stats", get(get_stats))
        .route("/api/analyze", post(analyze_scenario))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(metrics);
    info!(
        scenarios = state.catalog.len(),
        "Scenario catalog ready"
    );

    let app = create_router(state);
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server listening on {}", addr);
    info!("Metrics endpoint available at http://{}/metrics", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
