use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

use crate::config::{ScoringConfig, ScoringHandle, Thresholds};
use crate::engine;
use crate::metrics;
use crate::page;
use crate::report::AssessmentView;
use crate::symptom::{InputWarning, ParsedSymptoms, Symptom, SymptomVector};
use crate::weights::Mineral;

pub const STATIC_DIR: &str = "static";

// Route gates (read once when the router is built)
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";
pub const ENV_ADMIN_ROUTES: &str = "ADMIN_ROUTES";

#[derive(Clone)]
pub struct AppState {
    pub scoring: ScoringHandle,
}

impl AppState {
    pub fn new(cfg: ScoringConfig) -> Self {
        Self {
            scoring: ScoringHandle::new(cfg),
        }
    }

    /// Resolve scoring config from file + env.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(ScoringConfig::from_env()?))
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().is_some_and(|v| v == "1")
}

pub fn create_router(state: AppState) -> Router {
    let metrics_handle = if env_flag(ENV_DEBUG_ROUTES) {
        metrics::install()
            .map_err(|e| warn!(error = %e, "metrics route disabled"))
            .ok()
    } else {
        None
    };
    metrics::record_thresholds(&state.scoring.thresholds());

    let mut router = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/", get(form_page).post(form_submit))
        .route("/api/symptoms", get(list_symptoms))
        .route("/api/minerals", get(list_minerals))
        .route("/api/assess", post(assess_json))
        .route("/api/config", get(active_config));

    if env_flag(ENV_ADMIN_ROUTES) {
        router = router.route("/admin/reload-config", post(admin_reload_config));
    }

    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::router(handle));
    }

    router
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Shared path for form and JSON submissions: score, count, log, shape.
fn run_assessment(thresholds: &Thresholds, parsed: &ParsedSymptoms) -> AssessmentView {
    let assessment = engine::assess(&parsed.vector, thresholds);
    let status = assessment.status();
    let unrecognized = parsed
        .warnings
        .iter()
        .filter(|w| matches!(w, InputWarning::UnrecognizedKey { .. }))
        .count();

    metrics::record_assessment(status, parsed.vector.count(), unrecognized);
    info!(
        target: "assessment",
        %status,
        selected = parsed.vector.count(),
        warnings = parsed.warnings.len(),
        "assessment complete"
    );
    for w in &parsed.warnings {
        warn!(target: "assessment", warning = %w, "input warning");
    }

    AssessmentView::new(&assessment, &parsed.vector, &parsed.warnings)
}

async fn form_page() -> Html<String> {
    Html(page::render(&SymptomVector::none(), None))
}

async fn form_submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    // Pairs in submission order, so warnings render in a stable order.
    let parsed = SymptomVector::from_flags(fields);
    let view = run_assessment(&state.scoring.thresholds(), &parsed);
    Html(page::render(&parsed.vector, Some(&view)))
}

async fn assess_json(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Map<String, serde_json::Value>>,
) -> Json<AssessmentView> {
    let parsed = SymptomVector::from_flags(&body);
    Json(run_assessment(&state.scoring.thresholds(), &parsed))
}

#[derive(Serialize)]
struct SymptomInfo {
    key: &'static str,
    label: &'static str,
}

async fn list_symptoms() -> Json<Vec<SymptomInfo>> {
    Json(
        Symptom::ALL
            .into_iter()
            .map(|s| SymptomInfo {
                key: s.key(),
                label: s.label(),
            })
            .collect(),
    )
}

#[derive(Serialize)]
struct MineralInfo {
    name: &'static str,
    max_score: u32,
}

async fn list_minerals() -> Json<Vec<MineralInfo>> {
    Json(
        Mineral::ALL
            .into_iter()
            .map(|m| MineralInfo {
                name: m.name(),
                max_score: m.max_score(),
            })
            .collect(),
    )
}

async fn active_config(State(state): State<AppState>) -> Json<Thresholds> {
    Json(state.scoring.thresholds())
}

async fn admin_reload_config(
    State(state): State<AppState>,
) -> Result<Json<Thresholds>, (StatusCode, String)> {
    match state.scoring.reload() {
        Ok(cfg) => {
            metrics::record_thresholds(&cfg.thresholds);
            info!("scoring config reloaded");
            Ok(Json(cfg.thresholds))
        }
        Err(e) => {
            warn!(error = %e, "scoring config reload failed; keeping previous config");
            Err((StatusCode::UNPROCESSABLE_ENTITY, format!("reload failed: {e}")))
        }
    }
}
