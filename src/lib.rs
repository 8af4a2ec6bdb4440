// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod assessment;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod page;
pub mod report;
pub mod symptom;
pub mod weights;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::assessment::{Assessment, Likelihood, MineralScore, Outcome, Status};
pub use crate::config::{ScoringConfig, ScoringHandle, Thresholds};
pub use crate::engine::assess;
pub use crate::symptom::{InputWarning, ParsedSymptoms, Symptom, SymptomVector};
pub use crate::weights::Mineral;

use tracing::info;

/// Build the full HTTP app: resolve scoring config from file + env, then wire routes.
/// Used by the Shuttle entrypoint and by tests that want the production wiring.
pub fn app() -> anyhow::Result<axum::Router> {
    let state = AppState::from_env()?;
    info!(thresholds = ?state.scoring.thresholds(), "router ready");
    Ok(create_router(state))
}
