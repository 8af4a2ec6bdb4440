//! Mineral Deficiency Awareness Tool — Binary Entrypoint
//! Boots the Axum HTTP server with the questionnaire page and JSON API.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Local debugging aid: compact `tracing` output, opt-in via `MINERAL_DEV_LOG=1`.
/// Ignored outside dev builds unless `SHUTTLE_ENV` names a local/dev deployment.
fn enable_dev_tracing() {
    let opted_in = std::env::var("MINERAL_DEV_LOG").is_ok_and(|v| v == "1");
    let shuttle_env = std::env::var("SHUTTLE_ENV")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let dev_build = cfg!(debug_assertions)
        || matches!(shuttle_env.as_str(), "local" | "development" | "dev");

    if !opted_in || !dev_build {
        return;
    }

    // Assessment events at info, everything else at warn, unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,assessment=info,mineral_awareness=info"));

    // Shuttle installs its own subscriber when deployed; keep that one if present.
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already set; dev tracing skipped");
    }
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables MINERAL_CONFIG_PATH and the threshold overrides from .env.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let router = mineral_awareness::app()?;

    Ok(router.into())
}
