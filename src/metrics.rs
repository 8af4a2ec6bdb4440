use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::assessment::Status;
use crate::config::Thresholds;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder once per process and return its handle.
pub fn install() -> anyhow::Result<PrometheusHandle> {
    HANDLE
        .get_or_try_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))
        })
        .cloned()
}

/// Returns a router exposing `/metrics` with the Prometheus exposition format.
pub fn router<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/metrics",
        get(move || {
            let h = handle.clone();
            async move { h.render() }
        }),
    )
}

/// Count one assessment. Only aggregate numbers are recorded, never which symptoms.
pub fn record_assessment(status: Status, selected: usize, unrecognized_keys: usize) {
    counter!("assessments_total", "status" => status.as_str()).increment(1);
    histogram!("assessment_selected_symptoms").record(selected as f64);
    if unrecognized_keys > 0 {
        counter!("assessment_unrecognized_keys_total").increment(unrecognized_keys as u64);
    }
}

/// Publish the active thresholds as gauges.
pub fn record_thresholds(t: &Thresholds) {
    gauge!("scoring_threshold", "kind" => "high").set(f64::from(t.high));
    gauge!("scoring_threshold", "kind" => "moderate").set(f64::from(t.moderate));
    gauge!("scoring_threshold", "kind" => "alignment_floor").set(f64::from(t.alignment_floor));
}
