// src/config/scoring.rs
//! Scoring thresholds: built-in defaults, optional TOML file, env overrides.
//!
//! Resolution order (later wins):
//! 1. built-in defaults (high 12, moderate 7, alignment floor 5, top 3)
//! 2. `config/scoring.toml` or the file named by `MINERAL_CONFIG_PATH`
//! 3. `MINERAL_HIGH_THRESHOLD` / `MINERAL_MODERATE_THRESHOLD` /
//!    `MINERAL_ALIGNMENT_FLOOR` / `MINERAL_TOP_N`

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};
use std::{env, fs};
use tracing::{info, warn};

// --- env defaults & names ---
pub const DEFAULT_SCORING_CONFIG_PATH: &str = "config/scoring.toml";

pub const ENV_SCORING_CONFIG_PATH: &str = "MINERAL_CONFIG_PATH";
pub const ENV_HIGH_THRESHOLD: &str = "MINERAL_HIGH_THRESHOLD";
pub const ENV_MODERATE_THRESHOLD: &str = "MINERAL_MODERATE_THRESHOLD";
pub const ENV_ALIGNMENT_FLOOR: &str = "MINERAL_ALIGNMENT_FLOOR";
pub const ENV_TOP_N: &str = "MINERAL_TOP_N";

pub const DEFAULT_HIGH_THRESHOLD: u32 = 12;
pub const DEFAULT_MODERATE_THRESHOLD: u32 = 7;
pub const DEFAULT_ALIGNMENT_FLOOR: u32 = 5;
pub const DEFAULT_TOP_N: usize = 3;

/// Cut-offs used to turn raw scores into likelihood tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// score >= high → High likelihood
    pub high: u32,
    /// score >= moderate → Moderate likelihood; below is not reported
    pub moderate: u32,
    /// best score below this → "no strong alignment"
    pub alignment_floor: u32,
    /// maximum number of ranked minerals
    pub top_n: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            moderate: DEFAULT_MODERATE_THRESHOLD,
            alignment_floor: DEFAULT_ALIGNMENT_FLOOR,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.moderate == 0 {
            anyhow::bail!("moderate threshold must be at least 1");
        }
        if self.moderate > self.high {
            anyhow::bail!(
                "moderate threshold ({}) must not exceed high threshold ({})",
                self.moderate,
                self.high
            );
        }
        if self.top_n == 0 {
            anyhow::bail!("top_n must be at least 1");
        }
        Ok(())
    }
}

/// Root of `config/scoring.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub thresholds: Thresholds,
}

impl ScoringConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: ScoringConfig = toml::from_str(toml_str)?;
        cfg.thresholds.validate()?;
        Ok(cfg)
    }

    /// Load and validate a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read scoring config at {}: {}", path.display(), e)
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scoring config at {}: {}", path.display(), e))
    }

    /// Resolve from `MINERAL_CONFIG_PATH` (or the default path) plus env overrides.
    /// Only a missing default file falls back to the built-in thresholds; an
    /// explicit `MINERAL_CONFIG_PATH` must exist.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut cfg = match env::var(ENV_SCORING_CONFIG_PATH) {
            Ok(explicit) => Self::load_from_file(explicit)?,
            Err(_) => {
                let path = Path::new(DEFAULT_SCORING_CONFIG_PATH);
                if path.exists() {
                    Self::load_from_file(path)?
                } else {
                    warn!(
                        path = %path.display(),
                        "scoring config not found; using built-in thresholds"
                    );
                    Self::default()
                }
            }
        };

        cfg.apply_env_overrides();
        cfg.thresholds.validate()?;
        info!(
            high = cfg.thresholds.high,
            moderate = cfg.thresholds.moderate,
            alignment_floor = cfg.thresholds.alignment_floor,
            top_n = cfg.thresholds.top_n,
            "scoring thresholds resolved"
        );
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        let t = &mut self.thresholds;
        if let Some(v) = parse_env_number(ENV_HIGH_THRESHOLD) {
            t.high = v;
        }
        if let Some(v) = parse_env_number(ENV_MODERATE_THRESHOLD) {
            t.moderate = v;
        }
        if let Some(v) = parse_env_number(ENV_ALIGNMENT_FLOOR) {
            t.alignment_floor = v;
        }
        if let Some(v) = parse_env_number(ENV_TOP_N) {
            t.top_n = v;
        }
    }
}

// unset → None; unparsable → None + warn
fn parse_env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(env = name, value = %raw, "ignoring unparsable threshold override");
            None
        }
    }
}

/* ----------------------------
Thread-safe handle
---------------------------- */

/// Shared, swappable scoring config for request handlers.
#[derive(Clone, Debug)]
pub struct ScoringHandle {
    inner: Arc<RwLock<ScoringConfig>>,
}

impl ScoringHandle {
    pub fn new(cfg: ScoringConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cfg)),
        }
    }

    /// Snapshot of the active config. Falls back to defaults if the lock is poisoned.
    pub fn current(&self) -> ScoringConfig {
        self.inner.read().map(|g| *g).unwrap_or_default()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.current().thresholds
    }

    /// Re-resolve from file + env and swap atomically. On error the old config stays active.
    pub fn reload(&self) -> anyhow::Result<ScoringConfig> {
        let fresh = ScoringConfig::from_env()?;
        match self.inner.write() {
            Ok(mut guard) => {
                *guard = fresh;
                Ok(fresh)
            }
            Err(_) => anyhow::bail!("scoring config lock poisoned"),
        }
    }
}

impl Default for ScoringHandle {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_canonical() {
        let t = Thresholds::default();
        assert_eq!((t.high, t.moderate, t.alignment_floor, t.top_n), (12, 7, 5, 3));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = ScoringConfig::from_toml_str(
            r#"
[thresholds]
high = 14
moderate = 8
"#,
        )
        .expect("parse");
        assert_eq!(cfg.thresholds.high, 14);
        assert_eq!(cfg.thresholds.moderate, 8);
        assert_eq!(cfg.thresholds.alignment_floor, DEFAULT_ALIGNMENT_FLOOR);
        assert_eq!(cfg.thresholds.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg = ScoringConfig::from_toml_str("").expect("parse");
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = ScoringConfig::from_toml_str("[thresholds]\nhigh = 6\nmoderate = 9\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("must not exceed"), "{err}");
    }

    #[test]
    fn rejects_zero_top_n_and_zero_moderate() {
        assert!(ScoringConfig::from_toml_str("[thresholds]\ntop_n = 0\n").is_err());
        assert!(ScoringConfig::from_toml_str("[thresholds]\nmoderate = 0\n").is_err());
    }

    #[test]
    fn rejects_negative_numbers() {
        assert!(ScoringConfig::from_toml_str("[thresholds]\nhigh = -1\n").is_err());
    }

    #[test]
    fn handle_snapshot() {
        let handle = ScoringHandle::default();
        assert_eq!(handle.thresholds(), Thresholds::default());
    }
}
