// src/config/mod.rs
//! Runtime configuration.

pub mod scoring;

pub use scoring::{ScoringConfig, ScoringHandle, Thresholds};
