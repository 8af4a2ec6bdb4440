//! assessment.rs — output shapes of the scorer: likelihood tiers, per-mineral
//! scores and the four possible outcomes (ranked list or one of three sentinels).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::weights::{Mineral, MINERAL_COUNT};

/// Classification bucket for a score. `Low` never appears in a ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    Low,
    Moderate,
    High,
}

impl Likelihood {
    /// Display text, e.g. "High likelihood".
    pub fn label(self) -> &'static str {
        match self {
            Likelihood::Low => "Low likelihood",
            Likelihood::Moderate => "Moderate likelihood",
            Likelihood::High => "High likelihood",
        }
    }

    /// Whether this tier is surfaced in the ranked summary.
    pub fn is_reported(self) -> bool {
        self != Likelihood::Low
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One mineral's score and tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineralScore {
    pub mineral: Mineral,
    pub score: u32,
    pub likelihood: Likelihood,
}

/// Stable machine-readable outcome kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ranked,
    NothingSelected,
    NoStrongAlignment,
    NoQualifyingMineral,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ranked => "ranked",
            Status::NothingSelected => "nothing_selected",
            Status::NoStrongAlignment => "no_strong_alignment",
            Status::NoQualifyingMineral => "no_qualifying_mineral",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every flag was absent.
    NothingSelected,
    /// Best score fell below the alignment floor.
    NoStrongAlignment { top_score: u32 },
    /// Aligned, but no mineral reached the moderate threshold.
    NoQualifyingMineral,
    /// 1..=top_n entries, descending score, Moderate/High only.
    Ranked(Vec<MineralScore>),
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::NothingSelected => Status::NothingSelected,
            Outcome::NoStrongAlignment { .. } => Status::NoStrongAlignment,
            Outcome::NoQualifyingMineral => Status::NoQualifyingMineral,
            Outcome::Ranked(_) => Status::Ranked,
        }
    }

    /// Ranked entries; empty for every sentinel.
    pub fn results(&self) -> &[MineralScore] {
        match self {
            Outcome::Ranked(v) => v.as_slice(),
            _ => &[],
        }
    }
}

/// Full scorer output: the outcome plus every mineral's score in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub outcome: Outcome,
    pub breakdown: [MineralScore; MINERAL_COUNT],
}

impl Assessment {
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    pub fn results(&self) -> &[MineralScore] {
        self.outcome.results()
    }

    pub fn score_of(&self, mineral: Mineral) -> u32 {
        self.breakdown[mineral.index()].score
    }
}
