//! # Scoring Engine
//! Pure, testable logic that maps a `SymptomVector` → `Assessment`.
//! No I/O, no shared state; the weight table is a constant.
//!
//! Policy: all-absent → nothing selected; best score under the alignment
//! floor → no strong alignment; otherwise Moderate/High minerals ranked by
//! descending score (ties keep column order), capped at `top_n`.

use crate::assessment::{Assessment, Likelihood, MineralScore, Outcome};
use crate::config::Thresholds;
use crate::symptom::{Symptom, SymptomVector};
use crate::weights::{weight, Mineral, MINERAL_COUNT};

/// Per-mineral dot product of the presence vector with its weight column.
pub fn score(vector: &SymptomVector) -> [u32; MINERAL_COUNT] {
    let mut scores = [0u32; MINERAL_COUNT];
    for mineral in Mineral::ALL {
        scores[mineral.index()] = Symptom::ALL
            .into_iter()
            .map(|s| vector.flag(s) * weight(s, mineral))
            .sum();
    }
    scores
}

pub fn classify(score: u32, thresholds: &Thresholds) -> Likelihood {
    if score >= thresholds.high {
        Likelihood::High
    } else if score >= thresholds.moderate {
        Likelihood::Moderate
    } else {
        Likelihood::Low
    }
}

/// Score, classify and rank. Total over every input.
pub fn assess(vector: &SymptomVector, thresholds: &Thresholds) -> Assessment {
    // 1) Raw scores + full breakdown in column order
    let scores = score(vector);
    let breakdown = Mineral::ALL.map(|mineral| {
        let s = scores[mineral.index()];
        MineralScore {
            mineral,
            score: s,
            likelihood: classify(s, thresholds),
        }
    });

    // 2) Sentinels
    let outcome = if vector.is_empty() {
        Outcome::NothingSelected
    } else {
        let top_score = scores.iter().copied().max().unwrap_or(0);
        if top_score < thresholds.alignment_floor {
            Outcome::NoStrongAlignment { top_score }
        } else {
            // 3) Filter → stable sort (column order on ties) → cap
            let mut ranked: Vec<MineralScore> = breakdown
                .iter()
                .copied()
                .filter(|m| m.likelihood.is_reported())
                .collect();
            ranked.sort_by(|a, b| b.score.cmp(&a.score));
            ranked.truncate(thresholds.top_n);

            if ranked.is_empty() {
                Outcome::NoQualifyingMineral
            } else {
                Outcome::Ranked(ranked)
            }
        }
    };

    Assessment { outcome, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Status;

    fn t() -> Thresholds {
        Thresholds::default()
    }

    fn with(symptoms: &[Symptom]) -> SymptomVector {
        SymptomVector::from_present(symptoms.iter().copied())
    }

    #[test]
    fn nothing_selected_sentinel() {
        let a = assess(&SymptomVector::none(), &t());
        assert_eq!(a.outcome, Outcome::NothingSelected);
        assert!(a.breakdown.iter().all(|m| m.score == 0));
    }

    #[test]
    fn fatigue_only_scores() {
        let scores = score(&with(&[Symptom::Fatigue]));
        assert_eq!(scores, [3, 3, 2, 1, 0, 2, 1]);
    }

    #[test]
    fn fatigue_only_is_below_floor() {
        let a = assess(&with(&[Symptom::Fatigue]), &t());
        assert_eq!(a.outcome, Outcome::NoStrongAlignment { top_score: 3 });
    }

    #[test]
    fn all_present_ranks_b12_first() {
        let a = assess(&SymptomVector::all(), &t());
        let r = a.results();
        assert_eq!(r.len(), 3);
        assert_eq!(r[0].mineral, Mineral::VitaminB12);
        assert_eq!(r[0].score, 21);
        assert_eq!(r[0].likelihood, Likelihood::High);
        assert_eq!(r[1].mineral, Mineral::Iron);
        assert_eq!(r[2].mineral, Mineral::Magnesium);
        assert_eq!(a.score_of(Mineral::Calcium), 6);
        assert_eq!(a.breakdown[Mineral::Calcium.index()].likelihood, Likelihood::Low);
    }

    #[test]
    fn aligned_but_nothing_moderate() {
        // Bone_Pain + Muscle_Cramps: Ca 5, K 3, Mg 3 → floor met, nothing ≥ 7
        let a = assess(&with(&[Symptom::BonePain, Symptom::MuscleCramps]), &t());
        assert_eq!(a.score_of(Mineral::Calcium), 5);
        assert_eq!(a.status(), Status::NoQualifyingMineral);
    }

    #[test]
    fn ties_keep_column_order() {
        // Fatigue + Palpitations: Iron 5, B12 5, Mg 5
        let lowered = Thresholds {
            moderate: 5,
            ..t()
        };
        let a = assess(&with(&[Symptom::Fatigue, Symptom::Palpitations]), &lowered);
        let order: Vec<Mineral> = a.results().iter().map(|m| m.mineral).collect();
        assert_eq!(
            order,
            vec![Mineral::Iron, Mineral::VitaminB12, Mineral::Magnesium]
        );
        assert!(a.results().iter().all(|m| m.score == 5));
    }

    #[test]
    fn classification_boundaries() {
        let th = t();
        assert_eq!(classify(12, &th), Likelihood::High);
        assert_eq!(classify(11, &th), Likelihood::Moderate);
        assert_eq!(classify(7, &th), Likelihood::Moderate);
        assert_eq!(classify(6, &th), Likelihood::Low);
        assert_eq!(classify(0, &th), Likelihood::Low);
    }

    #[test]
    fn top_n_caps_results() {
        let th = Thresholds { top_n: 1, ..t() };
        let a = assess(&SymptomVector::all(), &th);
        assert_eq!(a.results().len(), 1);
        assert_eq!(a.results()[0].mineral, Mineral::VitaminB12);

        let wide = Thresholds { top_n: 10, ..t() };
        let a = assess(&SymptomVector::all(), &wide);
        // Ca (6) stays out; the other six qualify
        assert_eq!(a.results().len(), 6);
    }

    #[test]
    fn stricter_thresholds_change_tiers() {
        let strict = Thresholds {
            high: 14,
            moderate: 8,
            ..t()
        };
        let a = assess(&SymptomVector::all(), &strict);
        assert_eq!(a.breakdown[Mineral::Iodine.index()].likelihood, Likelihood::Moderate);
        assert_eq!(a.breakdown[Mineral::Zinc.index()].likelihood, Likelihood::Moderate);

        let lax = assess(&SymptomVector::all(), &t());
        assert_eq!(lax.breakdown[Mineral::Iodine.index()].likelihood, Likelihood::High);
    }
}
