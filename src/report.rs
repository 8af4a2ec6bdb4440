//! Human-facing rendering of an [`Assessment`]: result lines, informational
//! messages, the disclaimer, and the JSON view returned by the API.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;

use crate::assessment::{Assessment, MineralScore, Outcome, Status};
use crate::symptom::{InputWarning, Symptom, SymptomVector};

pub const PAGE_TITLE: &str = "Mineral Deficiency Awareness Tool";
pub const PROMPT: &str = "Select symptoms you are currently experiencing:";
pub const SUMMARY_HEADING: &str = "Nutrient Likelihood Summary";

pub const MSG_NOTHING_SELECTED: &str = "No symptoms selected. Choose the symptoms you are \
currently experiencing to see a summary.";
pub const MSG_NO_STRONG_ALIGNMENT: &str = "Your symptoms do not strongly align with common \
mineral deficiencies. If symptoms persist or worsen, consider seeking medical evaluation.";
pub const MSG_NO_QUALIFYING_MINERAL: &str = "None of the minerals reached a moderate \
likelihood for the selected symptoms. If symptoms persist or worsen, consider seeking \
medical evaluation.";

pub const DISCLAIMER: &str = "Disclaimer: This tool is for educational purposes only and \
does not diagnose, treat, or recommend supplements. Always consult a healthcare professional.";

/// Informational message for a sentinel outcome; `None` when results exist.
pub fn message(outcome: &Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::NothingSelected => Some(MSG_NOTHING_SELECTED),
        Outcome::NoStrongAlignment { .. } => Some(MSG_NO_STRONG_ALIGNMENT),
        Outcome::NoQualifyingMineral => Some(MSG_NO_QUALIFYING_MINERAL),
        Outcome::Ranked(_) => None,
    }
}

/// "Iron — High likelihood"
pub fn result_line(entry: &MineralScore) -> String {
    format!("{} — {}", entry.mineral, entry.likelihood)
}

/// Plain-text report (CLI). Always ends with the disclaimer.
pub fn render_text(assessment: &Assessment) -> String {
    let mut out = String::new();
    match message(&assessment.outcome) {
        Some(msg) => {
            let _ = writeln!(out, "{msg}");
        }
        None => {
            let _ = writeln!(out, "{SUMMARY_HEADING}");
            for entry in assessment.results() {
                let _ = writeln!(out, "  {}", result_line(entry));
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{DISCLAIMER}");
    out
}

/* ----------------------------
JSON view
---------------------------- */

#[derive(Debug, Clone, Serialize)]
pub struct ResultLine {
    #[serde(flatten)]
    pub entry: MineralScore,
    pub line: String,
}

/// Response shape of `POST /api/assess`, also used to render the HTML page.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub status: Status,
    pub message: Option<&'static str>,
    pub heading: Option<&'static str>,
    pub results: Vec<ResultLine>,
    /// All minerals, column order, Low included.
    pub scores: Vec<MineralScore>,
    pub selected: Vec<Symptom>,
    pub warnings: Vec<String>,
    pub disclaimer: &'static str,
    pub assessed_at: String,
}

impl AssessmentView {
    pub fn new(
        assessment: &Assessment,
        vector: &SymptomVector,
        warnings: &[InputWarning],
    ) -> Self {
        let msg = message(&assessment.outcome);
        Self {
            status: assessment.status(),
            message: msg,
            heading: msg.is_none().then_some(SUMMARY_HEADING),
            results: assessment
                .results()
                .iter()
                .map(|e| ResultLine {
                    entry: *e,
                    line: result_line(e),
                })
                .collect(),
            scores: assessment.breakdown.to_vec(),
            selected: vector.present(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
            disclaimer: DISCLAIMER,
            assessed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
