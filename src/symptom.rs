//! # Symptoms
//!
//! The 12 fixed self-reported symptoms and the immutable presence vector the
//! scorer consumes.
//!
//! - Keys are exact (`"Fatigue"`, `"Shortness_of_Breath"`, ...). Nothing else is
//!   recognized, not even a different casing.
//! - Missing keys mean "absent". Unknown keys are ignored for scoring but come
//!   back as [`InputWarning`]s, with a "did you mean" hint when a real key is close.
//! - Values are loose: `1`/`0`, booleans, and `"Present"`/`"Absent"` style strings.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SYMPTOM_COUNT: usize = 12;

/// Jaro-Winkler similarity above which an unknown key gets a suggestion.
const SUGGESTION_MIN_SIMILARITY: f64 = 0.8;

/// One of the fixed symptom indicators. Declaration order is the weight-table row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symptom {
    Fatigue,
    Dizziness,
    #[serde(rename = "Shortness_of_Breath")]
    ShortnessOfBreath,
    Tingling,
    #[serde(rename = "Muscle_Cramps")]
    MuscleCramps,
    #[serde(rename = "Hair_Loss")]
    HairLoss,
    #[serde(rename = "Brain_Fog")]
    BrainFog,
    #[serde(rename = "Cold_Intolerance")]
    ColdIntolerance,
    #[serde(rename = "Frequent_Infections")]
    FrequentInfections,
    #[serde(rename = "Bone_Pain")]
    BonePain,
    Palpitations,
    #[serde(rename = "Low_Mood")]
    LowMood,
}

impl Symptom {
    pub const ALL: [Symptom; SYMPTOM_COUNT] = [
        Symptom::Fatigue,
        Symptom::Dizziness,
        Symptom::ShortnessOfBreath,
        Symptom::Tingling,
        Symptom::MuscleCramps,
        Symptom::HairLoss,
        Symptom::BrainFog,
        Symptom::ColdIntolerance,
        Symptom::FrequentInfections,
        Symptom::BonePain,
        Symptom::Palpitations,
        Symptom::LowMood,
    ];

    /// Row index into the weight table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire key used by forms, the JSON API and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Symptom::Fatigue => "Fatigue",
            Symptom::Dizziness => "Dizziness",
            Symptom::ShortnessOfBreath => "Shortness_of_Breath",
            Symptom::Tingling => "Tingling",
            Symptom::MuscleCramps => "Muscle_Cramps",
            Symptom::HairLoss => "Hair_Loss",
            Symptom::BrainFog => "Brain_Fog",
            Symptom::ColdIntolerance => "Cold_Intolerance",
            Symptom::FrequentInfections => "Frequent_Infections",
            Symptom::BonePain => "Bone_Pain",
            Symptom::Palpitations => "Palpitations",
            Symptom::LowMood => "Low_Mood",
        }
    }

    /// Question text shown next to the selector.
    pub fn label(self) -> &'static str {
        match self {
            Symptom::Fatigue => "Persistent fatigue / low energy",
            Symptom::Dizziness => "Dizziness or lightheadedness",
            Symptom::ShortnessOfBreath => "Shortness of breath on mild activity",
            Symptom::Tingling => "Tingling or numbness (hands/feet)",
            Symptom::MuscleCramps => "Muscle cramps or spasms",
            Symptom::HairLoss => "Hair loss or thinning",
            Symptom::BrainFog => "Poor concentration / brain fog",
            Symptom::ColdIntolerance => "Cold intolerance",
            Symptom::FrequentInfections => "Frequent infections / slow wound healing",
            Symptom::BonePain => "Bone or joint pain",
            Symptom::Palpitations => "Heart palpitations",
            Symptom::LowMood => "Low mood / irritability",
        }
    }

    /// Exact key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Closest recognized key for a typo, if any is similar enough.
    pub fn suggest(key: &str) -> Option<Self> {
        let needle = key.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .map(|s| (s, strsim::jaro_winkler(&needle, &s.key().to_ascii_lowercase())))
            .filter(|(_, sim)| *sim >= SUGGESTION_MIN_SIMILARITY)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| s)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/* ----------------------------
Presence values
---------------------------- */

/// Longest raw input echoed back in a warning, in characters.
pub const ECHO_LIMIT: usize = 40;

/// Cut user input to `ECHO_LIMIT` characters before it lands in a page or log line.
pub fn clip_for_echo(raw: &str) -> String {
    match raw.char_indices().nth(ECHO_LIMIT) {
        Some((cut, _)) => format!("{}…", &raw[..cut]),
        None => raw.to_string(),
    }
}

/// A loosely typed presence flag as it arrives from a form, JSON body or CLI.
pub trait PresenceValue {
    /// `Some(true)` present, `Some(false)` absent, `None` unreadable.
    fn presence(&self) -> Option<bool>;

    /// Short rendering of the raw value for warnings.
    fn describe(&self) -> String;
}

impl PresenceValue for str {
    fn presence(&self) -> Option<bool> {
        match self.trim().to_ascii_lowercase().as_str() {
            "1" | "present" | "yes" | "true" | "on" => Some(true),
            "" | "0" | "absent" | "no" | "false" | "off" => Some(false),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        format!("{:?}", clip_for_echo(self))
    }
}

impl PresenceValue for String {
    fn presence(&self) -> Option<bool> {
        self.as_str().presence()
    }

    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

impl PresenceValue for bool {
    fn presence(&self) -> Option<bool> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl PresenceValue for i64 {
    fn presence(&self) -> Option<bool> {
        match self {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl PresenceValue for u8 {
    fn presence(&self) -> Option<bool> {
        i64::from(*self).presence()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl PresenceValue for serde_json::Value {
    fn presence(&self) -> Option<bool> {
        use serde_json::Value;
        match self {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().and_then(|i| i.presence()),
            Value::String(s) => s.presence(),
            Value::Null => Some(false),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn describe(&self) -> String {
        clip_for_echo(&self.to_string())
    }
}

impl<T: PresenceValue + ?Sized> PresenceValue for &T {
    fn presence(&self) -> Option<bool> {
        (**self).presence()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/* ----------------------------
Vector + warnings
---------------------------- */

/// Non-fatal remark about the submitted input. Never changes scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWarning {
    UnrecognizedKey {
        key: String,
        suggestion: Option<Symptom>,
    },
    UnreadableValue {
        symptom: Symptom,
        raw: String,
    },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::UnrecognizedKey {
                key,
                suggestion: Some(s),
            } => write!(f, "unrecognized symptom key `{key}` (did you mean `{s}`?)"),
            InputWarning::UnrecognizedKey {
                key,
                suggestion: None,
            } => write!(f, "unrecognized symptom key `{key}` was ignored"),
            InputWarning::UnreadableValue { symptom, raw } => write!(
                f,
                "value {raw} for `{symptom}` is not a presence flag; treated as absent"
            ),
        }
    }
}

/// Immutable presence flags for the 12 symptoms, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SymptomVector {
    flags: [bool; SYMPTOM_COUNT],
}

/// Result of building a vector from loose input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSymptoms {
    pub vector: SymptomVector,
    pub warnings: Vec<InputWarning>,
}

impl SymptomVector {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every symptom present.
    pub fn all() -> Self {
        Self {
            flags: [true; SYMPTOM_COUNT],
        }
    }

    pub fn from_present<I: IntoIterator<Item = Symptom>>(present: I) -> Self {
        let mut flags = [false; SYMPTOM_COUNT];
        for s in present {
            flags[s.index()] = true;
        }
        Self { flags }
    }

    /// Build from `(key, value)` pairs. Later pairs overwrite earlier ones for the same key.
    pub fn from_flags<I, K, V>(pairs: I) -> ParsedSymptoms
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: PresenceValue,
    {
        let mut flags = [false; SYMPTOM_COUNT];
        let mut warnings = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(symptom) = Symptom::from_key(key) else {
                warnings.push(InputWarning::UnrecognizedKey {
                    key: clip_for_echo(key),
                    suggestion: Symptom::suggest(key),
                });
                continue;
            };

            flags[symptom.index()] = match value.presence() {
                Some(p) => p,
                None => {
                    warnings.push(InputWarning::UnreadableValue {
                        symptom,
                        raw: value.describe(),
                    });
                    false
                }
            };
        }

        ParsedSymptoms {
            vector: Self { flags },
            warnings,
        }
    }

    #[inline]
    pub fn is_present(&self, symptom: Symptom) -> bool {
        self.flags[symptom.index()]
    }

    /// 0/1 flag for a row, as used by the dot product.
    #[inline]
    pub fn flag(&self, symptom: Symptom) -> u32 {
        u32::from(self.is_present(symptom))
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|&f| f)
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Present symptoms in table order.
    pub fn present(&self) -> Vec<Symptom> {
        Symptom::ALL
            .into_iter()
            .filter(|s| self.is_present(*s))
            .collect()
    }
}
