//! # Weight Table
//!
//! Hand-authored symptom → mineral weights (0–3). Rows follow [`Symptom::ALL`],
//! columns follow [`Mineral::ALL`]; the array type pins both dimensions, so a
//! new symptom or mineral will not compile until the table is extended.
//!
//! The values are constants, not calibrated against clinical data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::symptom::{Symptom, SYMPTOM_COUNT};

pub const MINERAL_COUNT: usize = 7;

/// Mineral (or vitamin) that a score is reported for. Declaration order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mineral {
    Iron,
    #[serde(rename = "Vitamin B12")]
    VitaminB12,
    Magnesium,
    Zinc,
    Calcium,
    Iodine,
    Potassium,
}

impl Mineral {
    pub const ALL: [Mineral; MINERAL_COUNT] = [
        Mineral::Iron,
        Mineral::VitaminB12,
        Mineral::Magnesium,
        Mineral::Zinc,
        Mineral::Calcium,
        Mineral::Iodine,
        Mineral::Potassium,
    ];

    /// Column index into the weight table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Mineral::Iron => "Iron",
            Mineral::VitaminB12 => "Vitamin B12",
            Mineral::Magnesium => "Magnesium",
            Mineral::Zinc => "Zinc",
            Mineral::Calcium => "Calcium",
            Mineral::Iodine => "Iodine",
            Mineral::Potassium => "Potassium",
        }
    }

    /// Highest score this mineral can reach (every symptom present).
    pub fn max_score(self) -> u32 {
        Symptom::ALL.into_iter().map(|s| weight(s, self)).sum()
    }
}

impl fmt::Display for Mineral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns: Iron, Vitamin B12, Magnesium, Zinc, Calcium, Iodine, Potassium.
pub const WEIGHT_TABLE: [[u8; MINERAL_COUNT]; SYMPTOM_COUNT] = [
    [3, 3, 2, 1, 0, 2, 1], // Fatigue
    [2, 2, 1, 0, 0, 1, 1], // Dizziness
    [3, 2, 1, 0, 0, 0, 0], // Shortness_of_Breath
    [0, 3, 2, 0, 0, 0, 1], // Tingling
    [0, 1, 3, 0, 2, 0, 3], // Muscle_Cramps
    [2, 1, 0, 2, 0, 1, 0], // Hair_Loss
    [2, 3, 2, 1, 0, 2, 1], // Brain_Fog
    [2, 1, 0, 0, 0, 3, 0], // Cold_Intolerance
    [2, 1, 0, 3, 0, 0, 0], // Frequent_Infections
    [0, 0, 0, 0, 3, 0, 0], // Bone_Pain
    [2, 2, 3, 0, 1, 1, 3], // Palpitations
    [1, 2, 2, 1, 0, 2, 1], // Low_Mood
];

#[inline]
pub fn weight(symptom: Symptom, mineral: Mineral) -> u32 {
    u32::from(WEIGHT_TABLE[symptom.index()][mineral.index()])
}
