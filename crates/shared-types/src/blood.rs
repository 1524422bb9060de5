use serde::{Deserialize, Serialize};
use std::fmt;

/// ABO/Rh blood group as carried on the wire ("A+", "O-", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BloodType {
    #[default]
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
}

/// All blood types in display order.
pub const ALL_BLOOD_TYPES: &[BloodType] = &[
    BloodType::APos,
    BloodType::ANeg,
    BloodType::BPos,
    BloodType::BNeg,
    BloodType::OPos,
    BloodType::ONeg,
    BloodType::AbPos,
    BloodType::AbNeg,
];

impl BloodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::APos => "A+",
            BloodType::ANeg => "A-",
            BloodType::BPos => "B+",
            BloodType::BNeg => "B-",
            BloodType::OPos => "O+",
            BloodType::ONeg => "O-",
            BloodType::AbPos => "AB+",
            BloodType::AbNeg => "AB-",
        }
    }

    /// Parse a wire label. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_uppercase();
        ALL_BLOOD_TYPES
            .iter()
            .copied()
            .find(|bt| bt.as_str() == wanted)
    }

    /// Position in [`ALL_BLOOD_TYPES`], used to sort inventory rows.
    pub fn display_rank(&self) -> usize {
        ALL_BLOOD_TYPES
            .iter()
            .position(|bt| bt == self)
            .unwrap_or(ALL_BLOOD_TYPES.len())
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
