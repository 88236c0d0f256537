//! Patient models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored patient record, as returned by the store.
///
/// Fields are returned as persisted; nothing is re-validated on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Store-assigned identity
    pub id: i64,
    /// Patient name (3-100 characters)
    pub name: String,
    /// Birth date text, normally `YYYY-MM-DD`
    pub birth_date: String,
    /// Height in meters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Biological sex code ("M" or "F")
    pub biological_gender: String,
    /// Insertion timestamp, set by the store
    pub created_at: String,
}

/// Biological sex used by the metabolic rate formula.
///
/// Only two categories are modelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BiologicalGender {
    M,
    F,
}

impl BiologicalGender {
    /// Single-letter code as stored in the database.
    pub fn code(self) -> &'static str {
        match self {
            BiologicalGender::M => "M",
            BiologicalGender::F => "F",
        }
    }
}

impl FromStr for BiologicalGender {
    type Err = UnknownGender;

    /// Case-insensitive parse of "M" / "F".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "M" => Ok(BiologicalGender::M),
            "F" => Ok(BiologicalGender::F),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

impl fmt::Display for BiologicalGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a gender code is neither M nor F.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported biological gender: {0:?}")]
pub struct UnknownGender(pub String);

/// A validated patient, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub birth_date: NaiveDate,
    pub height: f64,
    pub weight: f64,
    pub biological_gender: BiologicalGender,
}

/// A validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientChanges {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub biological_gender: Option<BiologicalGender>,
}

impl PatientChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.birth_date.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.biological_gender.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_case_insensitive() {
        assert_eq!("m".parse::<BiologicalGender>(), Ok(BiologicalGender::M));
        assert_eq!("F".parse::<BiologicalGender>(), Ok(BiologicalGender::F));
        assert!("X".parse::<BiologicalGender>().is_err());
        assert!("".parse::<BiologicalGender>().is_err());
    }

    #[test]
    fn test_gender_code_roundtrip() {
        for gender in [BiologicalGender::M, BiologicalGender::F] {
            assert_eq!(gender.code().parse::<BiologicalGender>(), Ok(gender));
            assert_eq!(gender.to_string(), gender.code());
        }
    }

    #[test]
    fn test_changes_is_empty() {
        let mut changes = PatientChanges::default();
        assert!(changes.is_empty());

        changes.weight = Some(70.0);
        assert!(!changes.is_empty());
    }
}
