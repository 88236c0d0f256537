//! Derived health metrics.
//!
//! Everything here is pure: no I/O and no clock reads. Missing or unusable
//! inputs produce `None` rather than an error.

mod age;
mod bmi;
mod bmr;

pub use age::*;
pub use bmi::*;
pub use bmr::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

/// Metrics derived from a stored record, at full precision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    pub age: Option<i32>,
    pub bmi: Option<f64>,
    pub bmi_classification: Option<BmiClass>,
    pub basal_metabolic_rate: Option<f64>,
}

impl HealthMetrics {
    /// Compute all metrics for `record` as of `reference`.
    ///
    /// A birth date that cannot be parsed leaves age (and therefore BMR)
    /// unavailable.
    pub fn for_record(record: &PatientRecord, reference: NaiveDate) -> Self {
        let age = calc_age(&record.birth_date, reference).ok();
        let bmi = bmi_calc(Some(record.weight), Some(record.height));

        Self {
            age,
            bmi,
            bmi_classification: classification(bmi),
            basal_metabolic_rate: basal_metabolic_rate(
                Some(record.weight),
                Some(record.height),
                age,
                Some(record.biological_gender.as_str()),
            ),
        }
    }

    /// Copy with BMI and BMR rounded to two decimals for display.
    pub fn rounded(self) -> Self {
        Self {
            bmi: self.bmi.map(round2),
            basal_metabolic_rate: self.basal_metabolic_rate.map(round2),
            ..self
        }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
