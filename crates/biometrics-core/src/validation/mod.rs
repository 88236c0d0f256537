//! Write-time validation for patient records.
//!
//! Create requests must supply every field; update requests are checked
//! field by field and only for what they supply. The store never
//! re-validates on read.

mod rules;

pub use rules::*;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{CreatePatientRequest, NewPatient, NumberInput, PatientChanges, UpdatePatientRequest};

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{message}")]
    InvalidField { field: Field, message: String },

    #[error("No fields to update")]
    NoUpdatableFields,
}

impl ValidationError {
    pub fn invalid(field: Field, message: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Request fields subject to validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    BirthDate,
    Height,
    Weight,
    Gender,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::BirthDate => "birth_date",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Gender => "gender",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a create request.
///
/// Fields are checked in the order name, birth date, height, weight, gender
/// and the first failure is returned.
pub fn validate_new(request: &CreatePatientRequest, today: NaiveDate) -> ValidationResult<NewPatient> {
    let name = check_name(request.name.as_deref().unwrap_or_default())?;

    let birth_date = match request.birth_date.as_deref() {
        Some(raw) => check_birth_date(raw, today)?,
        None => {
            return Err(ValidationError::invalid(
                Field::BirthDate,
                "Invalid birth date, use YYYY-MM-DD",
            ))
        }
    };

    let height = check_height(required_number(&request.height, Field::Height, "Invalid height")?)?;
    let weight = check_weight(required_number(&request.weight, Field::Weight, "Invalid weight")?)?;
    let biological_gender = check_gender(request.gender.as_deref().unwrap_or_default())?;

    Ok(NewPatient {
        name,
        birth_date,
        height,
        weight,
        biological_gender,
    })
}

/// Validate a partial update.
///
/// Absent, `null`, blank and zero values count as not supplied. Supplied fields are
/// checked in the order name, height, weight, gender, birth date. Fails with
/// [`ValidationError::NoUpdatableFields`] when nothing is left to change.
pub fn validate_changes(
    request: &UpdatePatientRequest,
    today: NaiveDate,
) -> ValidationResult<PatientChanges> {
    let mut changes = PatientChanges::default();

    if let Some(name) = supplied_text(&request.name) {
        changes.name = Some(check_name(name)?);
    }
    if let Some(height) = supplied_number(&request.height) {
        changes.height = Some(check_height(height)?);
    }
    if let Some(weight) = supplied_number(&request.weight) {
        changes.weight = Some(check_weight(weight)?);
    }
    if let Some(gender) = supplied_text(&request.gender) {
        changes.biological_gender = Some(check_gender(gender)?);
    }
    if let Some(birth_date) = supplied_text(&request.birth_date) {
        changes.birth_date = Some(check_birth_date(birth_date, today)?);
    }

    if changes.is_empty() {
        return Err(ValidationError::NoUpdatableFields);
    }
    Ok(changes)
}

fn required_number<'a>(
    value: &'a Option<NumberInput>,
    field: Field,
    message: &str,
) -> ValidationResult<&'a NumberInput> {
    value
        .as_ref()
        .ok_or_else(|| ValidationError::invalid(field, message))
}

fn supplied_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Zero, `false`, `""`, `[]` and `{}` are left out of an update, like a
/// missing key.
fn supplied_number(value: &Option<NumberInput>) -> Option<&NumberInput> {
    value.as_ref().filter(|n| match n {
        NumberInput::Number(n) => *n != 0.0,
        NumberInput::Text(s) => !s.is_empty(),
        NumberInput::Other(Value::Bool(b)) => *b,
        NumberInput::Other(Value::Array(items)) => !items.is_empty(),
        NumberInput::Other(Value::Object(map)) => !map.is_empty(),
        NumberInput::Other(_) => true,
    })
}
