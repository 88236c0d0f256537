//! Per-field checks shared by the create and update paths.

use chrono::NaiveDate;

use super::{Field, ValidationError, ValidationResult};
use crate::health::age_on;
use crate::models::{BiologicalGender, NumberInput};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 100;
pub const AGE_MIN_YEARS: i32 = 18;
pub const AGE_MAX_YEARS: i32 = 120;
pub const HEIGHT_MIN_M: f64 = 0.63;
pub const HEIGHT_MAX_M: f64 = 2.51;
pub const WEIGHT_MIN_KG: f64 = 6.0;
pub const WEIGHT_MAX_KG: f64 = 635.0;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Name length counted in characters, not bytes.
pub fn check_name(name: &str) -> ValidationResult<String> {
    let len = name.chars().count();
    if name.is_empty() || !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::invalid(
            Field::Name,
            format!("Name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(name.to_string())
}

/// Strict `YYYY-MM-DD` with the resulting age inside the accepted range.
pub fn check_birth_date(input: &str, today: NaiveDate) -> ValidationResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT).map_err(|_| {
        ValidationError::invalid(Field::BirthDate, "Invalid birth date, use YYYY-MM-DD")
    })?;

    let age = age_on(date, today);
    if !(AGE_MIN_YEARS..=AGE_MAX_YEARS).contains(&age) {
        return Err(ValidationError::invalid(
            Field::BirthDate,
            format!("Age must be between {AGE_MIN_YEARS} and {AGE_MAX_YEARS} years"),
        ));
    }
    Ok(date)
}

pub fn check_height(input: &NumberInput) -> ValidationResult<f64> {
    check_range(input, Field::Height, HEIGHT_MIN_M, HEIGHT_MAX_M, "Invalid height", || {
        format!("Height must be between {HEIGHT_MIN_M}m and {HEIGHT_MAX_M}m")
    })
}

pub fn check_weight(input: &NumberInput) -> ValidationResult<f64> {
    check_range(input, Field::Weight, WEIGHT_MIN_KG, WEIGHT_MAX_KG, "Invalid weight", || {
        format!("Weight must be between {WEIGHT_MIN_KG}kg and {WEIGHT_MAX_KG}kg")
    })
}

pub fn check_gender(input: &str) -> ValidationResult<BiologicalGender> {
    input
        .parse()
        .map_err(|_| ValidationError::invalid(Field::Gender, "Gender must be M or F"))
}

fn check_range(
    input: &NumberInput,
    field: Field,
    min: f64,
    max: f64,
    not_numeric: &str,
    out_of_range: impl FnOnce() -> String,
) -> ValidationResult<f64> {
    let value = input
        .as_f64()
        .ok_or_else(|| ValidationError::invalid(field, not_numeric))?;
    if value < min || value > max {
        return Err(ValidationError::invalid(field, out_of_range()));
    }
    Ok(value)
}
