//! Basal metabolic rate (Mifflin-St Jeor).

use crate::models::BiologicalGender;

/// Resting energy expenditure in kcal/day.
///
/// Height is taken in meters and converted to centimeters. Returns `None`
/// when any input is missing or the gender code is not M/F.
pub fn basal_metabolic_rate(
    weight: Option<f64>,
    height_m: Option<f64>,
    age: Option<i32>,
    gender: Option<&str>,
) -> Option<f64> {
    let weight = weight?;
    let height_cm = height_m? * 100.0;
    let age = f64::from(age?);
    let gender: BiologicalGender = gender?.parse().ok()?;

    let base = 10.0 * weight + 6.25 * height_cm - 5.0 * age;
    Some(match gender {
        BiologicalGender::M => base + 5.0,
        BiologicalGender::F => base - 161.0,
    })
}
