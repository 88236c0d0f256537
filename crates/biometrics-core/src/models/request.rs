//! Incoming request payloads.
//!
//! These mirror the JSON bodies accepted by the API. Every field is optional
//! at this level so validation can report which one is missing or malformed.

use serde::{Deserialize, Serialize};

/// A numeric field as it arrives on the wire: a JSON number or a string
/// holding one (`"1.75"`).
///
/// Any other JSON value lands in `Other` so that validation, not
/// deserialization, reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberInput {
    /// Interpret the value as a finite `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.trim().parse::<f64>().ok()?,
            NumberInput::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreatePatientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub height: Option<NumberInput>,
    #[serde(default)]
    pub weight: Option<NumberInput>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Body of a partial update request. Absent or `null` fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdatePatientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub height: Option<NumberInput>,
    #[serde(default)]
    pub weight: Option<NumberInput>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_input_accepts_numbers_and_numeric_strings() {
        let req: CreatePatientRequest =
            serde_json::from_str(r#"{"height": 1.75, "weight": "70.5"}"#).unwrap();
        assert_eq!(req.height.unwrap().as_f64(), Some(1.75));
        assert_eq!(req.weight.unwrap().as_f64(), Some(70.5));
    }

    #[test]
    fn test_number_input_rejects_garbage() {
        assert_eq!(NumberInput::from("tall").as_f64(), None);
        assert_eq!(NumberInput::from("NaN").as_f64(), None);
        assert_eq!(NumberInput::from("").as_f64(), None);
    }

    #[test]
    fn test_number_input_keeps_other_json_values() {
        let req: UpdatePatientRequest =
            serde_json::from_str(r#"{"height": true, "weight": [70]}"#).unwrap();
        assert_eq!(req.height, Some(NumberInput::Other(serde_json::json!(true))));
        assert_eq!(req.height.unwrap().as_f64(), None);
        assert_eq!(req.weight.unwrap().as_f64(), None);
    }

    #[test]
    fn test_update_ignores_unknown_and_null_fields() {
        let req: UpdatePatientRequest =
            serde_json::from_str(r#"{"age": 40, "name": null}"#).unwrap();
        assert_eq!(req, UpdatePatientRequest::default());
    }
}
