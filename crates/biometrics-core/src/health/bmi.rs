//! Body-mass index and its WHO-style classification.

use serde::{Deserialize, Serialize};

/// Body-mass index from weight (kg) and height (m).
///
/// `None` when either input is missing or non-finite, or when height is
/// zero.
pub fn bmi_calc(weight: Option<f64>, height: Option<f64>) -> Option<f64> {
    let weight = weight.filter(|w| w.is_finite())?;
    let height = height.filter(|h| h.is_finite() && *h != 0.0)?;
    Some(weight / (height * height))
}

/// BMI bands. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiClass {
    /// bmi < 18.5
    BelowNormal,
    /// 18.5 <= bmi < 25
    Normal,
    /// 25 <= bmi < 30
    Overweight,
    /// bmi >= 30
    Obese,
}

impl BmiClass {
    /// Bucket a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::BelowNormal
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BmiClass::BelowNormal => "Below normal weight",
            BmiClass::Normal => "Normal",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}

/// Classify an optional BMI; `None` stays `None`.
pub fn classification(bmi: Option<f64>) -> Option<BmiClass> {
    bmi.filter(|b| !b.is_nan()).map(BmiClass::from_bmi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_basic() {
        let bmi = bmi_calc(Some(70.0), Some(1.75)).unwrap();
        assert!((bmi - 22.857142857142858).abs() < 1e-12);
    }

    #[test]
    fn test_bmi_unavailable() {
        assert_eq!(bmi_calc(Some(70.0), Some(0.0)), None);
        assert_eq!(bmi_calc(None, Some(1.75)), None);
        assert_eq!(bmi_calc(Some(70.0), None), None);
        assert_eq!(bmi_calc(Some(f64::NAN), Some(1.75)), None);
        assert_eq!(bmi_calc(Some(70.0), Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_boundaries_land_in_upper_bucket() {
        assert_eq!(classification(Some(18.4999)), Some(BmiClass::BelowNormal));
        assert_eq!(classification(Some(18.5)), Some(BmiClass::Normal));
        assert_eq!(classification(Some(24.9999)), Some(BmiClass::Normal));
        assert_eq!(classification(Some(25.0)), Some(BmiClass::Overweight));
        assert_eq!(classification(Some(29.9999)), Some(BmiClass::Overweight));
        assert_eq!(classification(Some(30.0)), Some(BmiClass::Obese));
        assert_eq!(classification(None), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BmiClass::BelowNormal.label(), "Below normal weight");
        assert_eq!(BmiClass::Obese.label(), "Obese");
    }

    proptest! {
        #[test]
        fn prop_bmi_is_weight_over_height_squared(w in 6.0f64..635.0, h in 0.63f64..2.51) {
            let bmi = bmi_calc(Some(w), Some(h)).unwrap();
            prop_assert_eq!(bmi, w / (h * h));
        }

        #[test]
        fn prop_zero_height_is_unavailable(w in 0.0f64..1000.0) {
            prop_assert_eq!(bmi_calc(Some(w), Some(0.0)), None);
        }

        #[test]
        fn prop_classes_partition_the_line(bmi in -100.0f64..200.0) {
            let class = BmiClass::from_bmi(bmi);
            let expected = [
                (bmi < 18.5, BmiClass::BelowNormal),
                ((18.5..25.0).contains(&bmi), BmiClass::Normal),
                ((25.0..30.0).contains(&bmi), BmiClass::Overweight),
                (bmi >= 30.0, BmiClass::Obese),
            ];
            let matching: Vec<_> = expected.iter().filter(|(hit, _)| *hit).collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert_eq!(matching[0].1, class);
        }
    }
}
