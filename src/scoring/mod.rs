//! Risk scoring.
//!
//! A pure mapping from biometric inputs to a [`RiskOutput`]: four point
//! components (age, BMI, blood pressure, family history), their total, and
//! the risk band the total falls in. No state is kept between calls, so
//! [`assess`] may be called concurrently from any number of requests.

mod blood_pressure;
mod bmi;
mod family_history;
mod input;

use serde::Serialize;

pub use blood_pressure::BpCategory;
pub use bmi::{body_mass_index, BmiCategory};
pub use family_history::{family_history_points, FamilyCondition};
pub use input::parse_request;

/// Errors raised while turning a request into a score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("parameter {field} is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("parameter {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Validated inputs for one assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    /// Whole years
    pub age: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// mmHg, any integer
    pub systolic: i64,
    /// mmHg, any integer
    pub diastolic: i64,
    /// Condition tags as submitted, in order
    pub family_history: Vec<String>,
}

impl RiskInput {
    /// Age must be non-negative and height and weight finite and positive.
    /// Blood pressure is unconstrained: every pair has a category.
    fn validate(&self) -> Result<(), ScoringError> {
        if self.age < 0 {
            return Err(ScoringError::OutOfRange {
                field: "age",
                value: self.age as f64,
            });
        }
        for (field, value) in [("height", self.height_cm), ("weight", self.weight_kg)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScoringError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

/// Terminal risk band for a total score. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
    Uninsurable,
}

impl RiskCategory {
    pub fn from_score(total: u32) -> Self {
        match total {
            0..=20 => Self::LowRisk,
            21..=50 => Self::ModerateRisk,
            51..=75 => Self::HighRisk,
            _ => Self::Uninsurable,
        }
    }
}

/// Points for age in whole years.
pub fn age_points(age: u64) -> u32 {
    match age {
        0..=29 => 0,
        30..=44 => 10,
        45..=59 => 20,
        _ => 30,
    }
}

/// Result of one assessment. Field order matches the JSON response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskOutput {
    pub age: u64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmi_points: u32,
    pub systolic: i64,
    pub diastolic: i64,
    pub bp_category: BpCategory,
    pub bp_points: u32,
    pub age_points: u32,
    /// String tags from the request, in order; non-string entries are not echoed
    pub family_history: Vec<String>,
    pub family_points: u32,
    pub total_score: u32,
    pub risk_category: RiskCategory,
}

/// Score a validated input.
pub fn assess(input: &RiskInput) -> Result<RiskOutput, ScoringError> {
    input.validate()?;
    // validate() rejects negative ages
    let age = input.age as u64;

    let bmi = body_mass_index(input.height_cm, input.weight_kg);
    if !bmi.is_finite() {
        return Err(ScoringError::OutOfRange {
            field: "bmi",
            value: bmi,
        });
    }
    let bmi_category = BmiCategory::from_bmi(bmi);
    let bmi_points = bmi_category.points();

    let bp_category = BpCategory::classify(input.systolic, input.diastolic);
    let bp_points = bp_category.points();

    let age_points = age_points(age);
    let family_points = family_history_points(&input.family_history);

    let total_score = age_points + bmi_points + bp_points + family_points;

    Ok(RiskOutput {
        age,
        bmi,
        bmi_category,
        bmi_points,
        systolic: input.systolic,
        diastolic: input.diastolic,
        bp_category,
        bp_points,
        age_points,
        family_history: input.family_history.clone(),
        family_points,
        total_score,
        risk_category: RiskCategory::from_score(total_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: i64, height: f64, weight: f64, sys: i64, dia: i64, history: &[&str]) -> RiskInput {
        RiskInput {
            age,
            height_cm: height,
            weight_kg: weight,
            systolic: sys,
            diastolic: dia,
            family_history: history.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_healthy_young_adult_is_low_risk() {
        let out = assess(&input(25, 170.0, 65.0, 115, 75, &[])).unwrap();
        assert!((out.bmi - 22.49).abs() < 0.01);
        assert_eq!(out.bmi_category, BmiCategory::Normal);
        assert_eq!(out.bmi_points, 0);
        assert_eq!(out.bp_category, BpCategory::Normal);
        assert_eq!(out.bp_points, 0);
        assert_eq!(out.age_points, 0);
        assert_eq!(out.family_points, 0);
        assert_eq!(out.total_score, 0);
        assert_eq!(out.risk_category, RiskCategory::LowRisk);
    }

    #[test]
    fn test_obese_hypertensive_is_uninsurable() {
        let out = assess(&input(50, 160.0, 90.0, 145, 95, &["diabetes", "cancer"])).unwrap();
        assert!((out.bmi - 35.16).abs() < 0.01);
        assert_eq!(out.bmi_category, BmiCategory::Obese);
        assert_eq!(out.bmi_points, 75);
        assert_eq!(out.bp_category, BpCategory::Stage2);
        assert_eq!(out.bp_points, 75);
        assert_eq!(out.age_points, 20);
        assert_eq!(out.family_points, 20);
        assert_eq!(out.total_score, 190);
        assert_eq!(out.risk_category, RiskCategory::Uninsurable);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let cases = [
            input(35, 180.0, 50.0, 125, 70, &["alzheimers"]),
            input(61, 150.0, 70.0, 132, 85, &["cancer", "cancer", "flu"]),
            input(44, 175.0, 95.0, 190, 60, &["diabetes", "cancer", "alzheimers"]),
        ];
        for case in &cases {
            let out = assess(case).unwrap();
            assert_eq!(
                out.total_score,
                out.age_points + out.bmi_points + out.bp_points + out.family_points
            );
        }
    }

    #[test]
    fn test_assess_is_deterministic() {
        let case = input(47, 168.0, 77.5, 128, 82, &["diabetes"]);
        assert_eq!(assess(&case).unwrap(), assess(&case).unwrap());
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(age_points(0), 0);
        assert_eq!(age_points(29), 0);
        assert_eq!(age_points(30), 10);
        assert_eq!(age_points(44), 10);
        assert_eq!(age_points(45), 20);
        assert_eq!(age_points(59), 20);
        assert_eq!(age_points(60), 30);
        assert_eq!(age_points(120), 30);
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskCategory::from_score(20), RiskCategory::LowRisk);
        assert_eq!(RiskCategory::from_score(21), RiskCategory::ModerateRisk);
        assert_eq!(RiskCategory::from_score(50), RiskCategory::ModerateRisk);
        assert_eq!(RiskCategory::from_score(51), RiskCategory::HighRisk);
        assert_eq!(RiskCategory::from_score(75), RiskCategory::HighRisk);
        assert_eq!(RiskCategory::from_score(76), RiskCategory::Uninsurable);
        assert_eq!(RiskCategory::from_score(280), RiskCategory::Uninsurable);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = assess(&input(30, 0.0, 70.0, 120, 80, &[])).unwrap_err();
        assert_eq!(
            err,
            ScoringError::OutOfRange {
                field: "height",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_negative_age_is_rejected() {
        assert!(matches!(
            assess(&input(-1, 170.0, 70.0, 120, 80, &[])),
            Err(ScoringError::OutOfRange { field: "age", .. })
        ));
    }

    #[test]
    fn test_any_pressure_pair_is_categorized() {
        let negative = assess(&input(30, 170.0, 65.0, -5, 70, &[])).unwrap();
        assert_eq!(negative.bp_category, BpCategory::Normal);
        assert_eq!(negative.systolic, -5);

        let huge = assess(&input(30, 170.0, 65.0, 99_999_999_999, 70, &[])).unwrap();
        assert_eq!(huge.bp_category, BpCategory::Crisis);
        assert_eq!(huge.systolic, 99_999_999_999);

        let saturated = assess(&input(30, 170.0, 65.0, 110, i64::MIN, &[])).unwrap();
        assert_eq!(saturated.bp_category, BpCategory::Normal);
    }

    #[test]
    fn test_string_pressure_beyond_i32_is_crisis() {
        let body = serde_json::json!({
            "age": 30,
            "height": 170,
            "weight": 65,
            "systolic": "99999999999",
            "diastolic": 70
        });
        let out = assess(&parse_request(&body).unwrap()).unwrap();
        assert_eq!(out.bp_category, BpCategory::Crisis);
        assert_eq!(out.bp_points, 100);
    }

    #[test]
    fn test_overflowing_bmi_is_rejected() {
        assert!(matches!(
            assess(&input(30, 1e-300, 1e300, 120, 80, &[])),
            Err(ScoringError::OutOfRange { field: "bmi", .. })
        ));
    }

    #[test]
    fn test_output_json_shape() {
        let out = assess(&input(25, 170.0, 65.0, 115, 75, &["cancer"])).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "age",
            "bmi",
            "bmiCategory",
            "bmiPoints",
            "systolic",
            "diastolic",
            "bpCategory",
            "bpPoints",
            "agePoints",
            "familyHistory",
            "familyPoints",
            "totalScore",
            "riskCategory",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(json["riskCategory"], "Low Risk");
        assert_eq!(json["familyHistory"], serde_json::json!(["cancer"]));
    }
}
