//! Body mass index and its weight bands.

use serde::Serialize;

/// BMI below this is underweight.
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// BMI at or above this is overweight.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// BMI at or above this is obese.
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// Callers guarantee `height_cm > 0`; see [`super::RiskInput`].
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Weight band derived from BMI. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            Self::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < BMI_OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Underweight and obese carry the same penalty.
    pub fn points(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Overweight => 30,
            Self::Underweight | Self::Obese => 75,
        }
    }
}
