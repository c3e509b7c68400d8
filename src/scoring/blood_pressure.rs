//! Blood-pressure classification.
//!
//! Each stage is entered when EITHER reading crosses its threshold, and the
//! most severe matching stage wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BpCategory {
    Normal,
    Elevated,
    #[serde(rename = "Stage 1")]
    Stage1,
    #[serde(rename = "Stage 2")]
    Stage2,
    Crisis,
}

impl BpCategory {
    /// Classify a systolic/diastolic pair in mmHg.
    pub fn classify(systolic: i64, diastolic: i64) -> Self {
        if systolic >= 180 || diastolic >= 120 {
            Self::Crisis
        } else if systolic >= 140 || diastolic >= 90 {
            Self::Stage2
        } else if systolic >= 130 || diastolic >= 80 {
            Self::Stage1
        } else if systolic >= 120 || diastolic >= 80 {
            // diastolic >= 80 is already Stage 1 above, so only systolic reaches here
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Elevated => 15,
            Self::Stage1 => 30,
            Self::Stage2 => 75,
            Self::Crisis => 100,
        }
    }
}
