//! DiabetesType - Diagnosis the user reports in their profile

use serde::{Deserialize, Serialize};

use super::Category;

/// Diabetes type classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum DiabetesType {
    #[serde(rename = "T1")]
    Type1,
    #[serde(rename = "T2")]
    Type2,
    Prediabetes,
    #[default]
    None,
}

impl DiabetesType {
    /// Category holding management tips for this diagnosis
    pub fn guidance_category(&self) -> Category {
        match self {
            DiabetesType::Type1 => Category::Type1Guidance,
            DiabetesType::Type2 => Category::Type2Guidance,
            DiabetesType::Prediabetes => Category::PrediabetesGuidance,
            DiabetesType::None => Category::GeneralTips,
        }
    }
}

impl std::fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiabetesType::Type1 => write!(f, "T1"),
            DiabetesType::Type2 => write!(f, "T2"),
            DiabetesType::Prediabetes => write!(f, "Prediabetes"),
            DiabetesType::None => write!(f, "None"),
        }
    }
}

impl std::str::FromStr for DiabetesType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t1" | "type1" | "type 1" => Ok(DiabetesType::Type1),
            "t2" | "type2" | "type 2" => Ok(DiabetesType::Type2),
            "prediabetes" => Ok(DiabetesType::Prediabetes),
            "none" => Ok(DiabetesType::None),
            _ => Err(format!(
                "Unknown diabetes type: {}. Valid: T1, T2, Prediabetes, None",
                s
            )),
        }
    }
}
