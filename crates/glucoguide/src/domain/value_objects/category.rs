//! Category - Closed set of prompt template groups

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Prompt template category
///
/// The set is closed: a catalog always carries exactly these seven groups,
/// listed in declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MealPlanning,
    CarbCounting,
    BloodSugarManagement,
    Type1Guidance,
    Type2Guidance,
    PrediabetesGuidance,
    GeneralTips,
}

impl Category {
    /// All categories in listing order
    pub const ALL: [Category; 7] = [
        Category::MealPlanning,
        Category::CarbCounting,
        Category::BloodSugarManagement,
        Category::Type1Guidance,
        Category::Type2Guidance,
        Category::PrediabetesGuidance,
        Category::GeneralTips,
    ];

    /// Stable snake_case key used in files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::MealPlanning => "meal_planning",
            Category::CarbCounting => "carb_counting",
            Category::BloodSugarManagement => "blood_sugar_management",
            Category::Type1Guidance => "type1_guidance",
            Category::Type2Guidance => "type2_guidance",
            Category::PrediabetesGuidance => "prediabetes_guidance",
            Category::GeneralTips => "general_tips",
        }
    }

    /// Human readable heading
    pub fn title(&self) -> &'static str {
        match self {
            Category::MealPlanning => "Meal Planning",
            Category::CarbCounting => "Carb Counting",
            Category::BloodSugarManagement => "Blood Sugar Management",
            Category::Type1Guidance => "Type 1 Diabetes",
            Category::Type2Guidance => "Type 2 Diabetes",
            Category::PrediabetesGuidance => "Prediabetes",
            Category::GeneralTips => "General Tips",
        }
    }

    /// Whether the category holds diabetes-type specific guidance
    pub fn is_type_guidance(&self) -> bool {
        matches!(
            self,
            Category::Type1Guidance | Category::Type2Guidance | Category::PrediabetesGuidance
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "meal_planning" => Ok(Category::MealPlanning),
            "carb_counting" => Ok(Category::CarbCounting),
            "blood_sugar_management" | "blood_sugar" => Ok(Category::BloodSugarManagement),
            "type1_guidance" | "type_1_guidance" | "type1" | "type_1" => Ok(Category::Type1Guidance),
            "type2_guidance" | "type_2_guidance" | "type2" | "type_2" => Ok(Category::Type2Guidance),
            "prediabetes_guidance" | "prediabetes" => Ok(Category::PrediabetesGuidance),
            "general_tips" | "general" => Ok(Category::GeneralTips),
            _ => Err(DomainError::unknown_category(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_each_category_once() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category));
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_key_parses_back() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_accepts_loose_spelling() {
        assert_eq!("Meal-Planning".parse::<Category>().unwrap(), Category::MealPlanning);
        assert_eq!("type 1".parse::<Category>().unwrap(), Category::Type1Guidance);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "dessert_ideas".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("dessert_ideas".to_string()));
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Category::Type2Guidance).unwrap();
        assert_eq!(json, "\"type2_guidance\"");
        let back: Category = serde_json::from_str("\"blood_sugar_management\"").unwrap();
        assert_eq!(back, Category::BloodSugarManagement);
    }
}
