//! MacroEstimate - Nutrition estimate for a described food item

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::services::extract_json;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroEstimate {
    pub item_name: String,
    pub carbs_g: f64,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl MacroEstimate {
    /// Parse model output produced for `description`
    ///
    /// Missing or non-numeric nutrients become 0.0. A missing item name
    /// falls back to the description.
    pub fn from_model_output(description: &str, output: &str) -> Result<Self, DomainError> {
        let data = extract_json(output)?;
        let object = data
            .as_object()
            .ok_or_else(|| DomainError::Parse("model output is not a JSON object".to_string()))?;

        let item_name = object
            .get("item_name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| Some(description.trim().to_string()).filter(|d| !d.is_empty()))
            .unwrap_or_else(|| "unknown".to_string());

        let nutrients = object.get("nutrients").and_then(Value::as_object);
        let nutrient = |key: &str| -> f64 {
            nutrients
                .and_then(|n| n.get(key))
                .map(number_or_zero)
                .unwrap_or(0.0)
        };

        Ok(Self {
            item_name,
            carbs_g: nutrient("carbs_g"),
            calories_kcal: nutrient("calories_kcal"),
            protein_g: nutrient("protein_g"),
            fat_g: nutrient("fat_g"),
        })
    }
}

fn number_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_estimate() {
        let output = r#"{"item_name":"Banana","nutrients":{"carbs_g":27,"calories_kcal":105,"protein_g":1.3,"fat_g":0.4}}"#;
        let estimate = MacroEstimate::from_model_output("1 banana", output).unwrap();
        assert_eq!(estimate.item_name, "Banana");
        assert_eq!(estimate.carbs_g, 27.0);
        assert_eq!(estimate.calories_kcal, 105.0);
        assert_eq!(estimate.protein_g, 1.3);
        assert_eq!(estimate.fat_g, 0.4);
    }

    #[test]
    fn test_bad_nutrients_default_to_zero() {
        let output = r#"{"nutrients":{"carbs_g":"12.5","calories_kcal":null,"protein_g":"lots"}}"#;
        let estimate = MacroEstimate::from_model_output("toast", output).unwrap();
        assert_eq!(estimate.item_name, "toast");
        assert_eq!(estimate.carbs_g, 12.5);
        assert_eq!(estimate.calories_kcal, 0.0);
        assert_eq!(estimate.protein_g, 0.0);
        assert_eq!(estimate.fat_g, 0.0);
    }

    #[test]
    fn test_name_falls_back_to_unknown() {
        let estimate = MacroEstimate::from_model_output("  ", r#"{"item_name":""}"#).unwrap();
        assert_eq!(estimate.item_name, "unknown");
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = MacroEstimate::from_model_output("rice", "[1, 2]").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
