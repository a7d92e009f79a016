//! UserProfile - Personal context used to tailor the assistant
//!
//! Profiles are held in memory only; storing them is up to the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::DiabetesType;

/// Goals offered when setting up a profile
pub const SUGGESTED_GOALS: [&str; 2] = ["Avoid spikes", "Weight loss"];

/// UserProfile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub diabetes_type: DiabetesType,
    /// Type-specific details such as insulin type, medication or A1C
    #[serde(default)]
    pub details: BTreeMap<String, String>,
    #[serde(default)]
    pub general_goals: Vec<String>,
    /// Daily carbohydrate budget in grams
    pub carb_budget_g: f64,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, diabetes_type: DiabetesType, carb_budget_g: f64) -> Self {
        Self {
            user_id: user_id.into(),
            diabetes_type,
            details: BTreeMap::new(),
            general_goals: Vec::new(),
            carb_budget_g,
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.general_goals.push(goal.into());
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_id.trim().is_empty() {
            return Err(DomainError::validation("user id is empty"));
        }
        if !self.carb_budget_g.is_finite() || self.carb_budget_g <= 0.0 {
            return Err(DomainError::validation(format!(
                "carb budget must be a positive number of grams, got {}",
                self.carb_budget_g
            )));
        }
        Ok(())
    }

    /// Grams left in today's budget, never negative
    pub fn carbs_remaining(&self, consumed_g: f64) -> f64 {
        (self.carb_budget_g - consumed_g).max(0.0)
    }

    /// Reject carb intake that is negative or not a number
    pub fn validate_consumed(consumed_g: f64) -> Result<(), DomainError> {
        if !consumed_g.is_finite() || consumed_g < 0.0 {
            return Err(DomainError::validation(format!(
                "consumed carbs must be a non-negative number of grams, got {}",
                consumed_g
            )));
        }
        Ok(())
    }

    /// One-line summary of today's carb intake against the budget
    pub fn carb_budget_status(&self, consumed_g: f64) -> Result<String, DomainError> {
        Self::validate_consumed(consumed_g)?;

        let status = if consumed_g > self.carb_budget_g {
            format!(
                "Over budget: {:.1}g of {}g used ({:.1}g over)",
                consumed_g,
                self.carb_budget_g,
                consumed_g - self.carb_budget_g
            )
        } else {
            format!(
                "{:.1}g of {}g used, {:.1}g remaining today",
                consumed_g,
                self.carb_budget_g,
                self.carbs_remaining(consumed_g)
            )
        };
        Ok(status)
    }

    /// Profile block injected into the system prompt
    pub fn context_block(&self) -> String {
        let goals = if self.general_goals.is_empty() {
            "None specified".to_string()
        } else {
            self.general_goals.join(", ")
        };

        let mut context = format!(
            "User Profile Information:\n\
             - User ID: {}\n\
             - Diabetes Type: {}\n\
             - Health Goals: {}\n\
             - Daily Carb Budget: {}g\n",
            self.user_id, self.diabetes_type, goals, self.carb_budget_g
        );

        if !self.details.is_empty() {
            let details: Vec<String> = self
                .details
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect();
            context.push_str(&format!("- Diabetes Type Details: {}\n", details.join(", ")));
        }

        context.push_str("\nPlease refer to this information when providing advice and recommendations.");
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new("sam", DiabetesType::Type1, 180.0)
            .with_goal("Avoid spikes")
            .with_detail("insulin_type", "Humalog")
            .with_detail("a1c", "6.8")
    }

    #[test]
    fn test_context_block() {
        let context = profile().context_block();
        assert!(context.starts_with("User Profile Information:\n- User ID: sam\n"));
        assert!(context.contains("- Diabetes Type: T1\n"));
        assert!(context.contains("- Health Goals: Avoid spikes\n"));
        assert!(context.contains("- Daily Carb Budget: 180g\n"));
        assert!(context.contains("- Diabetes Type Details: a1c: 6.8, insulin_type: Humalog\n"));
    }

    #[test]
    fn test_context_block_without_goals() {
        let context = UserProfile::new("kim", DiabetesType::None, 200.0).context_block();
        assert!(context.contains("- Health Goals: None specified\n"));
        assert!(!context.contains("Diabetes Type Details"));
    }

    #[test]
    fn test_carbs_remaining_clamps() {
        let p = profile();
        assert_eq!(p.carbs_remaining(30.0), 150.0);
        assert_eq!(p.carbs_remaining(250.0), 0.0);
    }

    #[test]
    fn test_budget_status() {
        let p = profile();
        assert_eq!(
            p.carb_budget_status(45.0).unwrap(),
            "45.0g of 180g used, 135.0g remaining today"
        );
        assert_eq!(
            p.carb_budget_status(200.0).unwrap(),
            "Over budget: 200.0g of 180g used (20.0g over)"
        );
        assert_eq!(
            p.carb_budget_status(0.0).unwrap(),
            "0.0g of 180g used, 180.0g remaining today"
        );
    }

    #[test]
    fn test_budget_status_rejects_bad_intake() {
        let p = profile();
        for consumed in [-20.0, f64::NAN, f64::INFINITY] {
            let err = p.carb_budget_status(consumed).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{}", consumed);
        }
    }

    #[test]
    fn test_validate() {
        assert!(profile().validate().is_ok());
        assert!(UserProfile::new("", DiabetesType::Type2, 150.0).validate().is_err());
        assert!(UserProfile::new("lee", DiabetesType::Type2, 0.0).validate().is_err());
        assert!(UserProfile::new("lee", DiabetesType::Type2, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_deserialize_short_type_labels() {
        let json = r#"{"user_id":"ana","diabetes_type":"T2","carb_budget_g":150}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.diabetes_type, DiabetesType::Type2);
        assert!(p.general_goals.is_empty());
    }
}
