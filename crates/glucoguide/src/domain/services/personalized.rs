//! Personalized system prompt
//!
//! Combines the catalog persona with a user's profile, the management tips
//! for their diabetes type and the conversation guidelines.

use crate::domain::entities::{PromptCatalog, UserProfile};
use crate::domain::errors::DomainError;
use crate::domain::services::builtin::low_gi_foods;

/// Builder for a profile-aware system prompt
pub struct PersonalizedPromptBuilder<'a> {
    catalog: &'a PromptCatalog,
    profile: &'a UserProfile,
    include_low_gi_foods: bool,
    consumed_carbs_g: Option<f64>,
}

impl<'a> PersonalizedPromptBuilder<'a> {
    pub fn new(catalog: &'a PromptCatalog, profile: &'a UserProfile) -> Self {
        Self {
            catalog,
            profile,
            include_low_gi_foods: true,
            consumed_carbs_g: None,
        }
    }

    /// Toggle the low glycemic index food list
    pub fn with_low_gi_foods(mut self, include: bool) -> Self {
        self.include_low_gi_foods = include;
        self
    }

    /// Add today's carb intake so far
    pub fn with_consumed_carbs(mut self, grams: f64) -> Self {
        self.consumed_carbs_g = Some(grams);
        self
    }

    /// Fails when the consumed carb amount is negative or not a number
    pub fn build(&self) -> Result<String, DomainError> {
        let mut prompt = String::new();
        prompt.push_str(self.catalog.system_prompt());
        prompt.push_str("\n\n");
        prompt.push_str(&self.profile.context_block());

        if let Some(consumed) = self.consumed_carbs_g {
            prompt.push_str(&format!(
                "\nToday's carbs: {}\n",
                self.profile.carb_budget_status(consumed)?
            ));
        }

        let tips = self
            .catalog
            .templates(self.profile.diabetes_type.guidance_category());
        prompt.push_str(&format!(
            "\n\nDIABETES MANAGEMENT TIPS FOR {}:\n",
            self.profile.diabetes_type
        ));
        for tip in tips {
            prompt.push_str(&format!("  • {}\n", tip));
        }

        if self.include_low_gi_foods {
            prompt.push_str("\nLOW GLYCEMIC INDEX FOODS TO SUGGEST:\n");
            prompt.push_str(&low_gi_foods().join(", "));
            prompt.push('\n');
        }

        prompt.push_str("\nWHEN RESPONDING:\n");
        for guideline in self.catalog.guidelines() {
            prompt.push_str(&format!("- {}\n", guideline));
        }

        Ok(prompt.trim_end().to_string())
    }
}
