//! ConversationSeed - Everything needed to open a model conversation

use serde::{Deserialize, Serialize};

use super::{Guideline, PromptTemplate};
use crate::domain::value_objects::Category;

/// Conversation seed: persona, example requests for one category, guidelines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationSeed {
    pub system_prompt: String,
    pub category: Category,
    pub example_templates: Vec<PromptTemplate>,
    pub guidelines: Vec<Guideline>,
}

impl ConversationSeed {
    /// Compose the seed into a single system message
    pub fn system_message(&self) -> String {
        let mut message = self.system_prompt.clone();

        if !self.example_templates.is_empty() {
            message.push_str(&format!(
                "\n\nEXAMPLE REQUESTS ({}):\n",
                self.category.title().to_uppercase()
            ));
            for template in &self.example_templates {
                message.push_str(&format!("- {}\n", template));
            }
        }

        if !self.guidelines.is_empty() {
            if self.example_templates.is_empty() {
                message.push('\n');
            }
            message.push_str("\nWHEN RESPONDING:\n");
            for guideline in &self.guidelines {
                message.push_str(&format!("- {}\n", guideline));
            }
        }

        message.trim_end().to_string()
    }
}
