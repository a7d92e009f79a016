//! Seed Formatters
//!
//! Render a conversation seed for display or for handing to another tool.

use crate::domain::entities::ConversationSeed;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::SeedFormat;

/// Render a seed in the requested format
pub fn format_seed(seed: &ConversationSeed, format: SeedFormat) -> Result<String, DomainError> {
    match format {
        SeedFormat::Raw => Ok(seed.system_message()),
        SeedFormat::Markdown => Ok(format_markdown(seed)),
        SeedFormat::Json => serde_json::to_string_pretty(seed)
            .map_err(|e| DomainError::Serialization(e.to_string())),
    }
}

fn format_markdown(seed: &ConversationSeed) -> String {
    let mut out = String::new();

    out.push_str("## System Prompt\n\n");
    out.push_str(&seed.system_prompt);
    out.push('\n');

    out.push_str(&format!("\n## Example Requests: {}\n\n", seed.category.title()));
    for template in &seed.example_templates {
        out.push_str(&format!("- {}\n", template));
    }

    out.push_str("\n## Guidelines\n\n");
    for (i, guideline) in seed.guidelines.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, guideline));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PromptCatalog;
    use crate::domain::value_objects::Category;

    #[test]
    fn test_raw_is_system_message() {
        let seed = PromptCatalog::builtin().assemble_conversation_seed(Category::MealPlanning);
        assert_eq!(format_seed(&seed, SeedFormat::Raw).unwrap(), seed.system_message());
    }

    #[test]
    fn test_markdown_numbers_guidelines() {
        let seed = PromptCatalog::builtin().assemble_conversation_seed(Category::CarbCounting);
        let out = format_seed(&seed, SeedFormat::Markdown).unwrap();
        assert!(out.contains("## Example Requests: Carb Counting"));
        assert!(out.contains("1. Always personalize advice based on user profile\n"));
        assert!(out.contains("5. Be supportive and non-judgmental\n"));
    }

    #[test]
    fn test_json_parses_back() {
        let seed = PromptCatalog::builtin().assemble_conversation_seed(Category::Type2Guidance);
        let out = format_seed(&seed, SeedFormat::Json).unwrap();
        let back: ConversationSeed = serde_json::from_str(&out).unwrap();
        assert_eq!(back, seed);
    }

    #[test]
    fn test_every_format_renders() {
        let catalog = PromptCatalog::builtin();
        for category in Category::ALL {
            let seed = catalog.assemble_conversation_seed(category);
            for format in [SeedFormat::Raw, SeedFormat::Markdown, SeedFormat::Json] {
                assert!(!format_seed(&seed, format).unwrap().is_empty());
            }
        }
    }
}
