//! Model output parsing
//!
//! Models asked for "JSON only" still wrap answers in code fences or prose.

use serde_json::Value;

use crate::domain::errors::DomainError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Prompt asking the model to estimate macros for a described food
pub fn macro_estimation_prompt(description: &str) -> String {
    format!(
        r#"You are a nutrition estimator.

Food: {description}

Return ONLY valid JSON (no markdown, no commentary), exactly in this shape:
{{
  "item_name": "string",
  "nutrients": {{
    "carbs_g": number,
    "calories_kcal": number,
    "protein_g": number,
    "fat_g": number
  }}
}}
"#,
        description = description.trim()
    )
}

/// Extract the first JSON value from model output
///
/// Tries a ```json fenced block first, then the span from the first `{` to
/// the last `}`, then the whole text.
pub fn extract_json(text: &str) -> Result<Value, DomainError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::Parse("empty model output".to_string()));
    }

    if let Some(block) = fenced_object(text) {
        return parse(block);
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return parse(&text[start..=end]);
        }
    }

    parse(text)
}

fn fenced_object(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `text`
    let lowered = text.to_ascii_lowercase();
    let open = lowered.find(JSON_FENCE)? + JSON_FENCE.len();
    let close = open + lowered[open..].find(FENCE)?;
    let block = text[open..close].trim();
    block.starts_with('{').then_some(block)
}

fn parse(text: &str) -> Result<Value, DomainError> {
    serde_json::from_str(text).map_err(|e| DomainError::Parse(e.to_string()))
}
