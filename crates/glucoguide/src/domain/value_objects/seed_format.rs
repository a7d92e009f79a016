//! SeedFormat - Output format for rendered conversation seeds

use serde::{Deserialize, Serialize};

/// Seed output format
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SeedFormat {
    /// Plain sections, ready to paste as a system prompt
    #[default]
    Raw,
    /// Markdown with headings per section
    Markdown,
    /// Pretty printed JSON of the seed
    Json,
}

impl SeedFormat {
    pub fn name(&self) -> &'static str {
        match self {
            SeedFormat::Raw => "raw",
            SeedFormat::Markdown => "markdown",
            SeedFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for SeedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(SeedFormat::Raw),
            "markdown" | "md" => Ok(SeedFormat::Markdown),
            "json" => Ok(SeedFormat::Json),
            _ => Err(format!("Unknown format: {}. Valid: raw, markdown, json", s)),
        }
    }
}
