//! PromptTemplate - A single example question or topic label

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Category;

/// Shape of a template's text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// A full conversational request, e.g. "Suggest some low-glycemic index foods I can eat"
    #[default]
    Question,
    /// A bullet topic label, e.g. "Insulin dosing calculations"
    Topic,
}

/// PromptTemplate - belongs to exactly one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptTemplate {
    pub category: Category,
    pub kind: TemplateKind,
    pub text: String,
}

impl PromptTemplate {
    pub fn new(category: Category, kind: TemplateKind, text: impl Into<String>) -> Self {
        Self {
            category,
            kind,
            text: text.into(),
        }
    }

    pub fn question(category: Category, text: impl Into<String>) -> Self {
        Self::new(category, TemplateKind::Question, text)
    }

    pub fn topic(category: Category, text: impl Into<String>) -> Self {
        Self::new(category, TemplateKind::Topic, text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
