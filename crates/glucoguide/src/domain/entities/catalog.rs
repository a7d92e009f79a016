//! PromptCatalog - Immutable collection of prompt templates
//!
//! A catalog is built once from structured data (see [`CatalogSource`]) and
//! never mutated afterwards. All accessors are pure reads, so a catalog can
//! be shared behind an `Arc` across any number of readers.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConversationSeed, Guideline, PromptTemplate, TemplateKind};
use crate::domain::errors::DomainError;
use crate::domain::services::builtin;
use crate::domain::value_objects::Category;

/// Structured input a catalog is constructed from
///
/// Parsing whatever document the content was authored in is the loader's
/// job; this is the shape it hands over.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSource {
    pub system_prompt: String,
    #[serde(default)]
    pub guidelines: Vec<String>,
    /// Categories whose entries are topic labels rather than questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic_categories: Vec<String>,
    /// Category key -> templates in declaration order
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

/// PromptCatalog - system prompt, per-category templates and guidelines
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    system_prompt: String,
    templates: HashMap<Category, Vec<PromptTemplate>>,
    guidelines: Vec<Guideline>,
    loaded_at: DateTime<Utc>,
}

impl PromptCatalog {
    /// The diabetes assistant catalog compiled into the crate
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// Build a catalog from structured data, validating every invariant
    pub fn from_source(source: CatalogSource) -> Result<Self, DomainError> {
        let system_prompt = source.system_prompt.trim();
        if system_prompt.is_empty() {
            return Err(DomainError::validation("system prompt is empty"));
        }

        let mut topic_categories = Vec::with_capacity(source.topic_categories.len());
        for key in &source.topic_categories {
            topic_categories.push(key.parse::<Category>()?);
        }

        let mut templates: HashMap<Category, Vec<PromptTemplate>> = HashMap::new();
        for (key, entries) in source.categories {
            let category: Category = key.parse()?;
            if templates.contains_key(&category) {
                return Err(DomainError::validation(format!(
                    "category {} is declared more than once",
                    category
                )));
            }

            let kind = if topic_categories.contains(&category) {
                TemplateKind::Topic
            } else {
                TemplateKind::Question
            };

            let mut list = Vec::with_capacity(entries.len());
            for entry in entries {
                let text = entry.trim();
                if text.is_empty() {
                    return Err(DomainError::validation(format!(
                        "category {} contains a blank template",
                        category
                    )));
                }
                list.push(PromptTemplate::new(category, kind, text));
            }
            templates.insert(category, list);
        }

        for category in Category::ALL {
            if templates.get(&category).map_or(true, |list| list.is_empty()) {
                return Err(DomainError::validation(format!(
                    "category {} has no templates",
                    category
                )));
            }
        }

        if source.guidelines.is_empty() {
            return Err(DomainError::validation("guideline list is empty"));
        }
        let mut guidelines = Vec::with_capacity(source.guidelines.len());
        for entry in source.guidelines {
            let text = entry.trim();
            if text.is_empty() {
                return Err(DomainError::validation("guideline list contains a blank entry"));
            }
            guidelines.push(Guideline::new(text));
        }

        Ok(Self::from_parts(system_prompt.to_string(), templates, guidelines))
    }

    /// Assemble an already-valid catalog
    pub(crate) fn from_parts(
        system_prompt: String,
        templates: HashMap<Category, Vec<PromptTemplate>>,
        guidelines: Vec<Guideline>,
    ) -> Self {
        let catalog = Self {
            system_prompt,
            templates,
            guidelines,
            loaded_at: Utc::now(),
        };

        tracing::debug!(
            templates = catalog.template_count(),
            guidelines = catalog.guidelines.len(),
            "Prompt catalog constructed"
        );

        catalog
    }

    /// Convert back into structured data, e.g. for dumping to a file
    pub fn to_source(&self) -> CatalogSource {
        let mut categories = BTreeMap::new();
        let mut topic_categories = Vec::new();

        for category in Category::ALL {
            let list = self.templates(category);
            if list.iter().any(|t| t.kind == TemplateKind::Topic) {
                topic_categories.push(category.key().to_string());
            }
            categories.insert(
                category.key().to_string(),
                list.iter().map(|t| t.text.clone()).collect(),
            );
        }

        CatalogSource {
            system_prompt: self.system_prompt.clone(),
            categories,
            topic_categories,
            guidelines: self.guidelines.iter().map(|g| g.as_str().to_string()).collect(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// All categories in their fixed listing order
    pub fn list_categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Templates of a category in declaration order
    pub fn templates(&self, category: Category) -> &[PromptTemplate] {
        self.templates
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Templates looked up by textual category key
    pub fn templates_by_key(&self, key: &str) -> Result<&[PromptTemplate], DomainError> {
        let category: Category = key.parse()?;
        Ok(self.templates(category))
    }

    pub fn guidelines(&self) -> &[Guideline] {
        &self.guidelines
    }

    /// Bundle the persona, a category's templates and the guidelines
    pub fn assemble_conversation_seed(&self, category: Category) -> ConversationSeed {
        ConversationSeed {
            system_prompt: self.system_prompt.clone(),
            category,
            example_templates: self.templates(category).to_vec(),
            guidelines: self.guidelines.clone(),
        }
    }

    pub fn assemble_conversation_seed_by_key(
        &self,
        key: &str,
    ) -> Result<ConversationSeed, DomainError> {
        let category: Category = key.parse()?;
        Ok(self.assemble_conversation_seed(category))
    }

    pub fn template_count(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    /// When this instance was constructed
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
