//! GlucoGuide Domain Library
//!
//! Prompt catalog and conversation seeding for a diabetes-focused health
//! assistant.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure catalog model and logic
//!   - `entities/`: PromptCatalog, PromptTemplate, Guideline, ConversationSeed, UserProfile
//!   - `value_objects/`: Immutable value types (Category, DiabetesType, SeedFormat)
//!   - `services/`: Built-in content, shared catalog handle, formatters
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Language model interface
//!
//! - **Application** (`application/`): Conversation use case over the port
//!
//! # Usage
//!
//! ```rust
//! use glucoguide::{Category, PromptCatalog};
//!
//! let catalog = PromptCatalog::builtin();
//! let seed = catalog.assemble_conversation_seed(Category::MealPlanning);
//! assert_eq!(seed.example_templates.len(), 4);
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{seed_messages, ConversationService};
pub use domain::services::{
    extract_json, format_seed, global, install_global, macro_estimation_prompt, CatalogHandle,
    PersonalizedPromptBuilder,
};
pub use domain::{
    CatalogSource, Category, ConversationSeed, DiabetesType, DomainError, Guideline,
    MacroEstimate, PromptCatalog, PromptTemplate, SeedFormat, TemplateKind, UserProfile,
    SUGGESTED_GOALS,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, TokenUsage,
};
