//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptTemplate: Example question or topic label within a category
//! - Guideline: Conversational directive for the assistant
//! - PromptCatalog: Immutable collection of templates, guidelines and persona
//! - ConversationSeed: Bundle used to open a model conversation
//! - UserProfile: In-memory user context for personalization
//! - MacroEstimate: Nutrition estimate parsed from model output

mod catalog;
mod guideline;
mod macro_estimate;
mod profile;
mod prompt_template;
mod seed;

pub use catalog::*;
pub use guideline::*;
pub use macro_estimate::*;
pub use profile::*;
pub use prompt_template::*;
pub use seed::*;
