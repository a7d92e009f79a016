//! Conversation Application Service (Use Case)
//!
//! Seeds a model conversation from the prompt catalog and keeps its history.

use std::sync::Arc;

use crate::domain::{
    services::{macro_estimation_prompt, PersonalizedPromptBuilder},
    ConversationSeed, DomainError, MacroEstimate, PromptCatalog, UserProfile,
};
use crate::ports::{ChatMessage, CompletionOptions, LlmProvider, MessageRole};

/// Initial messages for a seed
pub fn seed_messages(seed: &ConversationSeed) -> Vec<ChatMessage> {
    vec![ChatMessage::system(seed.system_message())]
}

/// Application service for a single conversation
pub struct ConversationService<P: LlmProvider> {
    provider: Arc<P>,
    messages: Vec<ChatMessage>,
    options: CompletionOptions,
}

impl<P: LlmProvider> ConversationService<P> {
    /// Start a conversation from a catalog seed
    pub fn new(provider: Arc<P>, seed: &ConversationSeed) -> Self {
        Self {
            provider,
            messages: seed_messages(seed),
            options: CompletionOptions::default(),
        }
    }

    /// Start a conversation tailored to a user profile
    pub fn personalized(
        provider: Arc<P>,
        catalog: &PromptCatalog,
        profile: &UserProfile,
    ) -> Result<Self, DomainError> {
        profile.validate()?;
        let system_prompt = PersonalizedPromptBuilder::new(catalog, profile).build()?;

        Ok(Self {
            provider,
            messages: vec![ChatMessage::system(system_prompt)],
            options: CompletionOptions::default(),
        })
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of completed user/assistant exchanges
    pub fn turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .count()
    }

    /// Send a user message and return the assistant's reply
    ///
    /// On provider failure the user message is dropped again so the history
    /// keeps alternating between user and assistant.
    pub async fn send(&mut self, text: &str) -> Result<String, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::validation("message is empty"));
        }

        self.messages.push(ChatMessage::user(text));

        let result = self.provider.complete(&self.messages, &self.options).await;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.messages.pop();
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    model = self.provider.model_id(),
                    error = %e,
                    "Completion failed"
                );
                return Err(e);
            }
        };

        tracing::debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            response_model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Conversation turn completed"
        );

        self.messages.push(ChatMessage::assistant(response.content.clone()));
        Ok(response.content)
    }

    /// One-off macro estimate for a described food; not added to history
    pub async fn estimate_macros(&self, description: &str) -> Result<MacroEstimate, DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::validation("food description is empty"));
        }

        let output = self
            .provider
            .complete_simple(&macro_estimation_prompt(description))
            .await?;

        MacroEstimate::from_model_output(description, &output)
    }
}
