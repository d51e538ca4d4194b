//! Assembles the two-message completion request for a scenario.
//!
//! The user text is inserted verbatim after the scenario's fixed instruction
//! phrase; callers reject empty text before building.

use crate::config::GenerationConfig;
use crate::constants::prompts;
use crate::models::domain::Scenario;
use crate::services::completion_client::{ChatMessage, CompletionRequest};

pub fn instruction(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Explanation => prompts::EXPLANATION_INSTRUCTION,
        Scenario::Quiz => prompts::QUIZ_INSTRUCTION,
        Scenario::Notes => prompts::NOTES_INSTRUCTION,
    }
}

pub fn build_request(
    scenario: Scenario,
    config: &GenerationConfig,
    text: &str,
) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(config.system_prompt.clone()),
            ChatMessage::user(format!("{}\n\n{}", instruction(scenario), text)),
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}
