//! Model caller shared by the four agents.
//!
//! ModelCaller assembles the `CompletionRequest` for a stage, sends it
//! through the boxed provider, and reduces every failure to `None`. OTel
//! GenAI spans instrument every call.

use tracing::{Instrument, debug, info_span, warn};

use nexaforge_types::llm::CompletionRequest;

use crate::llm::box_provider::BoxLlmProvider;

use super::AgentStage;
use super::prompt::PromptSet;

/// Executes a single chat completion per stage.
///
/// Without a provider every call returns `None`, so the pipeline runs
/// entirely on fallbacks.
#[derive(Debug)]
pub struct ModelCaller {
    provider: Option<BoxLlmProvider>,
    model: String,
    max_tokens: u32,
}

impl ModelCaller {
    pub fn new(provider: Option<BoxLlmProvider>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }

    /// A caller with no provider configured.
    pub fn disabled() -> Self {
        Self::new(None, String::new(), 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Send the stage prompt once and return the raw text of the first choice.
    ///
    /// Returns `None` when no provider is configured, when the provider
    /// fails, or when it answers with empty content. Never retries.
    pub async fn call(&self, stage: AgentStage, prompt: &PromptSet) -> Option<String> {
        let Some(provider) = &self.provider else {
            debug!(%stage, "no chat provider configured, skipping model call");
            return None;
        };

        let request = self.build_request(stage, prompt);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            forge.stage = %stage,
        );

        match provider.complete(&request).instrument(span).await {
            Ok(response) if response.content.trim().is_empty() => {
                warn!(%stage, "model returned empty content");
                None
            }
            Ok(response) => {
                debug!(
                    %stage,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    stop_reason = %response.stop_reason,
                    "model call completed"
                );
                Some(response.content)
            }
            Err(e) => {
                warn!(%stage, error = %e, "model call failed");
                None
            }
        }
    }

    fn build_request(&self, stage: AgentStage, prompt: &PromptSet) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: prompt.to_messages(),
            max_tokens: self.max_tokens,
            temperature: Some(stage.temperature()),
            stop_sequences: None,
        }
    }
}
