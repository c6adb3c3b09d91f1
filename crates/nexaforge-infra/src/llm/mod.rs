//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`] implementation used by the forge
//! agents and a factory ([`create_chat_provider`]) that builds it from the
//! forge configuration and the resolved API key.
//!
//! [`LlmProvider`]: nexaforge_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};

use nexaforge_core::llm::box_provider::BoxLlmProvider;
use nexaforge_types::config::ForgeConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create the chat provider for the forge agents.
///
/// Returns `None` when no API key is available; every agent stage then
/// uses its fallback deliverable.
pub fn create_chat_provider(
    config: &ForgeConfig,
    api_key: Option<&SecretString>,
) -> Option<BoxLlmProvider> {
    let Some(key) = api_key else {
        tracing::debug!("OPENAI_API_KEY not set, agents will use fallback deliverables");
        return None;
    };

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: provider_name_for(&config.llm_base_url).to_string(),
        base_url: config.llm_base_url.clone(),
        api_key: key.expose_secret().to_string(),
        model: config.model.clone(),
    });
    Some(BoxLlmProvider::new(provider))
}

/// "openai" for the official endpoint, "openai_compatible" for anything else.
fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.starts_with(openai_compat::config::OPENAI_BASE_URL) {
        "openai"
    } else {
        "openai_compatible"
    }
}
