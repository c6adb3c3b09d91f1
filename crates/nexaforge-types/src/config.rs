//! Configuration types for NexaForge.
//!
//! `ForgeConfig` represents the `forge.toml` file in the data directory.
//! Every field has a default so an empty or missing file is valid. API keys
//! never live here; they come from the environment.

use serde::{Deserialize, Serialize};

/// Where generated blueprints are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local SQLite database in the data directory.
    Sqlite,
    /// Supabase PostgREST table (requires `SUPABASE_URL` and a service role key).
    Supabase,
}

/// Top-level configuration for the forge engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Chat model used by all four agents.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model used for hero image generation.
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_llm_base_url")]
    pub llm_base_url: String,

    /// Output token ceiling per agent call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Pause between sequential stage calls, in milliseconds.
    #[serde(default = "default_stage_pause_ms")]
    pub stage_pause_ms: u64,

    #[serde(default = "default_storage")]
    pub storage: StorageBackend,

    /// Table receiving persisted blueprints.
    #[serde(default = "default_projects_table")]
    pub projects_table: String,

    /// ISO currency code for provisioned prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_stage_pause_ms() -> u64 {
    250
}

fn default_storage() -> StorageBackend {
    StorageBackend::Sqlite
}

fn default_projects_table() -> String {
    "forge_projects".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            image_model: default_image_model(),
            llm_base_url: default_llm_base_url(),
            max_tokens: default_max_tokens(),
            stage_pause_ms: default_stage_pause_ms(),
            storage: default_storage(),
            projects_table: default_projects_table(),
            currency: default_currency(),
        }
    }
}
