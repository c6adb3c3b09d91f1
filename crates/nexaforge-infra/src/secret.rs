//! API keys resolved from environment variables.
//!
//! Every key is optional. A missing key disables the collaborator that
//! needs it rather than failing startup. Values are wrapped in
//! [`SecretString`] and never appear in `Debug` output.

use secrecy::SecretString;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Supabase project endpoint plus its service role key.
#[derive(Debug, Clone)]
pub struct SupabaseCredentials {
    pub url: String,
    pub service_role_key: SecretString,
}

/// Outbound credentials for all collaborators.
#[derive(Debug, Clone, Default)]
pub struct ForgeSecrets {
    pub openai_api_key: Option<SecretString>,
    pub stripe_secret_key: Option<SecretString>,
    pub supabase: Option<SupabaseCredentials>,
}

impl ForgeSecrets {
    /// Read every key from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve keys through `lookup`. Empty or whitespace-only values count
    /// as absent. Supabase is enabled only when both its URL and key are set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let supabase = match (get(SUPABASE_URL), get(SUPABASE_SERVICE_ROLE_KEY)) {
            (Some(url), Some(key)) => Some(SupabaseCredentials {
                url: url.trim_end_matches('/').to_string(),
                service_role_key: SecretString::from(key),
            }),
            _ => None,
        };

        Self {
            openai_api_key: get(OPENAI_API_KEY).map(SecretString::from),
            stripe_secret_key: get(STRIPE_SECRET_KEY).map(SecretString::from),
            supabase,
        }
    }
}
