//! Per-stage prompt builders.
//!
//! Every builder is a pure function of the stage inputs. The user message
//! embeds the JSON shape the stage expects (as documentation text), the
//! cardinality constraints, and all upstream data the stage depends on.

use serde::Serialize;
use serde_json::json;

use nexaforge_types::catalog::{DEFAULT_FEATURES, PALETTE_LIBRARY};
use nexaforge_types::forge::{ArchitectBlueprint, ForgeRequest};
use nexaforge_types::llm::Message;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// System instruction plus user payload for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub system: String,
    pub user: String,
}

impl PromptSet {
    /// Role-tagged messages in send order (system first).
    pub fn to_messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

// ---------------------------------------------------------------------------
// System instructions
// ---------------------------------------------------------------------------

const ARCHITECT_SYSTEM: &str = "You are the NexaForge architect agent. Produce structured JSON that follows the provided schema. Keep responses concise but descriptive.";

const COPYWRITER_SYSTEM: &str = "You are the NexaForge copywriter agent. Write marketing copy that balances creativity with clarity. Return JSON only.";

const VISUAL_SYSTEM: &str = "You are the NexaForge visual agent. Respond with JSON describing the palette, the hero image prompt, and design effects.";

const INTEGRATION_SYSTEM: &str = "You are the NexaForge integration specialist. Output JSON strictly following the schema.";

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

const ARCHITECT_SCHEMA: &str = r#"{
  "industry": string,
  "theme": string,
  "positioning": string,
  "sitemap": Array<{ "title": string, "description": string, "keyFeatures": string[] }>,
  "uxDirectives": string[]
}"#;

const COPYWRITER_SCHEMA: &str = r#"{
  "heroHeadline": string,
  "subHeadline": string,
  "bodyCopy": Record<string, string>,
  "seoKeywords": string[],
  "metaDescription": string,
  "jsonLd": object
}"#;

const VISUAL_SCHEMA: &str = r#"{
  "paletteName": string,
  "colorPalette": { "accents": string[], "neutrals": string[] },
  "heroImagePrompt": string,
  "designEffects": string[]
}"#;

const INTEGRATION_SCHEMA: &str = r#"{
  "stripeProducts": Array<{ "name": string, "price": number, "interval": "one_time" | "month" }>,
  "bookingConfiguration"?: { "provider": "calcom" | "cronofy" | "calendly", "setupGuide": string },
  "contactForm": {
    "fields": Array<{ "name": string, "label": string, "type": "text" | "email" | "textarea" }>,
    "supabaseTable": string
  },
  "automationNotes": string[]
}"#;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Architect prompt: request summary plus the feature list (or the default
/// feature set when the request names none).
pub fn architect_prompt(request: &ForgeRequest) -> PromptSet {
    let key_features: Vec<&str> = if request.features.is_empty() {
        DEFAULT_FEATURES.to_vec()
    } else {
        request.features.iter().map(String::as_str).collect()
    };

    let payload = json!({
        "project": request.project_name,
        "industry": request.industry,
        "theme": request.theme,
        "primaryGoal": request.primary_goal,
        "tone": request.tone,
        "targetAudience": request.target_audience,
        "keyFeatures": key_features,
    });

    let user = format!(
        "Schema:\n{ARCHITECT_SCHEMA}\n\n\
         Instructions:\n\
         - Select the closest industry and theme.\n\
         - Provide UX directives that leverage Tailwind, Framer Motion, and high-end interactions.\n\
         - Emphasize how agents collaborate.\n\
         - Keep to 4-6 sitemap nodes.\n\n\
         Payload: {}\n",
        pretty_json(&payload)
    );

    PromptSet {
        system: ARCHITECT_SYSTEM.to_string(),
        user,
    }
}

/// Copywriter prompt: the architect blueprint, requested integrations,
/// audience, and brand voice.
pub fn copywriter_prompt(request: &ForgeRequest, blueprint: &ArchitectBlueprint) -> PromptSet {
    let user = format!(
        "Schema:\n{COPYWRITER_SCHEMA}\n\n\
         Blueprint: {}\n\n\
         Integrations requested: {}\n\
         Audience: {}\n\
         Brand voice: {}\n",
        pretty_json(blueprint),
        compact_json(&request.integrations),
        request.target_audience,
        request.brand_voice,
    );

    PromptSet {
        system: COPYWRITER_SYSTEM.to_string(),
        user,
    }
}

/// Visual prompt: the palette library, theme, and tone. Has no upstream
/// stage dependency.
pub fn visual_prompt(request: &ForgeRequest) -> PromptSet {
    let user = format!(
        "Schema:\n{VISUAL_SCHEMA}\n\n\
         Preferred palette library: {}\n\
         Theme: {}\n\
         Brand tone: {}\n",
        compact_json(&PALETTE_LIBRARY),
        request.theme,
        request.tone,
    );

    PromptSet {
        system: VISUAL_SYSTEM.to_string(),
        user,
    }
}

/// Integration prompt: the full request and architect blueprint.
pub fn integration_prompt(request: &ForgeRequest, blueprint: &ArchitectBlueprint) -> PromptSet {
    let project_data = json!({
        "request": request,
        "blueprint": blueprint,
    });

    let user = format!(
        "Schema:\n{INTEGRATION_SCHEMA}\n\n\
         Provide at least one Stripe product. Include bookingConfiguration only when booking is requested.\n\n\
         Project data: {}\n",
        pretty_json(&project_data)
    );

    PromptSet {
        system: INTEGRATION_SYSTEM.to_string(),
        user,
    }
}

fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn compact_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
