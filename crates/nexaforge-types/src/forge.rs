//! Forge request/response contracts.
//!
//! JSON field names are camelCase so the payloads match what the web client
//! posts and what gets persisted per project.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand tone selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Bold,
    Elegant,
    Playful,
    Technical,
    Human,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Bold,
        Tone::Elegant,
        Tone::Playful,
        Tone::Technical,
        Tone::Human,
    ];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Bold => write!(f, "Bold"),
            Tone::Elegant => write!(f, "Elegant"),
            Tone::Playful => write!(f, "Playful"),
            Tone::Technical => write!(f, "Technical"),
            Tone::Human => write!(f, "Human"),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bold" => Ok(Tone::Bold),
            "Elegant" => Ok(Tone::Elegant),
            "Playful" => Ok(Tone::Playful),
            "Technical" => Ok(Tone::Technical),
            "Human" => Ok(Tone::Human),
            other => Err(format!("invalid tone: '{other}'")),
        }
    }
}

/// Third-party integrations requested on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationToggles {
    pub stripe: bool,
    pub booking: bool,
    pub contact_form: bool,
    pub blog: bool,
}

/// Input to a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeRequest {
    pub project_name: String,
    pub brand_voice: String,
    pub target_audience: String,
    pub primary_goal: String,
    pub industry: String,
    pub theme: String,
    pub tone: Tone,
    pub features: Vec<String>,
    pub integrations: IntegrationToggles,
}

/// One page of the generated sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapNode {
    pub title: String,
    pub description: String,
    pub key_features: Vec<String>,
}

/// Architect stage deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectBlueprint {
    pub industry: String,
    pub theme: String,
    pub positioning: String,
    pub sitemap: Vec<SitemapNode>,
    pub ux_directives: Vec<String>,
}

/// Copywriter stage deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopywriterDeliverable {
    pub hero_headline: String,
    pub sub_headline: String,
    /// Prose keyed by sitemap section title.
    pub body_copy: BTreeMap<String, String>,
    pub seo_keywords: Vec<String>,
    pub meta_description: String,
    pub json_ld: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub accents: Vec<String>,
    pub neutrals: Vec<String>,
}

/// Visual stage deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualDirective {
    pub palette_name: String,
    pub color_palette: ColorPalette,
    pub hero_image_prompt: String,
    /// Set after image generation succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    pub design_effects: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingInterval {
    #[serde(rename = "one_time")]
    OneTime,
    #[serde(rename = "month")]
    Monthly,
}

impl fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingInterval::OneTime => write!(f, "one_time"),
            BillingInterval::Monthly => write!(f, "month"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeProduct {
    pub name: String,
    /// Price in minor currency units (cents).
    pub price: u64,
    pub interval: BillingInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingProvider {
    Calcom,
    Cronofy,
    Calendly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfiguration {
    pub provider: BookingProvider,
    pub setup_guide: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub fields: Vec<ContactField>,
    pub supabase_table: String,
}

/// Integration stage deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPlan {
    pub stripe_products: Vec<StripeProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_configuration: Option<BookingConfiguration>,
    pub contact_form: ContactForm,
    pub automation_notes: Vec<String>,
}

/// Aggregate result of one pipeline run (the blueprint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeResponse {
    pub architect: ArchitectBlueprint,
    pub copywriter: CopywriterDeliverable,
    pub visual: VisualDirective,
    pub integration: IntegrationPlan,
    pub generated_at: DateTime<Utc>,
    pub project_slug: String,
}
