//! Deterministic template deliverables.
//!
//! Used whenever a stage has no usable model output. Every function here is
//! pure apart from `fallback_copy`, which picks a random call-to-action.

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use serde_json::{Value, json};

use nexaforge_types::catalog::{CTA_VARIANTS, PALETTE_LIBRARY};
use nexaforge_types::forge::{
    ArchitectBlueprint, BillingInterval, BookingConfiguration, BookingProvider, ContactField,
    ContactForm, CopywriterDeliverable, FieldType, ForgeRequest, IntegrationPlan, SitemapNode,
    StripeProduct, VisualDirective,
};

/// Page titles of the template sitemap, in order.
pub const FALLBACK_PAGES: [&str; 5] = ["Home", "Solutions", "AI Studio", "Resources", "Launch"];

pub const CONTACT_TABLE: &str = "forge_contacts";

pub const LAUNCH_KIT_PRICE: u64 = 9900;
pub const PRO_SUBSCRIPTION_PRICE: u64 = 29900;

const BOOKING_SETUP_GUIDE: &str = "Create a Cal.com event for 30 minute discovery calls. Embed using the official React component and sync availability from Supabase.";

// ---------------------------------------------------------------------------
// Architect
// ---------------------------------------------------------------------------

pub fn fallback_blueprint(request: &ForgeRequest) -> ArchitectBlueprint {
    let sitemap = vec![
        page(
            FALLBACK_PAGES[0],
            format!(
                "Immersive hero with animated layers introducing {}. Showcase key differentiators and a prominent {}.",
                request.project_name, request.primary_goal
            ),
            [
                "Hero narrative with layered motion graphics",
                "Value proposition grid mapped to audience pain-points",
                "Conversion CTA ribbon with persistent micro copy",
            ],
        ),
        page(
            FALLBACK_PAGES[1],
            "Modular blocks presenting product pillars with embedded animations.".to_string(),
            [
                "Problem > Outcome storytelling columns",
                "Interactive feature blueprints with depth transitions",
                "Customer archetype tabs highlighting tailored impact",
            ],
        ),
        page(
            FALLBACK_PAGES[2],
            "Dynamic workspace showcasing how NexaForge automation assembles web experiences in real-time.".to_string(),
            [
                "Storyboard timeline of the agentic build process",
                "Live preview container with generated scenes",
                "Developer mode callout emphasising Supabase + Stripe stack",
            ],
        ),
        page(
            FALLBACK_PAGES[3],
            "Thought-leadership hub featuring AI playbooks, templates, and benchmark reports.".to_string(),
            [
                "Filterable content matrix with AI tags",
                "SEO rich snippets for each resource",
                "Smart subscribe banner with contextual offers",
            ],
        ),
        page(
            FALLBACK_PAGES[4],
            "Conversion page guiding users into a paid plan or bespoke build engagement.".to_string(),
            [
                "Pricing table integrated with Stripe checkout links",
                "Trust indicators and compliance badges",
                "Interactive FAQ leveraging accordions and pinned CTA",
            ],
        ),
    ];

    ArchitectBlueprint {
        industry: request.industry.clone(),
        theme: request.theme.clone(),
        positioning: format!(
            "{} delivers a {} {} experience with agentic site creation powered by AI.",
            request.project_name,
            request.tone.to_string().to_lowercase(),
            request.industry.to_lowercase()
        ),
        sitemap,
        ux_directives: strings([
            "Utilize layered glassmorphic shells and particle gradients for hero scenes.",
            "Apply magnetic cursor interactions to emphasize CTA states.",
            "Blend motion easing inspired by Framer Motion for soft yet premium transitions.",
            "Contrast copy blocks with diagonal dividers and organic blobs to add depth.",
        ]),
    }
}

fn page<const N: usize>(title: &str, description: String, key_features: [&str; N]) -> SitemapNode {
    SitemapNode {
        title: title.to_string(),
        description,
        key_features: strings(key_features),
    }
}

// ---------------------------------------------------------------------------
// Copywriter
// ---------------------------------------------------------------------------

/// Template copy with a randomly chosen call-to-action.
pub fn fallback_copy(request: &ForgeRequest, blueprint: &ArchitectBlueprint) -> CopywriterDeliverable {
    let cta = CTA_VARIANTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(CTA_VARIANTS[0]);
    fallback_copy_with_cta(request, blueprint, cta)
}

/// Template copy using the given call-to-action.
///
/// One body copy entry per sitemap page, keyed by page title.
pub fn fallback_copy_with_cta(
    request: &ForgeRequest,
    blueprint: &ArchitectBlueprint,
    cta: &str,
) -> CopywriterDeliverable {
    let body_copy: BTreeMap<String, String> = blueprint
        .sitemap
        .iter()
        .map(|node| {
            let highlights: Vec<&str> = node
                .key_features
                .iter()
                .take(2)
                .map(String::as_str)
                .collect();
            let text = format!(
                "{} Featuring {} for {}.",
                node.description,
                highlights.join(" and "),
                request.target_audience
            );
            (node.title.clone(), text)
        })
        .collect();

    let json_ld = match json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": request.project_name,
        "applicationCategory": "WebApplication",
        "offers": {
            "@type": "Offer",
            "priceCurrency": "USD",
            "price": "99.00",
        },
    }) {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    CopywriterDeliverable {
        hero_headline: format!(
            "Launch {} in hours, not months.",
            title_case(&request.project_name)
        ),
        sub_headline: format!(
            "NexaForge Pro orchestrates architect, copywriter, visual, and integration agents to deliver production-grade sites that convert. {cta}."
        ),
        body_copy,
        seo_keywords: vec![
            format!("{} website builder", request.industry.to_lowercase()),
            "AI website generator".to_string(),
            "agentic web design".to_string(),
            "supabase stripe integration".to_string(),
        ],
        meta_description: "NexaForge Pro is the AI-native builder where orchestrated agents craft performant websites with Supabase, Stripe, and OpenAI.".to_string(),
        json_ld,
    }
}

/// Capitalize the first letter of each whitespace-separated word and
/// lowercase the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Visual
// ---------------------------------------------------------------------------

pub fn fallback_visual(request: &ForgeRequest) -> VisualDirective {
    let palette = &PALETTE_LIBRARY[0];
    VisualDirective {
        palette_name: palette.name.to_string(),
        color_palette: palette.to_color_palette(),
        hero_image_prompt: format!(
            "Cinematic {} experience for {} in {} style with atmospheric lighting and layered glass surfaces.",
            request.industry.to_lowercase(),
            request.project_name,
            request.theme
        ),
        hero_image_url: None,
        design_effects: strings([
            "Glassmorphism surfaces with blurred gradient overlays",
            "Floating particle system responding to cursor movement",
            "Layered depth using parallax background beams",
        ]),
    }
}

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------

pub fn fallback_integration(request: &ForgeRequest) -> IntegrationPlan {
    IntegrationPlan {
        stripe_products: vec![
            StripeProduct {
                name: format!("{} Launch Kit", request.project_name),
                price: LAUNCH_KIT_PRICE,
                interval: BillingInterval::OneTime,
            },
            StripeProduct {
                name: format!("{} Pro Subscription", request.project_name),
                price: PRO_SUBSCRIPTION_PRICE,
                interval: BillingInterval::Monthly,
            },
        ],
        booking_configuration: request.integrations.booking.then(fallback_booking),
        contact_form: ContactForm {
            fields: vec![
                field("fullName", "Full Name", FieldType::Text),
                field("email", "Work Email", FieldType::Email),
                field("message", "Project Blueprint Request", FieldType::Textarea),
            ],
            supabase_table: CONTACT_TABLE.to_string(),
        },
        automation_notes: strings([
            "Sync generated copy and media assets into Supabase storage bucket `forge-assets`.",
            "Trigger Stripe customer portal email when contact form submits for qualified leads.",
            "Log agent decisions into Supabase `agent_events` table for observability.",
        ]),
    }
}

/// Cal.com discovery-call booking used whenever booking is requested.
pub fn fallback_booking() -> BookingConfiguration {
    BookingConfiguration {
        provider: BookingProvider::Calcom,
        setup_guide: BOOKING_SETUP_GUIDE.to_string(),
    }
}

fn field(name: &str, label: &str, field_type: FieldType) -> ContactField {
    ContactField {
        name: name.to_string(),
        label: label.to_string(),
        field_type,
    }
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
