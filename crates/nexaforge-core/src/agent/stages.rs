//! The four agent stages.
//!
//! Each stage builds its prompt, calls the model once, parses the reply, and
//! substitutes the template deliverable when nothing usable came back.
//! Model output is additionally held to the cardinality rules the
//! downstream stages and side effects depend on.

use tracing::{debug, info, warn};

use nexaforge_types::forge::{
    ArchitectBlueprint, CopywriterDeliverable, ForgeRequest, IntegrationPlan, VisualDirective,
};

use crate::image::ImageGenerator;

use super::caller::ModelCaller;
use super::fallback::{
    fallback_blueprint, fallback_booking, fallback_copy, fallback_integration, fallback_visual,
};
use super::parse::parse_response;
use super::prompt::{architect_prompt, copywriter_prompt, integration_prompt, visual_prompt};
use super::{AgentStage, StageOutcome};

pub const MIN_SITEMAP_NODES: usize = 4;
pub const MAX_SITEMAP_NODES: usize = 6;

/// Architect: request in, site blueprint out.
#[tracing::instrument(
    name = "forge.architect",
    skip(caller, request),
    fields(project = %request.project_name)
)]
pub async fn run_architect(
    caller: &ModelCaller,
    request: &ForgeRequest,
) -> StageOutcome<ArchitectBlueprint> {
    let raw = caller
        .call(AgentStage::Architect, &architect_prompt(request))
        .await;

    let parsed = parse_response::<ArchitectBlueprint>(raw.as_deref()).filter(|blueprint| {
        let nodes = blueprint.sitemap.len();
        let ok = (MIN_SITEMAP_NODES..=MAX_SITEMAP_NODES).contains(&nodes);
        if !ok {
            warn!(nodes, "architect sitemap out of bounds, discarding model output");
        }
        ok
    });

    let outcome = StageOutcome::from_parsed(parsed, || fallback_blueprint(request));
    log_source(AgentStage::Architect, &outcome);
    outcome
}

/// Copywriter: blueprint in, marketing copy out.
#[tracing::instrument(
    name = "forge.copywriter",
    skip(caller, request, blueprint),
    fields(project = %request.project_name)
)]
pub async fn run_copywriter(
    caller: &ModelCaller,
    request: &ForgeRequest,
    blueprint: &ArchitectBlueprint,
) -> StageOutcome<CopywriterDeliverable> {
    let raw = caller
        .call(AgentStage::Copywriter, &copywriter_prompt(request, blueprint))
        .await;

    let parsed = parse_response::<CopywriterDeliverable>(raw.as_deref());
    let outcome = StageOutcome::from_parsed(parsed, || fallback_copy(request, blueprint));
    log_source(AgentStage::Copywriter, &outcome);
    outcome
}

/// Visual: art direction plus an optional generated hero image.
///
/// Image generation runs on whichever directive was chosen. A failed or
/// skipped generation leaves `hero_image_url` unset, even when the model
/// supplied one.
#[tracing::instrument(
    name = "forge.visual",
    skip(caller, request, images),
    fields(project = %request.project_name)
)]
pub async fn run_visual<I: ImageGenerator>(
    caller: &ModelCaller,
    request: &ForgeRequest,
    images: Option<&I>,
) -> StageOutcome<VisualDirective> {
    let raw = caller.call(AgentStage::Visual, &visual_prompt(request)).await;

    let parsed = parse_response::<VisualDirective>(raw.as_deref());
    let mut outcome = StageOutcome::from_parsed(parsed, || fallback_visual(request));
    log_source(AgentStage::Visual, &outcome);

    // Only a URL from the image generator may be attached.
    let directive = outcome.value_mut();
    directive.hero_image_url = None;
    match images {
        Some(generator) => match generator.generate(&directive.hero_image_prompt).await {
            Ok(image) => directive.hero_image_url = Some(image.url),
            Err(e) => warn!(error = %e, "hero image generation failed"),
        },
        None => debug!("no image generator configured, skipping hero image"),
    }

    outcome
}

/// Integration: Stripe catalog, booking, contact form, automation notes.
///
/// Booking follows the request toggle regardless of what the model
/// returned: it is removed when booking was not requested and the template
/// booking is attached when it was requested but omitted.
#[tracing::instrument(
    name = "forge.integration",
    skip(caller, request, blueprint),
    fields(project = %request.project_name)
)]
pub async fn run_integration(
    caller: &ModelCaller,
    request: &ForgeRequest,
    blueprint: &ArchitectBlueprint,
) -> StageOutcome<IntegrationPlan> {
    let raw = caller
        .call(AgentStage::Integration, &integration_prompt(request, blueprint))
        .await;

    let parsed = parse_response::<IntegrationPlan>(raw.as_deref()).filter(|plan| {
        if plan.stripe_products.is_empty() {
            warn!("integration plan has no stripe products, discarding model output");
            return false;
        }
        true
    });

    let mut outcome = StageOutcome::from_parsed(parsed, || fallback_integration(request));
    log_source(AgentStage::Integration, &outcome);

    let plan = outcome.value_mut();
    if !request.integrations.booking {
        plan.booking_configuration = None;
    } else if plan.booking_configuration.is_none() {
        plan.booking_configuration = Some(fallback_booking());
    }

    outcome
}

fn log_source<T>(stage: AgentStage, outcome: &StageOutcome<T>) {
    if outcome.is_fallback() {
        warn!(%stage, "using fallback deliverable");
    } else {
        info!(%stage, "model deliverable accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::fallback::{FALLBACK_PAGES, fallback_copy_with_cta};
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::testing::{
        FailingLlm, ScriptedLlm, StubImages, aurora_request, model_blueprint, model_integration,
        model_visual,
    };
    use nexaforge_types::forge::{BookingProvider, SitemapNode};

    fn scripted(text: &str) -> ModelCaller {
        ModelCaller::new(Some(BoxLlmProvider::new(ScriptedLlm::always(text))), "gpt-4o", 2048)
    }

    fn failing() -> ModelCaller {
        ModelCaller::new(Some(BoxLlmProvider::new(FailingLlm)), "gpt-4o", 2048)
    }

    #[tokio::test]
    async fn test_architect_accepts_model_output() {
        let blueprint = model_blueprint();
        let caller = scripted(&serde_json::to_string(&blueprint).unwrap());
        let outcome = run_architect(&caller, &aurora_request()).await;
        assert_eq!(outcome, StageOutcome::Generated(blueprint));
    }

    #[tokio::test]
    async fn test_architect_falls_back_on_error() {
        let request = aurora_request();
        let outcome = run_architect(&failing(), &request).await;
        assert_eq!(outcome, StageOutcome::Fallback(fallback_blueprint(&request)));
    }

    #[tokio::test]
    async fn test_architect_falls_back_on_garbage() {
        let outcome = run_architect(&scripted("not json"), &aurora_request()).await;
        assert!(outcome.is_fallback());
        let titles: Vec<&str> = outcome.value().sitemap.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, FALLBACK_PAGES);
    }

    #[tokio::test]
    async fn test_architect_rejects_sitemap_out_of_bounds() {
        let mut blueprint = model_blueprint();
        blueprint.sitemap.truncate(3);
        let caller = scripted(&serde_json::to_string(&blueprint).unwrap());
        assert!(run_architect(&caller, &aurora_request()).await.is_fallback());

        let mut blueprint = model_blueprint();
        while blueprint.sitemap.len() < 7 {
            blueprint.sitemap.push(SitemapNode {
                title: format!("Extra {}", blueprint.sitemap.len()),
                description: "More".to_string(),
                key_features: vec![],
            });
        }
        let caller = scripted(&serde_json::to_string(&blueprint).unwrap());
        assert!(run_architect(&caller, &aurora_request()).await.is_fallback());
    }

    #[tokio::test]
    async fn test_copywriter_accepts_model_output() {
        let request = aurora_request();
        let blueprint = fallback_blueprint(&request);
        let mut copy = fallback_copy_with_cta(&request, &blueprint, "Go");
        copy.hero_headline = "Model headline".to_string();
        let caller = scripted(&serde_json::to_string(&copy).unwrap());

        let outcome = run_copywriter(&caller, &request, &blueprint).await;
        assert_eq!(outcome, StageOutcome::Generated(copy));
    }

    #[tokio::test]
    async fn test_copywriter_fallback_covers_every_page() {
        let request = aurora_request();
        let blueprint = model_blueprint();
        let outcome = run_copywriter(&ModelCaller::disabled(), &request, &blueprint).await;
        assert!(outcome.is_fallback());
        for node in &blueprint.sitemap {
            assert!(outcome.value().body_copy.contains_key(&node.title));
        }
    }

    #[tokio::test]
    async fn test_visual_attaches_generated_image() {
        let images = StubImages::ok("https://img.example/hero.png");
        let caller = scripted(&serde_json::to_string(&model_visual()).unwrap());

        let outcome = run_visual(&caller, &aurora_request(), Some(&images)).await;
        assert!(!outcome.is_fallback());
        assert_eq!(
            outcome.value().hero_image_url.as_deref(),
            Some("https://img.example/hero.png")
        );
        assert_eq!(images.prompts(), vec![model_visual().hero_image_prompt]);
    }

    #[tokio::test]
    async fn test_visual_image_failure_leaves_url_unset() {
        let images = StubImages::failing();
        let request = aurora_request();
        let outcome = run_visual(&failing(), &request, Some(&images)).await;
        assert!(outcome.is_fallback());
        assert!(outcome.value().hero_image_url.is_none());
        assert_eq!(images.prompts(), vec![fallback_visual(&request).hero_image_prompt]);
    }

    #[tokio::test]
    async fn test_visual_without_generator() {
        let outcome = run_visual::<StubImages>(&ModelCaller::disabled(), &aurora_request(), None).await;
        assert!(outcome.is_fallback());
        assert!(outcome.value().hero_image_url.is_none());
    }

    #[tokio::test]
    async fn test_visual_drops_model_supplied_image_url() {
        let mut visual = model_visual();
        visual.hero_image_url = Some("https://model.invented/fake.png".to_string());
        let caller = scripted(&serde_json::to_string(&visual).unwrap());
        let request = aurora_request();

        let images = StubImages::failing();
        let outcome = run_visual(&caller, &request, Some(&images)).await;
        assert!(!outcome.is_fallback());
        assert!(outcome.value().hero_image_url.is_none());

        let outcome = run_visual::<StubImages>(&caller, &request, None).await;
        assert!(!outcome.is_fallback());
        assert!(outcome.value().hero_image_url.is_none());

        let images = StubImages::ok("https://img.example/hero.png");
        let outcome = run_visual(&caller, &request, Some(&images)).await;
        assert_eq!(
            outcome.value().hero_image_url.as_deref(),
            Some("https://img.example/hero.png")
        );
    }

    #[tokio::test]
    async fn test_integration_rejects_empty_products() {
        let mut plan = model_integration();
        plan.stripe_products.clear();
        let caller = scripted(&serde_json::to_string(&plan).unwrap());
        let request = aurora_request();
        let outcome = run_integration(&caller, &request, &fallback_blueprint(&request)).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.value().stripe_products.len(), 2);
    }

    #[tokio::test]
    async fn test_integration_strips_unrequested_booking() {
        let mut plan = model_integration();
        plan.booking_configuration = Some(fallback_booking());
        let caller = scripted(&serde_json::to_string(&plan).unwrap());
        let request = aurora_request();
        assert!(!request.integrations.booking);

        let outcome = run_integration(&caller, &request, &fallback_blueprint(&request)).await;
        assert!(!outcome.is_fallback());
        assert!(outcome.value().booking_configuration.is_none());
    }

    #[tokio::test]
    async fn test_integration_attaches_requested_booking() {
        let mut plan = model_integration();
        plan.booking_configuration = None;
        let caller = scripted(&serde_json::to_string(&plan).unwrap());
        let mut request = aurora_request();
        request.integrations.booking = true;

        let outcome = run_integration(&caller, &request, &fallback_blueprint(&request)).await;
        assert!(!outcome.is_fallback());
        let booking = outcome.value().booking_configuration.as_ref().unwrap();
        assert_eq!(booking.provider, BookingProvider::Calcom);
    }

    #[tokio::test]
    async fn test_integration_keeps_model_booking_when_requested() {
        let mut plan = model_integration();
        plan.booking_configuration = Some(nexaforge_types::forge::BookingConfiguration {
            provider: BookingProvider::Calendly,
            setup_guide: "Use Calendly".to_string(),
        });
        let caller = scripted(&serde_json::to_string(&plan).unwrap());
        let mut request = aurora_request();
        request.integrations.booking = true;

        let outcome = run_integration(&caller, &request, &fallback_blueprint(&request)).await;
        assert_eq!(
            outcome.value().booking_configuration.as_ref().map(|b| b.provider),
            Some(BookingProvider::Calendly)
        );
    }
}
