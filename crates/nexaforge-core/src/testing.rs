//! Shared test doubles and fixtures for the core crate.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use nexaforge_types::error::{ImageError, ProvisioningError, RepositoryError};
use nexaforge_types::forge::{
    ArchitectBlueprint, BillingInterval, ContactField, ContactForm, CopywriterDeliverable,
    FieldType, ForgeRequest, ForgeResponse, IntegrationPlan, IntegrationToggles, SitemapNode,
    StripeProduct, Tone, VisualDirective,
};
use nexaforge_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use nexaforge_types::slug::project_slug;

use crate::agent::fallback::{fallback_blueprint, fallback_copy_with_cta, fallback_visual};
use crate::image::{GeneratedImage, ImageGenerator};
use crate::llm::provider::LlmProvider;
use crate::provisioning::{PaymentProvisioner, ProvisionedProduct};
use crate::repository::blueprint::BlueprintStore;

// --- Fixtures ---

/// The canonical "Aurora" request: booking off, no explicit features.
pub fn aurora_request() -> ForgeRequest {
    ForgeRequest {
        project_name: "Aurora".to_string(),
        brand_voice: "calm and precise".to_string(),
        target_audience: "freelance designers".to_string(),
        primary_goal: "book consultations".to_string(),
        industry: "AI & Machine Learning".to_string(),
        theme: "Glassmorphism".to_string(),
        tone: Tone::Bold,
        features: vec![],
        integrations: IntegrationToggles {
            stripe: true,
            booking: false,
            contact_form: true,
            blog: false,
        },
    }
}

/// A well-formed architect reply distinct from the template.
pub fn model_blueprint() -> ArchitectBlueprint {
    let node = |title: &str| SitemapNode {
        title: title.to_string(),
        description: format!("{title} page crafted by the model."),
        key_features: vec![format!("{title} hero"), format!("{title} grid")],
    };
    ArchitectBlueprint {
        industry: "AI & Machine Learning".to_string(),
        theme: "Glassmorphism".to_string(),
        positioning: "Aurora is the studio that turns briefs into launch-ready sites.".to_string(),
        sitemap: vec![node("Welcome"), node("Work"), node("Process"), node("Contact")],
        ux_directives: vec!["Use soft glass layers.".to_string()],
    }
}

pub fn model_copy() -> CopywriterDeliverable {
    let mut copy = fallback_copy_with_cta(&aurora_request(), &model_blueprint(), "Book a call");
    copy.hero_headline = "Designs that book themselves".to_string();
    copy
}

pub fn model_visual() -> VisualDirective {
    let mut visual = fallback_visual(&aurora_request());
    visual.palette_name = "Glacier Mint".to_string();
    visual.hero_image_prompt = "Frosted glass studio at dawn".to_string();
    visual
}

pub fn model_integration() -> IntegrationPlan {
    IntegrationPlan {
        stripe_products: vec![StripeProduct {
            name: "Aurora Retainer".to_string(),
            price: 150000,
            interval: BillingInterval::Monthly,
        }],
        booking_configuration: None,
        contact_form: ContactForm {
            fields: vec![ContactField {
                name: "email".to_string(),
                label: "Email".to_string(),
                field_type: FieldType::Email,
            }],
            supabase_table: "aurora_leads".to_string(),
        },
        automation_notes: vec!["Notify the studio on new leads.".to_string()],
    }
}

/// A fully assembled template blueprint for side-effect tests.
pub fn sample_response() -> ForgeResponse {
    let request = aurora_request();
    let architect = fallback_blueprint(&request);
    let generated_at = Utc::now();
    ForgeResponse {
        copywriter: fallback_copy_with_cta(&request, &architect, "Start forging today"),
        visual: fallback_visual(&request),
        integration: crate::agent::fallback::fallback_integration(&request),
        architect,
        project_slug: project_slug(&request.project_name, generated_at),
        generated_at,
    }
}

// --- LLM doubles ---

/// Replies with scripted text and records every request it receives.
///
/// `always` repeats one reply forever. `sequence` replays replies in order
/// (`None` is a provider error) and errors once exhausted.
pub struct ScriptedLlm {
    repeat: Option<String>,
    queue: Mutex<VecDeque<Option<String>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedLlm {
    pub fn always(text: &str) -> Self {
        Self {
            repeat: Some(text.to_string()),
            queue: Mutex::new(VecDeque::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sequence(replies: Vec<Option<String>>) -> Self {
        Self {
            repeat: None,
            queue: Mutex::new(replies.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded requests; stays valid after the provider is boxed.
    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }

    fn next_reply(&self) -> Option<String> {
        if let Some(text) = &self.repeat {
            return Some(text.clone());
        }
        self.queue.lock().unwrap().pop_front().flatten()
    }
}

impl LlmProvider for ScriptedLlm {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.next_reply();
        let model = request.model.clone();
        async move {
            match reply {
                Some(content) => Ok(CompletionResponse {
                    id: "resp-scripted".to_string(),
                    content,
                    model,
                    stop_reason: StopReason::EndTurn,
                    usage: Usage {
                        input_tokens: 10,
                        output_tokens: 20,
                    },
                }),
                None => Err(LlmError::Provider {
                    message: "scripted failure".to_string(),
                }),
            }
        }
    }
}

/// Every call fails as if the upstream API were down.
pub struct FailingLlm;

impl LlmProvider for FailingLlm {
    fn name(&self) -> &str {
        "failing"
    }

    fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        async { Err(LlmError::Overloaded("service unavailable".to_string())) }
    }
}

// --- Image double ---

pub struct StubImages {
    url: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubImages {
    pub fn ok(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            url: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ImageGenerator for StubImages {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<GeneratedImage, ImageError>> + Send {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let url = self.url.clone();
        async move {
            url.map(|url| GeneratedImage { url })
                .ok_or_else(|| ImageError::Provider("content policy violation".to_string()))
        }
    }
}

// --- Store double ---

pub struct RecordingStore {
    fail: bool,
    saved: Mutex<Vec<ForgeResponse>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            fail: false,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn saved_slugs(&self) -> Vec<String> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.project_slug.clone())
            .collect()
    }
}

impl BlueprintStore for RecordingStore {
    fn upsert(
        &self,
        response: &ForgeResponse,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let result = if self.fail {
            Err(RepositoryError::Connection)
        } else {
            let mut saved = self.saved.lock().unwrap();
            saved.retain(|r| r.project_slug != response.project_slug);
            saved.push(response.clone());
            Ok(())
        };
        async move { result }
    }

    fn get(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<ForgeResponse>, RepositoryError>> + Send {
        let found = self
            .saved
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.project_slug == slug)
            .cloned();
        async move { Ok(found) }
    }
}

// --- Provisioner double ---

pub struct RecordingProvisioner {
    reject: Option<String>,
    created: Mutex<Vec<String>>,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self {
            reject: None,
            created: Mutex::new(Vec::new()),
        }
    }

    /// Rejects the product with the given name, accepts all others.
    pub fn rejecting(name: &str) -> Self {
        Self {
            reject: Some(name.to_string()),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl PaymentProvisioner for RecordingProvisioner {
    fn create_product(
        &self,
        product: &StripeProduct,
    ) -> impl Future<Output = Result<ProvisionedProduct, ProvisioningError>> + Send {
        let result = if self.reject.as_deref() == Some(product.name.as_str()) {
            Err(ProvisioningError::Rejected {
                product: product.name.clone(),
                message: "card declined".to_string(),
            })
        } else {
            let mut created = self.created.lock().unwrap();
            created.push(product.name.clone());
            Ok(ProvisionedProduct {
                product_id: format!("prod_{}", created.len()),
                price_id: Some(format!("price_{}", created.len())),
            })
        };
        async move { result }
    }
}

/// Shared gates for a store and provisioner that can only finish while
/// both are running at the same time.
struct Gates {
    store_started: tokio::sync::watch::Sender<bool>,
    provisioner_started: tokio::sync::Notify,
}

/// Store whose upsert waits until provisioning has started.
pub struct GatedStore {
    gates: Arc<Gates>,
}

/// Provisioner whose products wait until persistence has started.
pub struct GatedProvisioner {
    gates: Arc<Gates>,
}

pub fn gated_pair() -> (GatedStore, GatedProvisioner) {
    let (store_started, _) = tokio::sync::watch::channel(false);
    let gates = Arc::new(Gates {
        store_started,
        provisioner_started: tokio::sync::Notify::new(),
    });
    (
        GatedStore {
            gates: gates.clone(),
        },
        GatedProvisioner { gates },
    )
}

impl BlueprintStore for GatedStore {
    fn upsert(
        &self,
        _response: &ForgeResponse,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let gates = self.gates.clone();
        async move {
            gates.store_started.send_replace(true);
            gates.provisioner_started.notified().await;
            Ok(())
        }
    }

    fn get(
        &self,
        _slug: &str,
    ) -> impl Future<Output = Result<Option<ForgeResponse>, RepositoryError>> + Send {
        async { Ok(None) }
    }
}

impl PaymentProvisioner for GatedProvisioner {
    fn create_product(
        &self,
        product: &StripeProduct,
    ) -> impl Future<Output = Result<ProvisionedProduct, ProvisioningError>> + Send {
        let gates = self.gates.clone();
        let product_id = format!("prod_{}", product.name);
        async move {
            gates.provisioner_started.notify_one();
            let mut store_started = gates.store_started.subscribe();
            store_started
                .wait_for(|started| *started)
                .await
                .map_err(|e| ProvisioningError::Transport(e.to_string()))?;
            Ok(ProvisionedProduct {
                product_id,
                price_id: None,
            })
        }
    }
}
