//! ForgePipeline -- runs the four agent stages and assembles the blueprint.
//!
//! Stage order is fixed: architect, copywriter, visual, integration. The
//! copywriter and integration stages consume the architect blueprint; the
//! visual stage only needs the request. A short pause separates sequential
//! stage calls. Once the aggregate is assembled, persistence and payment
//! provisioning are fanned out and awaited before returning.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use nexaforge_types::forge::{ForgeRequest, ForgeResponse};
use nexaforge_types::slug::project_slug;

use crate::agent::caller::ModelCaller;
use crate::agent::stages::{run_architect, run_copywriter, run_integration, run_visual};
use crate::agent::{AgentStage, StageOutcome, StageSource};
use crate::image::ImageGenerator;
use crate::provisioning::PaymentProvisioner;
use crate::repository::blueprint::BlueprintStore;

use super::fanout::{SideEffectFailure, fan_out};

/// Default pause between sequential stage calls.
pub const DEFAULT_STAGE_PAUSE: Duration = Duration::from_millis(250);

/// Which path one stage took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: AgentStage,
    pub source: StageSource,
}

/// Degradation summary for one run. Never part of the blueprint itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub stages: Vec<StageReport>,
    pub hero_image_attached: bool,
    pub side_effect_failures: Vec<SideEffectFailure>,
}

impl PipelineReport {
    /// Number of stages that used their template deliverable.
    pub fn fallback_count(&self) -> usize {
        self.stages
            .iter()
            .filter(|s| s.source == StageSource::Fallback)
            .count()
    }

    pub fn source_of(&self, stage: AgentStage) -> Option<StageSource> {
        self.stages.iter().find(|s| s.stage == stage).map(|s| s.source)
    }
}

/// Output of [`ForgePipeline::run`].
#[derive(Debug, Clone)]
pub struct ForgeRun {
    pub response: ForgeResponse,
    pub report: PipelineReport,
}

/// The forge pipeline with its outbound collaborators.
///
/// Every collaborator is optional. A missing chat provider means every stage
/// uses its fallback; a missing image generator, store, or provisioner skips
/// that step. Collaborators are shared read-only across concurrent runs.
pub struct ForgePipeline<S, P, I> {
    caller: ModelCaller,
    images: Option<Arc<I>>,
    store: Option<Arc<S>>,
    provisioner: Option<Arc<P>>,
    stage_pause: Duration,
}

impl<S, P, I> ForgePipeline<S, P, I>
where
    S: BlueprintStore + 'static,
    P: PaymentProvisioner + 'static,
    I: ImageGenerator,
{
    pub fn new(caller: ModelCaller) -> Self {
        Self {
            caller,
            images: None,
            store: None,
            provisioner: None,
            stage_pause: DEFAULT_STAGE_PAUSE,
        }
    }

    pub fn with_images(mut self, images: Option<Arc<I>>) -> Self {
        self.images = images;
        self
    }

    pub fn with_store(mut self, store: Option<Arc<S>>) -> Self {
        self.store = store;
        self
    }

    pub fn with_provisioner(mut self, provisioner: Option<Arc<P>>) -> Self {
        self.provisioner = provisioner;
        self
    }

    pub fn with_stage_pause(mut self, pause: Duration) -> Self {
        self.stage_pause = pause;
        self
    }

    /// The blueprint store, for read paths that bypass the pipeline.
    pub fn store(&self) -> Option<&Arc<S>> {
        self.store.as_ref()
    }

    /// Run all four stages, assemble the blueprint, and settle side effects.
    ///
    /// Never fails: every stage degrades to its template deliverable and
    /// side-effect failures are only reported.
    #[tracing::instrument(
        name = "forge.pipeline",
        skip(self, request),
        fields(project = %request.project_name, industry = %request.industry)
    )]
    pub async fn run(&self, request: &ForgeRequest) -> ForgeRun {
        let architect = run_architect(&self.caller, request).await;
        self.pause().await;
        let copywriter = run_copywriter(&self.caller, request, architect.value()).await;
        self.pause().await;
        let visual = run_visual(&self.caller, request, self.images.as_deref()).await;
        self.pause().await;
        let integration = run_integration(&self.caller, request, architect.value()).await;

        let stages = vec![
            report(AgentStage::Architect, &architect),
            report(AgentStage::Copywriter, &copywriter),
            report(AgentStage::Visual, &visual),
            report(AgentStage::Integration, &integration),
        ];

        let generated_at = Utc::now();
        let response = ForgeResponse {
            project_slug: project_slug(&request.project_name, generated_at),
            architect: architect.into_inner(),
            copywriter: copywriter.into_inner(),
            visual: visual.into_inner(),
            integration: integration.into_inner(),
            generated_at,
        };

        let side_effect_failures =
            fan_out(self.store.clone(), self.provisioner.clone(), &response).await;

        let report = PipelineReport {
            stages,
            hero_image_attached: response.visual.hero_image_url.is_some(),
            side_effect_failures,
        };

        info!(
            slug = %response.project_slug,
            fallbacks = report.fallback_count(),
            side_effect_failures = report.side_effect_failures.len(),
            "forge pipeline complete"
        );

        ForgeRun { response, report }
    }

    async fn pause(&self) {
        if !self.stage_pause.is_zero() {
            debug!(pause_ms = self.stage_pause.as_millis() as u64, "pausing between stages");
            tokio::time::sleep(self.stage_pause).await;
        }
    }
}

/// Run the pipeline and return only the blueprint.
pub async fn run_forge_pipeline<S, P, I>(
    pipeline: &ForgePipeline<S, P, I>,
    request: &ForgeRequest,
) -> ForgeResponse
where
    S: BlueprintStore + 'static,
    P: PaymentProvisioner + 'static,
    I: ImageGenerator,
{
    pipeline.run(request).await.response
}

fn report<T>(stage: AgentStage, outcome: &StageOutcome<T>) -> StageReport {
    StageReport {
        stage,
        source: outcome.source(),
    }
}
