//! Application state wiring the forge pipeline together.
//!
//! AppState holds the concrete pipeline used by both CLI and REST API.
//! `ForgePipeline` is generic over its store, provisioner, and image
//! generator; AppState pins it to the infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use nexaforge_core::agent::caller::ModelCaller;
use nexaforge_core::pipeline::orchestrator::ForgePipeline;
use nexaforge_infra::config::{load_forge_config, resolve_data_dir};
use nexaforge_infra::image::OpenAiImageGenerator;
use nexaforge_infra::llm::create_chat_provider;
use nexaforge_infra::secret::ForgeSecrets;
use nexaforge_infra::storage::BlueprintStoreBackend;
use nexaforge_infra::stripe::StripeProvisioner;
use nexaforge_types::config::StorageBackend;

/// The pipeline generics pinned to infra implementations.
pub type ConcreteForgePipeline =
    ForgePipeline<BlueprintStoreBackend, StripeProvisioner, OpenAiImageGenerator>;

/// Which optional collaborators ended up configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collaborators {
    pub chat_model: bool,
    pub images: bool,
    pub storage: Option<StorageBackend>,
    pub provisioning: bool,
}

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers. Everything inside is
/// read-only after `init`.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ConcreteForgePipeline>,
    pub collaborators: Collaborators,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config and keys, open the
    /// blueprint store, wire the pipeline.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_forge_config(&data_dir).await;
        let secrets = ForgeSecrets::from_env();

        let provider = create_chat_provider(&config, secrets.openai_api_key.as_ref());
        let caller = ModelCaller::new(provider, config.model.clone(), config.max_tokens);

        let images = secrets.openai_api_key.clone().map(|key| {
            Arc::new(OpenAiImageGenerator::new(
                key,
                &config.llm_base_url,
                &config.image_model,
            ))
        });
        if images.is_none() {
            tracing::debug!("OPENAI_API_KEY not set, hero images disabled");
        }

        let provisioner = secrets
            .stripe_secret_key
            .clone()
            .map(|key| Arc::new(StripeProvisioner::new(key, &config.currency)));
        if provisioner.is_none() {
            tracing::debug!("STRIPE_SECRET_KEY not set, product provisioning disabled");
        }

        let store = BlueprintStoreBackend::open(&config, &secrets, &data_dir)
            .await?
            .map(Arc::new);

        let collaborators = Collaborators {
            chat_model: caller.is_enabled(),
            images: images.is_some(),
            storage: store.as_ref().map(|s| s.backend()),
            provisioning: provisioner.is_some(),
        };

        let pipeline = ForgePipeline::new(caller)
            .with_images(images)
            .with_store(store)
            .with_provisioner(provisioner)
            .with_stage_pause(Duration::from_millis(config.stage_pause_ms));

        tracing::info!(
            model = %config.model,
            chat_model = collaborators.chat_model,
            images = collaborators.images,
            provisioning = collaborators.provisioning,
            data_dir = %data_dir.display(),
            "forge pipeline initialized"
        );

        Ok(Self {
            pipeline: Arc::new(pipeline),
            collaborators,
            data_dir,
        })
    }

    /// Wrap an already-built pipeline. Used by router tests.
    #[cfg(test)]
    pub fn from_pipeline(pipeline: ConcreteForgePipeline, data_dir: PathBuf) -> Self {
        let collaborators = Collaborators {
            chat_model: false,
            images: false,
            storage: pipeline.store().map(|s| s.backend()),
            provisioning: false,
        };
        Self {
            pipeline: Arc::new(pipeline),
            collaborators,
            data_dir,
        }
    }
}
