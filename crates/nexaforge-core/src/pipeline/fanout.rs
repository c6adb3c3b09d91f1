//! Best-effort side effects fired after a blueprint is assembled.
//!
//! Persistence and payment provisioning run as two concurrent tasks. Both
//! are awaited until they settle; failures are logged and reported, never
//! propagated to the caller.

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, warn};

use nexaforge_types::forge::{ForgeResponse, IntegrationPlan};

use crate::provisioning::PaymentProvisioner;
use crate::repository::blueprint::BlueprintStore;

/// Which side effect a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    Persistence,
    Provisioning,
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideEffect::Persistence => write!(f, "persistence"),
            SideEffect::Provisioning => write!(f, "provisioning"),
        }
    }
}

/// One failed side effect, already logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideEffectFailure {
    pub component: SideEffect,
    pub error: String,
}

impl SideEffectFailure {
    fn new(component: SideEffect, error: impl fmt::Display) -> Self {
        let failure = Self {
            component,
            error: error.to_string(),
        };
        warn!(component = %failure.component, error = %failure.error, "side effect failed");
        failure
    }
}

/// Persist the blueprint and provision its Stripe products concurrently.
///
/// A missing collaborator skips that side effect. Returns every failure
/// observed across both tasks; an empty vector means everything that ran
/// succeeded.
pub async fn fan_out<S, P>(
    store: Option<Arc<S>>,
    provisioner: Option<Arc<P>>,
    response: &ForgeResponse,
) -> Vec<SideEffectFailure>
where
    S: BlueprintStore + 'static,
    P: PaymentProvisioner + 'static,
{
    let persist_task = store.map(|store| {
        let response = response.clone();
        tokio::spawn(persist(store, response).instrument(info_span!("forge.persist")))
    });
    if persist_task.is_none() {
        debug!("no blueprint store configured, skipping persistence");
    }

    let provision_task = provisioner.map(|provisioner| {
        let plan = response.integration.clone();
        tokio::spawn(provision(provisioner, plan).instrument(info_span!("forge.provision")))
    });
    if provision_task.is_none() {
        debug!("no payment provisioner configured, skipping provisioning");
    }

    let mut failures = Vec::new();

    if let Some(handle) = persist_task {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(failure)) => failures.push(failure),
            Err(join_err) => failures.push(SideEffectFailure::new(SideEffect::Persistence, join_err)),
        }
    }

    if let Some(handle) = provision_task {
        match handle.await {
            Ok(mut task_failures) => failures.append(&mut task_failures),
            Err(join_err) => failures.push(SideEffectFailure::new(SideEffect::Provisioning, join_err)),
        }
    }

    failures
}

async fn persist<S: BlueprintStore>(
    store: Arc<S>,
    response: ForgeResponse,
) -> Result<(), SideEffectFailure> {
    store
        .upsert(&response)
        .await
        .map_err(|e| SideEffectFailure::new(SideEffect::Persistence, e))?;
    info!(slug = %response.project_slug, "blueprint persisted");
    Ok(())
}

/// Create every product concurrently; one rejection does not stop the rest.
async fn provision<P: PaymentProvisioner>(
    provisioner: Arc<P>,
    plan: IntegrationPlan,
) -> Vec<SideEffectFailure> {
    let results = join_all(
        plan.stripe_products
            .iter()
            .map(|product| provisioner.create_product(product)),
    )
    .await;

    let mut failures = Vec::new();
    for (product, result) in plan.stripe_products.iter().zip(results) {
        match result {
            Ok(created) => info!(
                product = %product.name,
                product_id = %created.product_id,
                "stripe product provisioned"
            ),
            Err(e) => failures.push(SideEffectFailure::new(SideEffect::Provisioning, e)),
        }
    }
    failures
}
