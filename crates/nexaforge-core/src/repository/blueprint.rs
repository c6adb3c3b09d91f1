//! Blueprint repository trait definition.

use nexaforge_types::error::RepositoryError;
use nexaforge_types::forge::ForgeResponse;

/// Persistence for generated blueprints, one record per project slug.
///
/// The full `ForgeResponse` is stored as an opaque payload.
pub trait BlueprintStore: Send + Sync {
    /// Insert or replace the record keyed by `response.project_slug`.
    fn upsert(
        &self,
        response: &ForgeResponse,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Fetch the blueprint stored under `slug`, if any.
    fn get(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<ForgeResponse>, RepositoryError>> + Send;
}
