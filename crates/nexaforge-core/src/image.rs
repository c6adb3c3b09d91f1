//! Hero image generation port.

use nexaforge_types::error::ImageError;

/// A generated image reachable by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
}

/// Trait for text-to-image backends.
///
/// Implementations live in nexaforge-infra. One call is one attempt.
pub trait ImageGenerator: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<GeneratedImage, ImageError>> + Send;
}
