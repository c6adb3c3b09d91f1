//! OpenAI image generation for hero visuals.
//!
//! Sends a single `POST {base}/images/generations` request per prompt and
//! returns the URL of the first image. The API key is held as a
//! [`SecretString`] and only exposed when building the auth header.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use nexaforge_core::image::{GeneratedImage, ImageGenerator};
use nexaforge_types::error::ImageError;

/// Wide landscape size used for hero banners.
pub const HERO_IMAGE_SIZE: &str = "1792x1024";

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// OpenAI `images/generations` client.
pub struct OpenAiImageGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiImageGenerator {
    pub fn new(api_key: SecretString, base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }
}

impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        let body = ImageRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: HERO_IMAGE_SIZE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ImageError::Provider(format!("HTTP {status}: {text}")));
        }

        let parsed: ImageResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Deserialization(e.to_string()))?;

        first_url(parsed)
            .map(|url| GeneratedImage { url })
            .ok_or(ImageError::Empty)
    }
}

fn first_url(response: ImageResponse) -> Option<String> {
    response
        .data
        .into_iter()
        .find_map(|d| d.url)
        .filter(|url| !url.is_empty())
}
