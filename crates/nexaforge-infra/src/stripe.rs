//! Stripe product provisioning.
//!
//! Each integration-plan product becomes one `POST /v1/products` call with
//! an inline default price. Monthly products get a recurring monthly price;
//! one-time products a plain price.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use nexaforge_core::provisioning::{PaymentProvisioner, ProvisionedProduct};
use nexaforge_types::error::ProvisioningError;
use nexaforge_types::forge::{BillingInterval, StripeProduct};

pub const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

#[derive(Debug, Deserialize)]
struct ProductResponse {
    id: String,
    #[serde(default)]
    default_price: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Stripe REST client for product creation.
pub struct StripeProvisioner {
    client: reqwest::Client,
    secret_key: SecretString,
    api_base: String,
    currency: String,
}

impl StripeProvisioner {
    pub fn new(secret_key: SecretString, currency: &str) -> Self {
        Self::with_api_base(secret_key, currency, STRIPE_API_BASE)
    }

    pub fn with_api_base(secret_key: SecretString, currency: &str, api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            currency: currency.to_lowercase(),
        }
    }
}

impl PaymentProvisioner for StripeProvisioner {
    async fn create_product(
        &self,
        product: &StripeProduct,
    ) -> Result<ProvisionedProduct, ProvisioningError> {
        let form = product_form(product, &self.currency);

        let resp = self
            .client
            .post(format!("{}/products", self.api_base))
            .bearer_auth(self.secret_key.expose_secret())
            .form(&form)
            .send()
            .await
            .map_err(|e| ProvisioningError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProvisioningError::AuthenticationFailed);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ProvisioningError::Rejected {
                product: product.name.clone(),
                message: error_message(&text).unwrap_or_else(|| format!("HTTP {status}")),
            });
        }

        let created: ProductResponse = resp
            .json()
            .await
            .map_err(|e| ProvisioningError::Transport(format!("invalid product response: {e}")))?;

        Ok(ProvisionedProduct {
            product_id: created.id,
            price_id: created.default_price,
        })
    }
}

/// Form-encoded body for `POST /v1/products`.
fn product_form(product: &StripeProduct, currency: &str) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("name", product.name.clone()),
        ("default_price_data[currency]", currency.to_string()),
        ("default_price_data[unit_amount]", product.price.to_string()),
    ];
    if product.interval == BillingInterval::Monthly {
        form.push(("default_price_data[recurring][interval]", "month".to_string()));
    }
    form
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
}
