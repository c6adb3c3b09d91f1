//! Payment product provisioning port.

use nexaforge_types::error::ProvisioningError;
use nexaforge_types::forge::StripeProduct;

/// Identifiers of a product created at the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedProduct {
    pub product_id: String,
    pub price_id: Option<String>,
}

/// Creates remote product + price records for integration plans.
///
/// Monthly products must be created with a recurring monthly price;
/// one-time products with a non-recurring price.
pub trait PaymentProvisioner: Send + Sync {
    fn create_product(
        &self,
        product: &StripeProduct,
    ) -> impl std::future::Future<Output = Result<ProvisionedProduct, ProvisioningError>> + Send;
}
