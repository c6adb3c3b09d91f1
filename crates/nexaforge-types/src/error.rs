use thiserror::Error;

/// A forge request that fails the input constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("industry '{0}' is not in the catalog")]
    UnknownIndustry(String),

    #[error("theme '{0}' is not in the catalog")]
    UnknownTheme(String),

    #[error("at most {max} features may be requested, got {actual}")]
    TooManyFeatures { max: usize, actual: usize },
}

/// Errors from blueprint storage backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("remote store error: {0}")]
    Remote(String),
}

/// Errors from payment product provisioning.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    #[error("payment provider rejected '{product}': {message}")]
    Rejected { product: String, message: String },

    #[error("payment provider request failed: {0}")]
    Transport(String),

    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors from hero image generation.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image provider error: {0}")]
    Provider(String),

    #[error("image provider returned no image")]
    Empty,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
