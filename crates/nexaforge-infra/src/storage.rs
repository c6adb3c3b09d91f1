//! Blueprint store selection.
//!
//! `forge.toml` picks the backend; this enum lets the rest of the app hold a
//! single concrete store type whichever backend is active.

use std::path::Path;

use nexaforge_core::repository::blueprint::BlueprintStore;
use nexaforge_types::config::{ForgeConfig, StorageBackend};
use nexaforge_types::error::RepositoryError;
use nexaforge_types::forge::ForgeResponse;

use crate::config::database_url;
use crate::secret::ForgeSecrets;
use crate::sqlite::blueprint::SqliteBlueprintStore;
use crate::sqlite::pool::DatabasePool;
use crate::supabase::SupabaseBlueprintStore;

/// The configured blueprint store.
pub enum BlueprintStoreBackend {
    Sqlite(SqliteBlueprintStore),
    Supabase(SupabaseBlueprintStore),
}

impl BlueprintStoreBackend {
    /// Open the store named by `config.storage`.
    ///
    /// SQLite lives at `{data_dir}/nexaforge.db` and is always available.
    /// Supabase needs `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY`; without
    /// them persistence is disabled and `Ok(None)` is returned.
    pub async fn open(
        config: &ForgeConfig,
        secrets: &ForgeSecrets,
        data_dir: &Path,
    ) -> Result<Option<Self>, sqlx::Error> {
        match config.storage {
            StorageBackend::Sqlite => {
                let pool = DatabasePool::new(&database_url(data_dir)).await?;
                Ok(Some(Self::Sqlite(SqliteBlueprintStore::new(pool))))
            }
            StorageBackend::Supabase => match &secrets.supabase {
                Some(credentials) => Ok(Some(Self::Supabase(SupabaseBlueprintStore::new(
                    credentials.clone(),
                    &config.projects_table,
                )))),
                None => {
                    tracing::debug!("Supabase credentials not set, persistence disabled");
                    Ok(None)
                }
            },
        }
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            Self::Sqlite(_) => StorageBackend::Sqlite,
            Self::Supabase(_) => StorageBackend::Supabase,
        }
    }
}

impl BlueprintStore for BlueprintStoreBackend {
    async fn upsert(&self, response: &ForgeResponse) -> Result<(), RepositoryError> {
        match self {
            Self::Sqlite(store) => store.upsert(response).await,
            Self::Supabase(store) => store.upsert(response).await,
        }
    }

    async fn get(&self, slug: &str) -> Result<Option<ForgeResponse>, RepositoryError> {
        match self {
            Self::Sqlite(store) => store.get(slug).await,
            Self::Supabase(store) => store.get(slug).await,
        }
    }
}
