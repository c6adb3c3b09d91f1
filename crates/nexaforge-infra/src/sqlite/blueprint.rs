//! SQLite blueprint store implementation.
//!
//! Implements `BlueprintStore` from `nexaforge-core`. The whole
//! `ForgeResponse` is stored as JSON text keyed by project slug.

use chrono::Utc;
use sqlx::Row;

use nexaforge_core::repository::blueprint::BlueprintStore;
use nexaforge_types::error::RepositoryError;
use nexaforge_types::forge::ForgeResponse;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `BlueprintStore`.
pub struct SqliteBlueprintStore {
    pool: DatabasePool,
}

impl SqliteBlueprintStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl BlueprintStore for SqliteBlueprintStore {
    async fn upsert(&self, response: &ForgeResponse) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        let payload = serde_json::to_string(response)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize blueprint: {e}")))?;

        sqlx::query(
            r#"INSERT INTO forge_projects (slug, payload, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (slug) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at"#,
        )
        .bind(&response.project_slug)
        .bind(&payload)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<Option<ForgeResponse>, RepositoryError> {
        let row = sqlx::query("SELECT payload FROM forge_projects WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let payload: String = row
                    .try_get("payload")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                let response = serde_json::from_str(&payload)
                    .map_err(|e| RepositoryError::Query(format!("invalid blueprint payload: {e}")))?;
                Ok(Some(response))
            }
            None => Ok(None),
        }
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nexaforge_types::forge::{
        ArchitectBlueprint, BillingInterval, ColorPalette, ContactForm, CopywriterDeliverable,
        IntegrationPlan, StripeProduct, VisualDirective,
    };

    async fn test_store() -> (SqliteBlueprintStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("forge.db").display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (SqliteBlueprintStore::new(pool), dir)
    }

    fn response(slug: &str, positioning: &str) -> ForgeResponse {
        ForgeResponse {
            architect: ArchitectBlueprint {
                industry: "SaaS".to_string(),
                theme: "Minimalist".to_string(),
                positioning: positioning.to_string(),
                sitemap: vec![],
                ux_directives: vec![],
            },
            copywriter: CopywriterDeliverable {
                hero_headline: "Ship faster".to_string(),
                sub_headline: "Now".to_string(),
                body_copy: Default::default(),
                seo_keywords: vec![],
                meta_description: "Meta".to_string(),
                json_ld: Default::default(),
            },
            visual: VisualDirective {
                palette_name: "Nebula Pulse".to_string(),
                color_palette: ColorPalette {
                    accents: vec!["#7C3AED".to_string()],
                    neutrals: vec![],
                },
                hero_image_prompt: "Studio".to_string(),
                hero_image_url: Some("https://img.example/hero.png".to_string()),
                design_effects: vec![],
            },
            integration: IntegrationPlan {
                stripe_products: vec![StripeProduct {
                    name: "Kit".to_string(),
                    price: 9900,
                    interval: BillingInterval::OneTime,
                }],
                booking_configuration: None,
                contact_form: ContactForm {
                    fields: vec![],
                    supabase_table: "forge_contacts".to_string(),
                },
                automation_notes: vec![],
            },
            generated_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            project_slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get_round_trip() {
        let (store, _dir) = test_store().await;
        let saved = response("aurora-1700000000000", "First");

        store.upsert(&saved).await.unwrap();
        let loaded = store.get("aurora-1700000000000").await.unwrap();

        assert_eq!(loaded, Some(saved));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_slug() {
        let (store, _dir) = test_store().await;
        store.upsert(&response("aurora-1", "First")).await.unwrap();
        store.upsert(&response("aurora-1", "Second")).await.unwrap();

        let loaded = store.get("aurora-1").await.unwrap().unwrap();
        assert_eq!(loaded.architect.positioning, "Second");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM forge_projects")
            .fetch_one(&store.pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_get_missing_slug() {
        let (store, _dir) = test_store().await;
        assert_eq!(store.get("nope").await.unwrap(), None);
    }
}
