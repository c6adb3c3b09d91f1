//! Supabase blueprint store over the PostgREST API.
//!
//! Rows have the shape `{slug, payload}` where `payload` is the full
//! `ForgeResponse` as JSON. Upserts merge on the `slug` primary key.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use nexaforge_core::repository::blueprint::BlueprintStore;
use nexaforge_types::error::RepositoryError;
use nexaforge_types::forge::ForgeResponse;

use crate::secret::SupabaseCredentials;

#[derive(Debug, Serialize)]
struct ProjectRowRef<'a> {
    slug: &'a str,
    payload: &'a ForgeResponse,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    payload: ForgeResponse,
}

/// PostgREST-backed implementation of `BlueprintStore`.
pub struct SupabaseBlueprintStore {
    client: reqwest::Client,
    base_url: String,
    service_role_key: SecretString,
    table: String,
}

impl SupabaseBlueprintStore {
    pub fn new(credentials: SupabaseCredentials, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: credentials.url.trim_end_matches('/').to_string(),
            service_role_key: credentials.service_role_key,
            table: table.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.service_role_key.expose_secret();
        builder.header("apikey", key).bearer_auth(key)
    }
}

impl BlueprintStore for SupabaseBlueprintStore {
    async fn upsert(&self, response: &ForgeResponse) -> Result<(), RepositoryError> {
        let row = ProjectRowRef {
            slug: &response.project_slug,
            payload: response,
        };

        let resp = self
            .authorized(self.client.post(self.table_url()))
            .query(&[("on_conflict", "slug")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .send()
            .await
            .map_err(|e| RepositoryError::Remote(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RepositoryError::Remote(format!("HTTP {status}: {text}")));
        }
        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<Option<ForgeResponse>, RepositoryError> {
        let slug_filter = format!("eq.{slug}");
        let resp = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "payload"), ("slug", slug_filter.as_str()), ("limit", "1")])
            .send()
            .await
            .map_err(|e| RepositoryError::Remote(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RepositoryError::Remote(format!("HTTP {status}: {text}")));
        }

        let rows: Vec<ProjectRow> = resp
            .json()
            .await
            .map_err(|e| RepositoryError::Query(format!("invalid blueprint payload: {e}")))?;
        Ok(rows.into_iter().next().map(|row| row.payload))
    }
}
