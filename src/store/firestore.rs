use super::DocumentStore;
use crate::config::FirestoreConfig;
use crate::core::{DocumentId, StoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

/// Firestore REST backend.
///
/// Two endpoints cover everything a purge needs: `documents:runQuery` pages
/// ids in `__name__` order, and `documents:commit` deletes a page in one
/// atomic transaction. Deletes of already-absent documents succeed, matching
/// the [`DocumentStore`] contract.
///
/// The bearer token is taken as-is; acquiring and refreshing credentials is
/// the caller's concern.
pub struct FirestoreStore {
    client: Client,
    /// `projects/{project}/databases/{database}/documents`
    resource_prefix: String,
    /// `{base_url}/v1/{resource_prefix}`
    documents_url: String,
    token: Option<String>,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig, token: Option<String>) -> Self {
        let resource_prefix = format!(
            "projects/{}/databases/{}/documents",
            config.project_id, config.database
        );
        let documents_url = format!(
            "{}/v1/{}",
            config.base_url.trim_end_matches('/'),
            resource_prefix
        );
        Self {
            client: Client::new(),
            resource_prefix,
            documents_url,
            token,
        }
    }

    async fn post(&self, operation: &str, body: Value) -> Result<Value, StoreError> {
        let url = format!("{}:{operation}", self.documents_url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Remote {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Full resource name for one document, as the commit API expects.
    fn document_name(&self, collection: &str, id: &DocumentId) -> String {
        format!("{}/{collection}/{id}", self.resource_prefix)
    }

    fn parse_ids(&self, collection: &str, body: &Value) -> Result<Vec<DocumentId>, StoreError> {
        let rows = body
            .as_array()
            .ok_or_else(|| StoreError::Malformed("expected a response array".to_string()))?;

        let prefix = format!("{}/{collection}/", self.resource_prefix);
        let mut ids = Vec::new();
        for row in rows {
            // An empty result set comes back as a single read-time entry
            // with no document.
            let Some(name) = row.pointer("/document/name").and_then(Value::as_str) else {
                continue;
            };
            let id = name.strip_prefix(&prefix).ok_or_else(|| {
                StoreError::Malformed(format!("unexpected document name '{name}'"))
            })?;
            ids.push(DocumentId::new(id));
        }
        Ok(ids)
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn list_ids(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<DocumentId>, StoreError> {
        let query = json!({
            "structuredQuery": {
                "select": { "fields": [{ "fieldPath": "__name__" }] },
                "from": [{ "collectionId": collection }],
                "orderBy": [{
                    "field": { "fieldPath": "__name__" },
                    "direction": "ASCENDING",
                }],
                "limit": limit,
            }
        });

        let body = self.post("runQuery", query).await?;
        self.parse_ids(collection, &body)
    }

    async fn delete_batch(
        &self,
        collection: &str,
        ids: &[DocumentId],
    ) -> Result<(), StoreError> {
        if ids.is_empty() {
            return Ok(());
        }

        let writes: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "delete": self.document_name(collection, id) }))
            .collect();

        self.post("commit", json!({ "writes": writes })).await?;
        Ok(())
    }
}
