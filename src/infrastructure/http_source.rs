// HTTP document source - GET {base_url}/{resource}
use crate::application::document_source::DocumentSource;
use crate::domain::load_state::LoadError;
use crate::infrastructure::config::resource_url;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentSource {
    pub fn new(base_url: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError> {
        let url = resource_url(&self.base_url, resource);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::network(resource, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(LoadError::network(
                resource,
                format!("request failed with status {}: {}", status, snippet),
            ));
        }

        response
            .bytes()
            .await
            .map_err(|e| LoadError::network(resource, format!("failed to read body: {}", e)))
    }
}
