// Document source trait - where the two analytical JSON documents come from
use crate::domain::load_state::LoadError;
use crate::infrastructure::document_parser;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw body of a named resource. Single attempt, no retry.
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError>;
}

/// Fetch a resource and run it through the parse-and-validate step.
pub async fn load<D: DeserializeOwned>(
    source: &dyn DocumentSource,
    resource: &str,
) -> Result<D, LoadError> {
    let body = source.fetch(resource).await?;
    document_parser::parse(resource, &body)
}
