// Local directory document source, for `file://` base URLs
use crate::application::document_source::DocumentSource;
use crate::domain::load_state::LoadError;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    root: PathBuf,
}

impl FileDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build from a `file://` URL, or return None for any other scheme
    pub fn from_url(base_url: &str) -> Option<Self> {
        base_url.strip_prefix("file://").map(Self::new)
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError> {
        let path = self.root.join(resource.trim_start_matches('/'));
        tracing::debug!("Reading {}", path.display());

        tokio::fs::read(&path)
            .await
            .map(Bytes::from)
            .map_err(|e| LoadError::network(resource, format!("{}: {}", path.display(), e)))
    }
}
