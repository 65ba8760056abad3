// Document load lifecycle: Pending -> Loaded | Failed
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Why a document could not be loaded. Every variant names the resource it
/// came from so the log line and the status endpoint are self-describing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The request could not complete, or the origin answered with a non-2xx status.
    #[error("failed to fetch {resource}: {message}")]
    Network { resource: String, message: String },

    /// The body is not valid JSON.
    #[error("failed to parse {resource}: {message}")]
    Parse { resource: String, message: String },

    /// The body is valid JSON but is missing fields or has wrongly typed ones.
    #[error("unexpected shape in {resource}: {message}")]
    Shape { resource: String, message: String },
}

impl LoadError {
    pub fn network(resource: &str, message: impl Into<String>) -> Self {
        Self::Network {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network { .. } => "network",
            LoadError::Parse { .. } => "parse",
            LoadError::Shape { .. } => "shape",
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Pending,
    Loaded(Arc<T>),
    Failed(LoadError),
}

impl<T> LoadState<T> {
    pub fn document(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(doc) => Some(doc),
            _ => None,
        }
    }

    /// Loaded and Failed are terminal; no transition leaves them.
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Pending => LoadStatus::Pending,
            LoadState::Loaded(_) => LoadStatus::Loaded,
            LoadState::Failed(err) => LoadStatus::Failed {
                kind: err.kind(),
                cause: err.to_string(),
            },
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl<T> From<Result<T, LoadError>> for LoadState<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(doc) => LoadState::Loaded(Arc::new(doc)),
            Err(err) => LoadState::Failed(err),
        }
    }
}

/// Serializable summary of a [`LoadState`], without the document body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed { kind: &'static str, cause: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_states() {
        assert!(!LoadState::<u8>::Pending.is_settled());
        assert!(LoadState::from(Ok::<u8, LoadError>(1)).is_settled());
        assert!(LoadState::<u8>::from(Err(LoadError::network("a.json", "boom"))).is_settled());
    }

    #[test]
    fn test_failed_status_carries_cause() {
        let state: LoadState<u8> = LoadState::Failed(LoadError::network("a.json", "HTTP 500"));
        assert_eq!(
            state.status(),
            LoadStatus::Failed {
                kind: "network",
                cause: "failed to fetch a.json: HTTP 500".to_string(),
            }
        );
        assert!(state.document().is_none());
    }

    #[test]
    fn test_status_serializes_tagged() {
        let json = serde_json::to_value(LoadStatus::Pending).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "pending" }));
    }
}
