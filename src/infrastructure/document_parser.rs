// Parse-and-validate step for fetched documents
use crate::domain::load_state::LoadError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// Decode a document body. Malformed JSON is a `Parse` error; well-formed JSON
/// that lacks required fields (or has wrongly typed ones) is a `Shape` error.
pub fn parse<D: DeserializeOwned>(resource: &str, body: &[u8]) -> Result<D, LoadError> {
    serde_json::from_slice(body).map_err(|e| {
        let message = e.to_string();
        match e.classify() {
            Category::Data => LoadError::Shape {
                resource: resource.to_string(),
                message,
            },
            Category::Syntax | Category::Eof | Category::Io => LoadError::Parse {
                resource: resource.to_string(),
                message,
            },
        }
    })
}
