// Broadband speed-test document (per-city Ookla aggregates)
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedtestDocument {
    pub summary: Vec<CitySummary>,
    /// Sampled individual tiles. Malformed entries are dropped rather than
    /// failing the document, since no per-city figure depends on them.
    #[serde(default, deserialize_with = "lenient_tiles")]
    pub tiles: Vec<CitySummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SpeedtestStats>,
}

/// Mean download/upload/latency for one city (or one tile of a city).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    pub city: String,
    pub avg_d_kbps: f64,
    pub avg_u_kbps: f64,
    pub avg_lat_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedtestStats {
    pub total_tests: u64,
    pub avg_download_mbps: f64,
    pub avg_upload_mbps: f64,
    pub avg_latency_ms: f64,
}

fn lenient_tiles<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CitySummary>, D::Error> {
    let raw = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!("Ignoring speed-test tiles: expected a list, got {}", other);
            return Ok(Vec::new());
        }
    };

    let total = raw.len();
    let tiles: Vec<CitySummary> = raw
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if tiles.len() < total {
        tracing::warn!("Skipped {} malformed speed-test tile(s)", total - tiles.len());
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_tile_does_not_fail_document() {
        let json = r#"{
            "summary": [{"city": "Austin", "avg_d_kbps": 85200, "avg_u_kbps": 12100, "avg_lat_ms": 31}],
            "tiles": [
                {"city": "Austin", "avg_d_kbps": 90000, "avg_u_kbps": 11000, "avg_lat_ms": 30, "lat": 30.3, "lon": -97.7},
                {"city": "Austin", "avg_d_kbps": null, "quadkey": "0231"}
            ]
        }"#;

        let doc: SpeedtestDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary.len(), 1);
        assert_eq!(doc.tiles.len(), 1);
        assert_eq!(doc.tiles[0].lat, Some(30.3));
    }

    #[test]
    fn test_non_list_tiles_are_ignored() {
        let json = r#"{"summary": [], "tiles": "see tiles.csv"}"#;
        let doc: SpeedtestDocument = serde_json::from_str(json).unwrap();
        assert!(doc.tiles.is_empty());
    }

    #[test]
    fn test_missing_tiles_default_to_empty() {
        let doc: SpeedtestDocument = serde_json::from_str(r#"{"summary": []}"#).unwrap();
        assert!(doc.tiles.is_empty());
    }
}
