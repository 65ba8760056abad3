// 5G telemetry document, as produced by the upstream analytics pipeline
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryDocument {
    pub stats: TelemetryStats,
    pub timeseries: Vec<TelemetrySample>,
    /// Scenario label -> number of samples. Keyed in sorted order so segment
    /// order and coloring do not depend on the producer's key order.
    pub scenarios: BTreeMap<String, u64>,
    pub hourly: Vec<HourlyBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryStats {
    pub avg_throughput_mbps: f64,
    pub avg_latency_ms: f64,
    pub avg_rsrp_dbm: f64,
    /// Percentage of anomalous samples, 0..=100
    pub anomaly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_samples: Option<u64>,
}

impl TelemetryStats {
    /// Share of samples that were not flagged as anomalous, in percent.
    pub fn quality_pct(&self) -> f64 {
        100.0 - self.anomaly_rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub timestamp: String,
    pub throughput_mbps: f64,
    pub latency_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsrp_dbm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsrq_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sinr_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cqi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_loss_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub hour: i64,
    pub throughput_mbps_mean: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_mbps_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_loss_pct_mean: Option<f64>,
}
