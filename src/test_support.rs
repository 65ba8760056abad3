// Shared fixtures for unit tests
use crate::application::dashboard_state::DashboardSnapshot;
use crate::application::document_source::DocumentSource;
use crate::domain::dashboard::{DualAxisChart, LineSeries, Panel};
use crate::domain::display_mode::DisplayMode;
use crate::domain::load_state::{LoadError, LoadState};
use crate::domain::speedtest::{CitySummary, SpeedtestDocument, SpeedtestStats};
use crate::domain::telemetry::{HourlyBucket, TelemetryDocument, TelemetrySample, TelemetryStats};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

pub const TELEMETRY_JSON: &str = r#"{
  "stats": {
    "total_samples": 50000,
    "avg_throughput_mbps": 412.75,
    "avg_latency_ms": 14.25,
    "avg_rsrp_dbm": -92.5,
    "anomaly_rate": 3.125
  },
  "timeseries": [
    {"timestamp": "2024-01-01 00:00:00", "throughput_mbps": 10.0, "latency_ms": 20.0, "rsrp_dbm": -90.5, "scenario": "urban"},
    {"timestamp": "2024-01-01 00:08:20", "throughput_mbps": 20.0, "latency_ms": 15.0},
    {"timestamp": "2024-01-01 00:16:40", "throughput_mbps": 15.0, "latency_ms": 25.0}
  ],
  "scenarios": {"urban": 30000, "highway": 20000},
  "hourly": [
    {"hour": 0, "throughput_mbps_mean": 100.5},
    {"hour": 1, "throughput_mbps_mean": 101.5},
    {"hour": 2, "throughput_mbps_mean": 102.5},
    {"hour": 3, "throughput_mbps_mean": 103.5},
    {"hour": 4, "throughput_mbps_mean": 104.5},
    {"hour": 5, "throughput_mbps_mean": 105.5},
    {"hour": 6, "throughput_mbps_mean": 106.5},
    {"hour": 7, "throughput_mbps_mean": 107.5},
    {"hour": 8, "throughput_mbps_mean": 108.5},
    {"hour": 9, "throughput_mbps_mean": 109.5},
    {"hour": 10, "throughput_mbps_mean": 110.5},
    {"hour": 11, "throughput_mbps_mean": 111.5},
    {"hour": 12, "throughput_mbps_mean": 112.5},
    {"hour": 13, "throughput_mbps_mean": 113.5},
    {"hour": 14, "throughput_mbps_mean": 114.5},
    {"hour": 15, "throughput_mbps_mean": 115.5},
    {"hour": 16, "throughput_mbps_mean": 116.5},
    {"hour": 17, "throughput_mbps_mean": 117.5},
    {"hour": 18, "throughput_mbps_mean": 118.5},
    {"hour": 19, "throughput_mbps_mean": 119.5},
    {"hour": 20, "throughput_mbps_mean": 120.5},
    {"hour": 21, "throughput_mbps_mean": 121.5},
    {"hour": 22, "throughput_mbps_mean": 122.5},
    {"hour": 23, "throughput_mbps_mean": 123.5}
  ]
}"#;

pub const SPEEDTEST_JSON: &str = r#"{
  "summary": [
    {"city": "Seattle", "avg_d_kbps": 120460.0, "avg_u_kbps": 15020.0, "avg_lat_ms": 28.6},
    {"city": "Austin", "avg_d_kbps": 85200.0, "avg_u_kbps": 12100.0, "avg_lat_ms": 31.2}
  ],
  "stats": {"total_tests": 3040, "avg_download_mbps": 102.8, "avg_upload_mbps": 13.6, "avg_latency_ms": 29.9}
}"#;

impl TelemetrySample {
    pub fn new(timestamp: impl Into<String>, throughput_mbps: f64, latency_ms: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            throughput_mbps,
            latency_ms,
            rsrp_dbm: None,
            rsrq_db: None,
            sinr_db: None,
            cqi: None,
            packet_loss_pct: None,
            scenario: None,
        }
    }
}

impl HourlyBucket {
    pub fn new(hour: i64, throughput_mbps_mean: f64) -> Self {
        Self {
            hour,
            throughput_mbps_mean,
            throughput_mbps_std: None,
            latency_ms_mean: None,
            latency_ms_std: None,
            packet_loss_pct_mean: None,
        }
    }
}

impl CitySummary {
    pub fn new(city: impl Into<String>, avg_d_kbps: f64, avg_u_kbps: f64, avg_lat_ms: f64) -> Self {
        Self {
            city: city.into(),
            avg_d_kbps,
            avg_u_kbps,
            avg_lat_ms,
            tests: None,
            lat: None,
            lon: None,
            quality: None,
        }
    }
}

impl<T> Panel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }
}

impl DualAxisChart {
    pub fn series(&self, id: &str) -> Option<&LineSeries> {
        self.series.iter().find(|series| series.id == id)
    }
}

pub fn sample_telemetry() -> TelemetryDocument {
    let mut first = TelemetrySample::new("2024-01-01 00:00:00", 10.0, 20.0);
    first.rsrp_dbm = Some(-90.5);
    first.scenario = Some("urban".to_string());

    TelemetryDocument {
        stats: TelemetryStats {
            avg_throughput_mbps: 412.75,
            avg_latency_ms: 14.25,
            avg_rsrp_dbm: -92.5,
            anomaly_rate: 3.125,
            total_samples: Some(50_000),
        },
        timeseries: vec![
            first,
            TelemetrySample::new("2024-01-01 00:08:20", 20.0, 15.0),
            TelemetrySample::new("2024-01-01 00:16:40", 15.0, 25.0),
        ],
        scenarios: BTreeMap::from([("highway".to_string(), 20_000), ("urban".to_string(), 30_000)]),
        hourly: (0..24).map(|h| HourlyBucket::new(h, 100.5 + h as f64)).collect(),
    }
}

pub fn sample_speedtest() -> SpeedtestDocument {
    SpeedtestDocument {
        summary: vec![
            CitySummary::new("Seattle", 120_460.0, 15_020.0, 28.6),
            CitySummary::new("Austin", 85_200.0, 12_100.0, 31.2),
        ],
        tiles: vec![],
        stats: Some(SpeedtestStats {
            total_tests: 3040,
            avg_download_mbps: 102.8,
            avg_upload_mbps: 13.6,
            avg_latency_ms: 29.9,
        }),
    }
}

/// `Err(None)` leaves a slot pending, `Err(Some(e))` fails it.
pub fn snapshot_with(
    telemetry: Result<TelemetryDocument, Option<LoadError>>,
    speedtest: Result<SpeedtestDocument, Option<LoadError>>,
) -> DashboardSnapshot {
    DashboardSnapshot {
        telemetry: slot(telemetry),
        speedtest: slot(speedtest),
        mode: DisplayMode::Dark,
    }
}

fn slot<T>(outcome: Result<T, Option<LoadError>>) -> LoadState<T> {
    match outcome {
        Ok(doc) => LoadState::from(Ok(doc)),
        Err(Some(err)) => LoadState::Failed(err),
        Err(None) => LoadState::Pending,
    }
}

/// In-memory document source. Unknown resources fail like a 404.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, Result<Bytes, LoadError>>,
    delay: Option<Duration>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, resource: &str, body: &str) -> Self {
        self.responses
            .insert(resource.to_string(), Ok(Bytes::copy_from_slice(body.as_bytes())));
        self
    }

    pub fn with_error(mut self, resource: &str, err: LoadError) -> Self {
        self.responses.insert(resource.to_string(), Err(err));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn fetch(&self, resource: &str) -> Result<Bytes, LoadError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .get(resource)
            .cloned()
            .unwrap_or_else(|| Err(LoadError::network(resource, "request failed with status 404 Not Found")))
    }
}
