// Metric cards: throughput, latency, signal strength and network quality
use super::to_fixed;
use crate::application::dashboard_state::DashboardSnapshot;
use crate::domain::dashboard::{MetricCard, MetricsSummary, Panel};
use crate::domain::telemetry::TelemetryStats;

/// Renders only once both documents are loaded (joint-readiness gate).
pub fn project(snapshot: &DashboardSnapshot) -> Panel<MetricsSummary> {
    match (snapshot.telemetry.document(), snapshot.speedtest.document()) {
        (Some(telemetry), Some(_)) => Panel::Ready(build(&telemetry.stats)),
        _ => Panel::Loading,
    }
}

pub fn build(stats: &TelemetryStats) -> MetricsSummary {
    let cards = vec![
        MetricCard {
            id: "throughput",
            title: "Avg Throughput",
            value: format!("{} Mbps", to_fixed(stats.avg_throughput_mbps, 1)),
            color: "#00b4d8",
        },
        MetricCard {
            id: "latency",
            title: "Avg Latency",
            value: format!("{} ms", to_fixed(stats.avg_latency_ms, 1)),
            color: "#f72585",
        },
        MetricCard {
            id: "rsrp",
            title: "Avg RSRP",
            value: format!("{} dBm", to_fixed(stats.avg_rsrp_dbm, 1)),
            color: "#4cc9f0",
        },
        MetricCard {
            id: "quality",
            title: "Network Quality",
            value: format!("{}%", to_fixed(stats.quality_pct(), 1)),
            color: "#7209b7",
        },
    ];

    MetricsSummary { cards }
}
