// Hourly throughput bars
use super::finite_or_zero;
use crate::application::dashboard_state::DashboardSnapshot;
use crate::domain::dashboard::{Bar, BarChart, Panel};
use crate::domain::telemetry::HourlyBucket;

pub fn project(snapshot: &DashboardSnapshot) -> Panel<BarChart> {
    match snapshot.telemetry.document() {
        Some(doc) => Panel::Ready(build(&doc.hourly)),
        None => Panel::Loading,
    }
}

/// Buckets are drawn in the order given; count and hour range are not checked.
pub fn build(buckets: &[HourlyBucket]) -> BarChart {
    let bars = buckets
        .iter()
        .map(|b| Bar {
            label: format!("{}:00", b.hour),
            value: finite_or_zero(b.throughput_mbps_mean),
        })
        .collect();

    BarChart {
        title: "Network Performance by Hour of Day",
        dataset_label: "Avg Throughput (Mbps)",
        color: "rgba(0, 180, 216, 0.7)",
        bars,
    }
}
