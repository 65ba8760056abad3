// Throughput vs latency over time, on two independently scaled axes
use super::finite_or_zero;
use crate::application::dashboard_state::DashboardSnapshot;
use crate::domain::dashboard::{Axis, AxisPosition, DualAxisChart, Interaction, LineSeries, Panel};
use crate::domain::telemetry::TelemetrySample;
use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

pub fn project(snapshot: &DashboardSnapshot) -> Panel<DualAxisChart> {
    match snapshot.telemetry.document() {
        Some(doc) => Panel::Ready(build(&doc.timeseries)),
        None => Panel::Loading,
    }
}

/// Every sample becomes one x position; nothing is resampled.
pub fn build(samples: &[TelemetrySample]) -> DualAxisChart {
    let labels = samples.iter().map(|s| time_of_day_label(&s.timestamp)).collect();
    let throughput = samples.iter().map(|s| finite_or_zero(s.throughput_mbps)).collect();
    let latency = samples.iter().map(|s| finite_or_zero(s.latency_ms)).collect();

    DualAxisChart {
        labels,
        axes: vec![
            Axis {
                id: "y",
                position: AxisPosition::Left,
                title: "Throughput (Mbps)",
                draw_grid: true,
            },
            Axis {
                id: "y1",
                position: AxisPosition::Right,
                title: "Latency (ms)",
                draw_grid: false,
            },
        ],
        series: vec![
            LineSeries {
                id: "throughput",
                label: "Throughput (Mbps)",
                color: "rgb(0, 180, 216)",
                fill: "rgba(0, 180, 216, 0.1)",
                axis_id: "y",
                values: throughput,
            },
            LineSeries {
                id: "latency",
                label: "Latency (ms)",
                color: "rgb(247, 37, 133)",
                fill: "rgba(247, 37, 133, 0.1)",
                axis_id: "y1",
                values: latency,
            },
        ],
        interaction: Interaction {
            mode: "index",
            intersect: false,
        },
    }
}

/// `HH:MM:SS` for a parseable timestamp, the raw string otherwise.
pub fn time_of_day_label(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%H:%M:%S").to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}
