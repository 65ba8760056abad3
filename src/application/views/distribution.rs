// Scenario distribution - one segment per scenario, sized by count
use crate::application::dashboard_state::DashboardSnapshot;
use crate::domain::dashboard::{Distribution, Panel, Segment};
use std::collections::BTreeMap;

const SEGMENT_COLORS: [&str; 5] = [
    "rgba(75, 192, 192, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 206, 86, 0.8)",
    "rgba(255, 99, 132, 0.8)",
    "rgba(153, 102, 255, 0.8)",
];

pub fn project(snapshot: &DashboardSnapshot) -> Panel<Distribution> {
    match snapshot.telemetry.document() {
        Some(doc) => Panel::Ready(build(&doc.scenarios)),
        None => Panel::Loading,
    }
}

pub fn build(scenarios: &BTreeMap<String, u64>) -> Distribution {
    let total: u64 = scenarios.values().sum();

    let segments = scenarios
        .iter()
        .enumerate()
        .map(|(idx, (label, &count))| Segment {
            label: label.clone(),
            value: count,
            share: if total == 0 { 0.0 } else { count as f64 / total as f64 },
            color: SEGMENT_COLORS[idx % SEGMENT_COLORS.len()],
        })
        .collect();

    Distribution { total, segments }
}
