// Dashboard view models - what each panel needs to draw, nothing more
use super::display_mode::{DisplayMode, Palette};
use super::speedtest::SpeedtestStats;
use serde::Serialize;

/// A panel either waits on its documents or has a fully projected view.
/// There is no partial state: a view is never built from missing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "lowercase")]
pub enum Panel<T> {
    Loading,
    Ready(T),
}

impl<T> Panel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(view) => Some(view),
            Panel::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub id: &'static str,
    pub title: &'static str,
    pub value: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub cards: Vec<MetricCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: &'static str,
    pub position: AxisPosition,
    pub title: &'static str,
    /// Only the primary axis draws grid lines across the chart area
    pub draw_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub fill: &'static str,
    pub axis_id: &'static str,
    pub values: Vec<f64>,
}

/// Hover behaviour shared by every series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

/// Line chart with independently scaled y-axes over one shared x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualAxisChart {
    pub labels: Vec<String>,
    pub axes: Vec<Axis>,
    pub series: Vec<LineSeries>,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub label: String,
    pub value: u64,
    /// Fraction of the total, 0.0 when every count is zero
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub total: u64,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub color: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoRow {
    pub city: String,
    pub download: String,
    pub upload: String,
    pub latency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl GeoRow {
    /// One-line rendering, e.g. `Austin: 85.2 Mbps ↓ | 12.1 Mbps ↑ | 31 ms`
    pub fn line(&self) -> String {
        format!(
            "{}: {} ↓ | {} ↑ | {}",
            self.city, self.download, self.upload, self.latency
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoSummary {
    pub header: String,
    pub city_count: usize,
    pub rows: Vec<GeoRow>,
    /// Individual tiles sampled alongside the per-city aggregates
    pub tile_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<SpeedtestStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub mode: DisplayMode,
    pub palette: Palette,
    pub metrics: Panel<MetricsSummary>,
    pub timeseries: Panel<DualAxisChart>,
    pub scenarios: Panel<Distribution>,
    pub hourly: Panel<BarChart>,
    pub geo: Panel<GeoSummary>,
    pub footer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_serializes_with_status_tag() {
        let loading: Panel<Bar> = Panel::Loading;
        assert_eq!(
            serde_json::to_value(&loading).unwrap(),
            serde_json::json!({ "status": "loading" })
        );

        let ready = Panel::Ready(Bar { label: "0:00".to_string(), value: 1.5 });
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({ "status": "ready", "view": { "label": "0:00", "value": 1.5 } })
        );
    }

    #[test]
    fn test_geo_row_line() {
        let row = GeoRow {
            city: "Austin".to_string(),
            download: "85.2 Mbps".to_string(),
            upload: "12.1 Mbps".to_string(),
            latency: "31 ms".to_string(),
            coordinates: None,
            tests: None,
            quality: None,
        };
        assert_eq!(row.line(), "Austin: 85.2 Mbps ↓ | 12.1 Mbps ↑ | 31 ms");
    }
}
