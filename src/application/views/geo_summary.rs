// Per-city speed-test list
use super::{finite_or_zero, to_fixed};
use crate::application::dashboard_state::DashboardSnapshot;
use crate::domain::dashboard::{GeoRow, GeoSummary, Panel};
use crate::domain::speedtest::{CitySummary, SpeedtestDocument};

pub fn project(snapshot: &DashboardSnapshot) -> Panel<GeoSummary> {
    match snapshot.speedtest.document() {
        Some(doc) => Panel::Ready(build(doc)),
        None => Panel::Loading,
    }
}

pub fn build(doc: &SpeedtestDocument) -> GeoSummary {
    let rows: Vec<GeoRow> = doc.summary.iter().map(row).collect();

    GeoSummary {
        header: format!("Geographic coverage data for {} cities", rows.len()),
        city_count: rows.len(),
        rows,
        tile_count: doc.tiles.len(),
        totals: doc.stats.clone(),
    }
}

fn row(city: &CitySummary) -> GeoRow {
    GeoRow {
        city: city.city.clone(),
        download: format!("{} Mbps", to_fixed(kbps_to_mbps(city.avg_d_kbps), 1)),
        upload: format!("{} Mbps", to_fixed(kbps_to_mbps(city.avg_u_kbps), 1)),
        latency: format!("{} ms", to_fixed(city.avg_lat_ms, 0)),
        coordinates: city.lat.zip(city.lon),
        tests: city.tests.filter(|t| t.is_finite() && *t >= 0.0).map(|t| t.round() as u64),
        quality: city.quality.clone(),
    }
}

fn kbps_to_mbps(kbps: f64) -> f64 {
    finite_or_zero(kbps) / 1000.0
}
