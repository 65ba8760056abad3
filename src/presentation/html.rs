// Server-rendered dashboard page
use crate::domain::dashboard::{
    BarChart, DashboardView, Distribution, DualAxisChart, GeoSummary, MetricsSummary, Panel,
};
use crate::domain::display_mode::Palette;
use serde::Serialize;
use std::fmt::Write;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut body = String::new();

    body.push_str(&render_panel("metrics", None, &view.metrics, "Loading metrics...", render_metrics));
    body.push_str(&render_panel(
        "timeseries",
        Some("Network Performance Over Time"),
        &view.timeseries,
        "Loading...",
        render_time_series,
    ));
    body.push_str(&render_panel(
        "scenarios",
        Some("Scenario Distribution"),
        &view.scenarios,
        "Loading...",
        render_distribution,
    ));
    body.push_str(&render_panel(
        "hourly",
        Some("Hourly Performance Analysis"),
        &view.hourly,
        "Loading...",
        render_hourly,
    ));
    body.push_str(&render_panel(
        "geo",
        Some("Geographic Coverage Map"),
        &view.geo,
        "Loading...",
        render_geo,
    ));

    let next_mode = view.mode.toggled();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-mode=\"{mode}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<header><h1>{title}</h1>\
         <form method=\"post\" action=\"/mode/toggle\"><button type=\"submit\">Switch to {next_mode} mode</button></form></header>\n\
         <main>\n{body}</main>\n<footer>{footer}</footer>\n</body>\n</html>\n",
        mode = view.mode,
        title = html_escape(view.title),
        style = stylesheet(&view.palette),
        next_mode = next_mode,
        body = body,
        footer = html_escape(view.footer),
    )
}

fn render_panel<T>(
    id: &str,
    heading: Option<&str>,
    panel: &Panel<T>,
    placeholder: &str,
    render: fn(&T) -> String,
) -> String {
    let heading = heading
        .map(|h| format!("<h2>{}</h2>\n", html_escape(h)))
        .unwrap_or_default();
    let content = match panel.ready() {
        Some(view) => render(view),
        None => format!("<p class=\"loading\">{}</p>\n", html_escape(placeholder)),
    };
    format!("<section id=\"{}\" class=\"panel\">\n{}{}</section>\n", id, heading, content)
}

fn render_metrics(summary: &MetricsSummary) -> String {
    let mut out = String::from("<div class=\"cards\">\n");
    for card in &summary.cards {
        let _ = writeln!(
            out,
            "<div class=\"card\" style=\"border-color: {}\"><span class=\"card-title\">{}</span><span class=\"card-value\">{}</span></div>",
            card.color,
            html_escape(card.title),
            html_escape(&card.value)
        );
    }
    out.push_str("</div>\n");
    out
}

fn render_time_series(chart: &DualAxisChart) -> String {
    let mut out = format!("<p>{} samples</p>\n", chart.labels.len());
    out.push_str(&chart_data("timeseries-chart", chart));
    out
}

fn render_distribution(dist: &Distribution) -> String {
    let mut out = String::from("<ul class=\"segments\">\n");
    for segment in &dist.segments {
        let _ = writeln!(
            out,
            "<li><span class=\"swatch\" style=\"background: {}\"></span>{}: {} ({:.1}%)</li>",
            segment.color,
            html_escape(&segment.label),
            segment.value,
            segment.share * 100.0
        );
    }
    out.push_str("</ul>\n");
    out.push_str(&chart_data("scenarios-chart", dist));
    out
}

fn render_hourly(chart: &BarChart) -> String {
    let max = chart.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let mut out = format!("<h3>{}</h3>\n<div class=\"bars\">\n", html_escape(chart.title));
    for bar in &chart.bars {
        let height = if max > 0.0 { (bar.value / max * 100.0).max(0.0) } else { 0.0 };
        let _ = writeln!(
            out,
            "<div class=\"bar\" title=\"{}: {:.1}\"><div style=\"height: {:.1}%; background: {}\"></div><span>{}</span></div>",
            html_escape(&bar.label),
            bar.value,
            height,
            chart.color,
            html_escape(&bar.label)
        );
    }
    out.push_str("</div>\n");
    out
}

fn render_geo(geo: &GeoSummary) -> String {
    let mut out = format!("<p>{}</p>\n<ul class=\"cities\">\n", html_escape(&geo.header));
    for row in &geo.rows {
        let _ = writeln!(out, "<li>📍 {}</li>", html_escape(&row.line()));
    }
    out.push_str("</ul>\n");
    out
}

/// Embed the chart model for client-side charting
fn chart_data<T: Serialize>(id: &str, data: &T) -> String {
    let json = serde_json::to_string(data)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");
    format!("<script type=\"application/json\" id=\"{}\">{}</script>\n", id, json)
}

fn stylesheet(palette: &Palette) -> String {
    format!(
        "body{{margin:0;font-family:sans-serif;background:{bg};color:{text}}}\
         header{{display:flex;justify-content:space-between;align-items:center;padding:0 24px;background:{primary};color:#fff}}\
         main{{padding:24px}}\
         .panel{{background:{paper};margin-bottom:24px;padding:24px;border-radius:4px}}\
         .cards{{display:flex;gap:24px;flex-wrap:wrap}}\
         .card{{flex:1;border-left:4px solid;padding:16px;display:flex;flex-direction:column}}\
         .card-title,.loading,footer{{color:{text2}}}\
         .card-value{{font-size:2rem}}\
         .swatch{{display:inline-block;width:12px;height:12px;margin-right:8px}}\
         .bars{{display:flex;align-items:flex-end;height:200px;gap:4px}}\
         .bar{{flex:1;height:100%;display:flex;flex-direction:column;justify-content:flex-end;font-size:0.7rem}}\
         footer{{text-align:center;padding:16px}}\
         button{{color:{secondary}}}",
        bg = palette.background,
        text = palette.text,
        text2 = palette.text_secondary,
        primary = palette.primary,
        secondary = palette.secondary,
        paper = palette.paper,
    )
}

fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
