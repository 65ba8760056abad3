use crate::domain::display_mode::DisplayMode;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    /// Origin the documents are served from: `http(s)://...` or `file://<dir>`
    pub base_url: String,
    pub telemetry_resource: String,
    pub speedtest_resource: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    pub default_mode: DisplayMode,
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("source.base_url", "http://127.0.0.1:5173")?
        .set_default("source.telemetry_resource", "5g_timeseries.json")?
        .set_default("source.speedtest_resource", "ookla_data.json")?
        .set_default("display.default_mode", "dark")?)
}

/// Join a resource name onto the base URL, percent-encoding each path segment
pub fn resource_url(base_url: &str, resource: &str) -> String {
    let path = resource
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
