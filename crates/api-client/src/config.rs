use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Workspace `config.toml`, embedded so the browser build needs no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Environment variable that overrides `[api] base_url` on native targets.
pub const API_URL_ENV: &str = "BLOODBRIDGE_API_URL";

/// Parse the embedded config and store it in the global `OnceLock`.
/// Only the first call has effect.
///
/// A config that fails to parse falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = AppConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to parse config.toml, using defaults");
            AppConfig::default()
        });
        if let Some(url) = env_override() {
            config.api.base_url = url;
        }
        tracing::info!(base_url = %config.api_base_url(), "API configuration loaded");
        config
    })
}

/// The loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}

#[cfg(not(target_arch = "wasm32"))]
fn env_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn env_override() -> Option<String> {
    None
}
