//! Client configuration for the desktop build.

use folio_core::config::ClientConfig;

/// Parse the configuration generated by `build.rs`.
///
/// A malformed document is logged and treated as empty so the app still
/// starts in guest-only mode.
pub fn embedded_config() -> ClientConfig {
    parse_embedded(include_str!(concat!(env!("OUT_DIR"), "/folio-client.json")))
}

fn parse_embedded(raw: &str) -> ClientConfig {
    ClientConfig::from_json(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse embedded client config: {}", error);
        ClientConfig::default()
    })
}

/// Runtime environment first, then the values baked in at build time.
pub fn load_client_config() -> ClientConfig {
    ClientConfig::from_env().or(embedded_config())
}
