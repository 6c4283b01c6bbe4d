//! Client configuration.
//!
//! Provides a unified `ClientConfig` used by the desktop shell to discover the
//! Supabase project, the share-link base URL and the portfolio table, plus the
//! `SyncSettings` timing knobs used by the controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const DEFAULT_SHARE_BASE_URL: &str = "https://folio.app/";
pub const DEFAULT_PORTFOLIOS_TABLE: &str = "portfolios";

const SYNC_QUIET_PERIOD_MS: u64 = 1500;
const FETCH_STATUS_CLEAR_MS: u64 = 2000;
const SAVE_STATUS_CLEAR_MS: u64 = 3000;

/// Build- or runtime-provisioned client configuration.
///
/// These values are safe-to-ship public endpoints/keys. Secret credentials
/// must never be stored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    #[serde(default)]
    pub share_base_url: Option<String>,
    #[serde(default)]
    pub portfolios_table: Option<String>,
}

impl ClientConfig {
    /// Read configuration from `SUPABASE_URL`, `SUPABASE_ANON_KEY`,
    /// `FOLIO_SHARE_BASE_URL` and `FOLIO_PORTFOLIOS_TABLE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            supabase_url: normalize_text_option(lookup("SUPABASE_URL")),
            supabase_anon_key: normalize_text_option(lookup("SUPABASE_ANON_KEY")),
            share_base_url: normalize_text_option(lookup("FOLIO_SHARE_BASE_URL")),
            portfolios_table: normalize_text_option(lookup("FOLIO_PORTFOLIOS_TABLE")),
        }
    }

    /// Parse a JSON configuration document.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Fill every unset field from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            supabase_url: normalize_text_option(self.supabase_url)
                .or_else(|| normalize_text_option(fallback.supabase_url)),
            supabase_anon_key: normalize_text_option(self.supabase_anon_key)
                .or_else(|| normalize_text_option(fallback.supabase_anon_key)),
            share_base_url: normalize_text_option(self.share_base_url)
                .or_else(|| normalize_text_option(fallback.share_base_url)),
            portfolios_table: normalize_text_option(self.portfolios_table)
                .or_else(|| normalize_text_option(fallback.portfolios_table)),
        }
    }

    /// Base URL share links are built on.
    pub fn share_base_url(&self) -> Result<String> {
        let Some(url) = normalize_text_option(self.share_base_url.clone()) else {
            return Ok(DEFAULT_SHARE_BASE_URL.to_string());
        };
        if is_http_url(&url) {
            Ok(url)
        } else {
            Err(Error::Config(
                "share_base_url must include http:// or https://".to_string(),
            ))
        }
    }

    pub fn portfolios_table(&self) -> String {
        normalize_text_option(self.portfolios_table.clone())
            .unwrap_or_else(|| DEFAULT_PORTFOLIOS_TABLE.to_string())
    }
}

/// Timing of the debounced sync and the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    /// Quiet period after the last edit before a save is attempted
    pub quiet_period: Duration,
    /// How long `synced` stays visible after the post-login fetch
    pub fetch_status_clear_after: Duration,
    /// How long `synced` stays visible after a save
    pub save_status_clear_after: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(SYNC_QUIET_PERIOD_MS),
            fetch_status_clear_after: Duration::from_millis(FETCH_STATUS_CLEAR_MS),
            save_status_clear_after: Duration::from_millis(SAVE_STATUS_CLEAR_MS),
        }
    }
}
