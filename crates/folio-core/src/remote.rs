//! Remote document store.
//!
//! One record per account holding the whole portfolio document and its
//! theme. Saves are full replacements keyed by account; there is no
//! versioning, so concurrent writers resolve as last-writer-wins.

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::supabase_parse_api_error;
use crate::auth::{AuthError, AuthSession};
use crate::config::DEFAULT_PORTFOLIOS_TABLE;
use crate::models::{PortfolioData, Theme};
use crate::util::{is_http_url, normalize_text_option};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Invalid store configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Store error: {0}")]
    Api(String),
    #[error("Stored portfolio is malformed: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("Session could not be refreshed: {0}")]
    Session(AuthError),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The stored document for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPortfolio {
    pub content: PortfolioData,
    pub theme: Theme,
}

/// Document store keyed by account identifier.
pub trait PortfolioStore: Send + Sync + 'static {
    /// Fetch the account's document. `Ok(None)` means the account has no
    /// stored document yet.
    fn fetch(
        &self,
        session: &AuthSession,
    ) -> impl Future<Output = RemoteResult<Option<StoredPortfolio>>> + Send;

    /// Replace the account's document.
    fn upsert(
        &self,
        session: &AuthSession,
        content: &PortfolioData,
        theme: Theme,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = RemoteResult<()>> + Send;
}

/// PostgREST client for the Supabase `portfolios` table.
#[derive(Clone)]
pub struct SupabasePortfolioStore {
    table_url: String,
    anon_key: String,
    client: Client,
}

impl SupabasePortfolioStore {
    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>) -> RemoteResult<Self> {
        Self::with_table(url, anon_key, DEFAULT_PORTFOLIOS_TABLE)
    }

    pub fn with_table(
        url: impl AsRef<str>,
        anon_key: impl Into<String>,
        table: &str,
    ) -> RemoteResult<Self> {
        let base = normalize_rest_url(url.as_ref())?;
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(RemoteError::InvalidConfiguration(
                "Supabase anon key must not be empty",
            ));
        }
        let table = normalize_text_option(Some(table.to_string())).ok_or(
            RemoteError::InvalidConfiguration("Portfolio table name must not be empty"),
        )?;

        Ok(Self {
            table_url: format!("{base}/{table}"),
            anon_key,
            client: Client::builder().build()?,
        })
    }

    fn authorized(&self, request: RequestBuilder, session: &AuthSession) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .header("Accept", "application/json")
    }
}

#[derive(Debug, Deserialize)]
struct PortfolioRow {
    content: Option<serde_json::Value>,
    theme: Option<String>,
}

impl PortfolioRow {
    fn into_stored(self) -> RemoteResult<Option<StoredPortfolio>> {
        let Some(content) = self.content.filter(|content| !content.is_null()) else {
            return Ok(None);
        };
        let content = serde_json::from_value(content)?;
        let theme = self
            .theme
            .and_then(|theme| theme.parse().ok())
            .unwrap_or_default();
        Ok(Some(StoredPortfolio { content, theme }))
    }
}

#[derive(Serialize)]
struct PortfolioUpsert<'a> {
    user_id: &'a str,
    content: &'a PortfolioData,
    theme: Theme,
    updated_at: String,
}

impl PortfolioStore for SupabasePortfolioStore {
    async fn fetch(&self, session: &AuthSession) -> RemoteResult<Option<StoredPortfolio>> {
        let user_filter = format!("eq.{}", session.account_id());
        let request = self.authorized(
            self.client.get(&self.table_url).query(&[
                ("select", "content,theme"),
                ("user_id", user_filter.as_str()),
                ("limit", "1"),
            ]),
            session,
        );

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api(supabase_parse_api_error(status, &body)));
        }

        let rows = response.json::<Vec<PortfolioRow>>().await?;
        match rows.into_iter().next() {
            Some(row) => row.into_stored(),
            None => Ok(None),
        }
    }

    async fn upsert(
        &self,
        session: &AuthSession,
        content: &PortfolioData,
        theme: Theme,
        updated_at: DateTime<Utc>,
    ) -> RemoteResult<()> {
        let body = PortfolioUpsert {
            user_id: session.account_id(),
            content,
            theme,
            updated_at: updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let request = self.authorized(
            self.client
                .post(&self.table_url)
                .query(&[("on_conflict", "user_id")])
                .header("Prefer", "resolution=merge-duplicates,return=minimal")
                .json(&body),
            session,
        );

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api(supabase_parse_api_error(status, &body)));
        }
        Ok(())
    }
}

fn normalize_rest_url(url: &str) -> RemoteResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(RemoteError::InvalidConfiguration(
            "Supabase URL must not be empty",
        ));
    }
    if !is_http_url(trimmed) {
        return Err(RemoteError::InvalidConfiguration(
            "Supabase URL must include http:// or https://",
        ));
    }
    if trimmed.ends_with("/rest/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/rest/v1"))
    }
}
