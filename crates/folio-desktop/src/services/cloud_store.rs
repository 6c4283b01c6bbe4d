//! Document store for builds with or without a Supabase project.

use chrono::{DateTime, Utc};
use folio_core::auth::AuthSession;
use folio_core::models::{PortfolioData, Theme};
use folio_core::remote::{
    PortfolioStore, RemoteError, RemoteResult, StoredPortfolio, SupabasePortfolioStore,
};

const NOT_CONFIGURED: &str = "Cloud sync is not configured for this build";

/// Supabase store when the build has a project, otherwise a store that
/// refuses every call. Without a project no session can exist, so the
/// controller never reaches it in practice.
#[derive(Clone, Default)]
pub struct CloudStore {
    inner: Option<SupabasePortfolioStore>,
}

impl CloudStore {
    pub const fn new(inner: Option<SupabasePortfolioStore>) -> Self {
        Self { inner }
    }

    pub const fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    fn store(&self) -> RemoteResult<&SupabasePortfolioStore> {
        self.inner
            .as_ref()
            .ok_or(RemoteError::InvalidConfiguration(NOT_CONFIGURED))
    }
}

impl PortfolioStore for CloudStore {
    async fn fetch(&self, session: &AuthSession) -> RemoteResult<Option<StoredPortfolio>> {
        self.store()?.fetch(session).await
    }

    async fn upsert(
        &self,
        session: &AuthSession,
        content: &PortfolioData,
        theme: Theme,
        updated_at: DateTime<Utc>,
    ) -> RemoteResult<()> {
        self.store()?
            .upsert(session, content, theme, updated_at)
            .await
    }
}
