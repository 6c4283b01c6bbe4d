//! In-memory fakes for the auth provider and the document store.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use folio_core::auth::{
    AuthError, AuthGate, AuthProvider, AuthResult, AuthSession, AuthUser, SessionEvent,
    SignUpOutcome,
};
use folio_core::config::SyncSettings;
use folio_core::models::{PortfolioData, Theme};
use folio_core::remote::{PortfolioStore, RemoteError, RemoteResult, StoredPortfolio};
use folio_core::Controller;
use tokio::sync::broadcast;

pub type TestController = Controller<FakeAuth, MemoryStore>;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct horse";
pub const ACCOUNT_ID: &str = "account-ada";

pub fn session_for(account_id: &str, email: &str) -> AuthSession {
    AuthSession {
        access_token: format!("access-{account_id}"),
        refresh_token: format!("refresh-{account_id}"),
        expires_at: Utc::now().timestamp() + 3600,
        user: AuthUser {
            id: account_id.to_string(),
            email: Some(email.to_string()),
        },
    }
}

/// A session whose access token is already past its expiry.
pub fn expired_session_for(account_id: &str, email: &str) -> AuthSession {
    AuthSession {
        expires_at: Utc::now().timestamp() - 600,
        ..session_for(account_id, email)
    }
}

#[derive(Default)]
struct FakeAuthState {
    accounts: HashMap<String, (String, String)>,
    persisted: Option<AuthSession>,
    require_confirmation: bool,
    restores: usize,
    sign_outs: usize,
    refreshes: usize,
    issue_expired: bool,
    fail_refresh: bool,
}

#[derive(Clone, Default)]
pub struct FakeAuth {
    state: Arc<Mutex<FakeAuthState>>,
}

impl FakeAuth {
    pub fn with_account(email: &str, password: &str, account_id: &str) -> Self {
        let auth = Self::default();
        auth.state.lock().unwrap().accounts.insert(
            email.to_string(),
            (password.to_string(), account_id.to_string()),
        );
        auth
    }

    pub fn persist(&self, session: AuthSession) {
        self.state.lock().unwrap().persisted = Some(session);
    }

    pub fn require_confirmation(&self) {
        self.state.lock().unwrap().require_confirmation = true;
    }

    pub fn restores(&self) -> usize {
        self.state.lock().unwrap().restores
    }

    pub fn sign_outs(&self) -> usize {
        self.state.lock().unwrap().sign_outs
    }

    pub fn refreshes(&self) -> usize {
        self.state.lock().unwrap().refreshes
    }

    /// Hand out sessions that have already expired, on sign-in and on refresh.
    pub fn issue_expired(&self, expired: bool) {
        self.state.lock().unwrap().issue_expired = expired;
    }

    pub fn fail_refresh(&self) {
        self.state.lock().unwrap().fail_refresh = true;
    }
}

impl AuthProvider for FakeAuth {
    async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        let mut state = self.state.lock().unwrap();
        state.restores += 1;
        Ok(state.persisted.clone())
    }

    async fn sign_up(
        &self,
        _display_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignUpOutcome> {
        let mut state = self.state.lock().unwrap();
        if state.accounts.contains_key(email) {
            return Err(AuthError::Api("User already registered (422)".to_string()));
        }
        let account_id = format!("account-{}", state.accounts.len() + 1);
        state.accounts.insert(
            email.to_string(),
            (password.to_string(), account_id.clone()),
        );
        if state.require_confirmation {
            Ok(SignUpOutcome::ConfirmationRequired)
        } else {
            Ok(SignUpOutcome::SignedIn(session_for(&account_id, email)))
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        let state = self.state.lock().unwrap();
        match state.accounts.get(email) {
            Some((expected, account_id)) if expected == password => {
                if state.issue_expired {
                    Ok(expired_session_for(account_id, email))
                } else {
                    Ok(session_for(account_id, email))
                }
            }
            _ => Err(AuthError::Api("Invalid login credentials (400)".to_string())),
        }
    }

    async fn sign_out(&self, _session: &AuthSession) -> AuthResult<()> {
        self.state.lock().unwrap().sign_outs += 1;
        Ok(())
    }

    async fn refresh_session(&self, session: &AuthSession) -> AuthResult<AuthSession> {
        let mut state = self.state.lock().unwrap();
        state.refreshes += 1;
        if state.fail_refresh {
            return Err(AuthError::Api("Invalid Refresh Token (400)".to_string()));
        }
        let email = session.user.email.clone().unwrap_or_default();
        let issued = if state.issue_expired {
            expired_session_for(session.account_id(), &email)
        } else {
            session_for(session.account_id(), &email)
        };
        Ok(AuthSession {
            access_token: format!("access-{}-{}", session.account_id(), state.refreshes),
            ..issued
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpsert {
    pub account_id: String,
    pub access_token: String,
    pub content: PortfolioData,
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct StoreState {
    records: HashMap<String, StoredPortfolio>,
    upserts: Vec<RecordedUpsert>,
    fetches: usize,
    fail_fetch: bool,
    fail_upsert: bool,
    fetch_delay: Option<Duration>,
    upsert_delay: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn with_record(account_id: &str, content: PortfolioData, theme: Theme) -> Self {
        let store = Self::default();
        store
            .state
            .lock()
            .unwrap()
            .records
            .insert(account_id.to_string(), StoredPortfolio { content, theme });
        store
    }

    pub fn upserts(&self) -> Vec<RecordedUpsert> {
        self.state.lock().unwrap().upserts.clone()
    }

    pub fn fetches(&self) -> usize {
        self.state.lock().unwrap().fetches
    }

    pub fn record(&self, account_id: &str) -> Option<StoredPortfolio> {
        self.state.lock().unwrap().records.get(account_id).cloned()
    }

    pub fn fail_fetch(&self) {
        self.state.lock().unwrap().fail_fetch = true;
    }

    pub fn fail_upsert(&self, fail: bool) {
        self.state.lock().unwrap().fail_upsert = fail;
    }

    pub fn delay_fetch(&self, delay: Duration) {
        self.state.lock().unwrap().fetch_delay = Some(delay);
    }

    pub fn delay_upsert(&self, delay: Duration) {
        self.state.lock().unwrap().upsert_delay = Some(delay);
    }
}

impl PortfolioStore for MemoryStore {
    async fn fetch(&self, session: &AuthSession) -> RemoteResult<Option<StoredPortfolio>> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.fetches += 1;
            state.fetch_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock().unwrap();
        if session.is_expired() {
            return Err(RemoteError::Api("JWT expired (401)".to_string()));
        }
        if state.fail_fetch {
            return Err(RemoteError::Api("connection reset (503)".to_string()));
        }
        Ok(state.records.get(session.account_id()).cloned())
    }

    async fn upsert(
        &self,
        session: &AuthSession,
        content: &PortfolioData,
        theme: Theme,
        updated_at: DateTime<Utc>,
    ) -> RemoteResult<()> {
        let delay = self.state.lock().unwrap().upsert_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().unwrap();
        if session.is_expired() {
            return Err(RemoteError::Api("JWT expired (401)".to_string()));
        }
        state.upserts.push(RecordedUpsert {
            account_id: session.account_id().to_string(),
            access_token: session.access_token.clone(),
            content: content.clone(),
            theme,
            updated_at,
        });
        if state.fail_upsert {
            return Err(RemoteError::Api("permission denied (401)".to_string()));
        }
        state.records.insert(
            session.account_id().to_string(),
            StoredPortfolio {
                content: content.clone(),
                theme,
            },
        );
        Ok(())
    }
}

pub fn controller(auth: &FakeAuth, store: &MemoryStore) -> TestController {
    Controller::new(
        AuthGate::new(Some(auth.clone())),
        store.clone(),
        SyncSettings::default(),
    )
}

pub fn quiet_period() -> Duration {
    SyncSettings::default().quiet_period
}

/// Let spawned tasks run after the clock moved.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

/// Deliver the next session event to the controller.
pub async fn apply_next_event(
    controller: &TestController,
    events: &mut broadcast::Receiver<SessionEvent>,
) -> SessionEvent {
    let event = events.recv().await.expect("session event");
    controller.handle_session_event(event.clone()).await;
    event
}

/// Sign in with the default account and apply the resulting event.
pub async fn sign_in(controller: &TestController) {
    let mut events = controller.subscribe_sessions();
    controller.sign_in(EMAIL, PASSWORD).await.expect("sign in");
    apply_next_event(controller, &mut events).await;
}

pub fn remote_document() -> PortfolioData {
    let mut data = PortfolioData::empty();
    data.full_name = "Ada Lovelace".to_string();
    data.bio = "Stored remotely".to_string();
    data
}
