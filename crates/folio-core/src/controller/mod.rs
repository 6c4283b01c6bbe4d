//! View-state controller.
//!
//! [`Controller`] is the single owner of the application state: the active
//! view, the document, the theme, the session, the auth prompt, the pending
//! intent and the sync status. The presentation layer proposes changes by
//! calling methods and renders from snapshots received on [`Controller::watch`].
//!
//! Session state is versioned by a generation counter bumped on every
//! sign-in and sign-out. Asynchronous work (fetches, saves, status timers)
//! captures the generation it started under and drops its result when the
//! session has moved on.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::auth::{
    resume_target, AuthGate, AuthPrompt, AuthProvider, AuthResult, AuthSession, AuthUser,
    PendingIntent, PromptMode, SessionEvent, SignUpOutcome,
};
use crate::config::SyncSettings;
use crate::error::{Error, NavigationError, NavigationResult};
use crate::export;
use crate::models::{Category, PortfolioData, Theme};
use crate::remote::{PortfolioStore, RemoteError, RemoteResult};
use crate::share::{self, ShareError};
use crate::state::SyncStatus;
use crate::sync::DebouncedSync;
use crate::Result;

mod view;

pub use view::{AppState, View};

pub const SIGN_UP_NOTICE: &str = "Account created! Please verify your email.";
pub const PUBLISH_FAILED_NOTICE: &str = "Failed to publish your portfolio. Please try again.";

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub app: AppState,
    /// Present only while signed in
    pub session: Option<AuthSession>,
    pub sync_status: SyncStatus,
    pub prompt: AuthPrompt,
    pub pending_intent: Option<PendingIntent>,
    /// Opened from a share link; never synced
    pub read_only: bool,
    pub published: bool,
    /// App-level message outside the auth prompt
    pub notice: Option<String>,
    load_pending: bool,
    generation: u64,
    status_epoch: u64,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            app: AppState::default(),
            session: None,
            sync_status: SyncStatus::Idle,
            prompt: AuthPrompt::default(),
            pending_intent: None,
            read_only: false,
            published: false,
            notice: None,
            load_pending: true,
            generation: 0,
            status_epoch: 0,
        }
    }
}

impl ControllerState {
    pub fn identity(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Edits are persisted only for a signed-in, fully loaded, editable
    /// session.
    const fn syncs_edits(&self) -> bool {
        self.session.is_some() && !self.load_pending && !self.read_only
    }

    fn set_status(&mut self, status: SyncStatus) -> u64 {
        self.sync_status = status;
        self.status_epoch += 1;
        self.status_epoch
    }

    /// Start a new session generation with the load suppression armed.
    fn begin_generation(&mut self, session: Option<AuthSession>) -> u64 {
        self.session = session;
        self.generation += 1;
        self.load_pending = true;
        self.read_only = false;
        self.generation
    }
}

/// How startup resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// A share link was opened in read-only preview.
    SharedPreview,
    /// A persisted session was restored and its document loaded.
    Restored,
    SignedOut,
}

struct Inner<A: AuthProvider, S: PortfolioStore> {
    gate: AuthGate<A>,
    store: S,
    settings: SyncSettings,
    state: Mutex<ControllerState>,
    updates: watch::Sender<ControllerState>,
    debounce: DebouncedSync,
}

/// Cloneable handle to the application state owner.
pub struct Controller<A: AuthProvider, S: PortfolioStore> {
    inner: Arc<Inner<A, S>>,
}

impl<A: AuthProvider, S: PortfolioStore> Clone for Controller<A, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Running session-event subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct SessionListener {
    task: JoinHandle<()>,
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl<A: AuthProvider, S: PortfolioStore> Controller<A, S> {
    pub fn new(gate: AuthGate<A>, store: S, settings: SyncSettings) -> Self {
        let initial = ControllerState::default();
        let (updates, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(Inner {
                gate,
                store,
                settings,
                state: Mutex::new(initial),
                updates,
                debounce: DebouncedSync::new(settings.quiet_period),
            }),
        }
    }

    pub fn snapshot(&self) -> ControllerState {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receive a fresh snapshot after every change.
    pub fn watch(&self) -> watch::Receiver<ControllerState> {
        self.inner.updates.subscribe()
    }

    pub fn subscribe_sessions(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.gate.subscribe()
    }

    pub fn auth_available(&self) -> bool {
        self.inner.gate.is_available()
    }

    /// Whether a debounced save is waiting for its quiet period.
    pub fn save_pending(&self) -> bool {
        self.inner.debounce.is_pending()
    }

    fn modify<R>(&self, change: impl FnOnce(&mut ControllerState) -> R) -> R {
        let mut state = self
            .inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let output = change(&mut state);
        self.inner.updates.send_replace(state.clone());
        output
    }

    // ------------------------------------------------------------------
    // Startup and session events
    // ------------------------------------------------------------------

    /// Resolve the initial screen.
    ///
    /// A decodable share token in `query` opens the read-only preview without
    /// touching authentication. Otherwise a persisted session is restored,
    /// its document fetched, and the landing screen shown.
    pub async fn bootstrap(&self, query: Option<&str>) -> Bootstrap {
        if let Some(shared) = query.and_then(share::from_query) {
            tracing::info!("Opening shared portfolio in read-only preview");
            self.modify(|state| {
                state.app.data = shared.data;
                state.app.theme = shared.theme;
                state.app.view = View::Preview;
                state.read_only = true;
            });
            return Bootstrap::SharedPreview;
        }

        let Some(session) = self.inner.gate.restore().await else {
            return Bootstrap::SignedOut;
        };

        let generation = self.modify(|state| state.begin_generation(Some(session.clone())));
        self.load_remote(&session, generation).await;
        self.modify(|state| {
            if state.generation == generation {
                state.app.view = View::Landing;
            }
        });
        Bootstrap::Restored
    }

    /// Consume session events until the listener is dropped.
    pub fn spawn_session_listener(&self) -> SessionListener {
        let mut events = self.inner.gate.subscribe();
        let controller = self.clone();
        let task = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => controller.handle_session_event(event).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Session listener skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        SessionListener { task }
    }

    pub async fn handle_session_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(session) => self.apply_sign_in(session).await,
            SessionEvent::Restored(session) => {
                tracing::debug!("Session restored for account {}", session.account_id());
            }
            SessionEvent::SignedOut => self.apply_sign_out(),
        }
    }

    /// Fetch the account's document, then replay the pending intent.
    ///
    /// The intent is consulted only after the fetch has finished, so the
    /// resumed screen always shows the remote document.
    async fn apply_sign_in(&self, session: AuthSession) {
        tracing::info!("Signed in as account {}", session.account_id());
        self.inner.debounce.cancel();
        let generation = self.modify(|state| state.begin_generation(Some(session.clone())));

        self.load_remote(&session, generation).await;

        self.modify(|state| {
            if state.generation != generation {
                return;
            }
            if let Some(target) = resume_target(state.pending_intent.take(), state.app.view) {
                tracing::debug!("Resuming at {}", target);
                state.app.view = target;
            }
            state.prompt = AuthPrompt::default();
        });
    }

    fn apply_sign_out(&self) {
        self.inner.debounce.cancel();
        self.modify(|state| {
            if state.session.is_some() {
                state.begin_generation(None);
            }
            state.pending_intent = None;
            state.published = false;
            state.set_status(SyncStatus::Idle);
        });
    }

    /// Load the stored document. Clears the load suppression whatever the
    /// outcome.
    async fn load_remote(&self, session: &AuthSession, generation: u64) {
        self.modify(|state| {
            state.set_status(SyncStatus::Syncing);
            state.notice = None;
        });

        let result = match self.fresh_session(session.clone(), generation).await {
            Ok(session) => self.inner.store.fetch(&session).await,
            Err(error) => Err(error),
        };

        let synced_epoch = self.modify(|state| {
            if state.generation != generation {
                tracing::debug!("Discarding fetch result for an ended session");
                return None;
            }
            state.load_pending = false;
            match result {
                Ok(Some(stored)) => {
                    state.app.data = stored.content;
                    state.app.theme = stored.theme;
                    Some(state.set_status(SyncStatus::Synced))
                }
                Ok(None) => {
                    tracing::debug!("No stored portfolio yet; keeping the local document");
                    state.set_status(SyncStatus::Idle);
                    None
                }
                Err(error) => {
                    tracing::warn!("Failed to fetch portfolio: {}", error);
                    state.set_status(SyncStatus::Error);
                    None
                }
            }
        });

        if let Some(epoch) = synced_epoch {
            self.clear_status_later(epoch, self.inner.settings.fetch_status_clear_after);
        }
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    pub fn open_auth_prompt(&self, mode: PromptMode) {
        self.modify(|state| {
            state.prompt.open = true;
            state.prompt.mode = mode;
            state.prompt.error = None;
        });
    }

    /// Close the prompt and forget the deferred action.
    pub fn dismiss_auth_prompt(&self) {
        self.modify(|state| {
            state.prompt = AuthPrompt::default();
            state.pending_intent = None;
        });
    }

    /// Check credentials. Routing happens when the resulting `SignedIn`
    /// event is handled.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        self.modify(|state| state.prompt.begin_attempt());
        let result = self.inner.gate.sign_in(email, password).await;
        if let Err(error) = &result {
            self.modify(|state| state.prompt.fail(error));
        }
        result
    }

    pub async fn sign_up(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignUpOutcome> {
        self.modify(|state| state.prompt.begin_attempt());
        let result = self.inner.gate.sign_up(display_name, email, password).await;
        match &result {
            Ok(SignUpOutcome::ConfirmationRequired) => {
                self.modify(|state| {
                    state.prompt.busy = false;
                    state.prompt.mode = PromptMode::SignIn;
                    state.prompt.notice = Some(SIGN_UP_NOTICE.to_string());
                });
                let display_name = display_name.trim();
                if !display_name.is_empty() && self.snapshot().app.data.full_name.is_empty() {
                    self.edit(|data| data.full_name = display_name.to_string());
                }
            }
            Ok(SignUpOutcome::SignedIn(_)) => {}
            Err(error) => self.modify(|state| state.prompt.fail(error)),
        }
        result
    }

    /// Sign out: back to the login screen with an empty document.
    pub async fn sign_out(&self) {
        self.inner.debounce.cancel();
        let session = self.modify(|state| {
            let session = state.session.take();
            state.begin_generation(None);
            state.pending_intent = None;
            state.published = false;
            state.notice = None;
            state.prompt = AuthPrompt::default();
            state.set_status(SyncStatus::Idle);
            state.app.view = View::Login;
            state.app.data = PortfolioData::empty();
            session
        });
        self.inner.gate.sign_out(session.as_ref()).await;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    fn navigate(&self, target: View) -> NavigationResult<View> {
        self.modify(|state| {
            let from = state.app.view;
            if !from.can_navigate_to(target) {
                return Err(NavigationError::InvalidTransition { from, to: target });
            }
            tracing::debug!("Navigating {} -> {}", from, target);
            state.app.view = target;
            Ok(target)
        })
    }

    /// Navigate if signed in; otherwise open the prompt and record `intent`.
    fn navigate_gated(
        &self,
        target: View,
        intent: Option<PendingIntent>,
    ) -> NavigationResult<View> {
        self.modify(|state| {
            let from = state.app.view;
            if !from.can_navigate_to(target) {
                return Err(NavigationError::InvalidTransition { from, to: target });
            }
            if state.session.is_none() {
                state.pending_intent = intent;
                state.prompt.open = true;
                state.prompt.error = None;
                return Err(NavigationError::AuthRequired);
            }
            tracing::debug!("Navigating {} -> {}", from, target);
            state.app.view = target;
            Ok(target)
        })
    }

    pub fn continue_as_guest(&self) -> NavigationResult<View> {
        self.navigate(View::Landing)
    }

    /// Pick a category on the landing screen and open the editor.
    pub fn select_category(&self, category: Category) -> NavigationResult<View> {
        let from = self.snapshot().app.view;
        if from != View::Landing {
            return Err(NavigationError::InvalidTransition {
                from,
                to: View::Editor,
            });
        }
        self.mutate(|app| {
            app.data.category = category;
            app.view = View::Editor;
        });
        Ok(View::Editor)
    }

    /// The editor's "generate" action.
    pub fn request_theme_selection(&self) -> NavigationResult<View> {
        self.navigate_gated(View::ThemeSelection, Some(PendingIntent::ThemeSelection))
    }

    pub fn request_preview(&self) -> NavigationResult<View> {
        self.navigate_gated(View::Preview, Some(PendingIntent::Preview))
    }

    pub fn open_profile(&self) -> NavigationResult<View> {
        self.navigate_gated(View::Profile, None)
    }

    pub fn go_to_editor(&self) -> NavigationResult<View> {
        self.navigate(View::Editor)
    }

    pub fn back_to_landing(&self) -> NavigationResult<View> {
        self.navigate(View::Landing)
    }

    pub fn back_to_theme_selection(&self) -> NavigationResult<View> {
        self.navigate(View::ThemeSelection)
    }

    // ------------------------------------------------------------------
    // Document mutations and sync
    // ------------------------------------------------------------------

    /// Derive a new document from the current one and replace it.
    pub fn edit(&self, change: impl FnOnce(&mut PortfolioData)) {
        self.mutate(|app| {
            let mut data = app.data.clone();
            change(&mut data);
            app.data = data;
        });
    }

    pub fn set_theme(&self, theme: Theme) {
        self.mutate(|app| app.theme = theme);
    }

    fn mutate(&self, change: impl FnOnce(&mut AppState)) {
        let generation = self.modify(|state| {
            change(&mut state.app);
            state.syncs_edits().then_some(state.generation)
        });
        if let Some(generation) = generation {
            let controller = self.clone();
            self.inner.debounce.schedule(async move {
                if controller.save_snapshot(generation).await.is_none() {
                    tracing::debug!("Debounced save dropped; generation {} ended", generation);
                }
            });
        }
    }

    /// Save the current document and theme for the session `generation`.
    ///
    /// Returns `None` when that session has ended; a result that arrives
    /// after sign-out is discarded.
    async fn save_snapshot(&self, generation: u64) -> Option<RemoteResult<()>> {
        let snapshot = self.modify(|state| {
            if state.generation != generation || state.read_only {
                return None;
            }
            let session = state.session.clone()?;
            state.set_status(SyncStatus::Syncing);
            Some((session, state.app.data.clone(), state.app.theme))
        });
        let Some((session, data, theme)) = snapshot else {
            tracing::debug!("Skipping save for an ended session");
            return None;
        };

        let result = match self.fresh_session(session, generation).await {
            Ok(session) => {
                self.inner
                    .store
                    .upsert(&session, &data, theme, Utc::now())
                    .await
            }
            Err(error) => Err(error),
        };

        let synced_epoch = self.modify(|state| {
            if state.generation != generation {
                tracing::debug!("Discarding save result for an ended session");
                return None;
            }
            match &result {
                Ok(()) => Some(state.set_status(SyncStatus::Synced)),
                Err(error) => {
                    tracing::warn!("Failed to save portfolio: {}", error);
                    state.set_status(SyncStatus::Error);
                    None
                }
            }
        });

        if let Some(epoch) = synced_epoch {
            self.clear_status_later(epoch, self.inner.settings.save_status_clear_after);
        }
        Some(result)
    }

    /// Return `session`, refreshed first if its access token has expired.
    /// The refreshed session replaces the stored one while `generation` is
    /// still current.
    async fn fresh_session(
        &self,
        session: AuthSession,
        generation: u64,
    ) -> RemoteResult<AuthSession> {
        if !session.is_expired() {
            return Ok(session);
        }
        let refreshed = self
            .inner
            .gate
            .refresh(&session)
            .await
            .map_err(RemoteError::Session)?;
        self.modify(|state| {
            if state.generation == generation {
                state.session = Some(refreshed.clone());
            }
        });
        Ok(refreshed)
    }

    fn clear_status_later(&self, epoch: u64, delay: Duration) {
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.modify(|state| {
                if state.status_epoch == epoch && state.sync_status == SyncStatus::Synced {
                    state.set_status(SyncStatus::Idle);
                }
            });
        });
    }

    /// Save immediately, bypassing the quiet period.
    pub async fn publish(&self) -> Result<()> {
        let generation = self.modify(|state| {
            if state.read_only {
                return Err(Error::ReadOnly);
            }
            if state.session.is_none() {
                state.prompt.open = true;
                state.prompt.error = None;
                return Err(NavigationError::AuthRequired.into());
            }
            state.notice = None;
            Ok(state.generation)
        })?;

        self.inner.debounce.cancel();
        match self.save_snapshot(generation).await {
            Some(Ok(())) => {
                self.modify(|state| state.published = true);
                Ok(())
            }
            Some(Err(error)) => {
                self.modify(|state| state.notice = Some(PUBLISH_FAILED_NOTICE.to_string()));
                Err(error.into())
            }
            None => Err(Error::SessionEnded),
        }
    }

    // ------------------------------------------------------------------
    // Derived artifacts
    // ------------------------------------------------------------------

    pub fn share_url(&self, base_url: &str) -> std::result::Result<String, ShareError> {
        let state = self.snapshot();
        share::share_url(base_url, &state.app.data, state.app.theme)
    }

    pub fn export_html(&self) -> String {
        let state = self.snapshot();
        export::render_html(&state.app.data, state.app.theme)
    }
}
