//! Auth gate.
//!
//! Credential calls never hand a session back to the caller. An accepted
//! sign-in is announced as a [`SessionEvent`] on the gate's broadcast
//! channel, and whoever listens applies it.

use tokio::sync::broadcast;

use super::{AuthError, AuthProvider, AuthResult, AuthSession, SignUpOutcome};
use crate::controller::View;

const SESSION_EVENT_CAPACITY: usize = 16;

/// The single deferred navigation replayed after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingIntent {
    ThemeSelection,
    Preview,
}

impl PendingIntent {
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::ThemeSelection => View::ThemeSelection,
            Self::Preview => View::Preview,
        }
    }
}

/// Session change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were accepted and a new session exists.
    SignedIn(AuthSession),
    /// A persisted session was picked up at startup.
    Restored(AuthSession),
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    #[default]
    SignIn,
    SignUp,
}

/// State of the authentication prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthPrompt {
    pub open: bool,
    pub mode: PromptMode,
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AuthPrompt {
    pub(crate) fn begin_attempt(&mut self) {
        self.busy = true;
        self.error = None;
        self.notice = None;
    }

    pub(crate) fn fail(&mut self, error: &AuthError) {
        self.busy = false;
        self.error = Some(error.to_string());
    }
}

/// View to show once a sign-in has been applied, if any.
///
/// A recorded intent wins. Without one, only the login screen moves on (to
/// the landing screen); any other screen stays where it is.
#[must_use]
pub fn resume_target(pending: Option<PendingIntent>, current: View) -> Option<View> {
    match pending {
        Some(intent) => Some(intent.view()),
        None if current == View::Login => Some(View::Landing),
        None => None,
    }
}

pub struct AuthGate<A: AuthProvider> {
    provider: Option<A>,
    events: broadcast::Sender<SessionEvent>,
}

impl<A: AuthProvider> AuthGate<A> {
    /// Without a provider every credential call fails with `NotConfigured`.
    pub fn new(provider: Option<A>) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self { provider, events }
    }

    pub const fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn provider(&self) -> AuthResult<&A> {
        self.provider.as_ref().ok_or(AuthError::NotConfigured)
    }

    /// Pick up a persisted session. Failures are logged and treated as
    /// signed out.
    pub async fn restore(&self) -> Option<AuthSession> {
        let provider = self.provider.as_ref()?;
        match provider.restore_session().await {
            Ok(Some(session)) => {
                tracing::info!("Restored session for account {}", session.account_id());
                self.publish(SessionEvent::Restored(session.clone()));
                Some(session)
            }
            Ok(None) => None,
            Err(error) => {
                tracing::warn!("Failed to restore session: {}", error);
                None
            }
        }
    }

    pub async fn sign_up(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignUpOutcome> {
        let outcome = self
            .provider()?
            .sign_up(display_name, email, password)
            .await?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.publish(SessionEvent::SignedIn(session.clone()));
        }
        Ok(outcome)
    }

    /// Check credentials. Success is only observable through the
    /// `SignedIn` event.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<()> {
        let session = self.provider()?.sign_in(email, password).await?;
        tracing::info!("Credentials accepted for account {}", session.account_id());
        self.publish(SessionEvent::SignedIn(session));
        Ok(())
    }

    /// End the session. Server-side failures are logged; the local sign-out
    /// always happens.
    pub async fn sign_out(&self, session: Option<&AuthSession>) {
        if let (Ok(provider), Some(session)) = (self.provider(), session) {
            if let Err(error) = provider.sign_out(session).await {
                tracing::warn!("Remote sign-out failed: {}", error);
            }
        }
        self.publish(SessionEvent::SignedOut);
    }

    /// Exchange an expired session for a fresh one. No event is published;
    /// the account does not change.
    pub async fn refresh(&self, session: &AuthSession) -> AuthResult<AuthSession> {
        let refreshed = self.provider()?.refresh_session(session).await?;
        tracing::debug!("Refreshed session for account {}", refreshed.account_id());
        Ok(refreshed)
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Session event dropped: no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_prefers_recorded_intent() {
        assert_eq!(
            resume_target(Some(PendingIntent::ThemeSelection), View::Editor),
            Some(View::ThemeSelection)
        );
        assert_eq!(
            resume_target(Some(PendingIntent::Preview), View::Login),
            Some(View::Preview)
        );
    }

    #[test]
    fn resume_without_intent_only_leaves_login() {
        assert_eq!(resume_target(None, View::Login), Some(View::Landing));
        assert_eq!(resume_target(None, View::Editor), None);
        assert_eq!(resume_target(None, View::Profile), None);
    }

    #[test]
    fn prompt_attempt_clears_messages() {
        let mut prompt = AuthPrompt {
            open: true,
            error: Some("bad password".to_string()),
            notice: Some("check email".to_string()),
            ..Default::default()
        };
        prompt.begin_attempt();
        assert!(prompt.busy);
        assert_eq!(prompt.error, None);
        assert_eq!(prompt.notice, None);

        prompt.fail(&AuthError::Api("Invalid login credentials (400)".to_string()));
        assert!(!prompt.busy);
        assert_eq!(
            prompt.error.as_deref(),
            Some("Invalid login credentials (400)")
        );
    }
}
