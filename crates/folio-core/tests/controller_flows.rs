mod support;

use std::time::Duration;

use folio_core::auth::{PendingIntent, PromptMode, SessionEvent, SignUpOutcome};
use folio_core::controller::{PUBLISH_FAILED_NOTICE, SIGN_UP_NOTICE};
use folio_core::models::{Category, PortfolioData, Project, Theme};
use folio_core::remote::RemoteError;
use folio_core::{share, Bootstrap, Error, NavigationError, SyncStatus, View};
use pretty_assertions::assert_eq;

use support::{
    apply_next_event, controller, quiet_period, remote_document, session_for, settle, sign_in,
    FakeAuth, MemoryStore, ACCOUNT_ID, EMAIL, PASSWORD,
};

fn guest_in_editor(controller: &support::TestController) {
    controller.continue_as_guest().unwrap();
    controller.select_category(Category::Design).unwrap();
}

#[tokio::test(start_paused = true)]
async fn starts_at_login_with_empty_document() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Login);
    assert_eq!(state.app.data, PortfolioData::empty());
    assert_eq!(state.app.theme, Theme::Minimal);
    assert!(!state.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn guest_generate_resumes_at_theme_selection_with_remote_document() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Bold);
    let controller = controller(&auth, &store);
    guest_in_editor(&controller);

    assert_eq!(
        controller.request_theme_selection(),
        Err(NavigationError::AuthRequired)
    );
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Editor);
    assert!(state.prompt.open);
    assert_eq!(state.pending_intent, Some(PendingIntent::ThemeSelection));

    sign_in(&controller).await;

    let state = controller.snapshot();
    assert_eq!(state.app.view, View::ThemeSelection);
    assert_eq!(state.app.data, remote_document());
    assert_eq!(state.app.theme, Theme::Bold);
    assert_eq!(state.pending_intent, None);
    assert!(!state.prompt.open);
    assert_eq!(state.identity().map(|user| user.id.as_str()), Some(ACCOUNT_ID));
}

#[tokio::test(start_paused = true)]
async fn resumed_view_waits_for_fetch() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Glass);
    store.delay_fetch(Duration::from_secs(2));
    let controller = controller(&auth, &store);
    guest_in_editor(&controller);
    let _ = controller.request_theme_selection();

    let listener = controller.spawn_session_listener();
    controller.sign_in(EMAIL, PASSWORD).await.unwrap();

    tokio::time::sleep(Duration::from_secs(1)).await;
    settle().await;
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Editor);
    assert_eq!(state.sync_status, SyncStatus::Syncing);
    assert_eq!(state.app.data.full_name, "");

    tokio::time::sleep(Duration::from_secs(2)).await;
    settle().await;
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::ThemeSelection);
    assert_eq!(state.app.data, remote_document());
    drop(listener);
}

#[tokio::test(start_paused = true)]
async fn gated_navigation_checks_the_edge_before_prompting() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    guest_in_editor(&controller);

    assert_eq!(
        controller.request_preview(),
        Err(NavigationError::InvalidTransition {
            from: View::Editor,
            to: View::Preview
        })
    );
    let state = controller.snapshot();
    assert!(!state.prompt.open);
    assert_eq!(state.pending_intent, None);

    let _ = controller.request_theme_selection();
    let _ = controller.request_theme_selection();
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Editor);
    assert_eq!(state.pending_intent, Some(PendingIntent::ThemeSelection));
}

#[tokio::test(start_paused = true)]
async fn dismissing_the_prompt_forgets_the_intent() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    guest_in_editor(&controller);
    let _ = controller.request_theme_selection();

    controller.dismiss_auth_prompt();

    let state = controller.snapshot();
    assert!(!state.prompt.open);
    assert_eq!(state.pending_intent, None);
    assert_eq!(state.app.view, View::Editor);
}

#[tokio::test(start_paused = true)]
async fn preview_intent_from_shared_link_resumes_at_preview() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let controller = controller(&auth, &MemoryStore::default());
    let mut shared = PortfolioData::empty();
    shared.full_name = "Visitor".to_string();
    let token = share::encode(&shared, Theme::Modern).unwrap();
    controller.bootstrap(Some(&format!("p={token}"))).await;

    controller.back_to_theme_selection().unwrap();
    assert_eq!(controller.request_preview(), Err(NavigationError::AuthRequired));
    assert_eq!(
        controller.snapshot().pending_intent,
        Some(PendingIntent::Preview)
    );

    sign_in(&controller).await;

    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Preview);
    assert!(!state.read_only);
    assert_eq!(state.app.data.full_name, "Visitor");
}

#[tokio::test(start_paused = true)]
async fn sign_in_from_login_without_intent_lands() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let controller = controller(&auth, &MemoryStore::default());
    controller.open_auth_prompt(PromptMode::SignIn);

    sign_in(&controller).await;

    assert_eq!(controller.snapshot().app.view, View::Landing);
}

#[tokio::test(start_paused = true)]
async fn sign_in_without_intent_keeps_current_view() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let controller = controller(&auth, &MemoryStore::default());
    controller.continue_as_guest().unwrap();
    assert_eq!(controller.open_profile(), Err(NavigationError::AuthRequired));
    assert_eq!(controller.snapshot().pending_intent, None);

    sign_in(&controller).await;
    assert_eq!(controller.snapshot().app.view, View::Landing);

    controller.open_profile().unwrap();
    for target in [View::Editor, View::Profile, View::ThemeSelection] {
        match target {
            View::Editor => controller.go_to_editor().unwrap(),
            View::Profile => controller.open_profile().unwrap(),
            _ => controller.request_theme_selection().unwrap(),
        };
        assert_eq!(controller.snapshot().app.view, target);
    }
}

#[tokio::test(start_paused = true)]
async fn failed_sign_in_keeps_prompt_open_with_reason() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let controller = controller(&auth, &MemoryStore::default());
    guest_in_editor(&controller);
    let _ = controller.request_theme_selection();

    let error = controller.sign_in(EMAIL, "wrong").await.unwrap_err();
    assert_eq!(error.to_string(), "Invalid login credentials (400)");

    let state = controller.snapshot();
    assert!(state.prompt.open);
    assert!(!state.prompt.busy);
    assert_eq!(
        state.prompt.error.as_deref(),
        Some("Invalid login credentials (400)")
    );
    assert_eq!(state.pending_intent, Some(PendingIntent::ThemeSelection));
    assert_eq!(state.app.view, View::Editor);

    let mut events = controller.subscribe_sessions();
    controller.sign_in(EMAIL, PASSWORD).await.unwrap();
    assert_eq!(controller.snapshot().prompt.error, None);
    apply_next_event(&controller, &mut events).await;
    assert_eq!(controller.snapshot().app.view, View::ThemeSelection);
}

#[tokio::test(start_paused = true)]
async fn sign_in_is_only_visible_through_the_event() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    let mut events = controller.subscribe_sessions();

    controller.sign_in(EMAIL, PASSWORD).await.unwrap();
    assert!(!controller.snapshot().is_authenticated());
    assert_eq!(store.fetches(), 0);

    let event = apply_next_event(&controller, &mut events).await;
    assert!(matches!(event, SessionEvent::SignedIn(_)));
    assert!(controller.snapshot().is_authenticated());
    assert_eq!(store.fetches(), 1);
}

#[tokio::test(start_paused = true)]
async fn burst_of_bio_edits_saves_once_with_final_text() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;
    controller.select_category(Category::Cooking).unwrap();

    for bio in ["C", "Ch", "Chef"] {
        controller.edit(|data| data.bio = bio.to_string());
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    tokio::time::sleep(quiet_period() - Duration::from_millis(300)).await;
    settle().await;
    assert!(store.upserts().is_empty());

    tokio::time::sleep(Duration::from_millis(500)).await;
    settle().await;
    let upserts = store.upserts();
    assert_eq!(upserts.len(), 1);
    assert_eq!(upserts[0].account_id, ACCOUNT_ID);
    assert_eq!(upserts[0].content.bio, "Chef");
    assert_eq!(upserts[0].content.category, Category::Cooking);
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Synced);
}

#[tokio::test(start_paused = true)]
async fn failed_debounced_save_reports_error_until_next_save() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;

    store.fail_upsert(true);
    controller.edit(|data| data.tagline = "First".to_string());
    tokio::time::sleep(quiet_period()).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);
    assert!(!controller.save_pending());

    store.fail_upsert(false);
    controller.edit(|data| data.tagline = "Second".to_string());
    tokio::time::sleep(quiet_period()).await;
    settle().await;
    assert_eq!(store.upserts().len(), 2);
    assert_eq!(store.record(ACCOUNT_ID).unwrap().content.tagline, "Second");
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Synced);
}

#[tokio::test(start_paused = true)]
async fn login_fetch_does_not_trigger_a_save() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Classic);
    let controller = controller(&auth, &store);
    controller.open_auth_prompt(PromptMode::SignIn);

    sign_in(&controller).await;
    tokio::time::sleep(quiet_period() * 4).await;
    settle().await;
    assert!(store.upserts().is_empty());
    assert!(!controller.save_pending());

    controller.set_theme(Theme::Vibrant);
    tokio::time::sleep(quiet_period() + Duration::from_millis(10)).await;
    settle().await;
    let upserts = store.upserts();
    assert_eq!(upserts.len(), 1);
    assert_eq!(upserts[0].theme, Theme::Vibrant);
    assert_eq!(upserts[0].content, remote_document());
}

#[tokio::test(start_paused = true)]
async fn guest_edits_are_never_saved() {
    let store = MemoryStore::default();
    let controller = controller(&FakeAuth::default(), &store);
    guest_in_editor(&controller);
    controller.edit(|data| data.projects.push(Project::new("Local only")));

    tokio::time::sleep(quiet_period() * 2).await;
    settle().await;
    assert!(store.upserts().is_empty());
    assert!(!controller.save_pending());
}

#[tokio::test(start_paused = true)]
async fn sign_out_resets_view_and_document_from_any_view() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Glass);
    let controller = controller(&auth, &store);
    controller.open_auth_prompt(PromptMode::SignIn);
    sign_in(&controller).await;
    controller.select_category(Category::Painting).unwrap();
    controller.request_theme_selection().unwrap();
    controller.request_preview().unwrap();

    controller.sign_out().await;

    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Login);
    assert_eq!(state.app.data, PortfolioData::empty());
    assert!(!state.is_authenticated());
    assert_eq!(state.pending_intent, None);
    assert_eq!(auth.sign_outs(), 1);
}

#[tokio::test(start_paused = true)]
async fn pending_save_is_cancelled_by_sign_out() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;

    controller.edit(|data| data.full_name = "Unsaved".to_string());
    assert!(controller.save_pending());
    controller.sign_out().await;

    tokio::time::sleep(quiet_period() * 2).await;
    settle().await;
    assert!(store.upserts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn inflight_save_result_after_sign_out_is_discarded() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    store.delay_upsert(Duration::from_secs(5));
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;

    controller.edit(|data| data.tagline = "In flight".to_string());
    tokio::time::sleep(quiet_period() + Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Syncing);

    controller.sign_out().await;
    let after_sign_out = controller.snapshot();

    tokio::time::sleep(Duration::from_secs(6)).await;
    settle().await;
    assert_eq!(store.upserts().len(), 1);
    let state = controller.snapshot();
    assert_eq!(state, after_sign_out);
    assert_eq!(state.sync_status, SyncStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn sign_in_after_sign_out_is_a_fresh_load() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Modern);
    let controller = controller(&auth, &store);
    controller.open_auth_prompt(PromptMode::SignIn);
    sign_in(&controller).await;
    controller.sign_out().await;

    controller.open_auth_prompt(PromptMode::SignIn);
    sign_in(&controller).await;
    assert_eq!(store.fetches(), 2);
    assert_eq!(controller.snapshot().app.data, remote_document());

    tokio::time::sleep(quiet_period() * 3).await;
    settle().await;
    assert!(store.upserts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_reports_error_and_still_enables_sync() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    store.fail_fetch();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);

    controller.edit(|data| data.location = "Lisbon".to_string());
    tokio::time::sleep(quiet_period() + Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(store.upserts().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn synced_status_clears_but_error_persists() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    sign_in(&controller).await;

    controller.edit(|data| data.email = "ada@example.com".to_string());
    tokio::time::sleep(quiet_period() + Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Synced);
    tokio::time::sleep(Duration::from_secs(4)).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Idle);

    store.fail_upsert(true);
    controller.edit(|data| data.email = "ada@lovelace.dev".to_string());
    tokio::time::sleep(quiet_period() + Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);
    tokio::time::sleep(Duration::from_secs(10)).await;
    settle().await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);
}

#[tokio::test(start_paused = true)]
async fn shared_link_opens_read_only_preview_without_auth() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    auth.persist(session_for(ACCOUNT_ID, EMAIL));
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);

    let mut shared = PortfolioData::empty();
    shared.full_name = "Shared Person".to_string();
    let token = share::encode(&shared, Theme::Vibrant).unwrap();

    let outcome = controller.bootstrap(Some(&format!("?p={token}"))).await;

    assert_eq!(outcome, Bootstrap::SharedPreview);
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Preview);
    assert_eq!(state.app.data, shared);
    assert_eq!(state.app.theme, Theme::Vibrant);
    assert!(state.read_only);
    assert!(!state.is_authenticated());
    assert_eq!(auth.restores(), 0);
    assert_eq!(store.fetches(), 0);
}

#[tokio::test(start_paused = true)]
async fn malformed_share_link_falls_back_to_session_restore() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    auth.persist(session_for(ACCOUNT_ID, EMAIL));
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Bold);
    let controller = controller(&auth, &store);

    let outcome = controller.bootstrap(Some("?p=definitely-not-a-token")).await;

    assert_eq!(outcome, Bootstrap::Restored);
    let state = controller.snapshot();
    assert_eq!(state.app.view, View::Landing);
    assert_eq!(state.app.data, remote_document());
    assert!(!state.read_only);

    tokio::time::sleep(quiet_period() * 2).await;
    settle().await;
    assert!(store.upserts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn bootstrap_without_session_stays_on_login() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    assert_eq!(controller.bootstrap(None).await, Bootstrap::SignedOut);
    assert_eq!(controller.snapshot().app.view, View::Login);
}

#[tokio::test(start_paused = true)]
async fn sign_up_with_confirmation_prefills_name() {
    let auth = FakeAuth::default();
    auth.require_confirmation();
    let controller = controller(&auth, &MemoryStore::default());
    controller.open_auth_prompt(PromptMode::SignUp);

    let outcome = controller
        .sign_up("Grace Hopper", "grace@example.com", "cobol")
        .await
        .unwrap();

    assert_eq!(outcome, SignUpOutcome::ConfirmationRequired);
    let state = controller.snapshot();
    assert_eq!(state.prompt.notice.as_deref(), Some(SIGN_UP_NOTICE));
    assert_eq!(state.prompt.mode, PromptMode::SignIn);
    assert!(state.prompt.open);
    assert!(!state.is_authenticated());
    assert_eq!(state.app.data.full_name, "Grace Hopper");

    let duplicate = controller
        .sign_up("Grace", "grace@example.com", "cobol")
        .await
        .unwrap_err();
    assert!(duplicate.to_string().contains("already registered"));
}

#[tokio::test(start_paused = true)]
async fn publish_requires_auth_and_reports_outcome() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();

    let error = controller.publish().await.unwrap_err();
    assert!(matches!(
        error,
        Error::Navigation(NavigationError::AuthRequired)
    ));
    assert!(controller.snapshot().prompt.open);
    assert_eq!(controller.snapshot().pending_intent, None);

    sign_in(&controller).await;
    controller.edit(|data| data.full_name = "Published".to_string());
    controller.publish().await.unwrap();
    assert!(controller.snapshot().published);
    assert_eq!(store.upserts().len(), 1);

    tokio::time::sleep(quiet_period() * 2).await;
    settle().await;
    assert_eq!(store.upserts().len(), 1);

    store.fail_upsert(true);
    let error = controller.publish().await.unwrap_err();
    assert!(matches!(error, Error::Remote(_)));
    assert_eq!(
        controller.snapshot().notice.as_deref(),
        Some(PUBLISH_FAILED_NOTICE)
    );
}

#[tokio::test(start_paused = true)]
async fn publish_from_shared_preview_is_refused_without_prompt() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    let token = share::encode(&remote_document(), Theme::Bold).unwrap();
    controller.bootstrap(Some(&format!("p={token}"))).await;

    let error = controller.publish().await.unwrap_err();

    assert!(matches!(error, Error::ReadOnly));
    let state = controller.snapshot();
    assert!(!state.prompt.open);
    assert!(!state.published);
    assert_eq!(state.notice, None);
}

#[tokio::test(start_paused = true)]
async fn expired_session_is_refreshed_before_the_fetch() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    auth.issue_expired(true);
    let store = MemoryStore::with_record(ACCOUNT_ID, remote_document(), Theme::Classic);
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();

    let mut events = controller.subscribe_sessions();
    controller.sign_in(EMAIL, PASSWORD).await.unwrap();
    auth.issue_expired(false);
    apply_next_event(&controller, &mut events).await;

    assert_eq!(auth.refreshes(), 1);
    let state = controller.snapshot();
    assert_eq!(state.app.data, remote_document());
    assert_eq!(state.sync_status, SyncStatus::Synced);
    let session = state.session.unwrap();
    assert!(!session.is_expired());
    assert_eq!(session.access_token, format!("access-{ACCOUNT_ID}-1"));
}

#[tokio::test(start_paused = true)]
async fn expired_session_is_refreshed_before_a_save() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    auth.issue_expired(true);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();

    // The refresh during the fetch still yields an expired token, so the
    // fetch is rejected and the session stays stale.
    sign_in(&controller).await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);
    assert!(controller.snapshot().session.unwrap().is_expired());

    auth.issue_expired(false);
    controller.select_category(Category::Design).unwrap();
    tokio::time::sleep(quiet_period()).await;
    settle().await;

    assert_eq!(auth.refreshes(), 2);
    let upserts = store.upserts();
    assert_eq!(upserts.len(), 1);
    assert_eq!(upserts[0].access_token, format!("access-{ACCOUNT_ID}-2"));
    assert_eq!(upserts[0].content.category, Category::Design);
    let state = controller.snapshot();
    assert_eq!(state.sync_status, SyncStatus::Synced);
    assert!(!state.session.unwrap().is_expired());
}

#[tokio::test(start_paused = true)]
async fn failed_refresh_marks_the_save_as_failed() {
    let auth = FakeAuth::with_account(EMAIL, PASSWORD, ACCOUNT_ID);
    let store = MemoryStore::default();
    let controller = controller(&auth, &store);
    controller.continue_as_guest().unwrap();
    auth.issue_expired(true);
    auth.fail_refresh();

    sign_in(&controller).await;
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);
    assert_eq!(store.fetches(), 0);

    controller.edit(|data| data.bio = "Unsaved".to_string());
    tokio::time::sleep(quiet_period()).await;
    settle().await;

    assert_eq!(auth.refreshes(), 2);
    assert!(store.upserts().is_empty());
    assert_eq!(controller.snapshot().sync_status, SyncStatus::Error);

    let error = controller.publish().await.unwrap_err();
    assert!(matches!(error, Error::Remote(RemoteError::Session(_))));
}

#[tokio::test(start_paused = true)]
async fn invalid_transitions_leave_view_unchanged() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    assert_eq!(
        controller.go_to_editor(),
        Err(NavigationError::InvalidTransition {
            from: View::Login,
            to: View::Editor
        })
    );
    assert!(controller.select_category(Category::Design).is_err());
    assert_eq!(controller.snapshot().app.view, View::Login);
    assert_eq!(controller.snapshot().app.data.category, Category::WebDevelopment);
}

#[tokio::test(start_paused = true)]
async fn watch_receives_state_changes() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    let mut updates = controller.watch();
    controller.continue_as_guest().unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().app.view, View::Landing);
}

#[tokio::test(start_paused = true)]
async fn share_url_and_export_reflect_current_document() {
    let controller = controller(&FakeAuth::default(), &MemoryStore::default());
    guest_in_editor(&controller);
    controller.edit(|data| data.full_name = "Linus & Co".to_string());
    controller.set_theme(Theme::Classic);

    let url = controller.share_url("https://folio.app/").unwrap();
    let shared = share::from_query(&url).unwrap();
    assert_eq!(shared.data.full_name, "Linus & Co");
    assert_eq!(shared.theme, Theme::Classic);

    let html = controller.export_html();
    assert!(html.contains("Linus &amp; Co"));
}
