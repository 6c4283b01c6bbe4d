//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::auth::{resolve_optional_supabase_config, AuthGate, SupabaseAuthClient};
use folio_core::config::{ClientConfig, SyncSettings, DEFAULT_SHARE_BASE_URL};
use folio_core::remote::SupabasePortfolioStore;
use folio_core::{Bootstrap, Controller, View};

use crate::bootstrap_config::load_client_config;
use crate::components::{AuthDialog, SyncBadge};
use crate::services::{CloudStore, KeyringSessionStore};
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;
use crate::views::{Editor, Landing, Login, Preview, Profile, ThemeSelection};

/// Environment variable carrying a share link to open at startup.
const SHARE_LINK_ENV: &str = "FOLIO_SHARE_LINK";

fn build_controller(config: &ClientConfig) -> FolioController {
    let supabase = resolve_optional_supabase_config(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    )
    .unwrap_or_else(|error| {
        tracing::warn!("Ignoring Supabase configuration: {}", error);
        None
    });

    let (auth, store) = match supabase {
        Some((url, anon_key)) => {
            let auth = SupabaseAuthClient::new(&url, anon_key.clone(), KeyringSessionStore::default())
                .map_err(|error| tracing::warn!("Failed to initialize auth: {}", error))
                .ok();
            let store =
                SupabasePortfolioStore::with_table(&url, anon_key, &config.portfolios_table())
                    .map_err(|error| tracing::warn!("Failed to initialize store: {}", error))
                    .ok();
            (auth, store)
        }
        None => (None, None),
    };

    let store = CloudStore::new(store);
    if !store.is_configured() {
        tracing::info!("Cloud sync is not configured; running in guest-only mode");
    }
    Controller::new(AuthGate::new(auth), store, SyncSettings::default())
}

/// Share link from the first CLI argument or `FOLIO_SHARE_LINK`.
fn startup_share_link() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SHARE_LINK_ENV).ok())
        .filter(|link| !link.trim().is_empty())
}

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(|| Rc::new(load_client_config()));
    let controller = use_hook(|| build_controller(&config));
    let state = use_signal(|| controller.snapshot());
    let message = use_signal(|| None::<String>);

    let share_base_url = use_signal(|| {
        config.share_base_url().unwrap_or_else(|error| {
            tracing::warn!("{}", error);
            DEFAULT_SHARE_BASE_URL.to_string()
        })
    });

    // Keeps the session listener alive for the lifetime of the window.
    let _listener = use_hook({
        let controller = controller.clone();
        move || Rc::new(controller.spawn_session_listener())
    });

    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            let mut state = state;
            async move {
                let mut updates = controller.watch();
                loop {
                    let latest = updates.borrow_and_update().clone();
                    state.set(latest);
                    if updates.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move {
                let link = startup_share_link();
                match controller.bootstrap(link.as_deref()).await {
                    Bootstrap::SharedPreview => tracing::info!("Opened shared portfolio"),
                    Bootstrap::Restored => tracing::info!("Restored previous session"),
                    Bootstrap::SignedOut => tracing::debug!("No stored session"),
                }
            }
        }
    });

    let controller_signal = use_signal(|| controller.clone());
    use_context_provider(|| AppContext {
        controller: controller_signal,
        state,
        share_base_url,
        message,
    });

    let snapshot = state();
    let colors = APP_PALETTE;
    let screen = match snapshot.app.view {
        View::Login => rsx! { Login {} },
        View::Landing => rsx! { Landing {} },
        View::Editor => rsx! { Editor {} },
        View::ThemeSelection => rsx! { ThemeSelection {} },
        View::Preview => rsx! { Preview {} },
        View::Profile => rsx! { Profile {} },
    };

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            if snapshot.app.view != View::Login && snapshot.app.view != View::Preview {
                SyncBadge { status: snapshot.sync_status }
            }

            {screen}

            if snapshot.prompt.open {
                AuthDialog {}
            }
        }
    }
}
