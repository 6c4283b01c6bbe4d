//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;
use folio_core::auth::SupabaseAuthClient;
use folio_core::{Controller, ControllerState, NavigationResult, View};

use crate::services::{CloudStore, KeyringSessionStore};

pub type FolioController = Controller<SupabaseAuthClient<KeyringSessionStore>, CloudStore>;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner of the view state; views only call into it
    pub controller: Signal<FolioController>,
    /// Latest snapshot from the controller's watch channel
    pub state: Signal<ControllerState>,
    /// Base URL share links are built on
    pub share_base_url: Signal<String>,
    /// Outcome of the last share or export action
    pub message: Signal<Option<String>>,
}

impl AppContext {
    pub fn snapshot(&self) -> ControllerState {
        (self.state)()
    }

    /// Apply a controller call to the handle without cloning it.
    pub fn with<R>(&self, call: impl FnOnce(&FolioController) -> R) -> R {
        let controller = self.controller.peek();
        call(&*controller)
    }

    /// Run a navigation request. A refusal needs no further handling: when
    /// sign-in is what blocked it the controller already opened the prompt.
    pub fn navigate(&self, request: impl FnOnce(&FolioController) -> NavigationResult<View>) {
        if let Err(error) = self.with(request) {
            tracing::debug!("Navigation not applied: {}", error);
        }
    }
}
