use dioxus::prelude::*;
use folio_core::SyncStatus;

use crate::theme::APP_PALETTE;

/// Small indicator for the remote save state. Hidden while idle.
#[component]
pub fn SyncBadge(status: SyncStatus) -> Element {
    if !status.is_visible() {
        return rsx! {};
    }

    let color = match status {
        SyncStatus::Error => APP_PALETTE.error,
        SyncStatus::Synced => APP_PALETTE.success,
        SyncStatus::Idle | SyncStatus::Syncing => APP_PALETTE.text_secondary,
    };

    rsx! {
        div {
            class: "sync-badge",
            style: "position: fixed; top: 12px; right: 16px; font-size: 12px; color: {color}; background: {APP_PALETTE.bg_primary}; border: 1px solid {APP_PALETTE.border}; border-radius: 999px; padding: 4px 10px;",
            "{status.label()}"
        }
    }
}
