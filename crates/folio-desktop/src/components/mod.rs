//! UI components

mod auth_dialog;
mod sync_badge;

pub use auth_dialog::AuthDialog;
pub use sync_badge::SyncBadge;

use crate::theme::APP_PALETTE;

/// Inline style for a filled call-to-action button.
pub fn primary_button_style() -> String {
    format!(
        "background: {}; color: {}; border: none; border-radius: 8px; padding: 10px 18px; font-weight: 600; cursor: pointer;",
        APP_PALETTE.accent, APP_PALETTE.accent_text
    )
}

/// Inline style for an outlined secondary button.
pub fn secondary_button_style() -> String {
    format!(
        "background: transparent; color: {}; border: 1px solid {}; border-radius: 8px; padding: 10px 18px; cursor: pointer;",
        APP_PALETTE.text_primary, APP_PALETTE.border
    )
}

pub fn input_style() -> String {
    format!(
        "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid {}; border-radius: 6px; font-size: 14px;",
        APP_PALETTE.border
    )
}
