use dioxus::prelude::*;
use folio_core::Theme;

use crate::components::{primary_button_style, secondary_button_style};
use crate::state::{AppContext, FolioController};
use crate::theme::{preview_palette, APP_PALETTE};

#[component]
pub fn ThemeSelection() -> Element {
    let context = use_context::<AppContext>();
    let current = context.snapshot().app.theme;

    rsx! {
        div {
            class: "theme-selection-view",
            style: "max-width: 960px; margin: 0 auto; padding: 32px 24px; display: flex; flex-direction: column; gap: 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::go_to_editor),
                    "Back to editor"
                }
                h2 { style: "margin: 0;", "Choose a theme" }
                button {
                    style: "{primary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::request_preview),
                    "Preview"
                }
            }
            div {
                class: "theme-grid",
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                for theme in Theme::ALL {
                    ThemeCard { key: "{theme.as_str()}", theme, selected: theme == current }
                }
            }
        }
    }
}

#[component]
fn ThemeCard(theme: Theme, selected: bool) -> Element {
    let context = use_context::<AppContext>();
    let palette = preview_palette(theme);
    let outline = if selected {
        APP_PALETTE.accent
    } else {
        APP_PALETTE.border
    };

    rsx! {
        button {
            class: "theme-card",
            style: "border: 3px solid {outline}; border-radius: 12px; padding: 0; overflow: hidden; cursor: pointer; background: {palette.bg_primary};",
            onclick: move |_| context.with(|controller| controller.set_theme(theme)),
            div {
                style: "height: 96px; background: {palette.bg_secondary}; display: flex; align-items: center; justify-content: center;",
                div { style: "width: 48px; height: 48px; border-radius: 50%; background: {palette.accent};" }
            }
            div {
                style: "padding: 12px; color: {palette.text_primary}; text-transform: capitalize; font-weight: 600;",
                "{theme.as_str()}"
            }
        }
    }
}
