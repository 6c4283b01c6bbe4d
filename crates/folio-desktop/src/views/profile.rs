use dioxus::prelude::*;

use crate::components::{primary_button_style, secondary_button_style};
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;

/// Account summary and shortcuts into the builder.
#[component]
pub fn Profile() -> Element {
    let context = use_context::<AppContext>();
    let snapshot = context.snapshot();
    let data = &snapshot.app.data;

    let email = snapshot
        .identity()
        .and_then(|user| user.email.clone())
        .unwrap_or_default();
    let name = if data.full_name.is_empty() {
        "Unnamed portfolio".to_string()
    } else {
        data.full_name.clone()
    };
    let summary = format!(
        "{} · {} projects · {} skills · {} theme",
        data.category.label(),
        data.projects.len(),
        data.skills.len(),
        snapshot.app.theme.as_str(),
    );

    let sign_out = move |_: MouseEvent| {
        let controller = (context.controller)();
        spawn(async move { controller.sign_out().await });
    };

    rsx! {
        div {
            class: "profile-view",
            style: "max-width: 640px; margin: 0 auto; padding: 48px 24px; display: flex; flex-direction: column; gap: 16px;",
            h1 { style: "margin: 0;", "{name}" }
            div { style: "color: {APP_PALETTE.text_secondary};", "{email}" }
            div { style: "color: {APP_PALETTE.text_secondary};", "{summary}" }
            if snapshot.published {
                div { style: "color: {APP_PALETTE.success};", "Published" }
            }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                button {
                    style: "{primary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::go_to_editor),
                    "Edit Portfolio"
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::request_theme_selection),
                    "Themes"
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::request_preview),
                    "Preview"
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: sign_out,
                    "Sign Out"
                }
            }
        }
    }
}
