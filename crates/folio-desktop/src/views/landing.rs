use dioxus::prelude::*;
use folio_core::models::Category;

use crate::components::secondary_button_style;
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;

/// Category picker. Choosing one opens the editor.
#[component]
pub fn Landing() -> Element {
    let context = use_context::<AppContext>();
    let snapshot = context.snapshot();
    let selected = snapshot.app.data.category;
    let identity = snapshot
        .identity()
        .and_then(|user| user.email.clone())
        .unwrap_or_else(|| "Guest".to_string());

    rsx! {
        div {
            class: "landing-view",
            style: "max-width: 960px; margin: 0 auto; padding: 48px 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "margin: 0;", "What do you do?" }
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    span { style: "color: {APP_PALETTE.text_secondary};", "{identity}" }
                    button {
                        style: "{secondary_button_style()}",
                        onclick: move |_| context.navigate(FolioController::open_profile),
                        "Profile"
                    }
                }
            }
            p {
                style: "color: {APP_PALETTE.text_secondary};",
                "Pick a category to start your portfolio."
            }
            div {
                class: "category-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                for category in Category::ALL {
                    CategoryCard {
                        key: "{category.label()}",
                        category,
                        selected: category == selected,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: Category, selected: bool) -> Element {
    let context = use_context::<AppContext>();
    let border = if selected {
        APP_PALETTE.accent
    } else {
        APP_PALETTE.border
    };

    rsx! {
        button {
            class: "category-card",
            style: "text-align: left; background: {APP_PALETTE.bg_primary}; border: 2px solid {border}; border-radius: 12px; padding: 20px; cursor: pointer;",
            onclick: move |_| context.navigate(|controller| controller.select_category(category)),
            h3 { style: "margin: 0 0 8px;", "{category.label()}" }
            p {
                style: "margin: 0; color: {APP_PALETTE.text_secondary};",
                "{category.description()}"
            }
        }
    }
}
