use dioxus::prelude::*;
use folio_core::auth::PromptMode;

use crate::components::{primary_button_style, secondary_button_style};
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;

/// Entry screen: sign in, create an account, or continue as a guest.
#[component]
pub fn Login() -> Element {
    let context = use_context::<AppContext>();

    rsx! {
        div {
            class: "login-view",
            style: "max-width: 420px; margin: 0 auto; padding-top: 18vh; display: flex; flex-direction: column; gap: 14px; text-align: center;",
            h1 { style: "margin: 0; font-size: 40px;", "Folio" }
            p {
                style: "color: {APP_PALETTE.text_secondary}; margin: 0 0 12px;",
                "Build a portfolio, pick a theme, share it anywhere."
            }
            button {
                style: "{primary_button_style()}",
                onclick: move |_| context.with(|controller| controller.open_auth_prompt(PromptMode::SignIn)),
                "Sign In"
            }
            button {
                style: "{secondary_button_style()}",
                onclick: move |_| context.with(|controller| controller.open_auth_prompt(PromptMode::SignUp)),
                "Create Account"
            }
            button {
                style: "background: none; border: none; color: {APP_PALETTE.accent}; cursor: pointer;",
                onclick: move |_| context.navigate(FolioController::continue_as_guest),
                "Continue as guest"
            }
        }
    }
}
