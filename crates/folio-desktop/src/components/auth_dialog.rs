//! Sign-in / sign-up dialog shown over the current screen.

use dioxus::prelude::*;
use folio_core::auth::PromptMode;

use super::{input_style, primary_button_style, secondary_button_style};
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;

#[component]
pub fn AuthDialog() -> Element {
    let context = use_context::<AppContext>();
    let snapshot = context.snapshot();
    let prompt = snapshot.prompt;
    let mode = prompt.mode;

    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move |_: MouseEvent| {
        let controller = (context.controller)();
        let name = display_name();
        let email = email();
        let password = password();
        spawn(async move {
            let result = match mode {
                PromptMode::SignIn => controller.sign_in(&email, &password).await,
                PromptMode::SignUp => controller
                    .sign_up(&name, &email, &password)
                    .await
                    .map(|_| ()),
            };
            if let Err(error) = result {
                tracing::warn!("Authentication failed: {}", error);
            }
        });
    };

    let toggle_mode = move |_: MouseEvent| {
        let next = match mode {
            PromptMode::SignIn => PromptMode::SignUp,
            PromptMode::SignUp => PromptMode::SignIn,
        };
        context.with(|controller| controller.open_auth_prompt(next));
    };

    let dismiss = move |_: MouseEvent| context.with(FolioController::dismiss_auth_prompt);

    let (title, action, switch_label) = match mode {
        PromptMode::SignIn => ("Welcome back", "Sign In", "Need an account? Sign up"),
        PromptMode::SignUp => ("Create your account", "Sign Up", "Have an account? Sign in"),
    };
    let available = context.with(FolioController::auth_available);

    rsx! {
        div {
            class: "auth-overlay",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); display: flex; align-items: center; justify-content: center;",
            div {
                class: "auth-dialog",
                style: "width: 360px; background: {APP_PALETTE.bg_primary}; border-radius: 12px; padding: 24px; display: flex; flex-direction: column; gap: 12px;",
                h2 { style: "margin: 0;", "{title}" }

                if !available {
                    div {
                        class: "auth-hint",
                        style: "color: {APP_PALETTE.text_secondary};",
                        "Sign-in is not configured for this build."
                    }
                } else {
                    if mode == PromptMode::SignUp {
                        input {
                            style: "{input_style()}",
                            placeholder: "Full name",
                            value: "{display_name}",
                            disabled: prompt.busy,
                            oninput: move |event: FormEvent| display_name.set(event.value()),
                        }
                    }
                    input {
                        style: "{input_style()}",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        disabled: prompt.busy,
                        oninput: move |event: FormEvent| email.set(event.value()),
                    }
                    input {
                        style: "{input_style()}",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        disabled: prompt.busy,
                        oninput: move |event: FormEvent| password.set(event.value()),
                    }
                    button {
                        style: "{primary_button_style()}",
                        disabled: prompt.busy,
                        onclick: submit,
                        if prompt.busy { "Working..." } else { "{action}" }
                    }
                    button {
                        style: "background: none; border: none; color: {APP_PALETTE.accent}; cursor: pointer;",
                        disabled: prompt.busy,
                        onclick: toggle_mode,
                        "{switch_label}"
                    }
                }

                if let Some(notice) = prompt.notice.clone() {
                    div {
                        class: "auth-message",
                        style: "color: {APP_PALETTE.success};",
                        "{notice}"
                    }
                }
                if let Some(error) = prompt.error.clone() {
                    div {
                        class: "auth-error",
                        style: "color: {APP_PALETTE.error};",
                        "{error}"
                    }
                }

                button {
                    style: "{secondary_button_style()}",
                    onclick: dismiss,
                    "Cancel"
                }
            }
        }
    }
}
