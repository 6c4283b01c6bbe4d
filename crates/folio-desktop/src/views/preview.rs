//! Themed rendering of the portfolio with share, export and publish actions.

use dioxus::prelude::*;
use folio_core::models::PortfolioData;
use folio_core::Theme;

use crate::components::{primary_button_style, secondary_button_style};
use crate::services::save_export_with_dialog;
use crate::state::{AppContext, FolioController};
use crate::theme::{is_dark, preview_palette, APP_PALETTE};

#[component]
pub fn Preview() -> Element {
    let mut context = use_context::<AppContext>();
    let snapshot = context.snapshot();
    let read_only = snapshot.read_only;
    let mut share_link = use_signal(|| None::<String>);

    let share = move |_: MouseEvent| {
        let base_url = context.share_base_url.peek().clone();
        match context.with(|controller| controller.share_url(&base_url)) {
            Ok(url) => share_link.set(Some(url)),
            Err(error) => {
                tracing::warn!("Failed to build share link: {}", error);
                context.message.set(Some(format!("Could not create a share link: {error}")));
            }
        }
    };

    let export = move |_: MouseEvent| {
        let html = context.with(FolioController::export_html);
        spawn(async move {
            match save_export_with_dialog(html).await {
                Ok(Some(path)) => {
                    context
                        .message
                        .set(Some(format!("Exported to {}", path.display())));
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!("Export failed: {}", error);
                    context.message.set(Some(format!("Export failed: {error}")));
                }
            }
        });
    };

    let publish = move |_: MouseEvent| {
        let controller = (context.controller)();
        spawn(async move {
            if let Err(error) = controller.publish().await {
                tracing::warn!("Publish failed: {}", error);
            }
        });
    };

    rsx! {
        div {
            class: "preview-view",
            div {
                class: "preview-toolbar",
                style: "display: flex; gap: 8px; align-items: center; padding: 12px 16px; background: {APP_PALETTE.bg_primary}; border-bottom: 1px solid {APP_PALETTE.border};",
                if read_only {
                    span {
                        style: "color: {APP_PALETTE.text_secondary}; flex: 1;",
                        "You are viewing a shared portfolio."
                    }
                } else {
                    button {
                        style: "{secondary_button_style()}",
                        onclick: move |_| context.navigate(FolioController::back_to_theme_selection),
                        "Back to themes"
                    }
                    span { style: "flex: 1;" }
                    button { style: "{secondary_button_style()}", onclick: share, "Share link" }
                    button { style: "{secondary_button_style()}", onclick: export, "Export HTML" }
                    button { style: "{primary_button_style()}", onclick: publish, "Publish" }
                }
            }

            if let Some(link) = share_link() {
                div {
                    class: "share-link",
                    style: "padding: 8px 16px; background: {APP_PALETTE.bg_secondary};",
                    input {
                        style: "width: 100%; font-family: monospace;",
                        readonly: true,
                        value: "{link}",
                    }
                }
            }
            if snapshot.published {
                div {
                    style: "padding: 8px 16px; color: {APP_PALETTE.success};",
                    "Your portfolio is published."
                }
            }
            if let Some(notice) = snapshot.notice.clone() {
                div { style: "padding: 8px 16px; color: {APP_PALETTE.error};", "{notice}" }
            }
            if let Some(message) = (context.message)() {
                div { style: "padding: 8px 16px; color: {APP_PALETTE.text_secondary};", "{message}" }
            }

            PortfolioPage { data: snapshot.app.data.clone(), theme: snapshot.app.theme }
        }
    }
}

#[component]
fn PortfolioPage(data: PortfolioData, theme: Theme) -> Element {
    let palette = preview_palette(theme);
    let card_shadow = if is_dark(theme) {
        "none"
    } else {
        "0 1px 3px rgba(0, 0, 0, 0.08)"
    };
    let name = if data.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        data.full_name.clone()
    };
    let tagline = if data.tagline.is_empty() {
        "Creative Professional".to_string()
    } else {
        data.tagline.clone()
    };

    rsx! {
        div {
            class: "portfolio-page theme-{theme.as_str()}",
            style: "min-height: 100vh; background: {palette.bg_primary}; color: {palette.text_primary}; padding: 48px 24px;",
            div {
                style: "max-width: 880px; margin: 0 auto; display: flex; flex-direction: column; gap: 32px;",
                header {
                    h1 { style: "font-size: 48px; margin: 0;", "{name}" }
                    p { style: "color: {palette.accent}; font-size: 20px; margin: 8px 0;", "{tagline}" }
                    if !data.location.is_empty() {
                        p { style: "color: {palette.text_secondary}; margin: 0;", "{data.location}" }
                    }
                }
                if !data.bio.is_empty() {
                    section {
                        h2 { "About" }
                        p { style: "color: {palette.text_secondary}; line-height: 1.6;", "{data.bio}" }
                    }
                }
                if !data.skills.is_empty() {
                    section {
                        h2 { "Skills" }
                        for skill in data.skills.iter() {
                            div {
                                style: "margin-bottom: 8px;",
                                div { "{skill.name}" }
                                div {
                                    style: "height: 6px; background: {palette.bg_secondary}; border-radius: 3px;",
                                    div { style: "height: 6px; width: {skill.level}%; background: {palette.accent}; border-radius: 3px;" }
                                }
                            }
                        }
                    }
                }
                if !data.projects.is_empty() {
                    section {
                        h2 { "Projects" }
                        div {
                            style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",
                            for project in data.projects.iter() {
                                div {
                                    key: "{project.id}",
                                    style: "background: {palette.bg_secondary}; border-radius: 12px; padding: 16px; box-shadow: {card_shadow};",
                                    h3 { style: "margin-top: 0;", "{project.title}" }
                                    p { style: "color: {palette.text_secondary};", "{project.description}" }
                                    div {
                                        style: "display: flex; gap: 6px; flex-wrap: wrap;",
                                        for tag in project.tags.iter() {
                                            span { style: "color: {palette.accent}; font-size: 12px;", "#{tag}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if !data.qualifications.is_empty() {
                    section {
                        h2 { "Education" }
                        for qualification in data.qualifications.iter() {
                            p {
                                key: "{qualification.id}",
                                strong { "{qualification.degree}" }
                                " · {qualification.institution} {qualification.year}"
                            }
                        }
                    }
                }
                if !data.certifications.is_empty() {
                    section {
                        h2 { "Certifications" }
                        for certification in data.certifications.iter() {
                            p {
                                key: "{certification.id}",
                                strong { "{certification.name}" }
                                " · {certification.issuer} {certification.date}"
                            }
                        }
                    }
                }
                if !data.email.is_empty() {
                    footer { style: "color: {palette.text_secondary};", "Contact: {data.email}" }
                }
            }
        }
    }
}
