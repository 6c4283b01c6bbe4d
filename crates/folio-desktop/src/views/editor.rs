//! Portfolio document editor.
//!
//! Every input applies its change through the controller, which saves the
//! document after a quiet period when the user is signed in.

use dioxus::prelude::*;
use folio_core::models::{
    Certification, PortfolioData, Project, Qualification, Skill, SocialNetwork,
};
use folio_core::util::normalize_text_option;

use crate::components::{input_style, primary_button_style, secondary_button_style};
use crate::state::{AppContext, FolioController};
use crate::theme::APP_PALETTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasicField {
    FullName,
    Tagline,
    Bio,
    Email,
    Location,
}

impl BasicField {
    const ALL: [Self; 5] = [
        Self::FullName,
        Self::Tagline,
        Self::Bio,
        Self::Email,
        Self::Location,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Tagline => "Tagline",
            Self::Bio => "About",
            Self::Email => "Email",
            Self::Location => "Location",
        }
    }

    fn value(self, data: &PortfolioData) -> &str {
        match self {
            Self::FullName => &data.full_name,
            Self::Tagline => &data.tagline,
            Self::Bio => &data.bio,
            Self::Email => &data.email,
            Self::Location => &data.location,
        }
    }

    fn apply(self, data: &mut PortfolioData, value: String) {
        match self {
            Self::FullName => data.full_name = value,
            Self::Tagline => data.tagline = value,
            Self::Bio => data.bio = value,
            Self::Email => data.email = value,
            Self::Location => data.location = value,
        }
    }
}

/// Comma-separated tag input to a clean tag list.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn section_style() -> String {
    format!(
        "background: {}; border: 1px solid {}; border-radius: 12px; padding: 20px; display: flex; flex-direction: column; gap: 10px;",
        APP_PALETTE.bg_primary, APP_PALETTE.border
    )
}

#[component]
pub fn Editor() -> Element {
    let context = use_context::<AppContext>();
    let snapshot = context.snapshot();
    let data = snapshot.app.data;

    rsx! {
        div {
            class: "editor-view",
            style: "max-width: 820px; margin: 0 auto; padding: 32px 24px; display: flex; flex-direction: column; gap: 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.navigate(FolioController::back_to_landing),
                    "Back"
                }
                h2 { style: "margin: 0;", "{data.category.label()} portfolio" }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "{secondary_button_style()}",
                        onclick: move |_| context.navigate(FolioController::open_profile),
                        "Profile"
                    }
                    button {
                        style: "{primary_button_style()}",
                        onclick: move |_| context.navigate(FolioController::request_theme_selection),
                        "Generate"
                    }
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Basics" }
                for field in BasicField::ALL {
                    BasicInput {
                        key: "{field.label()}",
                        field,
                        value: field.value(&data).to_string(),
                    }
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Socials" }
                for network in SocialNetwork::ALL {
                    SocialInput {
                        key: "{network.key()}",
                        network,
                        value: data.social(network).unwrap_or_default().to_string(),
                    }
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Skills" }
                for (index, skill) in data.skills.iter().enumerate() {
                    SkillRow { key: "skill-{index}", index, skill: skill.clone() }
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.with(|controller| {
                        controller.edit(|data| data.skills.push(Skill::new("", 50)));
                    }),
                    "Add skill"
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Projects" }
                for (index, project) in data.projects.iter().enumerate() {
                    ProjectRow { key: "{project.id}", index, project: project.clone() }
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.with(|controller| {
                        controller.edit(|data| data.projects.push(Project::new("")));
                    }),
                    "Add project"
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Education" }
                for (index, qualification) in data.qualifications.iter().enumerate() {
                    QualificationRow {
                        key: "{qualification.id}",
                        index,
                        qualification: qualification.clone(),
                    }
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.with(|controller| {
                        controller.edit(|data| data.qualifications.push(Qualification::new("", "")));
                    }),
                    "Add qualification"
                }
            }

            div {
                style: "{section_style()}",
                h3 { style: "margin: 0;", "Certifications" }
                for (index, certification) in data.certifications.iter().enumerate() {
                    CertificationRow {
                        key: "{certification.id}",
                        index,
                        certification: certification.clone(),
                    }
                }
                button {
                    style: "{secondary_button_style()}",
                    onclick: move |_| context.with(|controller| {
                        controller.edit(|data| data.certifications.push(Certification::new("", "")));
                    }),
                    "Add certification"
                }
            }
        }
    }
}

#[component]
fn Labeled(label: &'static str, children: Element) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: {APP_PALETTE.text_secondary};",
            "{label}"
            {children}
        }
    }
}

#[component]
fn BasicInput(field: BasicField, value: String) -> Element {
    let context = use_context::<AppContext>();
    let oninput = move |event: FormEvent| {
        let value = event.value();
        context.with(|controller| controller.edit(|data| field.apply(data, value)));
    };

    rsx! {
        Labeled {
            label: field.label(),
            if field == BasicField::Bio {
                textarea { style: "{input_style()} min-height: 96px;", value: "{value}", oninput }
            } else {
                input { style: "{input_style()}", value: "{value}", oninput }
            }
        }
    }
}

#[component]
fn SocialInput(network: SocialNetwork, value: String) -> Element {
    let context = use_context::<AppContext>();
    let oninput = move |event: FormEvent| {
        let value = event.value();
        context.with(|controller| {
            controller.edit(|data| match normalize_text_option(Some(value)) {
                Some(url) => {
                    data.socials.insert(network, url);
                }
                None => {
                    data.socials.remove(&network);
                }
            });
        });
    };

    rsx! {
        Labeled {
            label: network.key(),
            input { style: "{input_style()}", placeholder: "https://", value: "{value}", oninput }
        }
    }
}

#[component]
fn SkillRow(index: usize, skill: Skill) -> Element {
    let context = use_context::<AppContext>();
    let edit_skill = move |change: Box<dyn FnOnce(&mut Skill)>| {
        context.with(|controller| {
            controller.edit(|data| {
                if let Some(skill) = data.skills.get_mut(index) {
                    change(skill);
                }
            });
        });
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr 160px 48px auto; gap: 8px; align-items: center;",
            input {
                style: "{input_style()}",
                placeholder: "Skill",
                value: "{skill.name}",
                oninput: move |event: FormEvent| {
                    let name = event.value();
                    edit_skill(Box::new(move |skill| skill.name = name));
                },
            }
            input {
                r#type: "range",
                min: "0",
                max: "{Skill::MAX_LEVEL}",
                value: "{skill.level}",
                oninput: move |event: FormEvent| {
                    if let Ok(level) = event.value().parse::<u8>() {
                        edit_skill(Box::new(move |skill| *skill = Skill::new(skill.name.clone(), level)));
                    }
                },
            }
            span { "{skill.level}%" }
            button {
                style: "{secondary_button_style()}",
                onclick: move |_| context.with(|controller| {
                    controller.edit(|data| {
                        if index < data.skills.len() {
                            data.skills.remove(index);
                        }
                    });
                }),
                "Remove"
            }
        }
    }
}

#[component]
fn ProjectRow(index: usize, project: Project) -> Element {
    let context = use_context::<AppContext>();
    let edit_project = move |change: Box<dyn FnOnce(&mut Project)>| {
        context.with(|controller| {
            controller.edit(|data| {
                if let Some(project) = data.projects.get_mut(index) {
                    change(project);
                }
            });
        });
    };
    let tags = project.tags.join(", ");

    rsx! {
        div {
            style: "border-top: 1px solid {APP_PALETTE.border}; padding-top: 10px; display: flex; flex-direction: column; gap: 8px;",
            input {
                style: "{input_style()}",
                placeholder: "Project title",
                value: "{project.title}",
                oninput: move |event: FormEvent| {
                    let title = event.value();
                    edit_project(Box::new(move |project| project.title = title));
                },
            }
            textarea {
                style: "{input_style()}",
                placeholder: "Description",
                value: "{project.description}",
                oninput: move |event: FormEvent| {
                    let description = event.value();
                    edit_project(Box::new(move |project| project.description = description));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Link",
                value: "{project.link}",
                oninput: move |event: FormEvent| {
                    let link = event.value();
                    edit_project(Box::new(move |project| project.link = link));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Tags, comma separated",
                value: "{tags}",
                onchange: move |event: FormEvent| {
                    let tags = parse_tags(&event.value());
                    edit_project(Box::new(move |project| project.tags = tags));
                },
            }
            button {
                style: "{secondary_button_style()}",
                onclick: move |_| context.with(|controller| {
                    controller.edit(|data| {
                        if index < data.projects.len() {
                            data.projects.remove(index);
                        }
                    });
                }),
                "Remove project"
            }
        }
    }
}

#[component]
fn QualificationRow(index: usize, qualification: Qualification) -> Element {
    let context = use_context::<AppContext>();
    let edit_qualification = move |change: Box<dyn FnOnce(&mut Qualification)>| {
        context.with(|controller| {
            controller.edit(|data| {
                if let Some(qualification) = data.qualifications.get_mut(index) {
                    change(qualification);
                }
            });
        });
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 2fr 1fr auto; gap: 8px;",
            input {
                style: "{input_style()}",
                placeholder: "Degree",
                value: "{qualification.degree}",
                oninput: move |event: FormEvent| {
                    let degree = event.value();
                    edit_qualification(Box::new(move |item| item.degree = degree));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Institution",
                value: "{qualification.institution}",
                oninput: move |event: FormEvent| {
                    let institution = event.value();
                    edit_qualification(Box::new(move |item| item.institution = institution));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Year",
                value: "{qualification.year}",
                oninput: move |event: FormEvent| {
                    let year = event.value();
                    edit_qualification(Box::new(move |item| item.year = year));
                },
            }
            button {
                style: "{secondary_button_style()}",
                onclick: move |_| context.with(|controller| {
                    controller.edit(|data| {
                        if index < data.qualifications.len() {
                            data.qualifications.remove(index);
                        }
                    });
                }),
                "Remove"
            }
        }
    }
}

#[component]
fn CertificationRow(index: usize, certification: Certification) -> Element {
    let context = use_context::<AppContext>();
    let edit_certification = move |change: Box<dyn FnOnce(&mut Certification)>| {
        context.with(|controller| {
            controller.edit(|data| {
                if let Some(certification) = data.certifications.get_mut(index) {
                    change(certification);
                }
            });
        });
    };
    let link = certification.link.clone().unwrap_or_default();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 2fr 1fr 2fr auto; gap: 8px;",
            input {
                style: "{input_style()}",
                placeholder: "Certification",
                value: "{certification.name}",
                oninput: move |event: FormEvent| {
                    let name = event.value();
                    edit_certification(Box::new(move |item| item.name = name));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Issuer",
                value: "{certification.issuer}",
                oninput: move |event: FormEvent| {
                    let issuer = event.value();
                    edit_certification(Box::new(move |item| item.issuer = issuer));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Date",
                value: "{certification.date}",
                oninput: move |event: FormEvent| {
                    let date = event.value();
                    edit_certification(Box::new(move |item| item.date = date));
                },
            }
            input {
                style: "{input_style()}",
                placeholder: "Credential link",
                value: "{link}",
                oninput: move |event: FormEvent| {
                    let link = normalize_text_option(Some(event.value()));
                    edit_certification(Box::new(move |item| item.link = link));
                },
            }
            button {
                style: "{secondary_button_style()}",
                onclick: move |_| context.with(|controller| {
                    controller.edit(|data| {
                        if index < data.certifications.len() {
                            data.certifications.remove(index);
                        }
                    });
                }),
                "Remove"
            }
        }
    }
}
