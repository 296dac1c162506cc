//! Page markup: navbar, header, the six content sections and the
//! back-to-top button.

use std::rc::Rc;

use dioxus::prelude::*;
use vitae::content::{Profile, Resume};
use vitae::options::{Options, SceneOptions};
use vitae::scroll::{MenuState, ScrollState};
use vitae::section::SectionId;
use vitae::visibility::reveal_class;
use vitae::web;

use crate::bridge;

const STYLE: Asset = asset!("/assets/style.css");

/// DOM id of the page header; also the navbar brand's anchor target.
const HEADER_ID: &str = "top";

/// Root component.
#[component]
pub fn App() -> Element {
    let options = use_hook(Options::default);
    let resume = use_hook(|| match Resume::embedded() {
        Ok(resume) => Some(Rc::new(resume)),
        Err(e) => {
            log::error!("{e}");
            None
        }
    });
    let visibility = bridge::use_section_visibility(options.reveal.clone());
    let scroll = bridge::use_scroll_state(options.navigation);

    let Some(resume) = resume else {
        return rsx! {
            document::Link { rel: "stylesheet", href: STYLE }
        };
    };

    let sections = resume.sections();

    rsx! {
        document::Link { rel: "stylesheet", href: STYLE }
        Navbar {
            name: resume.profile.name.clone(),
            sections: sections.clone(),
            scroll: scroll(),
        }
        Hero { profile: resume.profile.clone(), scene: options.scene.clone() }
        main { class: "content",
            for section in sections {
                SectionBlock {
                    key: "{section}",
                    section,
                    revealed: visibility.read().is_visible(section),
                    {section_body(section, &resume)}
                }
            }
        }
        footer { class: "footer",
            p { "© {resume.profile.name}" }
        }
        BackToTop { scroll: scroll() }
    }
}

/// Top navigation, one link per rendered section.
#[component]
fn Navbar(name: String, sections: Vec<SectionId>, scroll: ScrollState) -> Element {
    let mut menu = use_signal(MenuState::default);
    let links_class = menu().links_class();
    let expanded = menu().is_open();

    rsx! {
        nav { class: scroll.nav_class(),
            a {
                class: "brand",
                href: "#{HEADER_ID}",
                onclick: move |_| menu.write().close(),
                "{name}"
            }
            button {
                class: "menu-toggle",
                aria_label: "Toggle navigation",
                aria_expanded: "{expanded}",
                onclick: move |_| menu.write().toggle(),
                "☰"
            }
            ul { class: links_class,
                for section in sections {
                    li { key: "{section}",
                        a {
                            href: section.anchor(),
                            onclick: move |_| menu.write().close(),
                            "{section.title()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Hero(profile: Profile, scene: SceneOptions) -> Element {
    bridge::use_header_scene(HEADER_ID, scene);

    rsx! {
        header { id: HEADER_ID, class: "hero",
            div { class: "hero-content",
                h1 { "{profile.name}" }
                p { class: "headline", "{profile.headline}" }
                if let Some(location) = &profile.location {
                    p { class: "location", "{location}" }
                }
                ul { class: "hero-links",
                    for link in &profile.links {
                        li { key: "{link.url}",
                            a { href: "{link.url}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// One content section, faded in once it scrolls into view.
#[component]
fn SectionBlock(section: SectionId, revealed: bool, children: Element) -> Element {
    rsx! {
        section { id: section.as_str(), class: reveal_class(revealed),
            h2 { class: "section-title", "{section.title()}" }
            {children}
        }
    }
}

#[component]
fn BackToTop(scroll: ScrollState) -> Element {
    rsx! {
        button {
            class: scroll.back_to_top_class(),
            aria_label: "Back to top",
            onclick: move |_| web::scroll_to_top(),
            "↑"
        }
    }
}

fn section_body(section: SectionId, resume: &Resume) -> Element {
    match section {
        SectionId::Summary => rsx! {
            for paragraph in &resume.profile.summary {
                p { "{paragraph}" }
            }
        },
        SectionId::Skills => rsx! {
            div { class: "skills",
                for group in &resume.skills {
                    div { class: "skill-group", key: "{group.name}",
                        h3 { "{group.name}" }
                        ul { class: "tags",
                            for item in &group.items {
                                li { "{item}" }
                            }
                        }
                    }
                }
            }
        },
        SectionId::Experience => rsx! {
            for job in &resume.experience {
                article { class: "entry",
                    div { class: "entry-head",
                        h3 {
                            "{job.role}"
                            span { class: "company", " · {job.company}" }
                        }
                        span { class: "period", "{job.period()}" }
                    }
                    if let Some(location) = &job.location {
                        p { class: "location", "{location}" }
                    }
                    ul {
                        for highlight in &job.highlights {
                            li { "{highlight}" }
                        }
                    }
                }
            }
        },
        SectionId::Projects => rsx! {
            div { class: "cards",
                for project in &resume.projects {
                    article { class: "card", key: "{project.name}",
                        h3 { "{project.name}" }
                        p { "{project.description}" }
                        ul { class: "tags",
                            for tech in &project.tech {
                                li { "{tech}" }
                            }
                        }
                        if let Some(link) = &project.link {
                            a {
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        },
        SectionId::Achievements => rsx! {
            ul { class: "achievements",
                for achievement in &resume.achievements {
                    li {
                        strong { "{achievement.title}" }
                        if let Some(year) = &achievement.year {
                            span { class: "period", " ({year})" }
                        }
                        if let Some(detail) = &achievement.detail {
                            p { "{detail}" }
                        }
                    }
                }
            }
        },
        SectionId::Education => rsx! {
            for school in &resume.education {
                article { class: "entry",
                    div { class: "entry-head",
                        h3 {
                            "{school.degree}"
                            span { class: "company", " · {school.institution}" }
                        }
                        span { class: "period", "{school.period}" }
                    }
                    if let Some(detail) = &school.detail {
                        p { "{detail}" }
                    }
                }
            }
        },
    }
}
