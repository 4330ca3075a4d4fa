//! HTML rendering for the built site
//!
//! Views hold state, this module only reads it. Every dynamic string goes
//! through maud's escaping except record descriptions, which are
//! [`TrustedHtml`](crate::model::TrustedHtml) and embedded with `PreEscaped`.
//!
//! The tab markup is the accessibility contract screen readers rely on:
//!
//! | element | attributes |
//! |---------|------------|
//! | strip   | `role="tablist" aria-label="Job tabs"` |
//! | tab i   | `id="tab-i" role="tab" tabindex aria-selected aria-controls="panel-i"` |
//! | panel i | `id="panel-i" role="tabpanel" tabindex aria-labelledby="tab-i" aria-hidden hidden` |

use super::icons;
use crate::components::work_history::{panel_id, tab_id};
use crate::components::{featured, work_history, FeaturedProjectsView, WorkHistoryView};
use crate::model::{ActionLink, ProjectRecord};
use maud::{html, Markup, PreEscaped, DOCTYPE};

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn tabindex(active: bool) -> &'static str {
    if active {
        "0"
    } else {
        "-1"
    }
}

/// "Where I’ve Worked": tab strip + panels
pub fn work_history(view: &WorkHistoryView) -> Markup {
    let tabs = view.tabs();
    // read by the panel fade animation in style.css
    let fade = format!("--tab-fade: {}ms", view.fade_duration().as_millis());

    html! {
        section id=(work_history::SECTION_ID) class="jobs-section" {
            h2 class="formatted-centered-heading" { "Where I’ve Worked" }

            div class="inner" {
                div class="tab-list" role="tablist" aria-label="Job tabs" {
                    @for (i, job) in view.jobs().iter().enumerate() {
                        @let active = tabs.is_active(i);
                        button type="button"
                            class=(if active { "tab-button is-active" } else { "tab-button" })
                            id=(tab_id(i))
                            role="tab"
                            tabindex=(tabindex(active))
                            aria-selected=(flag(active))
                            aria-controls=(panel_id(i)) {
                            span { (job.company) }
                        }
                    }
                }

                div class="tab-panels" style=(fade) {
                    @for (i, job) in view.jobs().iter().enumerate() {
                        @let active = tabs.is_active(i);
                        div id=(panel_id(i))
                            class="tab-panel"
                            role="tabpanel"
                            tabindex=(tabindex(active))
                            aria-labelledby=(tab_id(i))
                            aria-hidden=(flag(!active))
                            hidden[!active] {
                            h3 {
                                span { (job.title) }
                                span class="company" {
                                    "\u{a0}@\u{a0}"
                                    a href=(job.url) class="inline-link" { (job.company) }
                                }
                            }
                            p class="range" { (job.date_range) }
                            div class="job-description" {
                                (PreEscaped(job.description.as_str()))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Projects": single-slide carousel
pub fn featured(view: &FeaturedProjectsView) -> Markup {
    let carousel = view.carousel();
    let settings = carousel.settings();

    html! {
        section id=(featured::SECTION_ID) class="featured-section" {
            div id=(featured::SLIDER_ID)
                class="project-carousel"
                data-speed=(settings.speed.as_millis() as u64)
                data-infinite=(flag(settings.infinite))
                data-fade=(flag(settings.fade))
                data-autoplay=(flag(settings.autoplay)) {
                h2 id=(featured::TITLE_ID) class="formatted-centered-heading" { "Projects" }

                div class="slides" {
                    @for (i, project) in view.projects().iter().enumerate() {
                        @let current = carousel.current() == Some(i);
                        div class=(if current { "project-content slide is-current" } else { "project-content slide" })
                            data-index=(i)
                            aria-hidden=(flag(!current))
                            hidden[!current] {
                            (slide(project))
                        }
                    }
                }

                @if carousel.len() > 1 {
                    div class="slide-controls" {
                        button type="button" class="slide-prev" aria-label="Previous project" { "‹" }
                        button type="button" class="slide-next" aria-label="Next project" { "›" }
                    }
                }

                @if settings.dots {
                    ul class="slide-dots" {
                        @for i in 0..carousel.len() {
                            li {
                                button type="button" data-index=(i) aria-label=(format!("Project {}", i + 1)) {}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn slide(project: &ProjectRecord) -> Markup {
    html! {
        div class="project-image" {
            a href=(project.cover_href()) {
                @if let Some(cover) = &project.cover {
                    img class="img" src=(cover.public_path()) alt=(project.title) loading="lazy";
                }
            }
        }
        div class="project-detail" {
            h3 class="project-title" {
                a href=[project.external_url.as_deref()] { (project.title) }
            }
            div class="project-description" {
                (PreEscaped(project.description.as_str()))
            }
            @if !project.tech_tags.is_empty() {
                ul class="project-tech-list" {
                    @for tag in &project.tech_tags {
                        li { (tag) }
                    }
                }
            }
            div class="project-links" {
                @for link in project.action_links() {
                    (action_link(&link))
                }
            }
        }
    }
}

fn action_link(link: &ActionLink<'_>) -> Markup {
    match *link {
        ActionLink::LearnMore(url) => html! {
            a href=(url) aria-label="Course Link" class="cta" { "Learn More" }
        },
        ActionLink::Source(url) => html! {
            a href=(url) aria-label="GitHub Link" { (PreEscaped(icons::GITHUB)) }
        },
        ActionLink::Demo(url) => html! {
            a href=(url) aria-label="Demo Link" class="demo-link" target="_blank" rel="noreferrer" { "Demo" }
        },
        ActionLink::External(url) => html! {
            a href=(url) aria-label="External Link" class="external" { (PreEscaped(icons::EXTERNAL)) }
        },
    }
}

/// Full page around both sections
pub fn page(title: &str, featured: Markup, jobs: Markup, reveal_script: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="style.css";
            }
            body {
                main id="content" {
                    (featured)
                    (jobs)
                }
                script src="site.js" {}
                @if let Some(script) = reveal_script {
                    script src="https://unpkg.com/scrollreveal@4" {}
                    script { (PreEscaped(script)) }
                }
            }
        }
    }
}
