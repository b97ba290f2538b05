//! Spec Section Component
//!
//! One block of an engine page. The body kind and icon come straight
//! from the section data.

use dioxus::prelude::*;
use enginespec_core::{checkerboard, Section, SectionBody};

use super::adaptive_table::AdaptiveTable;

/// Inline style for a card grid `columns` wide
pub fn card_grid_style(columns: usize) -> String {
    format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.max(1))
}

#[component]
pub fn SpecSection(section: Section) -> Element {
    let kind = section.body.kind();
    let glyph = section.icon.glyph();
    let icon_label = section.icon.label();

    rsx! {
        section { class: "spec-section section-{kind}",
            h2 { class: "section-header",
                span {
                    class: "section-icon",
                    role: "img",
                    "aria-label": icon_label,
                    "{glyph}"
                }
                " {section.title}"
            }
            {match &section.body {
                SectionBody::LabeledList(items) => rsx! {
                    dl { class: "labeled-list",
                        for item in items.iter() {
                            {
                                let label = item.label();
                                rsx! {
                                    dt { "{label}" }
                                    dd { "{item.text}" }
                                }
                            }
                        }
                    }
                },
                SectionBody::UnlabeledList(items) => rsx! {
                    ul { class: "unlabeled-list",
                        for item in items.iter() {
                            li { "{item}" }
                        }
                    }
                },
                SectionBody::LinkList(links) => rsx! {
                    ul { class: "link-list",
                        for link in links.iter() {
                            li {
                                a { href: "{link.href}", rel: "noopener", "{link.label}" }
                            }
                        }
                    }
                },
                SectionBody::Table { mode, table } => rsx! {
                    AdaptiveTable { table: table.clone(), mode: *mode }
                },
                SectionBody::CardGrid { columns, cards } => rsx! {
                    div {
                        class: "card-grid",
                        style: card_grid_style(*columns),
                        for (i, card) in cards.iter().enumerate() {
                            {
                                let tone = checkerboard(i, *columns).class();
                                rsx! {
                                    div {
                                        key: "{i}",
                                        class: "grid-card {tone}",
                                        h3 { class: "grid-card-title", "{card.title}" }
                                        p { "{card.text}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
