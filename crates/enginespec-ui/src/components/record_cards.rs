//! Record Cards Component
//!
//! Narrow-viewport layout of cards mode: each record becomes a bordered
//! card of label/value pairs, with its citation tucked into a collapsed
//! "View Source" region at the bottom.

use dioxus::prelude::*;
use enginespec_core::{CardField, CardPlan, Emphasis};

/// Summary text of the collapsed citation region
pub const VIEW_SOURCE_LABEL: &str = "View Source";

/// Bordered card with its zebra stripe
pub fn card_class(card: &CardPlan) -> String {
    format!("record-card {}", card.stripe.class())
}

fn field_value_class(field: &CardField) -> &'static str {
    match field.emphasis {
        Emphasis::Strong => "card-value strong",
        Emphasis::Normal => "card-value",
    }
}

/// Stacked cards, one per record
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RecordCards { cards: cards.clone() }
/// }
/// ```
#[component]
pub fn RecordCards(cards: Vec<CardPlan>) -> Element {
    rsx! {
        div { class: "record-cards",
            for card in cards.iter() {
                div {
                    key: "{card.index}",
                    class: card_class(card),
                    dl { class: "card-fields",
                        for field in card.fields.iter() {
                            div { class: "card-field",
                                dt { class: "card-label", "{field.label}" }
                                dd { class: field_value_class(field), "{field.value}" }
                            }
                        }
                    }
                    if let Some(citation) = &card.citation {
                        details { class: "card-source",
                            summary { "{VIEW_SOURCE_LABEL}" }
                            p { class: "card-source-text", "{citation}" }
                        }
                    }
                }
            }
        }
    }
}
