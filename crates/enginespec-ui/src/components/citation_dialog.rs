//! Citation Dialog Component
//!
//! Modal showing the citation text of the row whose info button was
//! activated. Visibility is driven entirely by the [`Disclosure`] state
//! passed in.

use dioxus::prelude::*;
use enginespec_core::Disclosure;

use super::button::{Button, ButtonVariant, CloseButton};

/// Citation Dialog
///
/// # Example
///
/// ```rust,ignore
/// let mut disclosure = use_signal(Disclosure::default);
///
/// rsx! {
///     CitationDialog {
///         state: disclosure(),
///         on_close: move |_| disclosure.write().close(),
///     }
/// }
/// ```
#[component]
pub fn CitationDialog(
    /// Current disclosure state; nothing renders while closed
    state: Disclosure,
    /// Called when the dialog is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let Disclosure::Open { row, text } = state else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "citation-dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "citation-title",
                "data-row": "{row}",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { id: "citation-title", class: "modal-title", "Source" }
                    CloseButton { onclick: on_close }
                }

                p { class: "citation-text", "{text}" }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: on_close,
                        "Close"
                    }
                }
            }
        }
    }
}
