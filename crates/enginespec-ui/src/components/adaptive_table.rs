//! Adaptive Table Component
//!
//! Renders a [`Table`] as a desktop grid and a narrow-viewport
//! alternative, and owns the citation dialog state for the instance.
//!
//! - `tabular`: mobile gets the same grid, compact and horizontally
//!   scrollable; citations open the dialog on both layouts
//! - `cards`: mobile gets one card per record with a "View Source"
//!   region; the desktop grid shows citations as plain text

use dioxus::prelude::*;
use enginespec_core::{plan_table, Disclosure, DisplayMode, MobilePlan, Table};

use super::citation_dialog::CitationDialog;
use super::grid::{ScrollGrid, SpecGrid};
use super::record_cards::RecordCards;

/// CSS class of the table wrapper for a mode
pub fn mode_class(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Tabular => "adaptive-table mode-tabular",
        DisplayMode::Cards => "adaptive-table mode-cards",
    }
}

/// Properties for the AdaptiveTable component
#[derive(Clone, PartialEq, Props)]
pub struct AdaptiveTableProps {
    /// Rows and schema to render
    pub table: Table,
    /// Layout strategy
    #[props(default)]
    pub mode: DisplayMode,
}

/// Responsive table with a citation disclosure
///
/// Renders nothing for a table without rows.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AdaptiveTable {
///         table: Table::infer(rows),
///         mode: DisplayMode::Cards,
///     }
/// }
/// ```
#[component]
pub fn AdaptiveTable(props: AdaptiveTableProps) -> Element {
    let mut disclosure = use_signal(Disclosure::default);

    let Some(plan) = plan_table(&props.table, props.mode) else {
        return VNode::empty();
    };

    let desktop_table = props.table.clone();
    let mobile_table = props.table.clone();

    rsx! {
        div { class: mode_class(plan.mode),
            div { class: "table-desktop",
                SpecGrid {
                    plan: plan.desktop.clone(),
                    on_cite: move |row: usize| {
                        disclosure.write().open_for(&desktop_table, row);
                    },
                }
            }
            div { class: "table-mobile",
                {match &plan.mobile {
                    MobilePlan::ScrollGrid(grid) => rsx! {
                        ScrollGrid {
                            plan: grid.clone(),
                            on_cite: move |row: usize| {
                                disclosure.write().open_for(&mobile_table, row);
                            },
                        }
                    },
                    MobilePlan::Cards(cards) => rsx! {
                        RecordCards { cards: cards.clone() }
                    },
                }}
            }
            CitationDialog {
                state: disclosure(),
                on_close: move |_| {
                    tracing::debug!("citation dialog closed");
                    disclosure.write().close();
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_classes() {
        assert_eq!(mode_class(DisplayMode::Tabular), "adaptive-table mode-tabular");
        assert_eq!(mode_class(DisplayMode::Cards), "adaptive-table mode-cards");
    }
}
