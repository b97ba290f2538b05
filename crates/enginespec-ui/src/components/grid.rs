//! Spec Grid Component
//!
//! Renders a [`GridPlan`] as an HTML table. Used for the desktop layout
//! in both modes and, with compact density inside a horizontal scroller,
//! for the mobile layout of tabular mode.

use dioxus::prelude::*;
use enginespec_core::{CellContent, Density, Emphasis, GridCell, GridPlan};

use super::button::CitationButton;

/// CSS class of the grid element for a density
pub fn grid_class(density: Density) -> &'static str {
    match density {
        Density::Regular => "spec-grid",
        Density::Compact => "spec-grid compact",
    }
}

/// CSS class of one cell; the first column is bold
pub fn cell_class(cell: &GridCell) -> &'static str {
    match cell.emphasis {
        Emphasis::Strong => "grid-cell strong",
        Emphasis::Normal => "grid-cell",
    }
}

/// Inline style forcing the minimum width of a scroll grid
pub fn grid_style(plan: &GridPlan) -> String {
    plan.min_width_px
        .map(|px| format!("min-width: {}px;", px))
        .unwrap_or_default()
}

/// Properties for the SpecGrid component
#[derive(Clone, PartialEq, Props)]
pub struct SpecGridProps {
    /// Planned headers and rows
    pub plan: GridPlan,
    /// Called with the row index when a citation button is activated
    pub on_cite: EventHandler<usize>,
}

/// Header row plus one striped row per record
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SpecGrid {
///         plan: table_plan.desktop.clone(),
///         on_cite: move |row| disclosure.write().open_for(&table, row),
///     }
/// }
/// ```
#[component]
pub fn SpecGrid(props: SpecGridProps) -> Element {
    let on_cite = props.on_cite;
    let style = grid_style(&props.plan);

    rsx! {
        table {
            class: grid_class(props.plan.density),
            style: "{style}",
            thead {
                tr {
                    for header in props.plan.headers.iter() {
                        th { scope: "col", "{header}" }
                    }
                }
            }
            tbody {
                for row in props.plan.rows.iter() {
                    tr {
                        key: "{row.index}",
                        class: row.stripe.class(),
                        for cell in row.cells.iter() {
                            td {
                                class: cell_class(cell),
                                {match &cell.content {
                                    CellContent::Text(text) => rsx! { "{text}" },
                                    CellContent::Empty => rsx! {},
                                    CellContent::CitationButton { row } => rsx! {
                                        CitationButton { row: *row, onclick: on_cite }
                                    },
                                }}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Compact grid inside a horizontally scrollable container
#[component]
pub fn ScrollGrid(plan: GridPlan, on_cite: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "grid-scroll",
            SpecGrid { plan, on_cite }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(min_width_px: Option<u32>) -> GridPlan {
        GridPlan {
            density: Density::Compact,
            min_width_px,
            headers: vec!["Parameter".to_string()],
            rows: Vec::new(),
        }
    }

    #[test]
    fn grid_classes_by_density() {
        assert_eq!(grid_class(Density::Regular), "spec-grid");
        assert_eq!(grid_class(Density::Compact), "spec-grid compact");
    }

    #[test]
    fn first_column_cell_is_strong() {
        let strong = GridCell {
            content: CellContent::Text("Torque".to_string()),
            emphasis: Emphasis::Strong,
        };
        let normal = GridCell {
            content: CellContent::Empty,
            emphasis: Emphasis::Normal,
        };
        assert_eq!(cell_class(&strong), "grid-cell strong");
        assert_eq!(cell_class(&normal), "grid-cell");
    }

    #[test]
    fn style_only_when_min_width_forced() {
        assert_eq!(grid_style(&plan(Some(600))), "min-width: 600px;");
        assert_eq!(grid_style(&plan(None)), "");
    }
}
