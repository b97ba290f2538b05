//! Render planning for the Adaptive Table Renderer.
//!
//! A [`TablePlan`] is every visual decision for one table expressed as
//! data: header text, cell contents, emphasis, zebra stripes, and where
//! the citation column goes on each layout. Both layouts are always
//! planned; the UI shows the desktop grid at or above
//! [`MOBILE_BREAKPOINT_PX`] and the mobile plan below it.
//!
//! | mode      | desktop citation    | mobile layout            | mobile citation     |
//! |-----------|---------------------|--------------------------|---------------------|
//! | `tabular` | icon button, dialog | compact scrollable grid  | icon button, dialog |
//! | `cards`   | plain text          | one card per record      | "View Source" details |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::{capitalize_first, display_value};
use crate::table::Table;

/// Viewport width (CSS px) at which the desktop grid takes over
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Minimum width of the horizontally scrollable grid on narrow viewports
pub const MOBILE_GRID_MIN_WIDTH_PX: u32 = 600;

/// Layout strategy chosen per table by the caller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Dense technical specification tables
    #[default]
    Tabular,
    /// Comparison listings, restructured into cards on narrow viewports
    Cards,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Tabular => "tabular",
            DisplayMode::Cards => "cards",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tabular" => Ok(DisplayMode::Tabular),
            "cards" => Ok(DisplayMode::Cards),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

/// Zebra classification of a row, a pure function of its index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Stripe::Even => "stripe-even",
            Stripe::Odd => "stripe-odd",
        }
    }
}

/// Visual weight of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// First column, whatever it holds
    Strong,
    Normal,
}

/// Padding and type scale of a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    Regular,
    /// Smaller tokens for the narrow scrollable grid
    Compact,
}

/// What a grid cell shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Empty,
    /// Icon button opening the citation dialog for `row`
    CitationButton { row: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub content: CellContent,
    pub emphasis: Emphasis,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    pub index: usize,
    pub stripe: Stripe,
    pub cells: Vec<GridCell>,
}

/// A header row plus one row per record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPlan {
    pub density: Density,
    /// Forced minimum width in px, set for the mobile scroll grid
    pub min_width_px: Option<u32>,
    pub headers: Vec<String>,
    pub rows: Vec<GridRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardField {
    pub label: String,
    pub value: String,
    pub emphasis: Emphasis,
}

/// One record restructured as a labeled card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPlan {
    pub index: usize,
    pub stripe: Stripe,
    /// Every non-citation column, in schema order
    pub fields: Vec<CardField>,
    /// Text for the collapsed "View Source" region, only when non-blank
    pub citation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MobilePlan {
    ScrollGrid(GridPlan),
    Cards(Vec<CardPlan>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePlan {
    pub mode: DisplayMode,
    pub desktop: GridPlan,
    pub mobile: MobilePlan,
}

/// Plan both layouts of `table` in `mode`.
///
/// Returns `None` for a table without records: nothing is rendered, not
/// even a header row.
pub fn plan_table(table: &Table, mode: DisplayMode) -> Option<TablePlan> {
    if table.is_empty() {
        return None;
    }

    tracing::debug!(
        rows = table.len(),
        columns = table.columns().len(),
        citation = table.has_citation(),
        %mode,
        "planning table"
    );

    let desktop = plan_grid(table, mode, Density::Regular);
    let mobile = match mode {
        DisplayMode::Tabular => MobilePlan::ScrollGrid(plan_grid(table, mode, Density::Compact)),
        DisplayMode::Cards => MobilePlan::Cards(plan_cards(table)),
    };

    Some(TablePlan {
        mode,
        desktop,
        mobile,
    })
}

fn emphasis_for(col: usize) -> Emphasis {
    if col == 0 {
        Emphasis::Strong
    } else {
        Emphasis::Normal
    }
}

fn plan_grid(table: &Table, mode: DisplayMode, density: Density) -> GridPlan {
    let citation_col = match mode {
        DisplayMode::Tabular => table.schema().citation_index(),
        // Cards mode keeps the citation as plain text in the grid
        DisplayMode::Cards => None,
    };

    let headers = table
        .columns()
        .iter()
        .map(|c| capitalize_first(&c.name))
        .collect();

    let rows = (0..table.len())
        .map(|row| {
            let cells = (0..table.columns().len())
                .map(|col| {
                    let content = if Some(col) == citation_col {
                        match table.citation(row) {
                            Some(_) => CellContent::CitationButton { row },
                            None => CellContent::Empty,
                        }
                    } else {
                        match table.cell(row, col) {
                            Some(value) if !value.is_blank() => {
                                CellContent::Text(value.to_string())
                            }
                            _ => CellContent::Empty,
                        }
                    };
                    GridCell {
                        content,
                        emphasis: emphasis_for(col),
                    }
                })
                .collect();
            GridRow {
                index: row,
                stripe: Stripe::for_index(row),
                cells,
            }
        })
        .collect();

    GridPlan {
        density,
        min_width_px: match density {
            Density::Regular => None,
            Density::Compact => Some(MOBILE_GRID_MIN_WIDTH_PX),
        },
        headers,
        rows,
    }
}

fn plan_cards(table: &Table) -> Vec<CardPlan> {
    let citation_col = table.schema().citation_index();

    (0..table.len())
        .map(|row| {
            let fields = table
                .columns()
                .iter()
                .enumerate()
                .filter(|(col, _)| Some(*col) != citation_col)
                .map(|(col, column)| CardField {
                    label: capitalize_first(&column.name),
                    value: display_value(table.cell(row, col)),
                    emphasis: emphasis_for(col),
                })
                .collect();
            CardPlan {
                index: row,
                stripe: Stripe::for_index(row),
                fields,
                citation: table.citation(row),
            }
        })
        .collect()
}

/// Two-tone shading for a card grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
        }
    }
}

/// Checkerboard tone of card `index` in a grid `columns` wide.
///
/// Adjacent cards differ both across a row and down a column. A zero
/// width is treated as a single column.
pub fn checkerboard(index: usize, columns: usize) -> Tone {
    let columns = columns.max(1);
    if (index / columns + index % columns) % 2 == 0 {
        Tone::Light
    } else {
        Tone::Dark
    }
}
