//! Engine Spec Core Library
//!
//! Data model and render planning for technical engine specification pages.
//!
//! ## Overview
//!
//! Content authors describe engine pages as JSON: parameter tables,
//! compatible-model listings, reliability notes. This crate turns that
//! content into typed values and computes *render plans* for the
//! Adaptive Table Renderer, so the UI layer only maps data to elements.
//!
//! ## Adaptive tables
//!
//! - **Schema**: column order comes from the first record, or from an
//!   explicit [`TableSchema`] validated once at construction
//! - **Citation column**: a last column named `source` / `oem source`
//!   is hidden behind a disclosure affordance
//! - **Two layouts**: every plan carries both a desktop grid and a
//!   mobile representation; CSS picks one at [`MOBILE_BREAKPOINT_PX`]
//!
//! ## Quick Start
//!
//! ```
//! use enginespec_core::{plan_table, DisplayMode, Table};
//!
//! let rows = serde_json::from_str(
//!     r#"[{"parameter": "Displacement", "value": "1995 cc", "source": "Doc A"}]"#,
//! ).unwrap();
//! let table = Table::infer(rows);
//!
//! let plan = plan_table(&table, DisplayMode::Tabular).unwrap();
//! assert_eq!(plan.desktop.headers, vec!["Parameter", "Value", "Source"]);
//! ```

pub mod content;
pub mod disclosure;
pub mod error;
pub mod format;
pub mod plan;
pub mod section;
pub mod table;

// Re-exports
pub use content::{Catalog, EnginePage};
pub use disclosure::Disclosure;
pub use error::{ContentError, ContentResult, TableError};
pub use format::{capitalize_first, display_value, title_case_key};
pub use plan::{
    checkerboard, plan_table, CardField, CardPlan, CellContent, Density, DisplayMode, Emphasis,
    GridCell, GridPlan, GridRow, MobilePlan, Stripe, TablePlan, Tone, MOBILE_BREAKPOINT_PX,
    MOBILE_GRID_MIN_WIDTH_PX,
};
pub use section::{Card, LabeledItem, Link, Section, SectionBody, SectionIcon};
pub use table::{CellValue, Column, ColumnRole, Record, Table, TableSchema};
