//! Reusable UI components for engine pages
//!
//! Tables go through [`AdaptiveTable`]; everything else a page shows is
//! a [`SpecSection`].

mod adaptive_table;
mod button;
mod citation_dialog;
mod grid;
mod page_pills;
mod record_cards;
mod spec_section;

pub use adaptive_table::*;
pub use button::*;
pub use citation_dialog::*;
pub use grid::*;
pub use page_pills::*;
pub use record_cards::*;
pub use spec_section::*;
