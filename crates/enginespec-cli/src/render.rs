//! Plain-text rendition of engine pages.
//!
//! Tables are printed from the same render plans the UI uses, so the
//! output shows exactly what each layout would display. Citation buttons
//! print as `[n]` markers with the citation text listed below the grid,
//! standing in for the dialog.

use std::fmt::Write;

use clap::ValueEnum;
use enginespec_core::{
    checkerboard, plan_table, CardPlan, CellContent, EnginePage, GridPlan, MobilePlan, Section,
    SectionBody, Table,
};

/// Which representation of each table to print
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Full grid, as shown at or above the breakpoint
    #[default]
    Desktop,
    /// Cards or compact grid, as shown below the breakpoint
    Mobile,
}

pub fn render_page(page: &EnginePage, layout: Layout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.name);
    let _ = writeln!(out, "{}", "=".repeat(page.name.chars().count()));
    if !page.summary.is_empty() {
        let _ = writeln!(out, "{}", page.summary);
    }
    for section in &page.sections {
        out.push('\n');
        render_section(&mut out, section, layout);
    }
    out
}

fn render_section(out: &mut String, section: &Section, layout: Layout) {
    let _ = writeln!(out, "{} {}", section.icon.glyph(), section.title);

    match &section.body {
        SectionBody::LabeledList(items) => {
            for item in items {
                let _ = writeln!(out, "  {}: {}", item.label(), item.text);
            }
        }
        SectionBody::UnlabeledList(items) => {
            for item in items {
                let _ = writeln!(out, "  - {}", item);
            }
        }
        SectionBody::LinkList(links) => {
            for link in links {
                let _ = writeln!(out, "  - {} <{}>", link.label, link.href);
            }
        }
        SectionBody::Table { mode, table } => {
            let Some(plan) = plan_table(table, *mode) else {
                return;
            };
            match (layout, &plan.mobile) {
                (Layout::Desktop, _) => render_grid(out, &plan.desktop, table),
                (Layout::Mobile, MobilePlan::ScrollGrid(grid)) => render_grid(out, grid, table),
                (Layout::Mobile, MobilePlan::Cards(cards)) => render_cards(out, cards),
            }
        }
        SectionBody::CardGrid { columns, cards } => {
            for (i, card) in cards.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  [{}] {}: {}",
                    checkerboard(i, *columns).class(),
                    card.title,
                    card.text
                );
            }
        }
    }
}

fn render_grid(out: &mut String, grid: &GridPlan, table: &Table) {
    let _ = writeln!(out, "{}", grid.headers.join(" | "));
    let mut footnotes = Vec::new();

    for row in &grid.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| match &cell.content {
                CellContent::Text(text) => text.clone(),
                CellContent::Empty => String::new(),
                CellContent::CitationButton { row } => {
                    if let Some(text) = table.citation(*row) {
                        footnotes.push((*row, text));
                    }
                    format!("[{}]", row + 1)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" | "));
    }

    for (row, text) in footnotes {
        let _ = writeln!(out, "  [{}] {}", row + 1, text);
    }
}

fn render_cards(out: &mut String, cards: &[CardPlan]) {
    for card in cards {
        let _ = writeln!(out, "--- card {} ---", card.index + 1);
        for field in &card.fields {
            let _ = writeln!(out, "{}: {}", field.label, field.value);
        }
        if let Some(citation) = &card.citation {
            let _ = writeln!(out, "View Source: {}", citation);
        }
    }
}
