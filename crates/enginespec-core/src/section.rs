//! Page sections.
//!
//! Each section's kind and icon are chosen by the content author and
//! stored as tags, never guessed from key names or title text at render
//! time.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::format::title_case_key;
use crate::plan::DisplayMode;
use crate::table::{Column, Record, Table, TableSchema};

/// Icon shown next to a section title
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIcon {
    Engine,
    Specs,
    Reliability,
    Identification,
    Tensioner,
    Maintenance,
    Compatibility,
    Faq,
    #[default]
    Info,
}

impl SectionIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SectionIcon::Engine => "\u{2699}",
            SectionIcon::Specs => "\u{1F4CB}",
            SectionIcon::Reliability => "\u{26A0}",
            SectionIcon::Identification => "\u{1F50E}",
            SectionIcon::Tensioner => "\u{26D3}",
            SectionIcon::Maintenance => "\u{1F527}",
            SectionIcon::Compatibility => "\u{1F697}",
            SectionIcon::Faq => "?",
            SectionIcon::Info => "\u{2139}",
        }
    }

    /// Accessible name for screen readers
    pub fn label(&self) -> &'static str {
        match self {
            SectionIcon::Engine => "Engine",
            SectionIcon::Specs => "Specifications",
            SectionIcon::Reliability => "Reliability",
            SectionIcon::Identification => "Identification",
            SectionIcon::Tensioner => "Tensioner",
            SectionIcon::Maintenance => "Maintenance",
            SectionIcon::Compatibility => "Compatibility",
            SectionIcon::Faq => "Frequently asked questions",
            SectionIcon::Info => "Information",
        }
    }
}

/// A labeled entry, e.g. `evidence: "..."`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledItem {
    pub key: String,
    pub text: String,
}

impl LabeledItem {
    /// Display label derived from the key, `"timingChain"` -> `"Timing Chain"`
    pub fn label(&self) -> String {
        title_case_key(&self.key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub text: String,
}

/// Section content, one variant per kind
#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    LabeledList(Vec<LabeledItem>),
    UnlabeledList(Vec<String>),
    LinkList(Vec<Link>),
    Table { mode: DisplayMode, table: Table },
    CardGrid { columns: usize, cards: Vec<Card> },
}

impl SectionBody {
    pub fn kind(&self) -> &'static str {
        match self {
            SectionBody::LabeledList(_) => "labeled_list",
            SectionBody::UnlabeledList(_) => "unlabeled_list",
            SectionBody::LinkList(_) => "link_list",
            SectionBody::Table { .. } => "table",
            SectionBody::CardGrid { .. } => "card_grid",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub icon: SectionIcon,
    pub body: SectionBody,
}

impl Section {
    pub fn table(&self) -> Option<(&Table, DisplayMode)> {
        match &self.body {
            SectionBody::Table { mode, table } => Some((table, *mode)),
            _ => None,
        }
    }
}

fn default_grid_columns() -> usize {
    2
}

/// Section as authored in catalog JSON
#[derive(Debug, Deserialize)]
pub(crate) struct RawSection {
    pub title: String,
    #[serde(default)]
    pub icon: SectionIcon,
    pub body: RawBody,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum RawBody {
    LabeledList {
        items: Vec<LabeledItem>,
    },
    UnlabeledList {
        items: Vec<String>,
    },
    LinkList {
        links: Vec<Link>,
    },
    Table {
        #[serde(default)]
        mode: DisplayMode,
        /// Explicit schema; inferred from the first row when omitted
        #[serde(default)]
        columns: Option<Vec<Column>>,
        rows: Vec<Record>,
    },
    CardGrid {
        #[serde(default = "default_grid_columns")]
        columns: usize,
        cards: Vec<Card>,
    },
}

impl RawSection {
    /// Build the typed section, validating table schemas
    pub(crate) fn build(self) -> Result<Section, TableError> {
        let body = match self.body {
            RawBody::LabeledList { items } => SectionBody::LabeledList(items),
            RawBody::UnlabeledList { items } => SectionBody::UnlabeledList(items),
            RawBody::LinkList { links } => SectionBody::LinkList(links),
            RawBody::Table {
                mode,
                columns,
                rows,
            } => {
                let table = match columns {
                    Some(columns) => Table::with_schema(TableSchema::new(columns)?, rows)?,
                    None => Table::infer(rows),
                };
                SectionBody::Table { mode, table }
            }
            RawBody::CardGrid { columns, cards } => SectionBody::CardGrid { columns, cards },
        };

        Ok(Section {
            title: self.title,
            icon: self.icon,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnRole;

    fn build(json: &str) -> Result<Section, TableError> {
        let raw: RawSection = serde_json::from_str(json).unwrap();
        raw.build()
    }

    #[test]
    fn labeled_list_labels_from_keys() {
        let section = build(
            r#"{
                "title": "Timing chain wear",
                "icon": "reliability",
                "body": {"kind": "labeled_list", "items": [
                    {"key": "evidence", "text": "Rattle at cold start"},
                    {"key": "recommendedAction", "text": "Replace chain and guides"}
                ]}
            }"#,
        )
        .unwrap();

        assert_eq!(section.icon, SectionIcon::Reliability);
        let SectionBody::LabeledList(items) = &section.body else {
            panic!("expected labeled list");
        };
        assert_eq!(items[0].label(), "Evidence");
        assert_eq!(items[1].label(), "Recommended Action");
    }

    #[test]
    fn icon_defaults_to_info() {
        let section = build(r#"{"title": "Notes", "body": {"kind": "unlabeled_list", "items": ["a"]}}"#)
            .unwrap();
        assert_eq!(section.icon, SectionIcon::Info);
        assert_eq!(section.body.kind(), "unlabeled_list");
    }

    #[test]
    fn table_section_infers_schema() {
        let section = build(
            r#"{
                "title": "Specifications",
                "icon": "specs",
                "body": {"kind": "table", "rows": [
                    {"parameter": "Displacement", "value": "1995 cc", "source": "Doc A"}
                ]}
            }"#,
        )
        .unwrap();

        let (table, mode) = section.table().unwrap();
        assert_eq!(mode, DisplayMode::Tabular);
        assert_eq!(table.columns()[2].role, ColumnRole::Citation);
    }

    #[test]
    fn table_section_with_explicit_schema() {
        let section = build(
            r#"{
                "title": "Compatible models",
                "body": {"kind": "table", "mode": "cards",
                    "columns": [{"name": "model"}, {"name": "years"}, {"name": "Reference", "role": "citation"}],
                    "rows": [{"model": "320d", "years": "2007-2014", "Reference": "ETK"}]}
            }"#,
        )
        .unwrap();

        let (table, mode) = section.table().unwrap();
        assert_eq!(mode, DisplayMode::Cards);
        assert_eq!(table.citation(0).as_deref(), Some("ETK"));
    }

    #[test]
    fn table_section_rejects_unknown_column() {
        let err = build(
            r#"{
                "title": "Specs",
                "body": {"kind": "table",
                    "columns": [{"name": "parameter"}],
                    "rows": [{"parameter": "Bore", "value": "84 mm"}]}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::UnknownColumn { row: 0, .. }));
    }

    #[test]
    fn card_grid_default_columns() {
        let section = build(
            r#"{"title": "Variants", "body": {"kind": "card_grid", "cards": [{"title": "N47D20A", "text": "130 kW"}]}}"#,
        )
        .unwrap();
        assert!(matches!(section.body, SectionBody::CardGrid { columns: 2, .. }));
    }

    #[test]
    fn every_icon_has_glyph_and_label() {
        let icons = [
            SectionIcon::Engine,
            SectionIcon::Specs,
            SectionIcon::Reliability,
            SectionIcon::Identification,
            SectionIcon::Tensioner,
            SectionIcon::Maintenance,
            SectionIcon::Compatibility,
            SectionIcon::Faq,
            SectionIcon::Info,
        ];
        for icon in icons {
            assert!(!icon.glyph().is_empty());
            assert!(!icon.label().is_empty());
        }
    }
}
