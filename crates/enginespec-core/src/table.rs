//! Table model: cell values, ordered records, column schema.
//!
//! A [`Table`] is an ordered sequence of [`Record`]s sharing one
//! [`TableSchema`]. The schema is either inferred from the first record
//! (key-insertion order is the column order) or declared up front and
//! validated once when the table is built.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TableError;

/// Column names (lower-cased) that mark the trailing citation column
pub const CITATION_COLUMN_NAMES: [&str; 2] = ["source", "oem source"];

/// Returns true if `name` designates a citation column (case-insensitive).
pub fn is_citation_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    CITATION_COLUMN_NAMES.contains(&lower.as_str())
}

/// A scalar cell value.
///
/// Numbers keep their JSON representation, so `1995` is never shown
/// as `1995.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(serde_json::Number),
}

impl CellValue {
    /// Whether the value renders as nothing (empty or whitespace-only text)
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        CellValue::Number(n.into())
    }
}

/// One row: column name to optional scalar, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    cells: Vec<(String, Option<CellValue>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a present value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    /// Builder-style insert of an absent (null) value
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.insert(key, None);
        self
    }

    /// Insert a cell. Re-inserting an existing key replaces its value but
    /// keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<CellValue>) {
        let key = key.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((key, value)),
        }
    }

    /// Present value for `key`; absent keys and nulls both yield `None`
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.iter().any(|(k, _)| k == key)
    }

    /// Column names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of column names to strings, numbers or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((key, value)) = access.next_entry::<String, Option<CellValue>>()? {
                    record.insert(key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// What a column holds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Regular data shown inline
    #[default]
    Data,
    /// Provenance text shown behind a disclosure affordance
    Citation,
}

/// A named column with its role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub role: ColumnRole,
}

impl Column {
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ColumnRole::Data,
        }
    }

    pub fn citation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ColumnRole::Citation,
        }
    }

    pub fn is_citation(&self) -> bool {
        self.role == ColumnRole::Citation
    }
}

/// Ordered column list for a table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Declare a schema explicitly.
    ///
    /// Rejects empty and duplicate column lists, and any citation column
    /// that is not the single last column.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
            if column.is_citation() && i + 1 != columns.len() {
                return Err(TableError::CitationNotLast(column.name.clone()));
            }
        }

        Ok(Self { columns })
    }

    /// Derive the schema from one record's keys, in insertion order.
    ///
    /// Only the last column can be a citation, and only when its name is
    /// `source` or `oem source` in any case.
    pub fn infer(first: &Record) -> Self {
        let count = first.len();
        let columns = first
            .keys()
            .enumerate()
            .map(|(i, key)| {
                if i + 1 == count && is_citation_name(key) {
                    Column::citation(key)
                } else {
                    Column::data(key)
                }
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Position of the citation column, if any (always the last one)
    pub fn citation_index(&self) -> Option<usize> {
        self.columns.last().filter(|c| c.is_citation())?;
        Some(self.columns.len() - 1)
    }

    pub fn citation(&self) -> Option<&Column> {
        self.citation_index().map(|i| &self.columns[i])
    }
}

/// Ordered rows sharing one schema
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    schema: TableSchema,
    rows: Vec<Record>,
}

impl Table {
    /// Build a table whose schema comes from the first record.
    ///
    /// Later records are trusted to share that schema. Keys they add are
    /// ignored when rendering; keys they lack render blank.
    pub fn infer(rows: Vec<Record>) -> Self {
        let schema = rows.first().map(TableSchema::infer).unwrap_or_default();

        for (row, record) in rows.iter().enumerate().skip(1) {
            for key in record.keys().filter(|k| !schema.contains(k)) {
                tracing::warn!(row, column = key, "record key not in inferred schema, ignoring");
            }
        }

        Self { schema, rows }
    }

    /// Build a table against an explicit schema.
    ///
    /// Every record key must be declared. Missing keys are allowed and
    /// render blank.
    pub fn with_schema(schema: TableSchema, rows: Vec<Record>) -> Result<Self, TableError> {
        for (row, record) in rows.iter().enumerate() {
            if let Some(key) = record.keys().find(|k| !schema.contains(k)) {
                return Err(TableError::UnknownColumn {
                    row,
                    column: key.to_string(),
                });
            }
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_citation(&self) -> bool {
        self.schema.citation_index().is_some()
    }

    /// Value at (`row`, `col`); `None` when out of range, absent or null
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        let column = self.schema.columns().get(col)?;
        self.rows.get(row)?.get(&column.name)
    }

    /// Citation text of `row`, if the table has a citation column and the
    /// value is non-blank
    pub fn citation(&self, row: usize) -> Option<String> {
        let col = self.schema.citation_index()?;
        self.cell(row, col)
            .filter(|v| !v.is_blank())
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_row(parameter: &str, value: &str, source: &str) -> Record {
        Record::new()
            .with("parameter", parameter)
            .with("value", value)
            .with("source", source)
    }

    #[test]
    fn record_preserves_json_key_order() {
        let record: Record =
            serde_json::from_str(r#"{"zeta": "1", "alpha": 2, "mid": null}"#).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.get("alpha"), Some(&CellValue::from(2i64)));
        assert_eq!(record.get("mid"), None);
        assert!(record.contains_key("mid"));
    }

    #[test]
    fn record_reinsert_keeps_position() {
        let mut record = Record::new().with("a", "1").with("b", "2");
        record.insert("a", Some("3".into()));
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&CellValue::from("3")));
    }

    #[test]
    fn record_serializes_in_order() {
        let record = Record::new().with("b", "x").with_null("a");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"b":"x","a":null}"#);
    }

    #[test]
    fn number_cells_keep_integer_formatting() {
        let record: Record = serde_json::from_str(r#"{"cc": 1995, "ratio": 16.5}"#).unwrap();
        assert_eq!(record.get("cc").unwrap().to_string(), "1995");
        assert_eq!(record.get("ratio").unwrap().to_string(), "16.5");
    }

    #[test]
    fn citation_name_detection() {
        for name in ["source", "Source", "SOURCE", "oem source", "OEM Source"] {
            assert!(is_citation_name(name), "{name} should be a citation");
        }
        for name in ["sources", "oem", "source link", "value"] {
            assert!(!is_citation_name(name), "{name} should not be a citation");
        }
    }

    #[test]
    fn infer_marks_only_last_source_column() {
        let record = Record::new()
            .with("source", "a")
            .with("parameter", "b")
            .with("OEM Source", "c");
        let schema = TableSchema::infer(&record);
        assert_eq!(schema.columns()[0].role, ColumnRole::Data);
        assert_eq!(schema.columns()[2].role, ColumnRole::Citation);
        assert_eq!(schema.citation_index(), Some(2));
    }

    #[test]
    fn infer_without_source_has_no_citation() {
        let table = Table::infer(vec![Record::new().with("model", "320d").with("years", "2007-2014")]);
        assert!(!table.has_citation());
        assert_eq!(table.citation(0), None);
    }

    #[test]
    fn infer_empty_table() {
        let table = Table::infer(Vec::new());
        assert!(table.is_empty());
        assert!(table.schema().is_empty());
    }

    #[test]
    fn infer_ignores_later_extra_keys() {
        let table = Table::infer(vec![
            Record::new().with("parameter", "Bore"),
            Record::new().with("parameter", "Stroke").with("extra", "x"),
        ]);
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.cell(1, 0), Some(&CellValue::from("Stroke")));
    }

    #[test]
    fn citation_lookup_per_row() {
        let table = Table::infer(vec![
            spec_row("Displacement", "1995 cc", "Doc A"),
            spec_row("Torque", "350 Nm", "Doc B"),
            spec_row("Bore", "84 mm", "  "),
        ]);
        assert_eq!(table.citation(0).as_deref(), Some("Doc A"));
        assert_eq!(table.citation(1).as_deref(), Some("Doc B"));
        assert_eq!(table.citation(2), None);
        assert_eq!(table.citation(9), None);
    }

    #[test]
    fn schema_new_rejects_bad_declarations() {
        assert_eq!(TableSchema::new(vec![]), Err(TableError::NoColumns));
        assert_eq!(
            TableSchema::new(vec![Column::data("a"), Column::data("a")]),
            Err(TableError::DuplicateColumn("a".to_string()))
        );
        assert_eq!(
            TableSchema::new(vec![Column::citation("source"), Column::data("value")]),
            Err(TableError::CitationNotLast("source".to_string()))
        );
    }

    #[test]
    fn with_schema_rejects_unknown_keys() {
        let schema = TableSchema::new(vec![Column::data("parameter"), Column::data("value")]).unwrap();
        let err = Table::with_schema(
            schema,
            vec![
                Record::new().with("parameter", "Bore").with("value", "84 mm"),
                Record::new().with("parameter", "Stroke").with("note", "x"),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownColumn {
                row: 1,
                column: "note".to_string()
            }
        );
    }

    #[test]
    fn with_schema_allows_missing_keys() {
        let schema = TableSchema::new(vec![
            Column::data("parameter"),
            Column::data("value"),
            Column::citation("Reference"),
        ])
        .unwrap();
        let table = Table::with_schema(schema, vec![Record::new().with("parameter", "Bore")]).unwrap();
        assert_eq!(table.cell(0, 1), None);
        assert!(table.has_citation());
        assert_eq!(table.citation(0), None);
    }
}
