//! Citation disclosure state.
//!
//! Owned by one table instance and changed only by discrete user events.
//!
//! ```text
//!            open(row, text)
//!   Closed ───────────────────▶ Open { row, text }
//!     ▲                          │  ▲
//!     │        close()           │  │ open(other_row, other_text)
//!     └──────────────────────────┘  └──┘
//! ```

use crate::table::Table;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    /// No citation visible
    #[default]
    Closed,
    /// Dialog showing the citation of `row`
    Open { row: usize, text: String },
}

impl Disclosure {
    /// Show `text` for `row`, replacing whatever was open before
    pub fn open(&mut self, row: usize, text: impl Into<String>) {
        *self = Disclosure::Open {
            row,
            text: text.into(),
        };
    }

    /// Open with the citation of `row` in `table`.
    ///
    /// Rows without a citation leave the state untouched. Returns whether
    /// the dialog is now showing that row.
    pub fn open_for(&mut self, table: &Table, row: usize) -> bool {
        match table.citation(row) {
            Some(text) => {
                tracing::debug!(row, "opening citation");
                self.open(row, text);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        *self = Disclosure::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Disclosure::Open { .. })
    }

    /// Row whose citation is showing
    pub fn row(&self) -> Option<usize> {
        match self {
            Disclosure::Open { row, .. } => Some(*row),
            Disclosure::Closed => None,
        }
    }

    /// Citation text currently displayed
    pub fn text(&self) -> Option<&str> {
        match self {
            Disclosure::Open { text, .. } => Some(text),
            Disclosure::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Record;

    fn cited_table() -> Table {
        Table::infer(vec![
            Record::new().with("parameter", "Displacement").with("source", "Doc A"),
            Record::new().with("parameter", "Torque").with("source", "Doc B"),
            Record::new().with("parameter", "Bore").with_null("source"),
        ])
    }

    #[test]
    fn starts_closed() {
        let state = Disclosure::default();
        assert!(!state.is_open());
        assert_eq!(state.text(), None);
        assert_eq!(state.row(), None);
    }

    #[test]
    fn open_shows_activating_row() {
        let table = cited_table();
        let mut state = Disclosure::default();
        assert!(state.open_for(&table, 1));
        assert_eq!(state.text(), Some("Doc B"));
        assert_eq!(state.row(), Some(1));
    }

    #[test]
    fn second_open_replaces_text() {
        let table = cited_table();
        let mut state = Disclosure::default();
        state.open_for(&table, 0);
        state.open_for(&table, 1);
        assert_eq!(
            state,
            Disclosure::Open {
                row: 1,
                text: "Doc B".to_string()
            }
        );
    }

    #[test]
    fn close_then_reopen() {
        let table = cited_table();
        let mut state = Disclosure::default();
        state.open_for(&table, 0);
        state.close();
        assert_eq!(state, Disclosure::Closed);
        state.open_for(&table, 0);
        assert_eq!(state.text(), Some("Doc A"));
    }

    #[test]
    fn row_without_citation_is_noop() {
        let table = cited_table();
        let mut state = Disclosure::default();
        state.open_for(&table, 0);
        assert!(!state.open_for(&table, 2));
        assert_eq!(state.text(), Some("Doc A"));
    }
}
