use crate::store::{Record, TabularStore};

/// A read-only snapshot of a table, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn run<R: Record, S: TabularStore<R>>(store: &S) -> Table {
    Table {
        headers: R::COLUMNS.iter().map(|column| column.to_string()).collect(),
        rows: store.rows().iter().map(Record::cells).collect(),
    }
}
