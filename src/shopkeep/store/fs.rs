use super::{Record, TabularStore};
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// A table persisted as one CSV file with a header row.
pub struct CsvStore<R: Record> {
    path: PathBuf,
    rows: Vec<R>,
}

impl<R: Record> CsvStore<R> {
    /// Opens the table at `path`, creating it with only a header if absent.
    ///
    /// Existing files are left untouched and loaded as-is.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            write_table::<R>(&path, &[])?;
            tracing::debug!(path = %path.display(), "created table with header only");
        }

        let mut store = Self {
            path,
            rows: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(&self) -> Result<Vec<R>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<R>, csv::Error>>()?;
        Ok(rows)
    }
}

impl<R: Record> TabularStore<R> for CsvStore<R> {
    fn rows(&self) -> &[R] {
        &self.rows
    }

    fn load(&mut self) -> Result<&[R]> {
        self.rows = self.read_rows()?;
        tracing::debug!(path = %self.path.display(), rows = self.rows.len(), "loaded table");
        Ok(&self.rows)
    }

    fn append(&mut self, record: R) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(&record)?;
        writer.flush()?;

        self.rows.push(record);
        tracing::debug!(path = %self.path.display(), rows = self.rows.len(), "appended row");
        Ok(())
    }

    fn overwrite(&mut self, records: Vec<R>) -> Result<()> {
        write_table(&self.path, &records)?;
        self.rows = records;
        tracing::debug!(path = %self.path.display(), rows = self.rows.len(), "rewrote table");
        Ok(())
    }
}

fn write_table<R: Record>(path: &Path, records: &[R]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(R::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
