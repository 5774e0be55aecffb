use super::domain::{EmployeeRecord, EmployeeTable};
use super::DatasetError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to access employee export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid employee CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("employee CSV does not describe a valid table: {0}")]
    Table(#[from] DatasetError),
}

/// Writes a header row and one row per record, in table order, then flushes.
pub fn write_csv<W: Write>(table: &EmployeeTable, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in table.records() {
        csv_writer.serialize(record)?;
    }

    // An empty table still gets its header.
    if table.is_empty() {
        csv_writer.write_record(table.columns())?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_path<P: AsRef<Path>>(table: &EmployeeTable, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(table, file)?;
    info!(path = %path.display(), rows = table.len(), "exported employee table");
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> Result<EmployeeTable, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<EmployeeRecord>() {
        records.push(record?);
    }

    Ok(EmployeeTable::from_records(records)?)
}

pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<EmployeeTable, ExportError> {
    let file = File::open(path)?;
    read_csv(file)
}
