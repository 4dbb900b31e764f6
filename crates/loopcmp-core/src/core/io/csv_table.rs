use crate::core::models::table::{ComparisonTable, round_score};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes a table as CSV: a title line, a header row of column labels behind an empty
/// corner cell, then one row per row label. Scores are rounded to two decimals.
pub fn write_table(table: &ComparisonTable, writer: impl Write) -> Result<(), TableWriteError> {
    write_tables(std::slice::from_ref(table), writer)
}

/// Writes several tables one after another into the same stream.
pub fn write_tables(
    tables: &[ComparisonTable],
    writer: impl Write,
) -> Result<(), TableWriteError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    for table in tables {
        csv_writer.write_record([table.title.as_str()])?;

        let header = std::iter::once("").chain(table.column_labels.iter().map(String::as_str));
        csv_writer.write_record(header)?;

        for (label, values) in table.row_labels.iter().zip(&table.rows) {
            let record = std::iter::once(label.clone())
                .chain(values.iter().map(|&v| round_score(v).to_string()));
            csv_writer.write_record(record)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_tables_to_path(
    tables: &[ComparisonTable],
    path: &Path,
) -> Result<(), TableWriteError> {
    let file = File::create(path)?;
    write_tables(tables, io::BufWriter::new(file))
}
