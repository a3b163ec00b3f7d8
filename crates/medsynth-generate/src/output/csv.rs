use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use medsynth_core::{TableSchema, Value};

use crate::errors::SinkError;

/// Write a table as CSV: header row, schema column order, one record per
/// row. Returns the number of bytes written.
pub fn write_table_csv(
    path: &Path,
    schema: &TableSchema,
    rows: &[Vec<Value>],
) -> Result<u64, SinkError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(schema.column_names())?;

    for row in rows {
        let record: Vec<String> = row
            .iter()
            .zip(&schema.columns)
            .map(|(value, column)| value.to_csv(column.rule.float_scale()))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
