use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::warn;

use super::Table;

/// Read a CSV jump log from disk and parse it into a Table.
pub fn parse_file(path: &Path) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_reader(file)
}

/// Parse a string into a Table (testable core).
pub fn parse_string(input: &str) -> Result<Table> {
    parse_reader(input.as_bytes())
}

/// Records whose field count differs from the header, or that fail to parse
/// at all, are logged and left out. They do not occupy a row in the output.
/// Bytes that are not UTF-8 are replaced with U+FFFD rather than rejected.
pub fn parse_reader<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers: Vec<String> = reader
        .byte_headers()
        .context("failed to read header")?
        .iter()
        .map(lossy)
        .collect();
    if headers.is_empty() {
        return Err(anyhow!("input has no header row"));
    }

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in reader.byte_records() {
        match result {
            Ok(record) => rows.push(record.iter().map(lossy).collect()),
            Err(err) => {
                warn!("Skipping record: {err}");
                skipped += 1;
            }
        }
    }

    Ok(Table {
        headers,
        rows,
        skipped,
    })
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
