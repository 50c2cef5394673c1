use std::convert::TryFrom;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::{debug, error, info};

use crate::data::convert::convert_record;
use crate::data::output::{cell_value, Summary};
use crate::data::schema::{classify, column_width, FEET_COLUMNS, MILES_COLUMNS, MPH_COLUMNS};
use crate::data::{parse, CellValue, Table};

use style::Styles;

pub mod style;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// The header row stays in view, as do the number, date and time columns.
pub const FROZEN_ROWS: u32 = 1;
pub const FROZEN_COLUMNS: u16 = 3;

/// Convert a CSV jump log into a styled workbook saved at `output`.
pub fn convert_file(input: &Path, output: &Path, sheet_name: &str) -> Result<Summary> {
    let table = parse::parse_file(input)?;
    info!(
        "Parsed {}: {} rows, {} columns, {} skipped",
        input.display(),
        table.rows.len(),
        table.headers.len(),
        table.skipped
    );
    let rows_skipped = table.skipped;

    let mut workbook = Workbook::new();
    let rows_written = write_sheet(&mut workbook, table, sheet_name)?;

    workbook
        .save(output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    info!("Saved {} data rows to {}", rows_written, output.display());

    Ok(Summary {
        input: input.display().to_string(),
        output: output.display().to_string(),
        rows_written,
        rows_skipped,
        feet_columns: to_strings(FEET_COLUMNS),
        miles_columns: to_strings(MILES_COLUMNS),
        mph_columns: to_strings(MPH_COLUMNS),
    })
}

/// Add a sheet holding the converted table. Returns the number of data rows
/// written.
pub fn write_sheet(workbook: &mut Workbook, table: Table, sheet_name: &str) -> Result<usize> {
    let styles = Styles::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(sheet_name)
        .with_context(|| format!("failed to create sheet {sheet_name:?}"))?;

    let Table { headers, rows, .. } = table;
    let classes: Vec<_> = headers.iter().map(|h| classify(h)).collect();

    for (col, header) in headers.iter().enumerate() {
        let col = match column_index(col) {
            Some(col) => col,
            None => continue,
        };
        if let Err(err) = worksheet.write_string_with_format(0, col, header, &styles.header) {
            error!("Error writing header in column {col}: {err}");
        }
    }

    let mut row_count = 0;
    for (idx, mut record) in rows.into_iter().enumerate() {
        let row = match u32::try_from(idx + 1) {
            Ok(row) => row,
            Err(_) => {
                error!("Too many rows, stopping at {idx}");
                break;
            }
        };

        convert_record(&headers, &mut record);

        for (col, (value, class)) in record.iter().zip(classes.iter()).enumerate() {
            let col = match column_index(col) {
                Some(col) => col,
                None => continue,
            };
            let value = cell_value(*class, value);
            let format = styles.data_format(*class);
            if let Err(err) = write_cell(worksheet, row, col, &value, format) {
                error!("Error setting value for cell ({row}, {col}): {err}");
            }
        }
        row_count += 1;
    }
    debug!("Wrote {row_count} rows to {sheet_name}");

    apply_layout(worksheet, &headers)?;

    Ok(row_count)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: Option<&Format>,
) -> Result<(), XlsxError> {
    let result = match (value, format) {
        (CellValue::Text(text), Some(format)) => {
            worksheet.write_string_with_format(row, col, text, format)
        }
        (CellValue::Text(text), None) => worksheet.write_string(row, col, text),
        (CellValue::Integer(number), format) => {
            write_number(worksheet, row, col, *number as f64, format)
        }
        (CellValue::Number(number), format) | (CellValue::Serial(number), format) => {
            write_number(worksheet, row, col, *number, format)
        }
        (CellValue::Empty, Some(format)) => worksheet.write_blank(row, col, format),
        (CellValue::Empty, None) => return Ok(()),
    };
    result.map(|_| ())
}

fn write_number<'a>(
    worksheet: &'a mut Worksheet,
    row: u32,
    col: u16,
    number: f64,
    format: Option<&Format>,
) -> Result<&'a mut Worksheet, XlsxError> {
    match format {
        Some(format) => worksheet.write_number_with_format(row, col, number, format),
        None => worksheet.write_number(row, col, number),
    }
}

/// Column widths and frozen panes.
fn apply_layout(worksheet: &mut Worksheet, headers: &[String]) -> Result<()> {
    for (col, header) in headers.iter().enumerate() {
        let col = match column_index(col) {
            Some(col) => col,
            None => continue,
        };
        if let Err(err) = worksheet.set_column_width(col, column_width(header)) {
            error!("Error setting column width for column {col}: {err}");
        }
    }

    worksheet
        .set_freeze_panes(FROZEN_ROWS, FROZEN_COLUMNS)
        .context("failed to freeze header row")?;

    Ok(())
}

fn column_index(col: usize) -> Option<u16> {
    match u16::try_from(col) {
        Ok(col) => Some(col),
        Err(_) => {
            error!("Column {col} is out of range");
            None
        }
    }
}

fn to_strings(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}
