use anyhow::Result;
use serde::Serialize;

use super::serial::{date_serial, time_serial};
use super::{CellKind, CellValue, ColumnClass, ReportFormat};

/// Turn a converted field into the value written to its cell.
pub fn cell_value(class: ColumnClass, value: &str) -> CellValue {
    match class.kind {
        CellKind::Time => return CellValue::Serial(time_serial(value)),
        CellKind::Date => return CellValue::Serial(date_serial(value)),
        _ => {}
    }

    if value.is_empty() {
        return CellValue::Empty;
    }

    match value.parse::<f64>() {
        // Truncates toward zero, so a converted 123.9 mph becomes 123.
        Ok(number) if class.kind == CellKind::Integer => CellValue::Integer(number as i64),
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(value.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub input: String,
    pub output: String,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub feet_columns: Vec<String>,
    pub miles_columns: Vec<String>,
    pub mph_columns: Vec<String>,
}

pub fn format_summary(summary: &Summary, format: ReportFormat) -> Result<String> {
    let text = match format {
        ReportFormat::Plain => [
            format!(
                "Successfully converted {} to {}",
                summary.input, summary.output
            ),
            "Conversions applied:".to_string(),
            format!(
                "- Meters to Feet columns: [{}]",
                summary.feet_columns.join(" ")
            ),
            format!(
                "- Meters to Miles columns: [{}]",
                summary.miles_columns.join(" ")
            ),
            format!(
                "- Meters/sec to Miles/hour columns: [{}]",
                summary.mph_columns.join(" ")
            ),
        ]
        .join("\n"),
        ReportFormat::Json => serde_json::to_string(summary)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Unit;
    use pretty_assertions::assert_eq;

    fn class(unit: Option<Unit>, kind: CellKind) -> ColumnClass {
        ColumnClass { unit, kind }
    }

    fn summary() -> Summary {
        Summary {
            input: "jumps.csv".to_string(),
            output: "jumps.xlsx".to_string(),
            rows_written: 2,
            rows_skipped: 1,
            feet_columns: vec!["exitAlt".to_string(), "openAlt".to_string()],
            miles_columns: vec!["ffDist".to_string()],
            mph_columns: vec!["ffAvgVSpd".to_string()],
        }
    }

    // --- Cell values ---

    #[test]
    fn plain_numbers_and_text() {
        let plain = class(None, CellKind::Plain);
        assert_eq!(cell_value(plain, "1.25"), CellValue::Number(1.25));
        assert_eq!(cell_value(plain, "-3"), CellValue::Number(-3.0));
        assert_eq!(
            cell_value(plain, "Twin Otter"),
            CellValue::Text("Twin Otter".to_string())
        );
        assert_eq!(cell_value(plain, ""), CellValue::Empty);
    }

    #[test]
    fn integer_columns_truncate() {
        let integer = class(None, CellKind::Integer);
        assert_eq!(cell_value(integer, "42"), CellValue::Integer(42));
        assert_eq!(cell_value(integer, "59.9"), CellValue::Integer(59));
        assert_eq!(cell_value(integer, "-2.5"), CellValue::Integer(-2));
        assert_eq!(
            cell_value(integer, "n/a"),
            CellValue::Text("n/a".to_string())
        );
    }

    #[test]
    fn converted_integer_column() {
        let mph_integer = class(Some(Unit::Mph), CellKind::Integer);
        assert_eq!(cell_value(mph_integer, "123.9"), CellValue::Integer(123));
    }

    #[test]
    fn date_and_time_become_serials() {
        assert_eq!(
            cell_value(class(None, CellKind::Date), "24/01/01"),
            CellValue::Serial(45292.0)
        );
        assert_eq!(
            cell_value(class(None, CellKind::Time), "18:00"),
            CellValue::Serial(0.75)
        );
    }

    #[test]
    fn empty_date_and_time_are_zero() {
        assert_eq!(
            cell_value(class(None, CellKind::Date), ""),
            CellValue::Serial(0.0)
        );
        assert_eq!(
            cell_value(class(None, CellKind::Time), ""),
            CellValue::Serial(0.0)
        );
    }

    // --- Summary output ---

    #[test]
    fn summary_plain() {
        assert_eq!(
            format_summary(&summary(), ReportFormat::Plain).unwrap(),
            "Successfully converted jumps.csv to jumps.xlsx\n\
             Conversions applied:\n\
             - Meters to Feet columns: [exitAlt openAlt]\n\
             - Meters to Miles columns: [ffDist]\n\
             - Meters/sec to Miles/hour columns: [ffAvgVSpd]"
        );
    }

    #[test]
    fn summary_json() {
        assert_eq!(
            format_summary(&summary(), ReportFormat::Json).unwrap(),
            r#"{"input":"jumps.csv","output":"jumps.xlsx","rows_written":2,"rows_skipped":1,"feet_columns":["exitAlt","openAlt"],"miles_columns":["ffDist"],"mph_columns":["ffAvgVSpd"]}"#
        );
    }
}
