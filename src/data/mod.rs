pub mod convert;
pub mod output;
pub mod parse;
pub mod schema;
pub mod serial;

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Records the CSV reader rejected and that were left out of `rows`.
    pub skipped: usize,
}

/// Unit conversion applied to a column before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Feet,
    Miles,
    Mph,
}

/// How a column's value ends up in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Integer,
    Date,
    Time,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnClass {
    pub unit: Option<Unit>,
    pub kind: CellKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Serial(f64),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Plain,
    Json,
}
