use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{CellKind, ColumnClass, Unit};

pub const FEET_COLUMNS: &[&str] = &["exitAlt", "openAlt"];
pub const MILES_COLUMNS: &[&str] = &["exitDist", "openDist", "cpDist", "ffDist"];
pub const MPH_COLUMNS: &[&str] = &["ffAvgVSpd", "ffMaxVSpd", "cpAvgVSpd", "cpMaxVSpd"];

pub const INTEGER_COLUMNS: &[&str] = &[
    "num",
    "ffSecs",
    "cpSecs",
    "cpAvgSpd",
    "cpMaxVSpd",
    "aircraftSecs",
];

pub const DATE_COLUMN: &str = "date";
pub const TIME_COLUMN: &str = "time";

const DEFAULT_WIDTH: f64 = 12.0;

static CLASSES: Lazy<HashMap<&'static str, ColumnClass>> = Lazy::new(|| {
    let mut classes: HashMap<&'static str, ColumnClass> = HashMap::new();

    let units = [
        (FEET_COLUMNS, Unit::Feet),
        (MILES_COLUMNS, Unit::Miles),
        (MPH_COLUMNS, Unit::Mph),
    ];
    for (columns, unit) in units.iter() {
        for &name in columns.iter() {
            classes.entry(name).or_insert_with(plain).unit = Some(*unit);
        }
    }

    for &name in INTEGER_COLUMNS {
        classes.entry(name).or_insert_with(plain).kind = CellKind::Integer;
    }
    classes.entry(DATE_COLUMN).or_insert_with(plain).kind = CellKind::Date;
    classes.entry(TIME_COLUMN).or_insert_with(plain).kind = CellKind::Time;

    classes
});

fn plain() -> ColumnClass {
    ColumnClass {
        unit: None,
        kind: CellKind::Plain,
    }
}

/// Look up how a column is converted and written. Unknown columns are plain.
pub fn classify(column: &str) -> ColumnClass {
    CLASSES.get(column).copied().unwrap_or_else(plain)
}

/// Display width for a column, in character units.
pub fn column_width(column: &str) -> f64 {
    match column {
        "num" => 8.0,
        "date" => 18.0,
        "time" => 10.0,
        "exitAlt" | "openAlt" => 12.0,
        "ffSecs" | "cpSecs" | "aircraftSecs" => 10.0,
        "ffAvgVSpd" | "ffMaxVSpd" | "cpAvgVSpd" | "cpMaxVSpd" => 14.0,
        "ffAvgGlide" | "cpAvgGlide" => 12.0,
        other if other.ends_with("Dist") => 14.0,
        _ => DEFAULT_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converted_columns() {
        assert_eq!(classify("exitAlt").unit, Some(Unit::Feet));
        assert_eq!(classify("ffDist").unit, Some(Unit::Miles));
        assert_eq!(classify("ffAvgVSpd").unit, Some(Unit::Mph));
        assert_eq!(classify("exitAlt").kind, CellKind::Plain);
    }

    #[test]
    fn mph_column_can_also_be_integer() {
        assert_eq!(
            classify("cpMaxVSpd"),
            ColumnClass {
                unit: Some(Unit::Mph),
                kind: CellKind::Integer,
            }
        );
    }

    #[test]
    fn date_time_and_unknown() {
        assert_eq!(classify("date").kind, CellKind::Date);
        assert_eq!(classify("time").kind, CellKind::Time);
        assert_eq!(classify("jumpType"), plain());
        // Names are case sensitive.
        assert_eq!(classify("Date"), plain());
    }

    #[test]
    fn widths() {
        assert_eq!(column_width("num"), 8.0);
        assert_eq!(column_width("date"), 18.0);
        assert_eq!(column_width("cpMaxVSpd"), 14.0);
        assert_eq!(column_width("exitDist"), 14.0);
        assert_eq!(column_width("landingDist"), 14.0);
        assert_eq!(column_width("ffAvgGlide"), 12.0);
        assert_eq!(column_width("aircraft"), 12.0);
    }
}
