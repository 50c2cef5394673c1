use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

use crate::data::{CellKind, ColumnClass, Unit};

pub const HEADER_FILL: u32 = 0xE0E0E0;

pub const TIME_FORMAT: &str = "h:mm AM/PM";
pub const DATE_FORMAT: &str = "ddd, mmm d, yyyy";
/// 13500 shows as "13.5K ft", 850 as "850 ft".
pub const ALTITUDE_FORMAT: &str = r#"[>=1000]#,##0.0,"K ft";#,##0" ft""#;
pub const MILES_FORMAT: &str = r#"0.00" mi""#;
pub const MPH_FORMAT: &str = r#"0.0" mph""#;

/// Cell formats shared by every row of the sheet.
#[derive(Debug, Clone)]
pub struct Styles {
    pub header: Format,
    pub time: Format,
    pub date: Format,
    pub altitude: Format,
    pub miles: Format,
    pub mph: Format,
}

impl Styles {
    pub fn new() -> Self {
        Styles {
            header: Format::new()
                .set_bold()
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border_bottom(FormatBorder::Thin)
                .set_border_bottom_color(Color::Black),
            time: Format::new().set_num_format(TIME_FORMAT),
            date: Format::new().set_num_format(DATE_FORMAT),
            altitude: Format::new().set_num_format(ALTITUDE_FORMAT),
            miles: Format::new().set_num_format(MILES_FORMAT),
            mph: Format::new().set_num_format(MPH_FORMAT),
        }
    }

    /// Display format for the data cells of a column, if it has one.
    pub fn data_format(&self, class: ColumnClass) -> Option<&Format> {
        match (class.unit, class.kind) {
            (Some(Unit::Feet), _) => Some(&self.altitude),
            (Some(Unit::Miles), _) => Some(&self.miles),
            (Some(Unit::Mph), _) => Some(&self.mph),
            (None, CellKind::Time) => Some(&self.time),
            (None, CellKind::Date) => Some(&self.date),
            (None, _) => None,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Styles::new()
    }
}
