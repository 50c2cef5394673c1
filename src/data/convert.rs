use super::schema::classify;
use super::Unit;

pub const METERS_TO_FEET: f64 = 3.28084;
pub const METERS_TO_MILES: f64 = 0.000621371;
pub const MPS_TO_MPH: f64 = 2.23694;

impl Unit {
    pub fn factor(self) -> f64 {
        match self {
            Unit::Feet => METERS_TO_FEET,
            Unit::Miles => METERS_TO_MILES,
            Unit::Mph => MPS_TO_MPH,
        }
    }

    /// Decimal places kept after conversion.
    pub fn precision(self) -> usize {
        match self {
            Unit::Feet => 2,
            Unit::Miles => 3,
            Unit::Mph => 1,
        }
    }

    /// Convert a metric reading to this unit. Returns `None` when the value
    /// is not a number.
    pub fn convert(self, value: &str) -> Option<String> {
        let metric = value.parse::<f64>().ok()?;
        Some(format!(
            "{:.*}",
            self.precision(),
            metric * self.factor()
        ))
    }
}

/// Apply unit conversions to every field of a record, in place.
///
/// Empty and non-numeric fields are left as they are.
pub fn convert_record(headers: &[String], record: &mut [String]) {
    for (header, value) in headers.iter().zip(record.iter_mut()) {
        if value.is_empty() {
            continue;
        }
        if let Some(unit) = classify(header).unit {
            if let Some(converted) = unit.convert(value) {
                *value = converted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn record(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn feet_rounds_to_two_decimals() {
        assert_eq!(Unit::Feet.convert("4000"), Some("13123.36".to_string()));
        assert_eq!(Unit::Feet.convert("1000.5"), Some("3282.48".to_string()));
    }

    #[test]
    fn miles_rounds_to_three_decimals() {
        assert_eq!(Unit::Miles.convert("1609.34"), Some("1.000".to_string()));
        assert_eq!(Unit::Miles.convert("500"), Some("0.311".to_string()));
    }

    #[test]
    fn mph_rounds_to_one_decimal() {
        assert_eq!(Unit::Mph.convert("50"), Some("111.8".to_string()));
        assert_eq!(Unit::Mph.convert("-3.5"), Some("-7.8".to_string()));
    }

    #[test]
    fn non_numeric_is_not_converted() {
        assert_that(&Unit::Feet.convert("n/a")).is_none();
        assert_that(&Unit::Miles.convert("")).is_none();
    }

    #[test]
    fn record_conversion() {
        let headers = headers(&["num", "exitAlt", "ffDist", "ffMaxVSpd", "aircraft"]);
        let mut row = record(&["7", "4000", "1200", "55", "Otter"]);

        convert_record(&headers, &mut row);

        assert_eq!(row, record(&["7", "13123.36", "0.746", "123.0", "Otter"]));
    }

    #[test]
    fn record_passes_through_bad_values() {
        let headers = headers(&["exitAlt", "openAlt", "cpDist"]);
        let mut row = record(&["", "unknown", "12abc"]);

        convert_record(&headers, &mut row);

        assert_eq!(row, record(&["", "unknown", "12abc"]));
    }

    #[test]
    fn record_longer_than_headers_keeps_extra_fields() {
        let headers = headers(&["exitAlt"]);
        let mut row = record(&["100", "100"]);

        convert_record(&headers, &mut row);

        assert_eq!(row, record(&["328.08", "100"]));
    }
}
