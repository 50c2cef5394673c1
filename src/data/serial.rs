//! Spreadsheet serial numbers for jump dates and clock times.
//!
//! Dates count days from 1900-01-01 (serial 1) and include the phantom
//! 1900-02-29 that spreadsheet applications keep for compatibility, so every
//! date after 1900-02-28 is one day later than the plain count. Times are a
//! fraction of a 24 hour day.

use std::num::ParseIntError;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::warn;

/// Two-digit years below this are in the 2000s, the rest in the 1900s.
const CENTURY_PIVOT: i32 = 69;

static EPOCH: Lazy<NaiveDate> = Lazy::new(|| NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());

static LEAP_BUG_CUTOFF: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1900, 2, 28).unwrap());

#[derive(Error, Debug)]
pub enum SerialError {
    #[error("invalid time format {0:?}, expected HH:MM")]
    TimeFormat(String),

    #[error("error parsing hours: {0}")]
    Hours(#[source] ParseIntError),

    #[error("error parsing minutes: {0}")]
    Minutes(#[source] ParseIntError),

    #[error("invalid date format {0:?}, expected YY/MM/DD")]
    DateFormat(String),

    #[error("date out of range: {0:?}")]
    DateRange(String),
}

/// Parse `HH:MM` into a fraction of a day. Hours and minutes are not range
/// checked, so `25:00` is a little over one day.
pub fn parse_time(value: &str) -> Result<f64, SerialError> {
    let mut parts = value.split(':');
    let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
        (Some(hours), Some(minutes), None) => (hours, minutes),
        _ => return Err(SerialError::TimeFormat(value.to_string())),
    };

    let hours = hours.parse::<i64>().map_err(SerialError::Hours)?;
    let minutes = minutes.parse::<i64>().map_err(SerialError::Minutes)?;

    Ok((hours as f64 + minutes as f64 / 60.0) / 24.0)
}

/// Parse a `YY/MM/DD` date into a day serial. Every field is exactly two
/// digits; `00`-`68` are 2000-2068 and `69`-`99` are 1969-1999.
pub fn parse_date(value: &str) -> Result<f64, SerialError> {
    let format_error = || SerialError::DateFormat(value.to_string());

    let mut fields = [0u32; 3];
    let mut parts = value.split('/');
    for field in fields.iter_mut() {
        let part = parts.next().ok_or_else(format_error)?;
        *field = two_digits(part).ok_or_else(format_error)?;
    }
    if parts.next().is_some() {
        return Err(format_error());
    }

    let [yy, month, day] = fields;
    let yy = yy as i32;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SerialError::DateRange(value.to_string()))?;
    Ok(date_to_serial(date))
}

fn two_digits(part: &str) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

pub fn date_to_serial(date: NaiveDate) -> f64 {
    let mut serial = date.signed_duration_since(*EPOCH).num_days() + 1;
    if date > *LEAP_BUG_CUTOFF {
        serial += 1;
    }
    serial as f64
}

/// Time serial for a cell, or 0 when the value can't be read.
pub fn time_serial(value: &str) -> f64 {
    parse_time(value).unwrap_or_else(|err| {
        warn!("{err}");
        0.0
    })
}

/// Date serial for a cell, or 0 when the value can't be read.
pub fn date_serial(value: &str) -> f64 {
    parse_date(value).unwrap_or_else(|err| {
        warn!("{err}");
        0.0
    })
}
