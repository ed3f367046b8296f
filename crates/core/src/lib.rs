#![warn(clippy::pedantic)]

use course::RawMeeting;
use icalendar::Calendar;

pub mod address;
pub mod course;
pub mod csv;
pub mod error;
pub mod expand;
pub mod extract;
pub mod ics;
pub mod term;

pub use error::{Error, Result};

/// Normalizes the rows and renders them as calendar import CSV.
///
/// # Errors
///
/// Any normalization failure aborts the whole conversion.
pub fn convert(rows: &[RawMeeting]) -> Result<String> {
	let schedule = course::normalize(rows)?;

	Ok(csv::render(&schedule))
}

/// Same as [`convert`], producing an iCalendar document instead.
///
/// # Errors
///
/// Any normalization failure aborts the whole conversion.
pub fn convert_to_calendar(rows: &[RawMeeting]) -> Result<Calendar> {
	let schedule = course::normalize(rows)?;

	Ok(ics::create_calendar(&schedule))
}
