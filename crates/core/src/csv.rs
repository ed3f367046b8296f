//! Calendar import CSV, the format Google Calendar accepts.
//!
//! Subject and location are wrapped in double quotes as-is; nothing inside
//! them is escaped.

use crate::{
	course::{format_time, Schedule},
	expand::CalendarRow,
};

pub const HEADER: &str = "Subject,Start Date,Start Time,End Date,End Time,Location";

pub const FILE_NAME: &str = "WebRegCalendar.csv";

const DATE_FORMAT: &str = "%-m/%-d/%Y";

fn line(row: &CalendarRow) -> String {
	format!(
		"\"{}\",{},{},{},{},\"{}\"",
		row.subject,
		row.start_date.format(DATE_FORMAT),
		format_time(row.start_time),
		row.end_date.format(DATE_FORMAT),
		format_time(row.end_time),
		row.location,
	)
}

/// Renders the header and one line per occurrence. A schedule without any
/// course renders as an empty string.
#[must_use]
pub fn render(schedule: &Schedule) -> String {
	if schedule.courses.is_empty() {
		return String::new();
	}

	let mut csv = String::from(HEADER);
	csv.push('\n');

	for row in schedule.calendar_rows() {
		csv.push_str(&line(&row));
		csv.push('\n');
	}

	csv
}
