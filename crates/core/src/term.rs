use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::info;

use crate::{
	course::{MeetingType, RawMeeting},
	error::{Error, Result},
};

/// Finals week starts ten weeks after week 1.
pub const FINALS_WEEK_OFFSET_DAYS: i64 = 70;

/// The Monday of week 1 of the quarter. Every course on one page is
/// expanded from the same anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermAnchor(NaiveDate);

impl TermAnchor {
	/// Rolls an exam date back to the Monday of its week, then ten weeks
	/// further back.
	///
	/// Weeks are counted from Sunday, so an exam held on a Sunday anchors to
	/// the Monday right after it.
	#[must_use]
	pub fn from_exam_date(exam: NaiveDate) -> Self {
		let back = i64::from(exam.weekday().num_days_from_sunday()) - 1;
		let finals_monday = exam - Duration::days(back);

		Self(finals_monday - Duration::days(FINALS_WEEK_OFFSET_DAYS))
	}

	/// Anchors the term on the first final exam in row order.
	///
	/// # Errors
	///
	/// Returns [`Error::MissingTermAnchor`] when no row is a final exam or
	/// the first final's date cannot be read.
	pub fn derive(rows: &[RawMeeting]) -> Result<Self> {
		let exam = rows
			.iter()
			.find(|row| matches!(row.kind.parse::<MeetingType>(), Ok(MeetingType::Final)))
			.ok_or_else(|| Error::MissingTermAnchor("no final exam in the schedule".into()))?;

		let date = parse_exam_date(&exam.days).ok_or_else(|| {
			Error::MissingTermAnchor(format!("cannot read exam date {:?}", exam.days))
		})?;
		let anchor = Self::from_exam_date(date);

		info!(course = %exam.course, exam = %date, first_monday = %anchor.0, "derived term anchor");

		Ok(anchor)
	}

	#[must_use]
	pub fn first_monday(self) -> NaiveDate {
		self.0
	}

	/// Date of `weekday` in the zero-based `week` of the term.
	#[must_use]
	pub fn date_of(self, week: u32, weekday: Weekday) -> NaiveDate {
		self.0
			+ Duration::days(7 * i64::from(week) + i64::from(weekday.num_days_from_monday()))
	}
}

/// Reads the date out of a final's days field, `"Tuesday 12/08/2015"`.
#[must_use]
pub fn parse_exam_date(days: &str) -> Option<NaiveDate> {
	let date = days.split_whitespace().nth(1)?;

	NaiveDate::parse_from_str(date, "%m/%d/%Y").ok()
}
