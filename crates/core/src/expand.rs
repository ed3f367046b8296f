use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::{
	course::{Meeting, Pattern, Schedule},
	term::TermAnchor,
};

/// Length of the instruction period, in weeks.
pub const TERM_WEEKS: u32 = 10;

/// One concrete occurrence of a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
	pub subject: String,
	pub start_date: NaiveDate,
	pub start_time: NaiveTime,
	pub end_date: NaiveDate,
	pub end_time: NaiveTime,
	pub location: String,
}

impl CalendarRow {
	fn new(meeting: &Meeting, date: NaiveDate) -> Self {
		Self {
			subject: meeting.subject.clone(),
			start_date: date,
			start_time: meeting.time.start,
			end_date: date,
			end_time: meeting.time.end,
			location: meeting.location.clone(),
		}
	}
}

/// Lists every date a meeting takes place on.
///
/// A final yields its exam date. A weekly meeting yields week by week, and
/// within a week follows the order its weekdays were listed in.
#[must_use]
pub fn expand(meeting: &Meeting, anchor: TermAnchor) -> Vec<CalendarRow> {
	match &meeting.pattern {
		Pattern::Exam(date) => vec![CalendarRow::new(meeting, *date)],
		Pattern::Weekly(days) => (0..TERM_WEEKS)
			.flat_map(|week| days.iter().map(move |&day| anchor.date_of(week, day)))
			.map(|date| CalendarRow::new(meeting, date))
			.collect(),
	}
}

impl Schedule {
	/// All occurrences, course by course in page order.
	#[must_use]
	pub fn calendar_rows(&self) -> Vec<CalendarRow> {
		let mut rows = Vec::new();

		for course in &self.courses {
			let before = rows.len();

			for meeting in &course.meetings {
				rows.extend(expand(meeting, self.anchor));
			}

			debug!(course = %course.label, events = rows.len() - before, "expanded course");
		}

		rows
	}
}

#[cfg(test)]
mod tests {
	use chrono::Weekday;

	use super::*;
	use crate::course::{normalize, tests::row, MeetingType, TimeRange};

	fn date(year: i32, month: u32, day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(year, month, day).unwrap()
	}

	fn anchor() -> TermAnchor {
		TermAnchor::from_exam_date(date(2015, 12, 8))
	}

	fn meeting(pattern: Pattern) -> Meeting {
		Meeting {
			kind: MeetingType::Lecture,
			subject: "[CSE 100] Lecture".to_string(),
			pattern,
			time: "10:00a-10:50a".parse::<TimeRange>().unwrap(),
			location: String::new(),
		}
	}

	#[test]
	fn test_expand_weekly_count_and_order() {
		let lecture = meeting(Pattern::Weekly(vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]));
		let rows = expand(&lecture, anchor());

		assert_eq!(rows.len(), 30);

		let dates: Vec<_> = rows.iter().take(4).map(|r| r.start_date).collect();
		assert_eq!(
			dates,
			[date(2015, 9, 28), date(2015, 9, 30), date(2015, 10, 2), date(2015, 10, 5)]
		);
		assert_eq!(rows[29].start_date, date(2015, 12, 4));
		assert!(rows.iter().all(|r| r.start_date == r.end_date));
	}

	#[test]
	fn test_expand_keeps_listed_weekday_order() {
		let discussion = meeting(Pattern::Weekly(vec![Weekday::Thu, Weekday::Tue]));
		let rows = expand(&discussion, anchor());

		assert_eq!(rows.len(), 20);
		assert_eq!(rows[0].start_date, date(2015, 10, 1));
		assert_eq!(rows[1].start_date, date(2015, 9, 29));
	}

	#[test]
	fn test_expand_exam_is_single_row() {
		let exam = meeting(Pattern::Exam(date(2015, 12, 8)));
		let rows = expand(&exam, anchor());

		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].start_date, date(2015, 12, 8));
		assert_eq!(rows[0].start_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
		assert_eq!(rows[0].end_time, NaiveTime::from_hms_opt(10, 50, 0).unwrap());
	}

	#[test]
	fn test_calendar_rows_follow_course_order() {
		let rows = [
			row("MATH 20C", "LE", "TuTh", "8:00a-9:20a", "WLH", "2001"),
			row("CSE 100", "FI", "Tuesday 12/08/2015", "11:30a-2:29p", "APM", "B402A"),
			row("MATH 20C", "FI", "Thursday 12/10/2015", "8:00a-10:59a", "WLH", "2001"),
			row("CSE 100", "DI", "F", "3:00p-3:50p", "CENTR", "101"),
		];

		let rows = normalize(&rows).unwrap().calendar_rows();

		assert_eq!(rows.len(), 20 + 1 + 1 + 10);
		assert_eq!(rows[0].subject, "[MATH 20C] Lecture (Room 2001)");
		assert_eq!(rows[20].subject, "[MATH 20C] FINAL (Room 2001)");
		assert_eq!(rows[21].subject, "[CSE 100] FINAL (Room B402A)");
		assert_eq!(rows[22].subject, "[CSE 100] Discussion (Room 101)");
	}
}
