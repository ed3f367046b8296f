use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime, Weekday};
use tracing::{debug, info};

use crate::{
	address,
	error::{Error, Result},
	term::{self, TermAnchor},
};

/// One row of the WebReg schedule table, as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMeeting {
	pub course: String,
	/// Instruction type code, e.g. `LE`, `DI`, `FI`, `LA`.
	pub kind: String,
	/// Weekday letters (`MWF`, `TuTh`) or, for finals, `"Tuesday 12/08/2015"`.
	pub days: String,
	/// `"10:00a-10:50a"`
	pub time: String,
	pub building: String,
	pub room: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingType {
	Lecture,
	Discussion,
	Final,
}

impl fmt::Display for MeetingType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", match self {
			Self::Lecture => "Lecture",
			Self::Discussion => "Discussion",
			Self::Final => "FINAL",
		})
	}
}

/// Instruction type the converter does not handle (labs, seminars, ...).
/// Rows carrying one are left out of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMeetingType(pub String);

impl fmt::Display for UnsupportedMeetingType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "unsupported meeting type {:?}", self.0)
	}
}

impl std::error::Error for UnsupportedMeetingType {}

impl FromStr for MeetingType {
	type Err = UnsupportedMeetingType;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(match s.trim() {
			"LE" => Self::Lecture,
			"DI" => Self::Discussion,
			"FI" => Self::Final,
			other => return Err(UnsupportedMeetingType(other.to_string())),
		})
	}
}

// longer tokens first so `Tu`/`Th` win over a bare letter
const WEEKDAYS: [(&str, Weekday); 6] = [
	("Tu", Weekday::Tue),
	("Th", Weekday::Thu),
	("M", Weekday::Mon),
	("W", Weekday::Wed),
	("F", Weekday::Fri),
	("S", Weekday::Sat),
];

/// Splits a concatenated weekday code such as `"MWF"` or `"TuTh"` into
/// weekdays, keeping the order they appear in.
///
/// # Errors
///
/// Returns [`Error::UnknownWeekday`] with the offending token when part of
/// the code is not in the weekday table, or when the code is empty.
pub fn parse_weekdays(s: &str) -> Result<Vec<Weekday>> {
	let mut rest = s.trim();

	if rest.is_empty() {
		return Err(Error::UnknownWeekday(String::new()));
	}

	let mut days = Vec::new();

	while !rest.is_empty() {
		let Some(&(token, day)) = WEEKDAYS.iter().find(|(token, _)| rest.starts_with(token))
		else {
			// a token runs until the next non-lowercase character
			let end = rest
				.char_indices()
				.skip(1)
				.find(|&(_, c)| !c.is_lowercase())
				.map_or(rest.len(), |(i, _)| i);

			return Err(Error::UnknownWeekday(rest[..end].to_string()));
		};

		days.push(day);
		rest = &rest[token.len()..];
	}

	Ok(days)
}

/// Parses one `H:MMa` / `H:MMp` endpoint into a 24-hour time.
///
/// PM adds 12 to every hour except 12, so `12:30p` stays `12:30`; `12:30a`
/// becomes `0:30`.
fn parse_time(s: &str) -> Option<NaiveTime> {
	let mut chars = s.trim().chars();
	let pm = match chars.next_back()? {
		'a' | 'A' => false,
		'p' | 'P' => true,
		_ => return None,
	};
	let (hour, minute) = chars.as_str().split_once(':')?;
	let mut hour: u32 = hour.parse().ok()?;
	let minute: u32 = minute.parse().ok()?;

	if !(1..=12).contains(&hour) {
		return None;
	}

	if pm && hour != 12 {
		hour += 12;
	}

	if !pm && hour == 12 {
		hour = 0;
	}

	NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Start and end of a meeting, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
	pub start: NaiveTime,
	pub end: NaiveTime,
}

impl FromStr for TimeRange {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let invalid = || Error::InvalidTimeRange(s.to_string());
		let (start, end) = s.split_once('-').ok_or_else(invalid)?;

		Ok(Self {
			start: parse_time(start).ok_or_else(invalid)?,
			end: parse_time(end).ok_or_else(invalid)?,
		})
	}
}

/// Formats a time the way calendar imports expect it: `13:00`, `9:50`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
	time.format("%-H:%M").to_string()
}

/// When a meeting happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
	/// Recurs every week of the term on these days, in the order listed.
	Weekly(Vec<Weekday>),
	/// Happens once, on the final exam date.
	Exam(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
	pub kind: MeetingType,
	pub subject: String,
	pub pattern: Pattern,
	pub time: TimeRange,
	pub location: String,
}

/// `"[CSE 100] Lecture (Room B402A)"`; the room part is left out when blank.
#[must_use]
pub fn subject_line(course: &str, kind: MeetingType, room: &str) -> String {
	if room.is_empty() {
		format!("[{course}] {kind}")
	} else {
		format!("[{course}] {kind} (Room {room})")
	}
}

impl Meeting {
	/// Normalizes a row whose type is already known to be supported.
	///
	/// # Errors
	///
	/// Fails on an unreadable exam date, weekday code or time range.
	pub fn from_raw(raw: &RawMeeting, kind: MeetingType) -> Result<Self> {
		let pattern = match kind {
			MeetingType::Final => Pattern::Exam(
				term::parse_exam_date(&raw.days)
					.ok_or_else(|| Error::InvalidExamDate(raw.days.clone()))?,
			),
			MeetingType::Lecture | MeetingType::Discussion => {
				Pattern::Weekly(parse_weekdays(&raw.days)?)
			}
		};

		Ok(Self {
			kind,
			subject: subject_line(&raw.course, kind, &raw.room),
			pattern,
			time: raw.time.parse()?,
			location: address::resolve(&raw.building),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
	pub label: String,
	pub meetings: Vec<Meeting>,
}

/// Every course on the page plus the week-1 Monday they all share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
	pub anchor: TermAnchor,
	pub courses: Vec<Course>,
}

/// Groups rows by course (first-seen order), drops unsupported meeting
/// types and resolves dates, times and locations.
///
/// # Errors
///
/// Fails with [`Error::EmptyCourseSet`] when there are no rows,
/// [`Error::MissingTermAnchor`] when no final exam fixes the term, and with
/// the first unreadable weekday, time or exam date otherwise.
pub fn normalize(rows: &[RawMeeting]) -> Result<Schedule> {
	if rows.is_empty() {
		return Err(Error::EmptyCourseSet);
	}

	let anchor = TermAnchor::derive(rows)?;
	let mut courses: Vec<Course> = Vec::new();

	for raw in rows {
		let index = if let Some(index) = courses.iter().position(|c| c.label == raw.course) {
			index
		} else {
			courses.push(Course {
				label: raw.course.clone(),
				meetings: Vec::new(),
			});
			courses.len() - 1
		};

		let kind = match raw.kind.parse::<MeetingType>() {
			Ok(kind) => kind,
			Err(skipped) => {
				debug!(course = %raw.course, "skipping row: {skipped}");
				continue;
			}
		};

		courses[index].meetings.push(Meeting::from_raw(raw, kind)?);
	}

	info!(
		courses = courses.len(),
		first_monday = %anchor.first_monday(),
		"normalized schedule"
	);

	Ok(Schedule { anchor, courses })
}
