use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};

use crate::course::Schedule;

pub const TZ: chrono_tz::Tz = chrono_tz::America::Los_Angeles;

pub const FILE_NAME: &str = "WebRegCalendar.ics";

/// Builds an iCalendar document with one event per occurrence.
#[must_use]
pub fn create_calendar(schedule: &Schedule) -> Calendar {
	let mut calendar = Calendar::new();

	calendar.name("UC San Diego");
	calendar.timezone(TZ.name());

	for row in schedule.calendar_rows() {
		let mut event = Event::new();

		event
			.summary(&row.subject)
			.starts(CalendarDateTime::WithTimezone {
				date_time: row.start_date.and_time(row.start_time),
				tzid: TZ.name().to_string(),
			})
			.ends(CalendarDateTime::WithTimezone {
				date_time: row.end_date.and_time(row.end_time),
				tzid: TZ.name().to_string(),
			});

		if !row.location.is_empty() {
			event.location(&row.location);
		}

		calendar.push(event);
	}

	calendar
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::course::{normalize, tests::row};

	#[test]
	fn test_create_calendar_one_event_per_occurrence() {
		let rows = [
			row("CSE 100", "LE", "MWF", "10:00a-10:50a", "APM", "B402A"),
			row("CSE 100", "DI", "Th", "6:00p-6:50p", "TBA", ""),
			row("CSE 100", "FI", "Tuesday 12/08/2015", "11:30a-2:29p", "APM", "B402A"),
		];
		let ics = create_calendar(&normalize(&rows).unwrap()).to_string();

		assert_eq!(ics.matches("BEGIN:VEVENT").count(), 41);
		assert_eq!(ics.matches("LOCATION:").count(), 31);
		assert!(ics.contains("SUMMARY:[CSE 100] FINAL (Room B402A)"));
		assert!(ics.contains("DTSTART;TZID=America/Los_Angeles:20150928T100000"));
		assert!(ics.contains("DTEND;TZID=America/Los_Angeles:20151208T142900"));
	}
}
